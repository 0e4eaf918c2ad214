// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Les quatre opérations binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Table des opérations (gauche `a`, droite `b`).
    ///
    /// Division par zéro : renvoie NaN (valeur d’erreur), jamais de panique.
    pub fn calculer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }

    /// Libellé affiché sur le bouton.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }
}

/// Un appui discret sur la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Jeton {
    Efface,
    RetourArriere,
    /// Chiffre 0..=9 (au-delà : ignoré par l’accumulateur).
    Chiffre(u8),
    Point,
    Op(Operateur),
    Egal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurJeton {
    #[error("libellé de bouton inconnu: {libelle:?}")]
    LibelleInconnu { libelle: String },

    #[error("touche sans jeton associé: {c:?}")]
    CaractereInconnu { c: char },
}

impl Jeton {
    /// Caractère clavier -> jeton.
    ///
    /// Plus permissif que les libellés : `,` vaut `.`, `*`/`x` valent `×`, `/` vaut `÷`.
    pub fn depuis_touche(c: char) -> Result<Jeton, ErreurJeton> {
        let j = match c {
            '0'..='9' => Jeton::Chiffre(c as u8 - b'0'),
            '.' | ',' => Jeton::Point,
            '+' => Jeton::Op(Operateur::Plus),
            '-' => Jeton::Op(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Jeton::Op(Operateur::Fois),
            '/' | '÷' => Jeton::Op(Operateur::Divise),
            '=' => Jeton::Egal,
            'c' | 'C' => Jeton::Efface,
            '⌫' => Jeton::RetourArriere,
            _ => return Err(ErreurJeton::CaractereInconnu { c }),
        };
        Ok(j)
    }

    /// Caractère ajouté à l’affichage (chiffres et point seulement).
    pub fn caractere(self) -> Option<char> {
        match self {
            Jeton::Chiffre(d) => char::from_digit(u32::from(d), 10),
            Jeton::Point => Some('.'),
            _ => None,
        }
    }
}

/// Correspondance 1:1 libellé de bouton -> jeton.
impl FromStr for Jeton {
    type Err = ErreurJeton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Jeton::Efface),
            "⌫" | "DEL" => Ok(Jeton::RetourArriere),
            "=" => Ok(Jeton::Egal),
            "." => Ok(Jeton::Point),
            "+" => Ok(Jeton::Op(Operateur::Plus)),
            "-" => Ok(Jeton::Op(Operateur::Moins)),
            "×" => Ok(Jeton::Op(Operateur::Fois)),
            "÷" => Ok(Jeton::Op(Operateur::Divise)),
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c @ '0'..='9'), None) => Ok(Jeton::Chiffre(c as u8 - b'0')),
                    _ => Err(ErreurJeton::LibelleInconnu {
                        libelle: s.to_string(),
                    }),
                }
            }
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Efface => f.write_str("C"),
            Jeton::RetourArriere => f.write_str("⌫"),
            Jeton::Chiffre(d) => write!(f, "{d}"),
            Jeton::Point => f.write_str("."),
            Jeton::Op(op) => f.write_str(op.symbole()),
            Jeton::Egal => f.write_str("="),
        }
    }
}
