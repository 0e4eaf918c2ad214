//! Noyau — accumulateur (machine à états du pavé)
//!
//! Un appui (jeton) + l’état courant -> nouvel état. Rien d’autre :
//! - une seule opération en attente (opérande gauche + opérateur), jamais de pile
//! - "=" calcule cette opération et la consomme
//! - aucune erreur remontée : division par zéro -> jeton d’erreur à l’affichage,
//!   texte illisible -> 0.0 (voir `lire_nombre`)
//!
//! Fonctions pures : l’état appartient à l’appelant (la vue), qui remplace
//! sa valeur après chaque appui.

use super::format::{est_erreur, format_resultat, lire_nombre};
use super::jetons::{Jeton, Operateur};
use super::reglages::{Reglages, RetourSurErreur};

/// Opérande gauche capturée à l’appui d’un opérateur.
///
/// Opérande et opérateur vivent ensemble : l’un n’existe jamais sans l’autre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnAttente {
    pub operande: f64,
    pub operateur: Operateur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    // jamais vide ("0" par défaut)
    affichage: String,
    en_attente: Option<EnAttente>,
    // true juste après un opérateur ou "=" : le prochain chiffre repart de zéro
    attend_nouvelle_saisie: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            en_attente: None,
            attend_nouvelle_saisie: false,
        }
    }
}

impl EtatCalc {
    /// État à l’ouverture de l’écran.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn en_attente(&self) -> Option<EnAttente> {
        self.en_attente
    }
}

/// Applique un jeton avec les réglages par défaut.
#[cfg_attr(not(test), allow(dead_code))]
pub fn appliquer(etat: &EtatCalc, jeton: Jeton) -> EtatCalc {
    appliquer_avec(&Reglages::default(), etat, jeton)
}

/// Applique une suite de jetons dans l’ordre (plusieurs touches dans une frame, rejeu).
pub fn appliquer_tout<I>(reglages: &Reglages, etat: &EtatCalc, jetons: I) -> EtatCalc
where
    I: IntoIterator<Item = Jeton>,
{
    jetons
        .into_iter()
        .fold(etat.clone(), |acc, j| appliquer_avec(reglages, &acc, j))
}

/// Transition complète : (réglages, état, jeton) -> état.
pub fn appliquer_avec(reglages: &Reglages, etat: &EtatCalc, jeton: Jeton) -> EtatCalc {
    let mut s = etat.clone();

    match jeton {
        Jeton::Efface => return EtatCalc::initial(),

        Jeton::RetourArriere => {
            if est_erreur(&s.affichage) && reglages.retour_sur_erreur == RetourSurErreur::Effacer {
                return EtatCalc::initial();
            }
            // Ne touche pas à l’opération en attente.
            s.affichage.pop();
            if s.affichage.is_empty() {
                s.affichage.push('0');
            }
        }

        Jeton::Op(op) => poser_operateur(&mut s, op),

        Jeton::Egal => {
            // Sans opérateur en attente : rien à faire.
            let Some(EnAttente {
                operande,
                operateur,
            }) = s.en_attente.take()
            else {
                return s;
            };
            let droite = lire_nombre(&s.affichage);
            s.affichage = format_resultat(operateur.calculer(operande, droite));
            s.attend_nouvelle_saisie = true;
        }

        Jeton::Chiffre(_) | Jeton::Point => {
            // Chiffre hors 0..=9 construit à la main : ignoré.
            let Some(c) = jeton.caractere() else {
                return s;
            };
            saisir(reglages, &mut s, c);
        }
    }

    s
}

/// Un nouvel opérateur écrase le précédent (le dernier gagne).
fn poser_operateur(s: &mut EtatCalc, op: Operateur) {
    s.en_attente = Some(EnAttente {
        operande: lire_nombre(&s.affichage),
        operateur: op,
    });
    s.attend_nouvelle_saisie = true;
}

fn saisir(reglages: &Reglages, s: &mut EtatCalc, c: char) {
    let repart = s.attend_nouvelle_saisie || s.affichage == "0" || est_erreur(&s.affichage);

    if repart {
        s.affichage.clear();
        s.affichage.push(c);
        s.attend_nouvelle_saisie = false;
        return;
    }

    if c == '.' && reglages.point_unique && s.affichage.contains('.') {
        return;
    }

    s.affichage.push(c);
}

#[cfg(test)]
impl EtatCalc {
    /// État construit directement (tests) ; texte vide -> "0".
    pub(crate) fn depuis_affichage(texte: &str) -> Self {
        Self {
            affichage: if texte.is_empty() {
                "0".to_string()
            } else {
                texte.to_string()
            },
            ..Self::default()
        }
    }

    pub(crate) fn attend_nouvelle_saisie(&self) -> bool {
        self.attend_nouvelle_saisie
    }
}
