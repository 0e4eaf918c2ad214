// src/noyau/format.rs
//
// Affichage des résultats + lecture "souple" du texte affiché.

/// Texte affiché quand le calcul est indéfini (division par zéro).
pub const JETON_ERREUR: &str = "Erro";

/// Au-delà : notation exponentielle (l’affichage reste sur une ligne).
const SEUIL_GRAND: f64 = 1e16;

/// En deçà (hors zéro) : notation exponentielle.
const SEUIL_PETIT: f64 = 1e-6;

/* ------------------------ Résultat -> texte ------------------------ */

/// Formate un résultat pour l’affichage.
///
/// - NaN -> `JETON_ERREUR`
/// - sinon : plus courte écriture décimale qui relit la même valeur
///   (`Display` de f64 : `4.0` s’écrit `4`, `4.5` s’écrit `4.5`)
/// - très grand / très petit : `{:e}` (`1e16`, `2.5e-7`)
/// - ±∞ : `inf` / `-inf` (relisibles par `lire_nombre`)
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return JETON_ERREUR.to_string();
    }
    if x.is_infinite() {
        return format!("{x}");
    }

    let a = x.abs();
    if a >= SEUIL_GRAND || (a != 0.0 && a < SEUIL_PETIT) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}

/* ------------------------ Texte -> nombre (souple) ------------------------ */

/// Lit le texte affiché comme un nombre.
///
/// Repli délibéré : tout texte illisible (jeton d’erreur, "." seul, "Err"
/// après un retour arrière…) vaut 0.0. Jamais d’erreur remontée.
pub fn lire_nombre(affichage: &str) -> f64 {
    affichage.parse::<f64>().unwrap_or(0.0)
}

pub fn est_erreur(affichage: &str) -> bool {
    affichage == JETON_ERREUR
}
