//! Noyau de la calculatrice (pur, sans UI)
//!
//! Organisation interne :
//! - jetons.rs       : alphabet des appuis (chiffres, point, opérateurs, C, ⌫, =)
//! - accumulateur.rs : état + transition `appliquer(etat, jeton)`
//! - format.rs       : résultat -> texte, texte -> nombre (souple)
//! - reglages.rs     : point décimal unique, retour arrière sur erreur

pub mod accumulateur;
pub mod format;
pub mod jetons;
pub mod reglages;

#[cfg(test)]
mod tests_transitions;


// API publique minimale
pub use accumulateur::{appliquer_avec, appliquer_tout, EtatCalc};
pub use jetons::Jeton;
pub use reglages::{Reglages, RetourSurErreur};
