//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : détenir la valeur courante de l’accumulateur (`EtatCalc`), l’écran actif
//! et les réglages. C’est le seul endroit mutable : chaque appui remplace `calc`
//! par la valeur que rend le noyau.
//!
//! Contrats :
//! - Aucun calcul ici (tout passe par `noyau::appliquer_avec`).
//! - Changer d’écran ne touche pas au calcul en cours ; il disparaît à la fermeture.

use tracing::{debug, info, warn};

use crate::noyau::{appliquer_avec, appliquer_tout, EtatCalc, Jeton, Reglages};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ecran {
    #[default]
    Calculatrice,
    APropos,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: EtatCalc,
    pub reglages: Reglages,
    pub ecran: Ecran,
}

impl AppCalc {
    /* ------------------------ Appuis ------------------------ */

    /// Un appui (bouton ou touche) -> nouvel état.
    pub fn presser(&mut self, jeton: Jeton) {
        self.calc = appliquer_avec(&self.reglages, &self.calc, jeton);
        debug!(%jeton, affichage = self.calc.affichage(), "appui");
        if jeton == Jeton::Efface {
            info!("calcul remis à zéro");
        }
    }

    /// Plusieurs appuis reçus dans la même frame (clavier).
    pub fn presser_tout(&mut self, jetons: Vec<Jeton>) {
        if jetons.is_empty() {
            return;
        }
        debug!(n = jetons.len(), "appuis groupés");
        self.calc = appliquer_tout(&self.reglages, &self.calc, jetons);
        debug!(affichage = self.calc.affichage(), "après appuis groupés");
    }

    /// Libellé de bouton -> jeton ; un libellé inconnu est journalisé puis ignoré.
    pub fn presser_libelle(&mut self, libelle: &str) {
        match libelle.parse::<Jeton>() {
            Ok(j) => self.presser(j),
            Err(e) => warn!(error = %e, "appui ignoré"),
        }
    }

    /* ------------------------ Navigation ------------------------ */

    pub fn aller_a(&mut self, ecran: Ecran) {
        if self.ecran != ecran {
            info!(?ecran, "navigation");
            self.ecran = ecran;
        }
    }
}
