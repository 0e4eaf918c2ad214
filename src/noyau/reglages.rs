// src/noyau/reglages.rs
//
// Deux comportements où l’app d’origine ne tranche pas : on les rend explicites.

/// Que faire d’un retour arrière quand l’affichage montre le jeton d’erreur ?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetourSurErreur {
    /// Rogne caractère par caractère ("Erro" -> "Err" -> … -> "0").
    #[default]
    Rogner,
    /// Remise à zéro complète (comme "C").
    Effacer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// true : un second point décimal dans le même nombre est ignoré.
    pub point_unique: bool,
    pub retour_sur_erreur: RetourSurErreur,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            point_unique: true,
            retour_sur_erreur: RetourSurErreur::Rogner,
        }
    }
}
