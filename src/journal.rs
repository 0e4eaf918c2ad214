//! Journalisation (natif seulement).
//!
//! Silencieux par défaut (`warn`). `RUST_LOG` prend le dessus :
//! ```bash
//! RUST_LOG=debug calculatrice_m3
//! RUST_LOG=calculatrice_m3::app=trace calculatrice_m3
//! ```
//! En wasm32 aucun abonné n’est installé : les événements `tracing` sont perdus.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filtre si `RUST_LOG` est absent ou illisible.
const FILTRE_DEFAUT: &str = "warn";

/// À appeler une fois au démarrage ; les appels suivants ne font rien.
pub fn init() {
    INIT.call_once(|| {
        let filtre = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

        // try_init : un abonné global déjà posé (tests, hôte) n’est pas une erreur fatale
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_target(true)
            .compact()
            .try_init();
    });
}
