// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod config; // Paramètres d'exécution (config.rs)
pub mod forex;  // Taux de change (forex.rs)
pub mod quote;  // Cotation d'une action (quote.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use stockvalue::models::quote::Quote;
// On peut faire : use stockvalue::models::Quote;
pub use config::Config;
pub use forex::ForexRates;
pub use quote::Quote;
