// ============================================================================
// Module : api
// ============================================================================
// Ce module contient le client de l'API Finnhub (cotations et taux de change)
// et les erreurs associées
// ============================================================================

pub mod error;   // Erreurs typées des appels HTTP
pub mod finnhub; // Client API Finnhub

#[cfg(test)]
pub(crate) mod mock; // Serveur HTTP local pour les tests

// Re-export des types principaux
pub use error::ApiError;
pub use finnhub::FinnhubClient;
