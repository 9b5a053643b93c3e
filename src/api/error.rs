// ============================================================================
// Erreurs de l'API
// ============================================================================
// Chaque appel HTTP peut échouer à cinq endroits différents. Une variante par
// étape permet au binaire de choisir le code de sortie sans parser de message.
//
// CONCEPT RUST : thiserror
// - #[derive(Error)] implémente std::error::Error et Display
// - #[source] chaîne l'erreur d'origine (visible avec {:?} ou anyhow)
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Échec d'un appel à l'API Finnhub
#[derive(Debug, Error)]
pub enum ApiError {
    /// Impossible de construire le client ou la requête (URL invalide, etc.)
    #[error("Error making a new request for {endpoint}: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Échec réseau : DNS, connexion refusée, TLS, timeout
    #[error("Error getting response from {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Le corps de la réponse n'a pas pu être lu jusqu'au bout
    #[error("Error reading response body from {endpoint}: {source}")]
    Body {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Statut HTTP différent de 200 ; le corps est conservé pour le diagnostic
    #[error("Got response code {status} from {endpoint}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// Le corps n'est pas du JSON ou ne correspond pas à la structure attendue
    #[error("Error unmarshalling {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Code de sortie du processus associé à l'erreur
    ///
    /// - 2 : statut HTTP inattendu
    /// - 1 : tout le reste
    pub fn exit_code(&self) -> u8 {
        match self {
            ApiError::Status { .. } => 2,
            _ => 1,
        }
    }

    /// Endpoint concerné par l'erreur (ex: "/quote")
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Request { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Body { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => *endpoint,
        }
    }
}
