// ============================================================================
// API Client : Finnhub
// ============================================================================
// Récupère une cotation (/quote) et les taux de change (/forex/rates)
// depuis l'API REST de Finnhub. Le token passe en query string.
//
// Chaque appel suit les mêmes étapes, et chaque étape a sa propre erreur :
//   construction -> envoi -> lecture du corps -> statut -> JSON
// ============================================================================

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::api::ApiError;
use crate::models::{ForexRates, Quote};

/// Endpoint de cotation
pub const QUOTE_ENDPOINT: &str = "/quote";

/// Endpoint des taux de change
pub const FOREX_RATES_ENDPOINT: &str = "/forex/rates";

/// Réponse brute : statut + corps complet
struct RawResponse {
    status: StatusCode,
    body: String,
}

/// Client Finnhub
///
/// Un seul `reqwest::Client` est réutilisé pour les deux appels (pool de
/// connexions partagé).
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl FinnhubClient {
    /// Crée un client pour l'URL de base donnée (ex: "https://finnhub.io/api/v1")
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        debug!("Creating HTTP client");
        let http = Client::builder()
            .user_agent(concat!("stockvalue/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Request {
                endpoint: QUOTE_ENDPOINT,
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Récupère la cotation d'un symbole
    ///
    /// Un statut différent de 200 est fatal : le corps est loggé tel quel
    /// puis renvoyé dans `ApiError::Status`.
    #[instrument(skip(self))]
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ApiError> {
        let raw = self
            .get(QUOTE_ENDPOINT, &[("token", self.token.as_str()), ("symbol", symbol)])
            .await?;

        if raw.status != StatusCode::OK {
            error!(status = %raw.status, "Quote endpoint returned error status");
            error!(body = %raw.body, "Quote endpoint response body");
            return Err(ApiError::Status {
                endpoint: QUOTE_ENDPOINT,
                status: raw.status,
                body: raw.body,
            });
        }

        let quote: Quote = decode(QUOTE_ENDPOINT, &raw.body)?;
        info!(
            current = quote.current,
            previous_close = quote.previous_close,
            quoted_at = ?quote.quoted_at(),
            "Fetched quote"
        );
        Ok(quote)
    }

    /// Récupère les taux de change de toutes les devises
    ///
    /// Contrairement à `fetch_quote`, un statut différent de 200 n'arrête pas
    /// l'appel : il est loggé puis le corps est décodé quand même. Un corps
    /// d'erreur non JSON échoue donc au décodage.
    #[instrument(skip(self))]
    pub async fn fetch_forex_rates(&self) -> Result<ForexRates, ApiError> {
        let raw = self
            .get(FOREX_RATES_ENDPOINT, &[("token", self.token.as_str())])
            .await?;

        if raw.status != StatusCode::OK {
            warn!(status = %raw.status, body = %raw.body, "Forex endpoint returned non-200 status, decoding anyway");
        }

        let rates: ForexRates = decode(FOREX_RATES_ENDPOINT, &raw.body)?;
        info!(currencies = rates.quote.len(), base = ?rates.base, "Fetched forex rates");
        Ok(rates)
    }

    /// GET `<base_url><endpoint>?<query>` et lecture complète du corps
    async fn get(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        // build() valide l'URL : une URL de base invalide échoue ici
        let request = self
            .http
            .get(&url)
            .query(query)
            .build()
            .map_err(|source| ApiError::Request { endpoint, source })?;

        // Le token est dans la query string : on ne logge que le chemin
        debug!(endpoint, "Sending HTTP request to Finnhub");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Body { endpoint, source })?;

        Ok(RawResponse { status, body })
    }
}

/// Décode un corps JSON en T
fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { endpoint, source })
}

// ============================================================================
// Tests unitaires
// ============================================================================
