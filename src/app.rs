// ============================================================================
// Pipeline de l'application
// ============================================================================
// Étapes strictement séquentielles :
//   1. cotation (/quote)
//   2. prix retenu : prix forcé ou prix courant de la cotation
//   3. taux de change (/forex/rates), lancé seulement après la cotation
//   4. calcul de la valorisation
//   5. rapport
//
// Aucune sortie n'est produite ici : en cas d'erreur, rien n'est affiché.
// ============================================================================

use tracing::{info, instrument};

use crate::api::{ApiError, FinnhubClient};
use crate::models::forex::{INR, USD};
use crate::models::Config;
use crate::report::Report;
use crate::valuation::Valuation;

/// Exécute le pipeline complet et retourne le rapport à afficher
#[instrument(skip(config), fields(symbol = %config.symbol, units = config.units))]
pub async fn run(config: &Config) -> Result<Report, ApiError> {
    let client = FinnhubClient::new(&config.api_url, &config.token)?;

    // La cotation est toujours récupérée : son prix figure dans le rapport
    let quote = client.fetch_quote(&config.symbol).await?;

    let stock_price = match config.price_override() {
        Some(price) => {
            info!(price, fetched = quote.current, "Using stock price override");
            price
        }
        None => quote.current,
    };

    let rates = client.fetch_forex_rates().await?;

    let valuation = Valuation::compute(config.units, stock_price, rates.rate(INR), rates.rate(USD));
    info!(
        usd_to_inr = valuation.usd_to_inr,
        current_value = valuation.current_value,
        "Computed valuation"
    );

    Ok(Report::new(&quote, config.units, valuation))
}

// ============================================================================
// Tests unitaires
// ============================================================================
