// ============================================================================
// Arguments de la ligne de commande
// ============================================================================
// CONCEPT RUST : clap derive
// - #[derive(Parser)] génère le parsing depuis la structure
// - Les doc comments deviennent l'aide (--help)
// - env = "..." : repli sur une variable d'environnement si le flag est absent
// ============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::models::config::{
    Config, DEFAULT_API_URL, DEFAULT_SYMBOL, DEFAULT_TOKEN, DEFAULT_UNITS,
};

/// Valeur en roupies (INR) d'un portefeuille d'actions cotées en USD
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// API token for finnhub.io
    #[arg(short, long, env = "FINNHUB_TOKEN", default_value = DEFAULT_TOKEN, hide_env_values = true)]
    pub token: String,

    /// Symbol, e.g. NET, WORK, EQIX
    #[arg(short, long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Number of stock units
    #[arg(short, long, default_value_t = DEFAULT_UNITS, allow_negative_numbers = true)]
    pub units: f64,

    /// Stock price override (0 = fetch the current price)
    #[arg(short = 'p', long = "stock_price", default_value_t = 0.0, allow_negative_numbers = true)]
    pub stock_price: f64,

    /// Base URL of the Finnhub API
    #[arg(long, env = "FINNHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Also write logs to a daily rotated file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Convertit les arguments en configuration d'exécution
    pub fn into_config(self) -> Config {
        Config {
            token: self.token,
            symbol: self.symbol,
            units: self.units,
            stock_price: self.stock_price,
            api_url: self.api_url,
        }
    }
}
