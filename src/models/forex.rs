// ============================================================================
// Structure : ForexRates
// ============================================================================
// Taux de change renvoyés par l'endpoint /forex/rates de Finnhub
//
// Tous les taux sont exprimés par rapport à une devise de base implicite
// (USD chez Finnhub) :
//   {"base": "USD", "quote": {"INR": 83.0, "USD": 1.0, "SGD": 1.35, ...}}
//
// CONCEPT RUST : HashMap<String, f64>
// - On garde toutes les devises renvoyées, pas seulement INR et USD
// - Serde désérialise un objet JSON directement en HashMap
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Code devise de la roupie indienne
pub const INR: &str = "INR";

/// Code devise du dollar américain
pub const USD: &str = "USD";

/// Taux de change relatifs à la devise de base de l'API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForexRates {
    /// Devise de base annoncée par l'API (absente dans certaines réponses)
    #[serde(default)]
    pub base: Option<String>,

    /// Code devise -> taux relatif à la base
    #[serde(default)]
    pub quote: HashMap<String, f64>,
}

impl ForexRates {
    /// Retourne le taux d'une devise, ou 0.0 si l'API ne l'a pas fourni
    ///
    /// Un taux absent n'est pas une erreur : il se propage dans le calcul
    /// (0 / x = 0, x / 0 = inf) et finit tel quel dans le rapport.
    pub fn rate(&self, code: &str) -> f64 {
        match self.quote.get(code) {
            Some(&rate) => rate,
            None => {
                warn!(currency = code, "Currency missing from forex rates, using 0");
                0.0
            }
        }
    }
}
