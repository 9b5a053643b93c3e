// ============================================================================
// Structure : Config
// ============================================================================
// Configuration immuable d'une exécution, construite une seule fois depuis
// la ligne de commande (voir crate::cli)
// ============================================================================

/// URL de base de l'API Finnhub
pub const DEFAULT_API_URL: &str = "https://finnhub.io/api/v1";

/// Token par défaut (non fonctionnel, l'API le refusera)
pub const DEFAULT_TOKEN: &str = "xxxxxxxx";

/// Symbole par défaut
pub const DEFAULT_SYMBOL: &str = "NET";

/// Nombre d'actions par défaut
pub const DEFAULT_UNITS: f64 = 1000.0;

/// Paramètres d'une exécution
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Token de l'API Finnhub (transmis tel quel, jamais validé)
    pub token: String,

    /// Symbole boursier (ex: "NET", "EQIX")
    pub symbol: String,

    /// Nombre d'actions détenues
    pub units: f64,

    /// Prix forcé par l'utilisateur, 0 = récupérer le prix depuis l'API
    pub stock_price: f64,

    /// URL de base de l'API
    pub api_url: String,
}

impl Config {
    /// Prix forcé, ou None si le prix doit venir de la cotation
    ///
    /// Seule la valeur exacte 0 signifie "non renseigné".
    pub fn price_override(&self) -> Option<f64> {
        if self.stock_price == 0.0 {
            None
        } else {
            Some(self.stock_price)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            units: DEFAULT_UNITS,
            stock_price: 0.0,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
