// ============================================================================
// Structure : Report
// ============================================================================
// Les quatre lignes affichées sur la sortie standard
//
// CONCEPT RUST : impl Display
// - Permet d'utiliser {} dans print!/format!
// - Le formatage reste testable sans capturer stdout
// ============================================================================

use std::fmt;

use crate::models::Quote;
use crate::valuation::Valuation;

/// Rapport final d'une exécution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Prix courant de la cotation (même si un prix forcé a servi au calcul)
    pub stock_price: f64,

    /// Nombre d'actions
    pub units: f64,

    /// Taux USD -> INR
    pub usd_to_inr: f64,

    /// Valeur totale en INR
    pub current_value: f64,
}

impl Report {
    pub fn new(quote: &Quote, units: f64, valuation: Valuation) -> Self {
        Self {
            stock_price: quote.current,
            units,
            usd_to_inr: valuation.usd_to_inr,
            current_value: valuation.current_value,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock price : {:.2}", self.stock_price)?;
        writeln!(f, "Number of stocks: {:.0}", self.units)?;
        writeln!(f, "Usd to INR: {:.2}", self.usd_to_inr)?;
        writeln!(f, "Total value INR: {:.0}", self.current_value)
    }
}
