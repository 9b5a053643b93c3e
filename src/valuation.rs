// ============================================================================
// Calcul de la valorisation
// ============================================================================
// Fonctions pures, sans I/O :
//   usd_to_inr    = taux INR / taux USD   (cross-rate)
//   current_value = round(units * usd_to_inr * stock_price)
//
// Aucun cas particulier : un taux USD nul donne inf ou NaN, qui se
// propagent jusqu'au rapport.
// ============================================================================

/// Taux croisé entre deux devises exprimées par rapport à la même base
///
/// Ex: INR = 83.0 et USD = 1.0 (base USD) -> 1 USD = 83 INR
pub fn cross_rate(target_rate: f64, source_rate: f64) -> f64 {
    target_rate / source_rate
}

/// Résultat du calcul de valorisation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    /// Taux de conversion USD -> INR
    pub usd_to_inr: f64,

    /// Valeur totale en INR, arrondie à l'unité
    pub current_value: f64,
}

impl Valuation {
    /// Calcule la valeur de `units` actions au prix `stock_price` (en USD)
    ///
    /// L'arrondi (`f64::round`, demi vers l'extérieur) ne s'applique qu'au
    /// produit final.
    pub fn compute(units: f64, stock_price: f64, inr_rate: f64, usd_rate: f64) -> Self {
        let usd_to_inr = cross_rate(inr_rate, usd_rate);
        let current_value = (units * usd_to_inr * stock_price).round();

        Self {
            usd_to_inr,
            current_value,
        }
    }
}
