// ============================================================================
// Structure : Quote
// ============================================================================
// Cotation instantanée d'une action renvoyée par l'endpoint /quote de Finnhub
//
// Le JSON utilise des noms d'une ou deux lettres :
//   {"c": 50.0, "h": 51.2, "l": 49.1, "o": 49.8, "pc": 49.5, "t": 1700000000}
//
// CONCEPTS RUST :
// 1. #[serde(rename = "...")] : nom JSON court -> nom Rust lisible
// 2. #[serde(default)] : champ absent -> valeur par défaut (0.0, 0)
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cotation d'un symbole (prix courant, plus haut, plus bas, ouverture, clôture précédente)
///
/// Seul `current` sert au calcul de la valorisation, les autres champs sont
/// conservés tels que l'API les renvoie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // Un champ manquant vaut 0, comme côté Finnhub pour un symbole inconnu
pub struct Quote {
    /// Prix courant
    #[serde(rename = "c")]
    pub current: f64,

    /// Plus haut de la journée
    #[serde(rename = "h")]
    pub high: f64,

    /// Plus bas de la journée
    #[serde(rename = "l")]
    pub low: f64,

    /// Prix d'ouverture
    #[serde(rename = "o")]
    pub open: f64,

    /// Clôture de la veille
    #[serde(rename = "pc")]
    pub previous_close: f64,

    /// Timestamp Unix (secondes) de la cotation
    #[serde(rename = "t")]
    pub timestamp: i64,
}

impl Quote {
    /// Convertit le timestamp Unix en date UTC
    ///
    /// Retourne None si le timestamp est absent (0) ou hors de la plage de chrono.
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
