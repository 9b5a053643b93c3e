// ============================================================================
// StockValue - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // API Finnhub
pub mod app;       // Pipeline cotation -> taux -> valorisation
pub mod cli;       // Arguments de la ligne de commande
pub mod models;    // Structures de données
pub mod report;    // Rapport affiché
pub mod valuation; // Calcul de la valeur en INR
