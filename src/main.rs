// ============================================================================
// StockValue - Point d'entrée
// ============================================================================
// Valeur en INR d'un portefeuille d'actions :
//   1. parse les arguments
//   2. récupère la cotation puis les taux de change (Finnhub)
//   3. affiche quatre lignes sur stdout
//
// Codes de sortie :
//   0 : succès
//   1 : erreur de requête, réseau, lecture ou JSON
//   2 : statut HTTP inattendu sur /quote
// ============================================================================

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use stockvalue::api::ApiError;
use stockvalue::app;
use stockvalue::cli::Args;
use stockvalue::models::Config;
use stockvalue::report::Report;

/// Filtre de logs utilisé quand RUST_LOG n'est pas défini
const DEFAULT_LOG_FILTER: &str = "stockvalue=info,warn";

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les diagnostics vont sur stderr : stdout est réservé au rapport.
// Avec --log-dir, ils sont aussi écrits dans un fichier à rotation quotidienne.
// ============================================================================

/// Initialise le système de logging
///
/// # Contrôler le niveau de log
/// ```bash
/// RUST_LOG=debug stockvalue -t <token>
/// RUST_LOG=stockvalue=trace stockvalue -t <token>
/// ```
fn init_logging(log_dir: Option<&Path>) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // CONCEPT RUST : Option<Layer>
    // - None : la couche est simplement ignorée par le registry
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).context("Échec de la création du répertoire de logs")?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "stockvalue.log");
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false) // Pas de codes couleur dans le fichier
                    .with_target(true)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .with(
            // Par défaut : info pour stockvalue, warn pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init()
        .context("Échec de l'initialisation du logging")?;

    debug!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> ExitCode {
    // Un flag mal formé arrête le programme ici (usage + code 2, géré par clap)
    let args = Args::parse();

    init_logging(args.log_dir.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: failed to initialize logging: {e:#}");
    });

    let config = args.into_config();
    debug!(symbol = %config.symbol, units = config.units, "Configuration loaded");

    match valuate(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<ApiError>() {
                Some(api_error) => error!(endpoint = api_error.endpoint(), "{e:#}"),
                None => error!("{e:#}"),
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Exécute le pipeline async dans un runtime tokio
///
/// CONCEPT RUST : Exécuter du code async dans du code sync
/// - tokio::runtime::Runtime : crée un runtime tokio
/// - .block_on() : exécute une future de manière bloquante
fn valuate(config: &Config) -> Result<Report> {
    let runtime = tokio::runtime::Runtime::new().context("Échec de la création du runtime tokio")?;
    let report = runtime.block_on(app::run(config))?;
    Ok(report)
}

/// Code de sortie d'une erreur : celui de l'API si c'en est une, 1 sinon
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ApiError>()
        .map(ApiError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_exit_code_from_status_error() {
        let err = anyhow::Error::from(ApiError::Status {
            endpoint: "/quote",
            status: StatusCode::UNAUTHORIZED,
            body: "{\"error\":\"Invalid API key.\"}".to_string(),
        });
        assert_eq!(exit_code(&err), 2);

        // Le contexte ajouté par anyhow ne masque pas l'erreur d'origine
        let err = err.context("Échec de la valorisation");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_from_other_errors() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = anyhow::Error::from(ApiError::Decode {
            endpoint: "/forex/rates",
            source: decode,
        });
        assert_eq!(exit_code(&err), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("runtime indisponible")), 1);
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
