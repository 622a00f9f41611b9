pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::{ListingFilter, PriceEstimator, SaleForm};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// A marketplace action, independent of how it was requested.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Browse { filter: ListingFilter, json: bool },
    Show { id: String },
    Options,
    Sell { form: SaleForm, accept: bool },
    Listings,
}

/// Runs `command` against a fresh catalog built from the config.
///
/// `seed` overrides the config's seed for the offer generator.
pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    info!("AutoLink marketplace starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut catalog = config.build_catalog();
    let currency = config.currency.as_str();

    match command {
        AppCommand::Browse { filter, json } => cli::browse::run(&catalog, &filter, currency, json),
        AppCommand::Show { id } => cli::show::run(&catalog, &id, currency),
        AppCommand::Options => {
            cli::options::run(&catalog);
            Ok(())
        }
        AppCommand::Sell { form, accept } => {
            let mut rng = match seed.or(config.seed) {
                Some(seed) => {
                    debug!("Seeding offer generator with {seed}");
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            let estimator = PriceEstimator::new();
            cli::sell::run(&mut catalog, &estimator, &mut rng, &form, accept, currency)
        }
        AppCommand::Listings => {
            cli::listings::run(&catalog, currency);
            Ok(())
        }
    }
}
