//! Enerji Master - Command line front end
//!
//! Lets a user register household appliances from their energy labels and
//! see the estimated monthly electricity bill with a cost breakdown.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use enerji_master_lib::core::{ApplianceType, Config, RawLabelInput};
use enerji_master_lib::db::Database;
use enerji_master_lib::display::{ConsolePresenter, Style, Theme};
use enerji_master_lib::i18n::I18n;
use enerji_master_lib::pricing::{parse_unit_price, PricingEngine};
use enerji_master_lib::registry::Estimator;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

type CliEstimator = Estimator<Database, ConsolePresenter>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    log::info!("Starting Enerji Master v{}", env!("CARGO_PKG_VERSION"));

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    // Load or create configuration
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(lang) = &cli.lang {
        config.general.language = lang.clone();
    }
    let i18n = I18n::new(&config.general.language);

    match &cli.command {
        Commands::Add { appliance, fields } => {
            let appliance: ApplianceType = appliance.parse()?;
            let mut inputs = RawLabelInput::new();
            for assignment in fields {
                inputs.parse_assignment(assignment)?;
            }

            let mut estimator = open_estimator(&cli, &config, i18n)?;
            estimator.add_device(appliance, &inputs);
            estimator.presenter_mut().flush();
        }
        Commands::Delete { number } => {
            let mut estimator = open_estimator(&cli, &config, i18n)?;
            let removed = number
                .checked_sub(1)
                .and_then(|index| estimator.delete_device(index));
            if removed.is_none() {
                log::warn!("No device #{} to delete", number);
            }
            estimator.presenter_mut().flush();
        }
        Commands::List => {
            let mut estimator = open_estimator(&cli, &config, i18n)?;
            if let Ok(Some(saved_at)) = estimator.store().last_saved_at() {
                log::info!("Device list last saved at {}", saved_at);
            }
            estimator.presenter_mut().flush();
        }
        Commands::Types => print_types(&i18n),
        Commands::Theme { mode } => {
            let current = parse_theme(&config.general.theme);
            let theme = if mode.eq_ignore_ascii_case("toggle") {
                current.toggled()
            } else {
                mode.parse()?
            };
            config.general.theme = theme.key().to_string();
            save_config(&config, &config_path)?;

            let theme_name = i18n.get(&format!("theme.{}", theme.key()));
            println!("{}", i18n.fill("notice.theme_saved", &[("theme", theme_name.as_str())]));
        }
        Commands::Price { value } => {
            config.pricing.unit_price = parse_unit_price(value);
            save_config(&config, &config_path)?;

            let price = config.pricing.unit_price.to_string();
            println!(
                "{}",
                i18n.fill(
                    "notice.price_saved",
                    &[("price", price.as_str()), ("symbol", config.pricing.currency_symbol.as_str())]
                )
            );
        }
    }

    Ok(())
}

/// Build the estimator over the on-disk device store
fn open_estimator(cli: &Cli, config: &Config, i18n: I18n) -> anyhow::Result<CliEstimator> {
    let mut pricing = PricingEngine::new(&config.pricing);
    if let Some(price) = &cli.price {
        pricing.set_unit_price(parse_unit_price(price));
    }

    let db_path: Option<PathBuf> = cli.db.clone().or_else(|| config.storage.database_path.clone());
    let store = match db_path {
        Some(path) => Database::open(&path, &config.storage.storage_key),
        None => Database::new(&config.storage.storage_key),
    }
    .context("Failed to open device database")?;

    let style = Style {
        theme: parse_theme(&config.general.theme),
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };
    let presenter = ConsolePresenter::new(i18n.clone(), pricing.get_currency_symbol(), style);

    Ok(Estimator::new(store, presenter, pricing, i18n))
}

fn parse_theme(theme: &str) -> Theme {
    theme.parse().unwrap_or_else(|e| {
        log::warn!("{}, using light theme", e);
        Theme::default()
    })
}

fn save_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    config
        .save_to(path)
        .with_context(|| format!("Failed to save config to {}", path.display()))
}

/// List every appliance type with its label fields, defaults and hints
fn print_types(i18n: &I18n) {
    println!("== {} ==", i18n.get("types.title"));
    for appliance in ApplianceType::ALL {
        println!();
        println!("{:<11} {}", appliance.key(), i18n.get(&appliance.name_key()));
        for spec in appliance.fields() {
            println!(
                "    -f {}=<{}>  ({}: {})",
                spec.field.key(),
                i18n.get(&spec.field.label_key()),
                i18n.get("types.default"),
                spec.default
            );
            println!("       {}", i18n.get(&spec.field.hint_key()));
        }
    }
}
