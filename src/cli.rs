use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enerji-master", version)]
#[command(about = "Household appliance energy cost estimator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Electricity price per kWh for this run (invalid values use 2.59)
    #[arg(long, global = true)]
    pub price: Option<String>,

    /// Language (auto/tr/en)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Device database file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an appliance from its energy label figures
    Add {
        /// Appliance type (fridge/washing/dishwasher/ac/tv/light/other)
        appliance: String,

        /// Label figure as FIELD=VALUE, e.g. -f daily_hours=4 (repeatable)
        #[arg(short = 'f', long = "field", value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// Remove the device with the given list number
    Delete {
        /// Number shown by `list` (starting at 1)
        number: usize,
    },

    /// Show devices, monthly total and cost breakdown
    List,

    /// Show appliance types with their label fields and defaults
    Types,

    /// Set the colour theme (light/dark/toggle)
    Theme {
        mode: String,
    },

    /// Save the default electricity price per kWh
    Price {
        value: String,
    },
}
