//! Core module - Configuration, errors, and the shared data model

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig, StorageConfig, APP_DIR_NAME};
pub use error::{Error, Result};
pub use types::{
    parse_positive, ApplianceType, ChartSlice, CostReport, CostedDevice, FieldSpec, LabelField,
    NormalizedDevice, RawLabelInput, DAYS_PER_MONTH,
};
