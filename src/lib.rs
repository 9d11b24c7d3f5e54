//! Enerji Master library
//!
//! Household appliance energy-cost estimation: label normalization, monthly
//! cost aggregation, device list persistence and terminal presentation.

pub mod core;
pub mod db;
pub mod display;
pub mod i18n;
pub mod normalizer;
pub mod pricing;
pub mod registry;
