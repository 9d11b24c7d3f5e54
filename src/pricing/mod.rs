//! Pricing engine for electricity cost calculation
//!
//! A single flat unit price per kWh is applied to every device. Costs are
//! never stored; they are recomputed from the device list whenever the price
//! or the list changes.

use crate::core::{parse_positive, CostReport, CostedDevice, NormalizedDevice, PricingConfig};

/// Unit price used when none (or an unusable one) is supplied
pub const DEFAULT_UNIT_PRICE: f64 = 2.59;

/// The caller's price if it is finite and positive, otherwise the default
pub fn resolve_unit_price(unit_price: Option<f64>) -> f64 {
    unit_price
        .filter(|price| price.is_finite() && *price > 0.0)
        .unwrap_or(DEFAULT_UNIT_PRICE)
}

/// Parse a unit price as typed by the user, falling back to the default
pub fn parse_unit_price(text: &str) -> f64 {
    parse_positive(text).unwrap_or(DEFAULT_UNIT_PRICE)
}

/// Monthly cost of one device at `unit_price`
pub fn monthly_cost(device: &NormalizedDevice, unit_price: f64) -> f64 {
    device.monthly_kwh() * unit_price
}

/// Cost every device at `unit_price`, keeping their order
pub fn compute_costs(devices: &[NormalizedDevice], unit_price: f64) -> CostReport {
    let unit_price = resolve_unit_price(Some(unit_price));

    let devices: Vec<CostedDevice> = devices
        .iter()
        .map(|device| CostedDevice {
            device: device.clone(),
            monthly_cost: monthly_cost(device, unit_price),
        })
        .collect();

    let total_cost = devices.iter().map(|costed| costed.monthly_cost).sum();

    CostReport {
        devices,
        total_cost,
        unit_price,
    }
}

/// Pricing engine that calculates electricity costs
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        let mut config = config.clone();
        config.unit_price = resolve_unit_price(Some(config.unit_price));
        Self { config }
    }

    /// Current rate per kWh
    pub fn unit_price(&self) -> f64 {
        self.config.unit_price
    }

    /// Set the rate per kWh; unusable values select the default
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.config.unit_price = resolve_unit_price(Some(unit_price));
    }

    /// Calculate cost for a given energy consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        kwh * self.unit_price()
    }

    /// Monthly cost of a constant draw of `watts` for `daily_hours` per day
    pub fn calculate_monthly_cost(&self, watts: f64, daily_hours: f64) -> f64 {
        monthly_cost(&NormalizedDevice::new("", watts, daily_hours), self.unit_price())
    }

    /// Cost breakdown of `devices` at the current rate
    pub fn compute_costs(&self, devices: &[NormalizedDevice]) -> CostReport {
        compute_costs(devices, self.unit_price())
    }

    /// Get the currency symbol
    pub fn get_currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}
