//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Days in a billing month. Every monthly figure assumes this.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Appliance categories with their own energy label layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplianceType {
    #[serde(rename = "fridge")]
    Refrigerator,
    #[serde(rename = "washing")]
    WashingMachine,
    #[serde(rename = "dishwasher")]
    Dishwasher,
    #[serde(rename = "ac")]
    AirConditioner,
    #[serde(rename = "tv")]
    Television,
    #[serde(rename = "light")]
    LightBulb,
    #[serde(rename = "other")]
    Other,
}

impl ApplianceType {
    /// All appliance types in form order
    pub const ALL: [ApplianceType; 7] = [
        ApplianceType::Refrigerator,
        ApplianceType::WashingMachine,
        ApplianceType::Dishwasher,
        ApplianceType::AirConditioner,
        ApplianceType::Television,
        ApplianceType::LightBulb,
        ApplianceType::Other,
    ];

    /// Stable short key (command line, config)
    pub fn key(self) -> &'static str {
        match self {
            Self::Refrigerator => "fridge",
            Self::WashingMachine => "washing",
            Self::Dishwasher => "dishwasher",
            Self::AirConditioner => "ac",
            Self::Television => "tv",
            Self::LightBulb => "light",
            Self::Other => "other",
        }
    }

    /// Fixed display name used when no translation table is at hand
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Refrigerator => "Buzdolab\u{0131}",
            Self::WashingMachine => "\u{00C7}ama\u{015F}\u{0131}r Makinesi",
            Self::Dishwasher => "Bula\u{015F}\u{0131}k Makinesi",
            Self::AirConditioner => "Klima",
            Self::Television => "TV",
            Self::LightBulb => "Ayd\u{0131}nlatma (Ampul)",
            Self::Other => "F\u{0131}r\u{0131}n/\u{00DC}t\u{00FC}/S\u{00FC}p\u{00FC}rge",
        }
    }

    /// Translation key of the display name
    pub fn name_key(self) -> String {
        format!("appliance.{}", self.key())
    }

    /// Label fields this appliance reads, with their fallback values
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Refrigerator => &[FieldSpec { field: LabelField::YearlyKwh, default: 274.0 }],
            Self::WashingMachine | Self::Dishwasher => &[
                FieldSpec { field: LabelField::CyclesPer100, default: 50.0 },
                FieldSpec { field: LabelField::WeeklyUses, default: 3.0 },
            ],
            Self::AirConditioner => &[FieldSpec { field: LabelField::YearlySeasonalKwh, default: 150.0 }],
            Self::Television => &[
                FieldSpec { field: LabelField::KwhPer1000h, default: 60.0 },
                FieldSpec { field: LabelField::DailyHours, default: 4.0 },
            ],
            Self::LightBulb => &[
                FieldSpec { field: LabelField::WattPerBulb, default: 9.0 },
                FieldSpec { field: LabelField::BulbCount, default: 1.0 },
                FieldSpec { field: LabelField::DailyHours, default: 5.0 },
            ],
            Self::Other => &[
                FieldSpec { field: LabelField::Watt, default: 2000.0 },
                FieldSpec { field: LabelField::DailyHours, default: 1.0 },
            ],
        }
    }

    /// Fallback value of `field` for this appliance, if the field belongs to it
    pub fn default_for(self, field: LabelField) -> Option<f64> {
        self.fields()
            .iter()
            .find(|spec| spec.field == field)
            .map(|spec| spec.default)
    }
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ApplianceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let appliance = match normalized.as_str() {
            "fridge" | "refrigerator" => Self::Refrigerator,
            "washing" | "washing_machine" | "washer" => Self::WashingMachine,
            "dishwasher" => Self::Dishwasher,
            "ac" | "air_conditioner" => Self::AirConditioner,
            "tv" | "television" => Self::Television,
            "light" | "light_bulb" | "bulb" => Self::LightBulb,
            "other" => Self::Other,
            _ => return Err(Error::UnknownAppliance(s.to_string())),
        };
        Ok(appliance)
    }
}

/// Named raw input read from an energy label or typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelField {
    /// Yearly consumption printed on a refrigerator label (kWh/annum)
    YearlyKwh,
    /// Consumption per 100 cycles (kWh)
    CyclesPer100,
    /// Cycles run per week
    WeeklyUses,
    /// Seasonal heating/cooling consumption (kWh/annum)
    YearlySeasonalKwh,
    /// Consumption per 1000 hours on (kWh)
    #[serde(rename = "kwh_per_1000h")]
    KwhPer1000h,
    /// Hours in use per day
    DailyHours,
    /// Rated power of one bulb (W)
    WattPerBulb,
    /// Number of identical bulbs
    BulbCount,
    /// Rated power (W)
    Watt,
}

impl LabelField {
    pub fn key(self) -> &'static str {
        match self {
            Self::YearlyKwh => "yearly_kwh",
            Self::CyclesPer100 => "cycles_per_100",
            Self::WeeklyUses => "weekly_uses",
            Self::YearlySeasonalKwh => "yearly_seasonal_kwh",
            Self::KwhPer1000h => "kwh_per_1000h",
            Self::DailyHours => "daily_hours",
            Self::WattPerBulb => "watt_per_bulb",
            Self::BulbCount => "bulb_count",
            Self::Watt => "watt",
        }
    }

    /// Translation key of the form label
    pub fn label_key(self) -> String {
        format!("field.{}.label", self.key())
    }

    /// Translation key of the form hint
    pub fn hint_key(self) -> String {
        format!("field.{}.hint", self.key())
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LabelField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // camelCase and snake_case spellings both map to the same key
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        let field = match folded.as_str() {
            "yearlykwh" => Self::YearlyKwh,
            "cyclesper100" | "cycles100" => Self::CyclesPer100,
            "weeklyuses" | "weeklyuse" => Self::WeeklyUses,
            "yearlyseasonalkwh" | "acyearly" => Self::YearlySeasonalKwh,
            "kwhper1000h" | "tv1000h" => Self::KwhPer1000h,
            "dailyhours" | "hours" => Self::DailyHours,
            "wattperbulb" | "bulbwatt" => Self::WattPerBulb,
            "bulbcount" => Self::BulbCount,
            "watt" | "watts" => Self::Watt,
            _ => return Err(Error::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

/// A label field together with the value used when input is unusable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: LabelField,
    pub default: f64,
}

/// Parse user text as a usable label figure.
///
/// Only finite values strictly greater than zero are accepted.
pub fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Raw, unvalidated label inputs keyed by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLabelInput {
    values: HashMap<LabelField, String>,
}

impl RawLabelInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: LabelField, value: impl ToString) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: LabelField, value: impl ToString) {
        self.values.insert(field, value.to_string());
    }

    /// Parse a `field=value` assignment, e.g. `daily_hours=4`.
    ///
    /// Only the field name is validated here; the value is kept verbatim and
    /// checked when the appliance is normalized.
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<LabelField> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::UnknownField(assignment.to_string()))?;
        let field: LabelField = name.parse()?;
        self.set(field, value.trim());
        Ok(field)
    }

    /// The text entered for a field, if any
    pub fn raw(&self, field: LabelField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// The field's value if it is present and usable
    pub fn number(&self, field: LabelField) -> Option<f64> {
        self.raw(field).and_then(parse_positive)
    }

    /// The field's value, or `default` when absent, non-numeric or non-positive
    pub fn value_or(&self, field: LabelField, default: f64) -> f64 {
        self.number(field).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An appliance reduced to a constant draw over a number of daily hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDevice {
    /// Display name, fixed per appliance type
    pub name: String,
    /// Equivalent constant power draw in watts
    #[serde(rename = "watt")]
    pub equivalent_wattage: f64,
    /// Hours per day the draw is sustained
    #[serde(rename = "hours")]
    pub daily_usage_hours: f64,
}

impl NormalizedDevice {
    pub fn new(name: impl Into<String>, equivalent_wattage: f64, daily_usage_hours: f64) -> Self {
        Self {
            name: name.into(),
            equivalent_wattage,
            daily_usage_hours,
        }
    }

    /// Energy used over a billing month in kWh
    pub fn monthly_kwh(&self) -> f64 {
        (self.equivalent_wattage / 1000.0) * self.daily_usage_hours * DAYS_PER_MONTH
    }

    /// Both figures finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.equivalent_wattage.is_finite()
            && self.equivalent_wattage >= 0.0
            && self.daily_usage_hours.is_finite()
            && self.daily_usage_hours >= 0.0
    }
}

/// A device together with its monthly cost at the current unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostedDevice {
    #[serde(flatten)]
    pub device: NormalizedDevice,
    /// Monthly cost in the configured currency
    #[serde(rename = "cost")]
    pub monthly_cost: f64,
}

/// One slice of the share-of-total chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub cost: f64,
    /// Fraction of the total, 0.0..=1.0
    pub share: f64,
}

/// Cost breakdown handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Devices in registry order
    pub devices: Vec<CostedDevice>,
    /// Sum of all monthly costs
    pub total_cost: f64,
    /// Unit price (per kWh) the costs were computed with
    pub unit_price: f64,
}

impl CostReport {
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Per-device share of the total, in registry order
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        self.devices
            .iter()
            .map(|costed| ChartSlice {
                name: costed.device.name.clone(),
                cost: costed.monthly_cost,
                share: if self.total_cost > 0.0 {
                    costed.monthly_cost / self.total_cost
                } else {
                    0.0
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appliance_keys_round_trip() {
        for appliance in ApplianceType::ALL {
            assert_eq!(appliance.key().parse::<ApplianceType>().unwrap(), appliance);
        }
        assert_eq!("Washing-Machine".parse::<ApplianceType>().unwrap(), ApplianceType::WashingMachine);
        assert!(matches!("toaster".parse::<ApplianceType>(), Err(Error::UnknownAppliance(_))));
    }

    #[test]
    fn test_label_field_spellings() {
        assert_eq!("yearlyKwh".parse::<LabelField>().unwrap(), LabelField::YearlyKwh);
        assert_eq!("yearly_kwh".parse::<LabelField>().unwrap(), LabelField::YearlyKwh);
        assert_eq!("kwhPer1000h".parse::<LabelField>().unwrap(), LabelField::KwhPer1000h);
        assert_eq!("cyclesPer100".parse::<LabelField>().unwrap(), LabelField::CyclesPer100);
        assert!("volts".parse::<LabelField>().is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 12.5 "), Some(12.5));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive("inf"), None);
        assert_eq!(parse_positive("NaN"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn test_parse_assignment() {
        let mut input = RawLabelInput::new();
        assert_eq!(input.parse_assignment("dailyHours = 6").unwrap(), LabelField::DailyHours);
        assert_eq!(input.number(LabelField::DailyHours), Some(6.0));
        assert!(input.parse_assignment("no-equals-sign").is_err());
        assert!(input.parse_assignment("volts=230").is_err());
    }

    #[test]
    fn test_device_serializes_with_short_keys() {
        let device = NormalizedDevice::new("TV", 60.0, 4.0);
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "TV", "watt": 60.0, "hours": 4.0 }));
    }

    #[test]
    fn test_chart_slices_with_zero_total() {
        let report = CostReport {
            devices: vec![CostedDevice {
                device: NormalizedDevice::new("Idle", 0.0, 0.0),
                monthly_cost: 0.0,
            }],
            total_cost: 0.0,
            unit_price: 2.59,
        };
        assert_eq!(report.chart_slices()[0].share, 0.0);
    }
}
