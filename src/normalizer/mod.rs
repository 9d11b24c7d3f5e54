//! Energy label normalization
//!
//! Converts the heterogeneous figures printed on appliance energy labels
//! (yearly kWh, kWh per 100 cycles, kWh per 1000 hours, watt ratings) into a
//! common representation: a constant equivalent wattage sustained for a
//! number of hours per day. Run for a 30-day month, that pair reproduces the
//! monthly energy the label implies.
//!
//! Normalization is total. Every field the formula needs is resolved against
//! its default before it is used, so no caller-supplied zero ever reaches a
//! denominator. Inputs whose product leaves the finite range fall back to the
//! appliance's default figures.

use crate::core::{ApplianceType, LabelField, NormalizedDevice, RawLabelInput, DAYS_PER_MONTH};

const MONTHS_PER_YEAR: f64 = 12.0;
const HOURS_PER_DAY: f64 = 24.0;
const WEEKS_PER_MONTH: f64 = 4.3;

/// Normalize label inputs using the appliance's fixed display name
pub fn normalize(appliance: ApplianceType, inputs: &RawLabelInput) -> NormalizedDevice {
    normalize_with_name(appliance, inputs, appliance.default_name())
}

/// Normalize label inputs, naming the device `name`
pub fn normalize_with_name(
    appliance: ApplianceType,
    inputs: &RawLabelInput,
    name: impl Into<String>,
) -> NormalizedDevice {
    let value = |field: LabelField| resolve(appliance, inputs, field);

    let (watt, hours) = match appliance {
        ApplianceType::Refrigerator => {
            let monthly_kwh = value(LabelField::YearlyKwh) / MONTHS_PER_YEAR;
            ((monthly_kwh / DAYS_PER_MONTH) * 1000.0 / HOURS_PER_DAY, HOURS_PER_DAY)
        }
        ApplianceType::WashingMachine | ApplianceType::Dishwasher => {
            let monthly_kwh = (value(LabelField::CyclesPer100) / 100.0)
                * value(LabelField::WeeklyUses)
                * WEEKS_PER_MONTH;
            ((monthly_kwh / DAYS_PER_MONTH) * 1000.0, 1.0)
        }
        ApplianceType::AirConditioner => {
            let monthly_kwh = value(LabelField::YearlySeasonalKwh) / MONTHS_PER_YEAR;
            ((monthly_kwh / DAYS_PER_MONTH) * 1000.0 / HOURS_PER_DAY, HOURS_PER_DAY)
        }
        ApplianceType::Television => {
            let daily_hours = value(LabelField::DailyHours);
            let monthly_kwh = (value(LabelField::KwhPer1000h) / 1000.0) * daily_hours * DAYS_PER_MONTH;
            // daily_hours cancels out of the wattage; keep the literal form for
            // bit-identical results with the browser calculator.
            ((monthly_kwh / DAYS_PER_MONTH) * 1000.0 / daily_hours, daily_hours)
        }
        ApplianceType::LightBulb => (
            value(LabelField::WattPerBulb) * value(LabelField::BulbCount),
            value(LabelField::DailyHours),
        ),
        ApplianceType::Other => (value(LabelField::Watt), value(LabelField::DailyHours)),
    };

    if !(watt.is_finite() && hours.is_finite() && (watt * hours * DAYS_PER_MONTH).is_finite()) {
        log::warn!("{}: label figures out of range, using defaults", appliance);
        let (watt, hours) = default_figures(appliance);
        return NormalizedDevice::new(name, watt, hours);
    }

    NormalizedDevice::new(name, watt, hours)
}

/// Wattage and hours for an appliance with every label field at its default
fn default_figures(appliance: ApplianceType) -> (f64, f64) {
    let device = normalize_with_name(appliance, &RawLabelInput::new(), String::new());
    (device.equivalent_wattage, device.daily_usage_hours)
}

/// Usable input value for `field`, or the appliance's default for it
fn resolve(appliance: ApplianceType, inputs: &RawLabelInput, field: LabelField) -> f64 {
    let default = appliance.default_for(field).unwrap_or_else(|| {
        log::warn!("{} has no default for {}", appliance, field);
        1.0
    });

    match inputs.number(field) {
        Some(value) => value,
        None => {
            if let Some(raw) = inputs.raw(field) {
                log::debug!("{}: unusable {} {:?}, using {}", appliance, field, raw, default);
            }
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_refrigerator_defaults() {
        let device = normalize(ApplianceType::Refrigerator, &RawLabelInput::new());
        assert_eq!(device.name, "Buzdolab\u{0131}");
        assert_close(device.equivalent_wattage, 274.0 / 12.0 / 30.0 * 1000.0 / 24.0);
        assert!((device.equivalent_wattage - 31.71).abs() < 0.01);
        assert_eq!(device.daily_usage_hours, 24.0);
    }

    #[test]
    fn test_washing_and_dishwasher_defaults() {
        for appliance in [ApplianceType::WashingMachine, ApplianceType::Dishwasher] {
            let device = normalize(appliance, &RawLabelInput::new());
            // 0.5 kWh * 3 per week * 4.3 weeks = 6.45 kWh/month
            assert_close(device.equivalent_wattage, 215.0);
            assert_eq!(device.daily_usage_hours, 1.0);
        }
    }

    #[test]
    fn test_air_conditioner_defaults() {
        let device = normalize(ApplianceType::AirConditioner, &RawLabelInput::new());
        assert_close(device.equivalent_wattage, 150.0 / 12.0 / 30.0 * 1000.0 / 24.0);
        assert_eq!(device.daily_usage_hours, 24.0);
    }

    #[test]
    fn test_television_defaults() {
        let device = normalize(ApplianceType::Television, &RawLabelInput::new());
        assert_close(device.equivalent_wattage, 60.0);
        assert_eq!(device.daily_usage_hours, 4.0);
    }

    #[test]
    fn test_television_wattage_ignores_daily_hours() {
        let short = normalize(
            ApplianceType::Television,
            &RawLabelInput::new().with(LabelField::KwhPer1000h, 80).with(LabelField::DailyHours, 1),
        );
        let long = normalize(
            ApplianceType::Television,
            &RawLabelInput::new().with(LabelField::KwhPer1000h, 80).with(LabelField::DailyHours, 8),
        );
        assert_close(short.equivalent_wattage, 80.0);
        assert_close(long.equivalent_wattage, 80.0);
        assert_eq!(long.daily_usage_hours, 8.0);
    }

    #[test]
    fn test_light_bulb_and_other_defaults() {
        let bulb = normalize(ApplianceType::LightBulb, &RawLabelInput::new());
        assert_eq!((bulb.equivalent_wattage, bulb.daily_usage_hours), (9.0, 5.0));

        let other = normalize(ApplianceType::Other, &RawLabelInput::new());
        assert_eq!((other.equivalent_wattage, other.daily_usage_hours), (2000.0, 1.0));
    }

    #[test]
    fn test_light_bulb_multiplies_count() {
        let inputs = RawLabelInput::new()
            .with(LabelField::WattPerBulb, 9)
            .with(LabelField::BulbCount, 2)
            .with(LabelField::DailyHours, 5);
        let device = normalize(ApplianceType::LightBulb, &inputs);
        assert_eq!(device.equivalent_wattage, 18.0);
        assert_eq!(device.daily_usage_hours, 5.0);
    }

    #[test]
    fn test_invalid_fields_behave_as_omitted() {
        for bad in ["0", "-4", "abc", "", "NaN", "inf"] {
            for appliance in ApplianceType::ALL {
                let mut inputs = RawLabelInput::new();
                for spec in appliance.fields() {
                    inputs.set(spec.field, bad);
                }
                assert_eq!(
                    normalize(appliance, &inputs),
                    normalize(appliance, &RawLabelInput::new()),
                    "{appliance} with {bad:?}"
                );
            }
        }
    }

    #[test]
    fn test_zero_daily_hours_never_divides_by_zero() {
        let inputs = RawLabelInput::new().with(LabelField::DailyHours, 0);
        let device = normalize(ApplianceType::Television, &inputs);
        assert!(device.is_valid());
        assert_eq!(device.daily_usage_hours, 4.0);
    }

    #[test]
    fn test_huge_inputs_stay_finite() {
        for appliance in ApplianceType::ALL {
            let mut inputs = RawLabelInput::new();
            for spec in appliance.fields() {
                inputs.set(spec.field, "1e200");
            }
            let device = normalize(appliance, &inputs);
            assert!(device.is_valid(), "{appliance}: {device:?}");
            assert!(device.monthly_kwh().is_finite(), "{appliance}: {device:?}");
        }

        let bulbs = RawLabelInput::new()
            .with(LabelField::WattPerBulb, 1e200)
            .with(LabelField::BulbCount, 1e200);
        assert_eq!(
            normalize(ApplianceType::LightBulb, &bulbs),
            normalize(ApplianceType::LightBulb, &RawLabelInput::new())
        );
    }

    #[test]
    fn test_foreign_fields_are_ignored() {
        let inputs = RawLabelInput::new()
            .with(LabelField::Watt, 5000)
            .with(LabelField::DailyHours, 12);
        let device = normalize(ApplianceType::Refrigerator, &inputs);
        assert_eq!(device, normalize(ApplianceType::Refrigerator, &RawLabelInput::new()));
    }

    #[test]
    fn test_custom_name() {
        let device = normalize_with_name(ApplianceType::Other, &RawLabelInput::new(), "Oven");
        assert_eq!(device.name, "Oven");
    }
}
