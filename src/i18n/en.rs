//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Enerji Master".into());
    t.insert("app.subtitle".into(), "Household Energy Cost Estimator".into());

    // Appliances
    t.insert("appliance.fridge".into(), "Refrigerator".into());
    t.insert("appliance.washing".into(), "Washing Machine".into());
    t.insert("appliance.dishwasher".into(), "Dishwasher".into());
    t.insert("appliance.ac".into(), "Air Conditioner".into());
    t.insert("appliance.tv".into(), "TV".into());
    t.insert("appliance.light".into(), "Lighting (Bulb)".into());
    t.insert("appliance.other".into(), "Oven/Iron/Vacuum".into());

    // Form fields
    t.insert("field.yearly_kwh.label".into(), "Yearly Consumption on Label (kWh/annum)".into());
    t.insert("field.yearly_kwh.hint".into(), "Total yearly kWh printed on the refrigerator label".into());
    t.insert("field.cycles_per_100.label".into(), "Consumption per 100 Cycles (kWh)".into());
    t.insert("field.cycles_per_100.hint".into(), "Value next to the '100' symbol on the label".into());
    t.insert("field.weekly_uses.label".into(), "Uses per Week".into());
    t.insert("field.weekly_uses.hint".into(), "How many times a week the machine runs".into());
    t.insert("field.yearly_seasonal_kwh.label".into(), "Yearly Heating/Cooling Consumption on Label (kWh/annum)".into());
    t.insert("field.yearly_seasonal_kwh.hint".into(), "Seasonal usage value on the air conditioner label".into());
    t.insert("field.kwh_per_1000h.label".into(), "Consumption per 1000 Hours (kWh)".into());
    t.insert("field.kwh_per_1000h.hint".into(), "Value in the '1000h' box on the TV label".into());
    t.insert("field.daily_hours.label".into(), "Daily Usage (Hours)".into());
    t.insert("field.daily_hours.hint".into(), "Average hours per day the device is on".into());
    t.insert("field.watt_per_bulb.label".into(), "Bulb Power (Watt)".into());
    t.insert("field.watt_per_bulb.hint".into(), "Value such as 5W, 9W, 12W printed on the bulb".into());
    t.insert("field.bulb_count.label".into(), "Number of Identical Bulbs".into());
    t.insert("field.bulb_count.hint".into(), "How many bulbs of this power are installed".into());
    t.insert("field.watt.label".into(), "Device Power (Watt)".into());
    t.insert("field.watt.hint".into(), "W value on the rating plate or the box".into());

    // Notices
    t.insert("notice.added".into(), "\u{2705} {name} added to the calculation!".into());
    t.insert("notice.deleted".into(), "\u{1F5D1}\u{FE0F} {name} removed!".into());
    t.insert("notice.price_saved".into(), "Unit price saved as {price} {symbol}/kWh".into());
    t.insert("notice.theme_saved".into(), "Theme: {theme}".into());

    // Report
    t.insert("report.devices".into(), "My Devices".into());
    t.insert("report.total".into(), "Estimated Monthly Bill".into());
    t.insert("report.chart".into(), "Cost Breakdown".into());
    t.insert("report.empty".into(), "No devices added yet.".into());
    t.insert("report.daily_hours".into(), "{hours} h/day".into());
    t.insert("report.unit_price".into(), "Unit Price".into());

    // Appliance type listing
    t.insert("types.title".into(), "Appliance Types".into());
    t.insert("types.default".into(), "default".into());

    // Themes
    t.insert("theme.light".into(), "Light".into());
    t.insert("theme.dark".into(), "Dark".into());

    // Units
    t.insert("unit.per_kwh".into(), "/kWh".into());
    t.insert("unit.per_month".into(), "/month".into());

    t
}
