//! Enerji Master - Demo CLI
//!
//! Walks every appliance type through the estimator with default label
//! figures, using an in-memory store, and prints the resulting breakdown.

use enerji_master_lib::core::{ApplianceType, LabelField, PricingConfig, RawLabelInput};
use enerji_master_lib::db::MemoryStore;
use enerji_master_lib::display::{render_report, Style};
use enerji_master_lib::i18n::I18n;
use enerji_master_lib::pricing::PricingEngine;
use enerji_master_lib::registry::{Estimator, NullPresenter};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Enerji Master - Demo CLI");
    println!("==============================================\n");

    // 1. Pricing
    println!("[1/4] Initializing Pricing Engine...");
    let pricing_config = PricingConfig::default();
    let pricing = PricingEngine::new(&pricing_config);
    println!(
        "      Rate: {:.2} {}/kWh\n",
        pricing.unit_price(),
        pricing.get_currency_symbol()
    );

    // 2. Estimator over an in-memory store
    println!("[2/4] Initializing Estimator (in-memory store)...");
    let i18n = I18n::new("tr");
    let mut estimator = Estimator::new(MemoryStore::new(), NullPresenter, pricing, i18n.clone());
    println!("      Language: {}\n", i18n.current_language());

    // 3. One device per appliance type with label defaults
    println!("[3/4] Adding one device per appliance type...");
    for appliance in ApplianceType::ALL {
        let device = estimator.add_device(appliance, &RawLabelInput::new());
        println!(
            "      {:<10} {:>8.2} W x {:>4} h/day",
            appliance.key(),
            device.equivalent_wattage,
            device.daily_usage_hours
        );
    }

    let bulbs = RawLabelInput::new()
        .with(LabelField::WattPerBulb, 9)
        .with(LabelField::BulbCount, 2)
        .with(LabelField::DailyHours, 5);
    let device = estimator.add_device(ApplianceType::LightBulb, &bulbs);
    println!(
        "      light x2   {:>8.2} W x {:>4} h/day\n",
        device.equivalent_wattage, device.daily_usage_hours
    );

    // 4. Report
    println!("[4/4] Monthly breakdown\n");
    let report = estimator.report();
    print!(
        "{}",
        render_report(&report, &i18n, &pricing_config.currency_symbol, &Style::plain())
    );

    println!("\n=== Price change ===\n");
    let report = estimator.recompute(3.0);
    println!("  Total at 3.00 TL/kWh: {:.2} TL", report.total_cost);

    println!("\n=== Store ===\n");
    println!("  Stored devices: {}", estimator.devices().len());
    if let Some(raw) = estimator.store().raw() {
        println!("  Serialized size: {} bytes", raw.len());
    }
    let past_end = estimator.devices().len();
    if estimator.delete_device(past_end).is_none() {
        println!("  Delete past the end: ignored");
    }

    println!("\n==============================================\n");
}
