//! Device registry and the estimator that owns it
//!
//! The [`Estimator`] is the single owner of the device list. Presentation code
//! talks to it through `add_device`, `delete_device` and `recompute`, and
//! receives read-only [`CostReport`] snapshots through a [`Presenter`].
//! Every mutation is saved through to the [`DeviceStore`] before the presenter
//! is refreshed.

use crate::core::{ApplianceType, CostReport, NormalizedDevice, RawLabelInput};
use crate::db::DeviceStore;
use crate::i18n::I18n;
use crate::normalizer;
use crate::pricing::PricingEngine;

/// Ordered list of normalized devices. Entries are appended or removed,
/// never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceRegistry {
    devices: Vec<NormalizedDevice>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_devices(devices: Vec<NormalizedDevice>) -> Self {
        Self { devices }
    }

    pub fn append(&mut self, device: NormalizedDevice) {
        self.devices.push(device);
    }

    /// Remove the entry at `index`; `None` when out of range
    pub fn remove(&mut self, index: usize) -> Option<NormalizedDevice> {
        if index < self.devices.len() {
            Some(self.devices.remove(index))
        } else {
            None
        }
    }

    pub fn devices(&self) -> &[NormalizedDevice] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Receives display updates from the estimator
pub trait Presenter {
    /// Redraw everything from a fresh cost report
    fn refresh(&mut self, report: &CostReport);

    /// Show a short informational message
    fn notify(&mut self, message: &str);
}

/// Presenter that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn refresh(&mut self, _report: &CostReport) {}

    fn notify(&mut self, _message: &str) {}
}

/// Controller owning the device registry, its store and the pricing engine
pub struct Estimator<S: DeviceStore, P: Presenter> {
    registry: DeviceRegistry,
    store: S,
    presenter: P,
    pricing: PricingEngine,
    i18n: I18n,
}

impl<S: DeviceStore, P: Presenter> Estimator<S, P> {
    /// Load the registry from `store` and draw the initial report
    pub fn new(store: S, presenter: P, pricing: PricingEngine, i18n: I18n) -> Self {
        let devices = store.load().unwrap_or_else(|e| {
            log::warn!("Failed to load stored devices, starting empty: {}", e);
            Vec::new()
        });
        log::info!("Loaded {} stored device(s)", devices.len());

        let mut estimator = Self {
            registry: DeviceRegistry::from_devices(devices),
            store,
            presenter,
            pricing,
            i18n,
        };
        estimator.refresh();
        estimator
    }

    /// Normalize label inputs into a new device and append it
    pub fn add_device(&mut self, appliance: ApplianceType, inputs: &RawLabelInput) -> NormalizedDevice {
        let name = self.i18n.get(&appliance.name_key());
        let device = normalizer::normalize_with_name(appliance, inputs, name);
        log::debug!(
            "Adding {}: {:.2} W for {} h/day",
            appliance,
            device.equivalent_wattage,
            device.daily_usage_hours
        );

        self.registry.append(device.clone());
        self.persist();
        self.refresh();
        let message = self.i18n.fill("notice.added", &[("name", device.name.as_str())]);
        self.presenter.notify(&message);

        device
    }

    /// Remove the device at `index`. Out-of-range indices change nothing.
    pub fn delete_device(&mut self, index: usize) -> Option<NormalizedDevice> {
        let Some(removed) = self.registry.remove(index) else {
            log::debug!(
                "Ignoring delete at index {} ({} device(s) registered)",
                index,
                self.registry.len()
            );
            return None;
        };

        self.persist();
        self.refresh();
        let message = self.i18n.fill("notice.deleted", &[("name", removed.name.as_str())]);
        self.presenter.notify(&message);

        Some(removed)
    }

    /// Re-derive costs at `unit_price` without touching the registry
    pub fn recompute(&mut self, unit_price: f64) -> CostReport {
        self.pricing.set_unit_price(unit_price);
        let report = self.report();
        self.presenter.refresh(&report);
        report
    }

    /// Cost report for the current registry and price
    pub fn report(&self) -> CostReport {
        self.pricing.compute_costs(self.registry.devices())
    }

    pub fn devices(&self) -> &[NormalizedDevice] {
        self.registry.devices()
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn refresh(&mut self) {
        let report = self.report();
        self.presenter.refresh(&report);
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.registry.devices()) {
            log::error!("Failed to save devices: {}", e);
        }
    }
}
