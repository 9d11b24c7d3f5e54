//! Turkish translations / T\u{00FC}rk\u{00E7}e \u{00E7}eviriler

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Enerji Master".into());
    t.insert("app.subtitle".into(), "Ev Enerji Maliyeti Hesaplay\u{0131}c\u{0131}".into());

    // Appliances
    t.insert("appliance.fridge".into(), "Buzdolab\u{0131}".into());
    t.insert("appliance.washing".into(), "\u{00C7}ama\u{015F}\u{0131}r Makinesi".into());
    t.insert("appliance.dishwasher".into(), "Bula\u{015F}\u{0131}k Makinesi".into());
    t.insert("appliance.ac".into(), "Klima".into());
    t.insert("appliance.tv".into(), "TV".into());
    t.insert("appliance.light".into(), "Ayd\u{0131}nlatma (Ampul)".into());
    t.insert("appliance.other".into(), "F\u{0131}r\u{0131}n/\u{00DC}t\u{00FC}/S\u{00FC}p\u{00FC}rge".into());

    // Form fields
    t.insert("field.yearly_kwh.label".into(), "Etiketteki Y\u{0131}ll\u{0131}k T\u{00FC}ketim (kWh/annum)".into());
    t.insert("field.yearly_kwh.hint".into(), "Buzdolab\u{0131} etiketindeki y\u{0131}ll\u{0131}k toplam kWh de\u{011F}eri".into());
    t.insert("field.cycles_per_100.label".into(), "100 D\u{00F6}ng\u{00FC} Ba\u{015F}\u{0131}na T\u{00FC}ketim (kWh)".into());
    t.insert("field.cycles_per_100.hint".into(), "Etiketlerdeki '100' simgesinin yan\u{0131}ndaki de\u{011F}er".into());
    t.insert("field.weekly_uses.label".into(), "Haftal\u{0131}k Kullan\u{0131}m Say\u{0131}s\u{0131}".into());
    t.insert("field.weekly_uses.hint".into(), "Makinenin haftada ka\u{00E7} kez \u{00E7}al\u{0131}\u{015F}t\u{0131}r\u{0131}ld\u{0131}\u{011F}\u{0131}".into());
    t.insert("field.yearly_seasonal_kwh.label".into(), "Etiketteki Y\u{0131}ll\u{0131}k Is\u{0131}tma/So\u{011F}utma T\u{00FC}ketimi (kWh/annum)".into());
    t.insert("field.yearly_seasonal_kwh.hint".into(), "Klima etiketindeki mevsimsel kullan\u{0131}m de\u{011F}eri".into());
    t.insert("field.kwh_per_1000h.label".into(), "1000 Saatlik T\u{00FC}ketim (kWh)".into());
    t.insert("field.kwh_per_1000h.hint".into(), "TV etiketindeki '1000h' kutucuktaki de\u{011F}er".into());
    t.insert("field.daily_hours.label".into(), "G\u{00FC}nl\u{00FC}k Kullan\u{0131}m S\u{00FC}resi (Saat)".into());
    t.insert("field.daily_hours.hint".into(), "Cihaz\u{0131}n g\u{00FC}nde ortalama ka\u{00E7} saat a\u{00E7}\u{0131}k kald\u{0131}\u{011F}\u{0131}".into());
    t.insert("field.watt_per_bulb.label".into(), "Ampul\u{00FC}n G\u{00FC}c\u{00FC} (Watt)".into());
    t.insert("field.watt_per_bulb.hint".into(), "Ampul \u{00FC}zerindeki 5W, 9W, 12W gibi de\u{011F}er".into());
    t.insert("field.bulb_count.label".into(), "Ayn\u{0131} Tip Ampul Adedi".into());
    t.insert("field.bulb_count.hint".into(), "Ayn\u{0131} g\u{00FC}\u{00E7}teki ampullerin say\u{0131}s\u{0131}".into());
    t.insert("field.watt.label".into(), "Cihaz\u{0131}n G\u{00FC}c\u{00FC} (Watt)".into());
    t.insert("field.watt.hint".into(), "Cihaz\u{0131}n arkas\u{0131}ndaki metal plaka veya kutudaki W de\u{011F}eri".into());

    // Notices
    t.insert("notice.added".into(), "\u{2705} {name} hesaplamaya dahil edildi!".into());
    t.insert("notice.deleted".into(), "\u{1F5D1}\u{FE0F} {name} silindi!".into());
    t.insert("notice.price_saved".into(), "Birim fiyat {price} {symbol}/kWh olarak kaydedildi".into());
    t.insert("notice.theme_saved".into(), "Tema: {theme}".into());

    // Report
    t.insert("report.devices".into(), "Cihazlar\u{0131}m".into());
    t.insert("report.total".into(), "Ayl\u{0131}k Tahmini Fatura".into());
    t.insert("report.chart".into(), "Maliyet Da\u{011F}\u{0131}l\u{0131}m\u{0131}".into());
    t.insert("report.empty".into(), "Hen\u{00FC}z cihaz eklenmedi.".into());
    t.insert("report.daily_hours".into(), "G\u{00FC}nl\u{00FC}k {hours} Saat".into());
    t.insert("report.unit_price".into(), "Birim Fiyat".into());

    // Appliance type listing
    t.insert("types.title".into(), "Cihaz Tipleri".into());
    t.insert("types.default".into(), "varsay\u{0131}lan".into());

    // Themes
    t.insert("theme.light".into(), "A\u{00E7}\u{0131}k".into());
    t.insert("theme.dark".into(), "Koyu".into());

    // Units
    t.insert("unit.per_kwh".into(), "/kWh".into());
    t.insert("unit.per_month".into(), "/ay".into());

    t
}
