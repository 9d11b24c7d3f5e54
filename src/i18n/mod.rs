//! Internationalization module
//!
//! Provides translations for Turkish (tr) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod tr;

use std::collections::HashMap;

/// Internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the given language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "tr" => tr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "tr" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string with `{name}` placeholders replaced
    pub fn fill(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.get(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("tr", "T\u{00FC}rk\u{00E7}e"), ("en", "English")]
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment
fn detect_system_language() -> String {
    let lang_env = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "tr".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "tr_TR.UTF-8" -> "tr")
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split(['_', '.', '-'])
        .next()
        .unwrap_or("tr");

    // Anything other than English gets the native Turkish tables
    match lang_code {
        "en" => "en",
        _ => "tr",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApplianceType, LabelField};

    #[test]
    fn test_every_language_names_every_appliance() {
        for (lang, _) in I18n::available_languages() {
            let i18n = I18n::new(lang);
            for appliance in ApplianceType::ALL {
                let key = appliance.name_key();
                assert_ne!(i18n.get(&key), key, "{lang} misses {key}");
                for spec in appliance.fields() {
                    let label = spec.field.label_key();
                    assert_ne!(i18n.get(&label), label, "{lang} misses {label}");
                }
            }
        }
    }

    #[test]
    fn test_languages_share_keys() {
        let tr: std::collections::BTreeSet<_> = I18n::new("tr").translations.into_keys().collect();
        let en: std::collections::BTreeSet<_> = I18n::new("en").translations.into_keys().collect();
        assert_eq!(tr, en);
    }

    #[test]
    fn test_turkish_names_match_defaults() {
        let i18n = I18n::new("tr");
        for appliance in ApplianceType::ALL {
            assert_eq!(i18n.get(&appliance.name_key()), appliance.default_name());
        }
    }

    #[test]
    fn test_fill_and_fallback() {
        let i18n = I18n::new("tr");
        assert_eq!(
            i18n.fill("notice.deleted", &[("name", "TV")]),
            "\u{1F5D1}\u{FE0F} TV silindi!"
        );
        assert_eq!(i18n.get("missing.key"), "missing.key");
        assert_ne!(i18n.get(&LabelField::Watt.hint_key()), LabelField::Watt.hint_key());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(I18n::new("fr").current_language(), "en");
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("tr_TR.UTF-8"), "tr");
        assert_eq!(language_from_locale("en_US.UTF-8"), "en");
        assert_eq!(language_from_locale("en"), "en");
        assert_eq!(language_from_locale("C"), "tr");
    }
}
