//! Localization of strength labels and feedback
//!
//! Language tables are embedded at compile time. Lookups fall back to English,
//! then to the key itself.

use std::collections::HashMap;

use crate::DEFAULT_LANGUAGE;
use crate::error::LocalizationError;
use crate::strength::{Feedback, StrengthTier};

/// Supported languages as (code, local name, English name)
pub const SUPPORTED_LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("zh", "简体中文", "Simplified Chinese"),
];

const LANG_EN: &str = include_str!("languages/en.json");
const LANG_ZH: &str = include_str!("languages/zh.json");

fn get_language_json(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(LANG_EN),
        "zh" => Some(LANG_ZH),
        _ => None,
    }
}

/// Check if a language code is supported
pub fn is_language_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _, _)| *code == lang)
}

/// Translation tables for the current language plus English fallback
#[derive(Debug, Clone)]
pub struct Translations {
    current_lang: String,
    strings: HashMap<String, String>,
    english: HashMap<String, String>,
}

impl Translations {
    /// Create a translator set to English
    pub fn new() -> Result<Self, LocalizationError> {
        let english = Self::load_language(DEFAULT_LANGUAGE)?;
        Ok(Self {
            current_lang: DEFAULT_LANGUAGE.to_string(),
            strings: english.clone(),
            english,
        })
    }

    /// Create a translator set to `lang`
    pub fn with_language(lang: &str) -> Result<Self, LocalizationError> {
        let mut translations = Self::new()?;
        translations.set_language(lang)?;
        Ok(translations)
    }

    fn load_language(lang: &str) -> Result<HashMap<String, String>, LocalizationError> {
        let json = get_language_json(lang)
            .ok_or_else(|| LocalizationError::UnsupportedLanguage(lang.to_string()))?;

        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);

        serde_json::from_str(json).map_err(|source| LocalizationError::Parse {
            lang: lang.to_string(),
            source,
        })
    }

    /// Switch the current language
    pub fn set_language(&mut self, lang: &str) -> Result<(), LocalizationError> {
        if !is_language_supported(lang) {
            return Err(LocalizationError::UnsupportedLanguage(lang.to_string()));
        }

        self.strings = Self::load_language(lang)?;
        self.current_lang = lang.to_string();
        Ok(())
    }

    /// Translated string for `key`, or the key itself if unknown
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.get_opt(key).unwrap_or(key)
    }

    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .or_else(|| self.english.get(key))
            .map(|s| s.as_str())
    }

    /// Display label of a strength tier
    pub fn tier_label(&self, tier: StrengthTier) -> &str {
        self.get(tier.label_key())
    }

    /// Display text of one feedback entry
    pub fn feedback(&self, item: Feedback) -> &str {
        self.get(item.message_key())
    }

    pub fn get_language(&self) -> &str {
        &self.current_lang
    }

    /// Current language name in its own language
    pub fn get_language_name(&self) -> &str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _, _)| *code == self.current_lang)
            .map(|(_, local, _)| *local)
            .unwrap_or("Unknown")
    }

    pub fn available_languages() -> &'static [(&'static str, &'static str, &'static str)] {
        SUPPORTED_LANGUAGES
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.strings.keys()
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new().expect("Failed to load default translations")
    }
}
