// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for country-lingo

use crate::i18n::CodeConverter;
use crate::translator::Translator;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Record fields that identify a country rather than name it.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "alpha2", "alpha3"];

/// Text shown in place of a translation the dataset does not hold.
pub const NOT_FOUND: &str = "null";

/// One country from the dataset and every stored translation of its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub id: u64,
    pub alpha2: String,
    pub alpha3: String,
    /// Language code to translated name.
    #[serde(flatten)]
    pub names: BTreeMap<String, String>,
}

impl CountryRecord {
    pub fn new(id: u64, alpha2: impl Into<String>, alpha3: impl Into<String>) -> Self {
        Self {
            id,
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            names: BTreeMap::new(),
        }
    }

    /// Builder-style helper used by fixtures and hand-built indexes.
    pub fn with_name(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(language.into(), name.into());
        self
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}

/// A resolved user query: what was asked, which codes it mapped to, and the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub country: String,
    pub country_code: String,
    pub language: String,
    pub language_code: String,
    pub translation: Option<String>,
}

impl Lookup {
    /// Maps both display names to codes (identity on a miss) and asks the translator.
    pub fn resolve<T: Translator + ?Sized>(
        translator: &T,
        countries: &CodeConverter,
        languages: &CodeConverter,
        country: &str,
        language: &str,
    ) -> Self {
        let country_code = countries.from_name(country).to_string();
        let language_code = languages.from_name(language).to_string();
        let translation = translator
            .translate(&country_code, &language_code)
            .map(str::to_string);

        log::debug!(
            "lookup {}/{} -> {}",
            country_code,
            language_code,
            translation.as_deref().unwrap_or(NOT_FOUND)
        );

        Self {
            country: country.to_string(),
            country_code,
            language: language.to_string(),
            language_code,
            translation,
        }
    }

    pub fn is_found(&self) -> bool {
        self.translation.is_some()
    }

    pub fn rendered_translation(&self) -> &str {
        self.translation.as_deref().unwrap_or(NOT_FOUND)
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} is {}",
            self.country,
            self.language,
            self.rendered_translation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_languages_come_from_names() {
        let record = CountryRecord::new(124, "ca", "can")
            .with_name("fr", "Canada")
            .with_name("de", "Kanada");
        let languages: Vec<&str> = record.languages().collect();
        assert_eq!(languages, vec!["de", "fr"]);
        assert_eq!(record.name_in("de"), Some("Kanada"));
        assert_eq!(record.name_in("ja"), None);
    }

    #[test]
    fn record_serializes_flat() {
        let record = CountryRecord::new(1, "ca", "can").with_name("en", "Canada");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["alpha3"], "can");
        assert_eq!(json["en"], "Canada");
    }

    #[test]
    fn missing_translation_displays_sentinel() {
        let lookup = Lookup {
            country: "Canada".to_string(),
            country_code: "can".to_string(),
            language: "Klingon".to_string(),
            language_code: "Klingon".to_string(),
            translation: None,
        };
        assert!(!lookup.is_found());
        assert_eq!(lookup.to_string(), "Canada in Klingon is null");
    }
}
