// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translator backed by a JSON array of country records
//!
//! Each record carries `id`, `alpha2` and `alpha3`; every other field is a
//! language code whose value is the country's name in that language:
//!
//! ```json
//! [{ "id": 124, "alpha2": "ca", "alpha3": "can", "en": "Canada", "de": "Kanada" }]
//! ```

use crate::resource::Resource;
use crate::translator::{TranslationIndex, Translator};
use crate::types::{CountryRecord, RESERVED_FIELDS};
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct JsonTranslator {
    source: String,
    index: TranslationIndex,
}

impl JsonTranslator {
    /// Loads the whole dataset eagerly. Any read or parse failure is fatal.
    pub fn load(resource: &Resource) -> Result<Self> {
        let text = resource.read()?;
        Self::from_json(resource.to_string(), &text)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::load(&Resource::File(path.to_path_buf()))
    }

    pub fn from_json(source: impl Into<String>, text: &str) -> Result<Self> {
        let source = source.into();
        let value: Value =
            serde_json::from_str(text).with_context(|| format!("parsing dataset {}", source))?;
        let entries = value
            .as_array()
            .ok_or_else(|| anyhow!("dataset {} is not a JSON array of records", source))?;

        let records = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| parse_record(position, entry))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("reading records from {}", source))?;

        let index = TranslationIndex::from_records(records)
            .with_context(|| format!("indexing dataset {}", source))?;

        log::info!("loaded {} countries from {}", index.len(), source);
        Ok(Self { source, index })
    }

    /// Where the data came from, for log and diagnostic output.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn index(&self) -> &TranslationIndex {
        &self.index
    }
}

impl Translator for JsonTranslator {
    fn countries(&self) -> Vec<String> {
        self.index.countries()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        self.index.country_languages(country)
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.index.translate(country, language)
    }
}

fn parse_record(position: usize, entry: &Value) -> Result<CountryRecord> {
    let object = entry
        .as_object()
        .ok_or_else(|| anyhow!("record {} is not a JSON object", position))?;

    let id = object
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| anyhow!("record {} has no numeric `id`", position))?;
    let alpha2 = string_field(object, "alpha2", position)?;
    let alpha3 = string_field(object, "alpha3", position)?;

    let mut names = BTreeMap::new();
    for (key, value) in object {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let name = value.as_str().ok_or_else(|| {
            anyhow!(
                "record {} ({}): translation `{}` is not a string",
                position,
                alpha3,
                key
            )
        })?;
        names.insert(key.clone(), name.to_string());
    }

    Ok(CountryRecord {
        id,
        alpha2,
        alpha3,
        names,
    })
}

fn string_field(object: &Map<String, Value>, field: &str, position: usize) -> Result<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("record {} has no string `{}`", position, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Bundled;

    const CANADA: &str = r#"[{"id": 1, "alpha2": "ca", "alpha3": "can", "en": "Canada", "fr": "Canada"}]"#;

    #[test]
    fn single_record_fixture() {
        let translator = JsonTranslator::from_json("fixture", CANADA).unwrap();
        assert_eq!(translator.countries(), vec!["can"]);
        assert_eq!(translator.country_languages("can"), vec!["en", "fr"]);
        assert_eq!(translator.translate("can", "fr"), Some("Canada"));
        assert_eq!(translator.translate("can", "de"), None);
    }

    #[test]
    fn reserved_fields_are_not_languages() {
        let translator = JsonTranslator::from_json("fixture", CANADA).unwrap();
        let languages = translator.country_languages("can");
        for reserved in RESERVED_FIELDS {
            assert!(!languages.iter().any(|l| l == reserved));
        }
    }

    #[test]
    fn rejects_non_array() {
        let err = JsonTranslator::from_json("fixture", r#"{"alpha3": "can"}"#).unwrap_err();
        assert!(err.to_string().contains("not a JSON array"));
    }

    #[test]
    fn rejects_missing_alpha3() {
        let err = JsonTranslator::from_json("fixture", r#"[{"id": 1, "alpha2": "ca"}]"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("`alpha3`"));
    }

    #[test]
    fn rejects_missing_id_or_alpha2() {
        let err = JsonTranslator::from_json("fixture", r#"[{"alpha2": "ca", "alpha3": "can"}]"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("no numeric `id`"));

        let err = JsonTranslator::from_json("fixture", r#"[{"id": 1, "alpha3": "can"}]"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("no string `alpha2`"));
    }

    #[test]
    fn rejects_non_string_translation() {
        let err = JsonTranslator::from_json(
            "fixture",
            r#"[{"id": 1, "alpha2": "ca", "alpha3": "can", "en": 5}]"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("translation `en` is not a string"));
    }

    #[test]
    fn bundled_dataset_loads() {
        let translator = JsonTranslator::load(&Resource::Bundled(Bundled::Dataset)).unwrap();
        assert!(!translator.countries().is_empty());
        assert_eq!(translator.source(), "bundled:sample.json");
        assert_eq!(translator.translate("deu", "de"), Some("Deutschland"));
    }
}
