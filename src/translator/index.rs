// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory index of country records keyed by alpha-3 code

use crate::translator::Translator;
use crate::types::CountryRecord;
use anyhow::{bail, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    records: HashMap<String, CountryRecord>,
    order: Vec<String>,
}

impl TranslationIndex {
    /// Indexes `records` in the order given. A repeated alpha-3 code is rejected.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        let mut index = Self::default();
        for record in records {
            if index.records.contains_key(&record.alpha3) {
                bail!("duplicate country code '{}'", record.alpha3);
            }
            index.order.push(record.alpha3.clone());
            index.records.insert(record.alpha3.clone(), record);
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.records.get(country)
    }

    /// Records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &CountryRecord> {
        self.order.iter().filter_map(|code| self.records.get(code))
    }
}

impl Translator for TranslationIndex {
    fn countries(&self) -> Vec<String> {
        self.order.clone()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        self.get(country)
            .map(|record| record.languages().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.get(country)?.name_in(language)
    }
}
