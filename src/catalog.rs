// SPDX-License-Identifier: PMPL-1.0-or-later

//! Everything a lookup needs, loaded together from a [`Config`].

use crate::config::Config;
use crate::i18n::CodeConverter;
use crate::session::{self, SessionSummary};
use crate::translator::{JsonTranslator, Translator};
use crate::types::Lookup;
use anyhow::{Context, Result};
use colored::*;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub translator: JsonTranslator,
    pub countries: CodeConverter,
    pub languages: CodeConverter,
}

impl Catalog {
    /// Loads the dataset and both code tables. Fails on the first bad resource.
    pub fn load(config: &Config) -> Result<Self> {
        let translator = JsonTranslator::load(&config.dataset)
            .with_context(|| format!("loading dataset {}", config.dataset))?;
        let countries = CodeConverter::country(&config.country_codes)
            .with_context(|| format!("loading country codes {}", config.country_codes))?;
        let languages = CodeConverter::language(&config.language_codes)
            .with_context(|| format!("loading language codes {}", config.language_codes))?;

        Ok(Self {
            translator,
            countries,
            languages,
        })
    }

    /// One-shot lookup by display name; codes also work through the identity fallback.
    pub fn lookup(&self, country: &str, language: &str) -> Lookup {
        Lookup::resolve(
            &self.translator,
            &self.countries,
            &self.languages,
            country,
            language,
        )
    }

    /// `(code, display name)` for every country, in dataset order.
    pub fn country_listing(&self) -> Vec<(String, String)> {
        self.translator
            .countries()
            .into_iter()
            .map(|code| {
                let name = self.countries.from_code(&code).to_string();
                (code, name)
            })
            .collect()
    }

    /// `(code, display name)` for each language stored for `country`, sorted by name.
    pub fn language_listing(&self, country: &str) -> Vec<(String, String)> {
        let code = self.countries.from_name(country);
        let mut listing: Vec<(String, String)> = self
            .translator
            .country_languages(code)
            .into_iter()
            .map(|language| {
                let name = self.languages.from_code(&language).to_string();
                (language, name)
            })
            .collect();
        listing.sort_by(|a, b| a.1.cmp(&b.1));
        listing
    }

    pub fn run_interactive(&self) -> Result<SessionSummary> {
        session::run_program(&self.translator, &self.countries, &self.languages)
    }
}

/// One row of a `countries` or `languages` listing. The code is padded
/// before it is coloured so escape codes never count toward the width.
pub fn listing_line(code: &str, name: &str) -> String {
    format!("  {} {}", format!("{:6}", code).cyan(), name)
}
