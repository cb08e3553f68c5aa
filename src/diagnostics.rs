// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check of the configured resources
//!
//! Loads each resource on its own so every broken one is reported, then
//! cross-checks the dataset against the code tables. The loader itself never
//! does this cross-check: a dataset code missing from the country table just
//! displays as the raw code.

use crate::config::Config;
use crate::i18n::{is_alpha3, is_language_code, CodeConverter};
use crate::translator::JsonTranslator;
use crate::types::CountryRecord;
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn check(self, label: &'static str, detail: impl Into<String>) -> Diagnostic {
        Diagnostic {
            label,
            level: self,
            detail: detail.into(),
        }
    }

    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  [{}] {:22} {}", self.level.tag(), self.label, self.detail)
    }
}

pub fn run_self_diagnostics(config: &Config) -> Result<()> {
    println!("{}", "country-lingo self-diagnostics".bold());
    println!();

    let checks = collect(config);
    for entry in &checks {
        println!("{}", entry);
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Runs every check without printing.
pub fn collect(config: &Config) -> Vec<Diagnostic> {
    let mut checks = vec![Level::Ok.check(
        "version",
        format!("country-lingo {}", env!("CARGO_PKG_VERSION")),
    )];

    let translator = loaded(
        &mut checks,
        "dataset",
        JsonTranslator::load(&config.dataset),
        |translator| {
            format!(
                "{} countries from {}",
                translator.index().len(),
                translator.source()
            )
        },
    );
    let countries = loaded(
        &mut checks,
        "country codes",
        CodeConverter::country(&config.country_codes),
        |table| format!("{} entries from {}", table.len(), config.country_codes),
    );
    let languages = loaded(
        &mut checks,
        "language codes",
        CodeConverter::language(&config.language_codes),
        |table| format!("{} entries from {}", table.len(), config.language_codes),
    );

    if let Some(translator) = &translator {
        let records: Vec<&CountryRecord> = translator.index().records().collect();
        checks.extend(check_dataset_shape(&records));

        if let Some(countries) = &countries {
            let unresolved = records
                .iter()
                .map(|record| record.alpha3.clone())
                .filter(|code| countries.name_for(code).is_none());
            checks.push(resolution("country names", unresolved));
        }
        if let Some(languages) = &languages {
            let unresolved = dataset_languages(&records)
                .into_iter()
                .filter(|code| languages.name_for(code).is_none());
            checks.push(resolution("language names", unresolved));
        }
    }

    checks
}

/// Records an OK or ERR line for one resource load and hands back what loaded.
fn loaded<T>(
    checks: &mut Vec<Diagnostic>,
    label: &'static str,
    result: Result<T>,
    describe: impl FnOnce(&T) -> String,
) -> Option<T> {
    match result {
        Ok(value) => {
            checks.push(Level::Ok.check(label, describe(&value)));
            Some(value)
        }
        Err(err) => {
            checks.push(Level::Error.check(label, format!("{:#}", err)));
            None
        }
    }
}

fn check_dataset_shape(records: &[&CountryRecord]) -> Vec<Diagnostic> {
    let odd_codes: Vec<&str> = records
        .iter()
        .map(|record| record.alpha3.as_str())
        .filter(|code| !is_alpha3(code))
        .collect();
    let empty: Vec<&str> = records
        .iter()
        .filter(|record| record.names.is_empty())
        .map(|record| record.alpha3.as_str())
        .collect();
    let odd_keys: Vec<String> = dataset_languages(records)
        .into_iter()
        .filter(|key| !is_language_code(key))
        .collect();

    let mut checks = Vec::new();
    if !odd_codes.is_empty() {
        checks.push(Level::Warn.check(
            "country code shape",
            format!("not alpha-3: {}", odd_codes.join(", ")),
        ));
    }
    if !empty.is_empty() {
        checks.push(Level::Warn.check(
            "translations",
            format!("no translations stored for: {}", empty.join(", ")),
        ));
    }
    if !odd_keys.is_empty() {
        checks.push(Level::Warn.check(
            "language key shape",
            format!("not ISO 639 codes: {}", odd_keys.join(", ")),
        ));
    }
    checks
}

/// OK when every dataset code has a display name, WARN listing the ones that don't.
fn resolution(label: &'static str, unresolved: impl Iterator<Item = String>) -> Diagnostic {
    let unresolved: Vec<String> = unresolved.collect();
    if unresolved.is_empty() {
        Level::Ok.check(label, "every dataset code has a display name")
    } else {
        log::warn!("{}: no display name for {:?}", label, unresolved);
        Level::Warn.check(label, format!("shown as raw codes: {}", unresolved.join(", ")))
    }
}

fn dataset_languages(records: &[&CountryRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| record.languages().map(str::to_string))
        .collect()
}
