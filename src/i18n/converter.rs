// SPDX-License-Identifier: PMPL-1.0-or-later

//! Code <-> display name conversion over delimited reference tables.
//!
//! One [`CodeConverter`] type serves both countries and languages; a
//! [`TableLayout`] says which columns of the table hold the code and the name.
//!
//! ## Table format
//!
//! Tab-separated UTF-8 text. The first line is a header and is skipped, as
//! are blank lines. Codes are stored lowercased so code lookups ignore ASCII
//! case; names are matched exactly. Codes and names must both be unique, so
//! every row converts back to itself in either direction.
//!
//! ```text
//! Country	Alpha-2 code	Alpha-3 code	Numeric
//! Canada	CA	CAN	124
//! ```

use crate::resource::{Bundled, Resource};
use anyhow::{bail, Context, Result};
use std::collections::HashMap;

/// Column positions of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub label: &'static str,
    pub name_column: usize,
    pub code_column: usize,
}

impl TableLayout {
    /// `Country, Alpha-2 code, Alpha-3 code, Numeric`: keyed by alpha-3.
    pub const COUNTRY: TableLayout = TableLayout {
        label: "country",
        name_column: 0,
        code_column: 2,
    };

    /// `ISO Language Names, Code`.
    pub const LANGUAGE: TableLayout = TableLayout {
        label: "language",
        name_column: 0,
        code_column: 1,
    };

    fn min_columns(&self) -> usize {
        self.name_column.max(self.code_column) + 1
    }
}

#[derive(Debug, Clone)]
pub struct CodeConverter {
    layout: TableLayout,
    by_code: HashMap<String, String>,
    by_name: HashMap<String, String>,
    codes: Vec<String>,
}

impl CodeConverter {
    pub fn country(resource: &Resource) -> Result<Self> {
        Self::load(TableLayout::COUNTRY, resource)
    }

    pub fn language(resource: &Resource) -> Result<Self> {
        Self::load(TableLayout::LANGUAGE, resource)
    }

    /// Country table compiled into the binary.
    pub fn bundled_countries() -> Result<Self> {
        Self::country(&Resource::Bundled(Bundled::CountryCodes))
    }

    /// Language table compiled into the binary.
    pub fn bundled_languages() -> Result<Self> {
        Self::language(&Resource::Bundled(Bundled::LanguageCodes))
    }

    pub fn load(layout: TableLayout, resource: &Resource) -> Result<Self> {
        let text = resource.read()?;
        let converter = Self::parse(layout, &resource.to_string(), &text)?;
        log::info!(
            "loaded {} {} codes from {}",
            converter.len(),
            layout.label,
            resource
        );
        Ok(converter)
    }

    pub fn parse(layout: TableLayout, source: &str, text: &str) -> Result<Self> {
        let mut converter = Self {
            layout,
            by_code: HashMap::new(),
            by_name: HashMap::new(),
            codes: Vec::new(),
        };

        for (number, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            converter
                .insert_row(line)
                .with_context(|| format!("{} table {}, line {}", layout.label, source, number + 1))?;
        }

        Ok(converter)
    }

    fn insert_row(&mut self, line: &str) -> Result<()> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < self.layout.min_columns() {
            bail!(
                "expected at least {} tab-separated columns, found {}",
                self.layout.min_columns(),
                columns.len()
            );
        }

        let code = columns[self.layout.code_column].trim().to_ascii_lowercase();
        let name = columns[self.layout.name_column].trim().to_string();
        if code.is_empty() || name.is_empty() {
            bail!("empty code or name");
        }
        if self.by_code.contains_key(&code) {
            bail!("duplicate code '{}'", code);
        }
        if self.by_name.contains_key(&name) {
            bail!("duplicate name '{}'", name);
        }

        self.by_name.insert(name.clone(), code.clone());
        self.by_code.insert(code.clone(), name);
        self.codes.push(code);
        Ok(())
    }

    /// Display name for `code`, or `code` itself when the table has no entry.
    pub fn from_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.name_for(code).unwrap_or(code)
    }

    /// Code for `name`, or `name` itself when the table has no entry.
    pub fn from_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.code_for(name).unwrap_or(name)
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    /// Codes in table order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
