// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Settings come from an optional YAML file and from command-line options,
//! the latter winning. Anything left unset falls back to the data bundled
//! into the binary.
//!
//! ```yaml
//! dataset: data/world.json
//! country_codes: data/country-codes.txt
//! language_codes: data/language-codes.txt
//! log_level: info
//! ```

use crate::logging;
use crate::resource::{Bundled, Resource};
use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a YAML config file. Relative paths are resolved against the
/// directory holding the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub dataset: Option<PathBuf>,
    pub country_codes: Option<PathBuf>,
    pub language_codes: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut file: ConfigFile = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in [
            &mut file.dataset,
            &mut file.country_codes,
            &mut file.language_codes,
            &mut file.log_file,
        ] {
            if let Some(value) = entry.as_mut() {
                if value.is_relative() {
                    *value = base.join(&*value);
                }
            }
        }
        Ok(file)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dataset: Option<PathBuf>,
    pub country_codes: Option<PathBuf>,
    pub language_codes: Option<PathBuf>,
    /// Count of `-v` flags; zero leaves the level to the file or the default.
    pub verbosity: u8,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset: Resource,
    pub country_codes: Resource,
    pub language_codes: Resource,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: Resource::Bundled(Bundled::Dataset),
            country_codes: Resource::Bundled(Bundled::CountryCodes),
            language_codes: Resource::Bundled(Bundled::LanguageCodes),
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Config::default();

        let log_level = if overrides.verbosity > 0 {
            logging::verbosity_filter(overrides.verbosity)
        } else if let Some(level) = &file.log_level {
            level
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("unknown log level '{}' in config", level))?
        } else {
            defaults.log_level
        };

        Ok(Self {
            dataset: pick(overrides.dataset, file.dataset, defaults.dataset),
            country_codes: pick(
                overrides.country_codes,
                file.country_codes,
                defaults.country_codes,
            ),
            language_codes: pick(
                overrides.language_codes,
                file.language_codes,
                defaults.language_codes,
            ),
            log_level,
            log_file: overrides.log_file.or(file.log_file),
        })
    }
}

fn pick(cli: Option<PathBuf>, file: Option<PathBuf>, fallback: Resource) -> Resource {
    cli.or(file).map(Resource::File).unwrap_or(fallback)
}
