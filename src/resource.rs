// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data sources for the dataset and the code tables.
//!
//! Every resource is either the copy compiled into the binary from `data/`
//! or a file on disk chosen through the config file or the command line.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Files shipped inside the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundled {
    Dataset,
    CountryCodes,
    LanguageCodes,
}

impl Bundled {
    pub fn file_name(self) -> &'static str {
        match self {
            Bundled::Dataset => "sample.json",
            Bundled::CountryCodes => "country-codes.txt",
            Bundled::LanguageCodes => "language-codes.txt",
        }
    }

    pub fn contents(self) -> &'static str {
        match self {
            Bundled::Dataset => include_str!("../data/sample.json"),
            Bundled::CountryCodes => include_str!("../data/country-codes.txt"),
            Bundled::LanguageCodes => include_str!("../data/language-codes.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Bundled(Bundled),
    File(PathBuf),
}

impl Resource {
    /// Reads the whole resource. Missing or unreadable files are fatal to the caller.
    pub fn read(&self) -> Result<Cow<'static, str>> {
        match self {
            Resource::Bundled(bundled) => Ok(Cow::Borrowed(bundled.contents())),
            Resource::File(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Ok(Cow::Owned(text))
            }
        }
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, Resource::Bundled(_))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Bundled(bundled) => write!(f, "bundled:{}", bundled.file_name()),
            Resource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resources_are_not_empty() {
        for bundled in [Bundled::Dataset, Bundled::CountryCodes, Bundled::LanguageCodes] {
            let text = Resource::Bundled(bundled).read().unwrap();
            assert!(!text.trim().is_empty(), "{} is empty", bundled.file_name());
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let resource = Resource::File(PathBuf::from("/nonexistent/country-lingo/sample.json"));
        let err = resource.read().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/country-lingo/sample.json"));
    }

    #[test]
    fn display_marks_bundled() {
        assert_eq!(
            Resource::Bundled(Bundled::Dataset).to_string(),
            "bundled:sample.json"
        );
    }
}
