// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country name translation lookups
//!
//! The interactive session and the one-shot commands are written against the
//! [`Translator`] trait, so any source of translations can be plugged in.

pub mod index;
pub mod json;

pub use index::TranslationIndex;
pub use json::JsonTranslator;

/// Read-only access to stored country name translations.
///
/// Misses are never errors: unknown countries have no languages and an
/// absent pair translates to `None`.
pub trait Translator {
    /// Country codes in dataset order. The vector is a fresh copy.
    fn countries(&self) -> Vec<String>;

    /// Language codes stored for `country`, empty when the country is unknown.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// The stored name of `country` in `language`.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn countries(&self) -> Vec<String> {
        (**self).countries()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        (**self).country_languages(country)
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        (**self).translate(country, language)
    }
}
