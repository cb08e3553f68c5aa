// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-lingo: look up a country's name in another language.
//!
//! The crate loads a JSON dataset of countries, each carrying its name in a
//! number of languages, and two reference tables that map country and
//! language codes to display names. On top of that sit an interactive
//! picker and a handful of one-shot commands.
//!
//! PIECES:
//! 1. **Translator**: the dataset, indexed by ISO 3166 alpha-3 code.
//! 2. **i18n**: one code/name converter type, used for both tables.
//! 3. **Session**: the prompt loop, written against any `BufRead`/`Write`.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod logging;
pub mod resource;
pub mod session;
pub mod translator;
pub mod types;
