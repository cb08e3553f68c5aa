// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country and language code handling.
//!
//! Display names shown to the user come from two reference tables, one for
//! countries (ISO 3166-1 alpha-3) and one for languages (ISO 639). Both are
//! served by the same [`CodeConverter`], parameterised by a [`TableLayout`].
//!
//! Conversions fail open: an unmapped code or name is handed back unchanged,
//! so a typo typed by the user flows through as-is and simply finds no
//! translation.

mod converter;
mod iso;

pub use converter::{CodeConverter, TableLayout};
pub use iso::{is_alpha3, is_iso639_1, is_iso639_3, is_language_code};
