// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shape checks for ISO 639 language codes and ISO 3166 country codes.
//!
//! These do not consult any registry; they only catch dataset keys that
//! cannot be codes at all (typos such as `"englsh"` or `"Name"`).
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

fn lowercase_letters(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// Two lowercase ASCII letters, e.g. `en`.
///
/// # Examples
/// ```
/// assert!(country_lingo::i18n::is_iso639_1("ja"));
/// assert!(!country_lingo::i18n::is_iso639_1("EN"));
/// ```
pub fn is_iso639_1(code: &str) -> bool {
    lowercase_letters(code, 2)
}

/// Three lowercase ASCII letters, e.g. `fil`.
pub fn is_iso639_3(code: &str) -> bool {
    lowercase_letters(code, 3)
}

/// A bare ISO 639 code, optionally followed by a region subtag (`pt-br`, `zh-tw`).
pub fn is_language_code(code: &str) -> bool {
    let (language, region) = match code.split_once('-') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    };
    let language_ok = is_iso639_1(language) || is_iso639_3(language);
    let region_ok = region.map_or(true, |r| {
        r.len() == 2 && r.bytes().all(|b| b.is_ascii_alphabetic())
    });
    language_ok && region_ok
}

/// ISO 3166-1 alpha-3 shape, in any ASCII case.
pub fn is_alpha3(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_codes_accepted() {
        assert!(is_language_code("en"));
        assert!(is_language_code("zh"));
        assert!(is_language_code("fil"));
    }

    #[test]
    fn region_subtags_accepted() {
        assert!(is_language_code("pt-br"));
        assert!(is_language_code("zh-TW"));
        assert!(!is_language_code("pt-bra"));
    }

    #[test]
    fn non_codes_rejected() {
        assert!(!is_language_code(""));
        assert!(!is_language_code("EN"));
        assert!(!is_language_code("english"));
        assert!(!is_language_code("e1"));
    }

    #[test]
    fn alpha3_shape() {
        assert!(is_alpha3("can"));
        assert!(is_alpha3("CAN"));
        assert!(!is_alpha3("ca"));
        assert!(!is_alpha3("c4n"));
    }
}
