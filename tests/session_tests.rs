// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the interactive session, driven over in-memory input and output

use country_lingo::i18n::{CodeConverter, TableLayout};
use country_lingo::session::{
    Session, SessionSummary, CONTINUE_PROMPT, COUNTRY_PROMPT, LANGUAGE_PROMPT,
};
use country_lingo::translator::{JsonTranslator, Translator};

const DATASET: &str = r#"[
    {"id": 276, "alpha2": "de", "alpha3": "deu", "en": "Germany", "fr": "Allemagne", "de": "Deutschland"},
    {"id": 124, "alpha2": "ca", "alpha3": "can", "en": "Canada", "fr": "Canada"},
    {"id": 999, "alpha2": "zz", "alpha3": "zzz", "en": "Nowhere"}
]"#;

const COUNTRIES: &str = "Country\tAlpha-2 code\tAlpha-3 code\tNumeric\n\
                         Canada\tCA\tCAN\t124\n\
                         Germany\tDE\tDEU\t276\n";

const LANGUAGES: &str = "ISO Language Names\tCode\nEnglish\ten\nFrench\tfr\nGerman\tde\n";

struct Fixture {
    translator: JsonTranslator,
    countries: CodeConverter,
    languages: CodeConverter,
}

impl Fixture {
    fn new() -> Self {
        Self {
            translator: JsonTranslator::from_json("fixture", DATASET).expect("dataset"),
            countries: CodeConverter::parse(TableLayout::COUNTRY, "fixture", COUNTRIES)
                .expect("countries"),
            languages: CodeConverter::parse(TableLayout::LANGUAGE, "fixture", LANGUAGES)
                .expect("languages"),
        }
    }

    fn run<T: Translator + ?Sized>(&self, translator: &T, input: &str) -> (SessionSummary, String) {
        let mut session = Session::new(
            translator,
            &self.countries,
            &self.languages,
            input.as_bytes(),
            Vec::new(),
        );
        let summary = session.run().expect("session should not fail");
        let output = String::from_utf8(session.into_output()).expect("utf-8 output");
        (summary, output)
    }

    fn session(&self, input: &str) -> (SessionSummary, String) {
        self.run(&self.translator, input)
    }
}

/// Countries sorted by display name; `zzz` has no table entry and shows as its code.
fn country_block() -> String {
    format!("Canada\nGermany\nzzz\n{}\n", COUNTRY_PROMPT)
}

#[test]
fn test_quit_at_first_prompt_prints_only_the_list() {
    let (summary, output) = Fixture::new().session("quit\n");
    assert_eq!(summary.lookups, 0);
    assert_eq!(output, country_block());
}

#[test]
fn test_full_round_then_quit() {
    let (summary, output) = Fixture::new().session("Germany\nFrench\nquit\n");
    let expected = format!(
        "{}English\nFrench\nGerman\n{}\nGermany in French is Allemagne\n{}\n",
        country_block(),
        LANGUAGE_PROMPT,
        CONTINUE_PROMPT
    );
    assert_eq!(output, expected);
    assert_eq!(summary, SessionSummary { lookups: 1, found: 1 });
}

#[test]
fn test_quit_at_language_prompt() {
    let (summary, output) = Fixture::new().session("Canada\nquit\n");
    assert_eq!(summary.lookups, 0);
    assert!(output.ends_with(&format!("English\nFrench\n{}\n", LANGUAGE_PROMPT)));
    assert!(!output.contains(" is "));
}

#[test]
fn test_enter_loops_back_to_countries() {
    let (summary, output) = Fixture::new().session("Canada\nEnglish\n\nGermany\nGerman\nquit\n");
    assert_eq!(summary.lookups, 2);
    assert_eq!(output.matches(COUNTRY_PROMPT).count(), 2);
    assert!(output.contains("Canada in English is Canada\n"));
    assert!(output.contains("Germany in German is Deutschland\n"));
}

#[test]
fn test_unknown_names_fall_through_to_null() {
    let (summary, output) = Fixture::new().session("Atlantis\nAtlantean\nquit\n");
    assert_eq!(summary, SessionSummary { lookups: 1, found: 0 });
    // no languages are listed for an unknown country
    assert!(output.contains(&format!("{}\n{}\n", COUNTRY_PROMPT, LANGUAGE_PROMPT)));
    assert!(output.contains("Atlantis in Atlantean is null\n"));
}

#[test]
fn test_missing_language_for_known_country() {
    let (_, output) = Fixture::new().session("Canada\nGerman\nquit\n");
    assert!(output.contains("Canada in German is null\n"));
}

#[test]
fn test_codes_typed_directly_still_work() {
    let (summary, output) = Fixture::new().session("zzz\nEnglish\nquit\n");
    assert_eq!(summary.found, 1);
    assert!(output.contains("zzz in English is Nowhere\n"));
}

#[test]
fn test_end_of_input_mid_session() {
    let (summary, output) = Fixture::new().session("Germany\nGerman\n");
    assert_eq!(summary.lookups, 1);
    assert!(output.ends_with(&format!("{}\n", CONTINUE_PROMPT)));
}

#[test]
fn test_any_translator_can_drive_the_session() {
    struct Fixed;

    impl Translator for Fixed {
        fn countries(&self) -> Vec<String> {
            vec!["deu".to_string()]
        }

        fn country_languages(&self, _country: &str) -> Vec<String> {
            vec!["de".to_string()]
        }

        fn translate(&self, _country: &str, _language: &str) -> Option<&str> {
            Some("Deutschland")
        }
    }

    let fixture = Fixture::new();
    let dyn_translator: &dyn Translator = &Fixed;
    let (summary, output) = fixture.run(dyn_translator, "Germany\nGerman\nquit\n");
    assert_eq!(summary.found, 1);
    assert!(output.starts_with(&format!("Germany\n{}\nGerman\n", COUNTRY_PROMPT)));
    assert!(output.contains("Germany in German is Deutschland\n"));
}
