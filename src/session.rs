// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive country/language picker
//!
//! The session cycles through three prompts:
//!
//! 1. list every country by display name and read a choice,
//! 2. list that country's languages and read a choice,
//! 3. print the translation and wait for enter.
//!
//! Typing `quit` at any prompt, or closing input, ends the session.
//! Choices are not validated against the lists; an unknown name falls through
//! the converters unchanged and the result line shows `null`.

use crate::i18n::CodeConverter;
use crate::translator::Translator;
use crate::types::Lookup;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub const QUIT: &str = "quit";
pub const COUNTRY_PROMPT: &str = "select a country from above:";
pub const LANGUAGE_PROMPT: &str = "select a language from above:";
pub const CONTINUE_PROMPT: &str = "Press enter to continue or quit to exit.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    PromptCountry,
    PromptLanguage { country: String },
    ShowResult { country: String, language: String },
    Terminate,
}

/// What happened during a session, for logging by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Result lines printed.
    pub lookups: usize,
    /// Of those, how many found a stored translation.
    pub found: usize,
}

pub struct Session<'a, T: Translator + ?Sized, R, W> {
    translator: &'a T,
    countries: &'a CodeConverter,
    languages: &'a CodeConverter,
    input: R,
    output: W,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: Translator + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(
        translator: &'a T,
        countries: &'a CodeConverter,
        languages: &'a CodeConverter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            translator,
            countries,
            languages,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut state = State::PromptCountry;

        loop {
            state = match state {
                State::PromptCountry => self.prompt_country()?,
                State::PromptLanguage { country } => self.prompt_language(country)?,
                State::ShowResult { country, language } => {
                    let lookup = Lookup::resolve(
                        self.translator,
                        self.countries,
                        self.languages,
                        &country,
                        &language,
                    );
                    summary.lookups += 1;
                    if lookup.is_found() {
                        summary.found += 1;
                    }
                    self.show_result(&lookup)?
                }
                State::Terminate => break,
            };
        }

        self.output.flush().context("flushing output")?;
        Ok(summary)
    }

    /// Consumes the session, handing back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_country(&mut self) -> Result<State> {
        let names: Vec<String> = self
            .translator
            .countries()
            .iter()
            .map(|code| self.countries.from_code(code).to_string())
            .collect();
        self.print_sorted(names)?;
        writeln!(self.output, "{}", COUNTRY_PROMPT)?;

        Ok(match self.read_choice()? {
            Some(country) => State::PromptLanguage { country },
            None => State::Terminate,
        })
    }

    fn prompt_language(&mut self, country: String) -> Result<State> {
        let code = self.countries.from_name(&country);
        let names: Vec<String> = self
            .translator
            .country_languages(code)
            .iter()
            .map(|code| self.languages.from_code(code).to_string())
            .collect();
        self.print_sorted(names)?;
        writeln!(self.output, "{}", LANGUAGE_PROMPT)?;

        Ok(match self.read_choice()? {
            Some(language) => State::ShowResult { country, language },
            None => State::Terminate,
        })
    }

    fn show_result(&mut self, lookup: &Lookup) -> Result<State> {
        writeln!(self.output, "{}", lookup)?;
        writeln!(self.output, "{}", CONTINUE_PROMPT)?;

        Ok(match self.read_choice()? {
            Some(_) => State::PromptCountry,
            None => State::Terminate,
        })
    }

    fn print_sorted(&mut self, mut names: Vec<String>) -> Result<()> {
        names.sort();
        for name in &names {
            writeln!(self.output, "{}", name)?;
        }
        Ok(())
    }

    /// Reads one line. `None` means the user quit or input ended.
    fn read_choice(&mut self) -> Result<Option<String>> {
        self.output.flush().context("flushing output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        if read == 0 {
            log::debug!("input closed, ending session");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        if line == QUIT {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Runs a session on the process's stdin and stdout.
pub fn run_program<T: Translator + ?Sized>(
    translator: &T,
    countries: &CodeConverter,
    languages: &CodeConverter,
) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        translator,
        countries,
        languages,
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}
