// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-lingo: pick a country and a language, get the country's name in that language

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use country_lingo::catalog::{listing_line, Catalog};
use country_lingo::config::{Config, ConfigFile, Overrides};
use country_lingo::{diagnostics, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "country-lingo")]
#[command(version)]
#[command(about = "Look up a country's name in another language")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML config file naming the data files
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Country dataset (JSON array of records)
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Country code table (tab-separated)
    #[arg(long, global = true, value_name = "FILE")]
    country_codes: Option<PathBuf>,

    /// Language code table (tab-separated)
    #[arg(long, global = true, value_name = "FILE")]
    language_codes: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a country and a language interactively (default)
    Run,

    /// Translate one country name and exit
    Translate {
        /// Country display name or alpha-3 code
        #[arg(value_name = "COUNTRY")]
        country: String,

        /// Language display name or code
        #[arg(value_name = "LANGUAGE")]
        language: String,

        /// Print the lookup as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the countries in the dataset
    Countries,

    /// List the languages stored for one country
    Languages {
        /// Country display name or alpha-3 code
        #[arg(value_name = "COUNTRY")]
        country: String,
    },

    /// Check that every configured data file loads and lines up
    Diagnostics,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = cli.config.as_deref().map(ConfigFile::load).transpose()?;
    let config = Config::resolve(
        file,
        Overrides {
            dataset: cli.data,
            country_codes: cli.country_codes,
            language_codes: cli.language_codes,
            verbosity: cli.verbose,
            log_file: cli.log_file,
        },
    )?;
    logging::init(config.log_level, config.log_file.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let catalog = Catalog::load(&config)?;
            let summary = catalog.run_interactive()?;
            log::info!(
                "session ended after {} lookups ({} found)",
                summary.lookups,
                summary.found
            );
        }

        Commands::Translate {
            country,
            language,
            json,
        } => {
            let catalog = Catalog::load(&config)?;
            let lookup = catalog.lookup(&country, &language);
            if json {
                println!("{}", serde_json::to_string_pretty(&lookup)?);
            } else {
                println!("{}", lookup.rendered_translation());
            }
        }

        Commands::Countries => {
            let catalog = Catalog::load(&config)?;
            let listing = catalog.country_listing();
            println!("{}", format!("COUNTRIES ({})", listing.len()).bold().yellow());
            for (code, name) in listing {
                println!("{}", listing_line(&code, &name));
            }
        }

        Commands::Languages { country } => {
            let catalog = Catalog::load(&config)?;
            let listing = catalog.language_listing(&country);
            if listing.is_empty() {
                println!("No translations stored for {}", country.bold());
            } else {
                println!("{}", format!("LANGUAGES FOR {}", country).bold().yellow());
                for (code, name) in listing {
                    println!("{}", listing_line(&code, &name));
                }
            }
        }

        Commands::Diagnostics => diagnostics::run_self_diagnostics(&config)?,
    }

    Ok(())
}
