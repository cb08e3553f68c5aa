// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logger setup
//!
//! Log records go to stderr so they never interleave with the prompts on
//! stdout, and optionally to a file as well.

use log::LevelFilter;
use std::io;
use std::path::Path;

/// Maps a count of `-v` flags to a level filter.
pub fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the fern logger. Can only succeed once per process.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} country-lingo{}] {}",
                record.level(),
                match (record.file(), record.line()) {
                    (Some(file), Some(line)) if record.level() >= log::Level::Debug => {
                        format!(":{}:{}", file, line)
                    }
                    _ => String::new(),
                },
                message
            ))
        })
        .level(level)
        .chain(io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
