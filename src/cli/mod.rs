// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction.
// It uses the `clap` crate to parse the command line; all
// searching is delegated to Layer 2 (application).
//
// The command line is a single positional argument, the
// search phrase:
//
//   rca-search "database failover"
//
// There are no flags: even "--help" is searched for as text.
// Anything else (no argument, extra arguments) prints the
// report header, then the usage, and exits with status 1.
// Tunables come from the environment, see infra::config.
//
// Reference: Rust Book §12 (CLI programs)

pub mod report;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::{
    ffi::OsString,
    io::{self, Write},
};

use crate::application::search_use_case::SearchUseCase;
use crate::data::loader::JsonCorpusLoader;
use crate::infra::config::SearchConfig;
use report::ReportRenderer;

/// Exit status for a malformed invocation
pub const USAGE_EXIT_CODE: i32 = 1;

/// Search extracted Root Cause Analysis documents for a phrase.
#[derive(Parser, Debug)]
#[command(
    name = "rca-search",
    about = "Search extracted RCA documents for a phrase and list the best recent incidents.",
    override_usage = "rca-search \"search text\"",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// The phrase to search for (quote it if it contains spaces)
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

impl Cli {
    /// Parse the process arguments, exiting with USAGE_EXIT_CODE
    /// on a malformed invocation.
    pub fn parse_or_exit() -> Self {
        let stdout = io::stdout();
        let parsed = Self::parse_args(std::env::args_os(), &mut stdout.lock(), Utc::now(), &current_user());

        match parsed {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }

    /// Parse `args`. On failure the report header is written to `out`
    /// before the error is handed back, matching a normal run's output.
    pub fn parse_args<I, T, W>(
        args: I,
        out:  &mut W,
        now:  DateTime<Utc>,
        user: &str,
    ) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        W: Write,
    {
        Self::try_parse_from(args).map_err(|e| {
            // process::exit follows, so flush before handing back
            let written = ReportRenderer::new()
                .write_header(&mut *out, now, user)
                .and_then(|()| Ok(out.flush()?));
            if let Err(io_err) = written {
                tracing::debug!("Cannot write header before usage: {:#}", io_err);
            }
            e
        })
    }

    /// Run the search and print the report to stdout.
    pub fn run(self) -> Result<()> {
        let config = SearchConfig::from_env()?;
        tracing::debug!("Search config: {:?}", config);

        let renderer = ReportRenderer::new();
        let stdout   = io::stdout();
        let mut out  = stdout.lock();

        renderer.write_header(&mut out, Utc::now(), &current_user())?;

        tracing::info!(
            "Searching '{}' for \"{}\"",
            config.corpus_dir.display(),
            self.query
        );

        let use_case = SearchUseCase::new(&config, JsonCorpusLoader::new(&config.corpus_dir));
        let outcome  = use_case.execute(&self.query)?;

        renderer.write_outcome(&mut out, &outcome)?;
        out.flush()?;
        Ok(())
    }
}

/// Login name for the report header
fn current_user() -> String {
    std::env::var("USER").unwrap_or_else(|_| "unknown".to_string())
}
