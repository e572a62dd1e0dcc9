mod cli;
mod application;
mod domain;
mod data;
mod search;
mod infra;

use anyhow::Result;
use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rca_search=info".parse()?),
        )
        .init();

    let cli = Cli::parse_or_exit();
    cli.run()
}
