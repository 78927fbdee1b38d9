//! repcount command-line entry point

use clap::Parser;

use repcount_cli::{execute, print_summary, Cli};
use repcount_runtime::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    let outcome = execute(&cli)?;
    print_summary(&mut std::io::stdout().lock(), &outcome)?;

    Ok(())
}
