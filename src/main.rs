use anyhow::Result;
use clap::Parser;

use linepad::cli::{self, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    linepad::tracing::init(!args.no_log_file);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&args, &mut out)
}
