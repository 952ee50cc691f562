use clap::Parser;

mod args;
mod commands;

use args::Cli;
use commands::dispatch;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = dispatch(cli);
    std::process::exit(code);
}
