//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::sign::SignArgs;
use crate::commands::verify::VerifyArgs;

#[derive(Parser, Debug)]
#[command(
    name = "signet",
    version,
    about = "Verify and mint HMAC-SHA256 signed request tokens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a signed request token and print its payload
    Verify(VerifyArgs),
    /// Sign a JSON payload into a signed request token
    Sign(SignArgs),
}
