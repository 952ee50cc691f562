//! `signet verify` - Verify a signed request token.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;

use signet_core::{verify, VerifyError};

use super::secret::SecretArgs;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Token to verify, or `-` to read it from stdin
    pub token: String,

    #[command(flatten)]
    pub secret: SecretArgs,

    /// Quiet mode - only exit code, no payload output
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn cmd_verify(args: VerifyArgs) -> i32 {
    match run_verify(&args) {
        Ok(()) => 0,
        Err(e) => {
            if !args.quiet {
                eprintln!("error: {e:#}");
            }
            // Extract exit code from VerifyError if available
            if let Some(verify_err) = e.downcast_ref::<VerifyError>() {
                verify_err.exit_code()
            } else {
                2
            }
        }
    }
}

fn run_verify(args: &VerifyArgs) -> Result<()> {
    let token = read_token(&args.token)?;
    let secret = args.secret.load()?;

    let payload = verify(token.trim(), &secret)?;

    if !args.quiet {
        println!("{}", serde_json::to_string_pretty(payload.claims())?);
    }

    Ok(())
}

fn read_token(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read token from stdin")?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}
