//! `signet sign` - Mint a signed request token.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use signet_core::sign;

use super::secret::SecretArgs;

#[derive(Args, Debug)]
pub struct SignArgs {
    /// JSON payload file, or `-` to read it from stdin
    pub payload: PathBuf,

    #[command(flatten)]
    pub secret: SecretArgs,
}

pub fn cmd_sign(args: SignArgs) -> i32 {
    match run_sign(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

fn run_sign(args: &SignArgs) -> Result<()> {
    let raw = read_payload(&args.payload)?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse payload JSON: {}", args.payload.display()))?;

    let secret = args.secret.load()?;
    let token = sign(&payload, &secret)?;

    println!("{}", token);
    Ok(())
}

fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file: {}", path.display()))
    }
}
