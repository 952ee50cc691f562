//! Shared secret sourcing for CLI commands.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct SecretArgs {
    /// Shared secret - mutually exclusive with --secret-file
    #[arg(long, env = "SIGNET_SECRET", hide_env_values = true, conflicts_with = "secret_file")]
    pub secret: Option<String>,

    /// Read the shared secret from a file
    #[arg(long, conflicts_with = "secret")]
    pub secret_file: Option<PathBuf>,
}

impl SecretArgs {
    /// Resolve the secret bytes from flag, environment, or file.
    pub fn load(&self) -> Result<Vec<u8>> {
        if let Some(secret) = &self.secret {
            return Ok(secret.clone().into_bytes());
        }

        if let Some(path) = &self.secret_file {
            let mut bytes = std::fs::read(path)
                .with_context(|| format!("failed to read secret file: {}", path.display()))?;
            // `echo secret > file` leaves a trailing newline; strip one.
            if bytes.ends_with(b"\n") {
                bytes.pop();
                if bytes.ends_with(b"\r") {
                    bytes.pop();
                }
            }
            return Ok(bytes);
        }

        bail!("must specify --secret, --secret-file, or SIGNET_SECRET");
    }
}
