//! Command dispatch.

pub mod secret;
pub mod sign;
pub mod verify;

use crate::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> i32 {
    match cli.command {
        Command::Verify(args) => verify::cmd_verify(args),
        Command::Sign(args) => sign::cmd_sign(args),
    }
}
