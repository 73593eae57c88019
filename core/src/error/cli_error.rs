// core/src/error/cli_error.rs
use thiserror::Error;

use super::{ConfigError, InputError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input")]
    Input(#[from] InputError),

    #[error("configuration error")]
    Config(#[from] ConfigError),

    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this failure. Clap keeps `2` for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) => 1,
            CliError::Config(_) => 2,
            CliError::Io(_) => 3,
        }
    }
}
