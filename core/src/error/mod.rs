mod cli_error;
mod config_error;
mod input_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use input_error::InputError;
