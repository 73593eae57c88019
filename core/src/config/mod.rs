pub mod load;
mod types;

pub use load::{load, load_default, ConfigSource};
pub use types::{AppConfig, InputConfig};
