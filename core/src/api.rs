//! Stable surface for the binary and integration tests.

pub use crate::config::{load, load_default, AppConfig, ConfigSource, InputConfig};
pub use crate::error::{CliError, ConfigError, InputError};
pub use crate::exercise::{Exercise, ExerciseInfo, FieldKind, FieldSpec, Transcript};
pub use crate::input::{Field, LineReader};
