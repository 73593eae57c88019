use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Year the basic I/O exercise computes birth years against.
    #[serde(default = "default_reference_year")]
    pub reference_year: i64,

    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Encoding label forced on stdin, e.g. `utf-16le` or `gbk`.
    #[serde(default)]
    pub encoding: Option<String>,
}

fn default_reference_year() -> i64 {
    2024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            input: InputConfig::default(),
        }
    }
}
