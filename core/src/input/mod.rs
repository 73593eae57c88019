mod reader;

pub use reader::{Field, LineReader};
