pub mod input;

pub use input::{decode_stdin_bytes, read_input_bytes};
