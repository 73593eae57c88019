use std::io::Write;

use primer_core::api::{AppConfig, CliError, Exercise};

use crate::stdio::decode_stdin_bytes;

/// Solves from raw input bytes and only then writes the transcript, so a
/// failed run leaves `out` untouched.
pub fn run_exercise<W: Write>(
    exercise: Exercise,
    input: &[u8],
    cfg: &AppConfig,
    out: &mut W,
) -> Result<(), CliError> {
    tracing::debug!("Running exercise {}", exercise);

    let text = decode_stdin_bytes(input, cfg.input.encoding.as_deref());
    let transcript = exercise.solve(&text, cfg)?;
    transcript.write_to(out)?;
    Ok(())
}
