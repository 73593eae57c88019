use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

/// Raw bytes of the exercise input: the given file, or all of stdin.
pub fn read_input_bytes(path: Option<&Path>) -> Result<Vec<u8>, std::io::Error> {
    match path {
        Some(p) => std::fs::read(p),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decodes input bytes. A recognised `forced` label wins; otherwise BOM,
/// UTF-16 heuristics, strict UTF-8 and finally lossy UTF-8 are tried in order.
pub fn decode_stdin_bytes(bytes: &[u8], forced: Option<&str>) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some(label) = forced {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(enc) => {
                tracing::debug!(
                    "Using configured encoding: {}, bytes: {}",
                    enc.name(),
                    bytes.len()
                );
                let (cow, _, _) = enc.decode(bytes);
                return cow.into_owned();
            }
            None => {
                tracing::warn!("Unknown input encoding label {:?}, detecting instead", label)
            }
        }
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(
            "Detected BOM encoding: {}, bytes: {}",
            enc.name(),
            bytes.len()
        );
        let (cow, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
        return cow.into_owned();
    }

    if let Some(enc) = detect_utf16_encoding(bytes) {
        tracing::debug!(
            "Detected UTF-16 encoding: {}, bytes: {}",
            enc.name(),
            bytes.len()
        );
        let (cow, _) = enc.decode_without_bom_handling(bytes);
        return cow.into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        tracing::debug!("Valid UTF-8 input, bytes: {}", bytes.len());
        return s.to_string();
    }

    tracing::debug!("Using UTF-8 lossy conversion, bytes: {}", bytes.len());
    String::from_utf8_lossy(bytes).into_owned()
}

/// Exercise input is short and mostly ASCII, so a UTF-16 stream shows up
/// as a null byte in every other position of its first few code units.
fn detect_utf16_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    // Seven exercise lines of a few characters each fit comfortably.
    const ASCII_SAMPLE_BYTES: usize = 64;

    let sample = &bytes[..bytes.len().min(ASCII_SAMPLE_BYTES)];
    if sample.len() < 2 {
        return None;
    }

    let nulls_at = |parity: usize| {
        sample
            .iter()
            .skip(parity)
            .step_by(2)
            .filter(|b| **b == 0)
            .count()
    };
    let (zero_even, zero_odd) = (nulls_at(0), nulls_at(1));

    let threshold = sample.len() / 4;
    if zero_odd > threshold && zero_odd > zero_even * 2 {
        Some(encoding_rs::UTF_16LE)
    } else if zero_even > threshold && zero_even > zero_odd * 2 {
        Some(encoding_rs::UTF_16BE)
    } else {
        None
    }
}
