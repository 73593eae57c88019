//! Value rendering shared by the exercise transcripts.

/// Shortest round-trip form of a float that always shows it is a float:
/// `2.0`, `1.75`, `175.0`. Very large or very small magnitudes switch to
/// exponent form with a signed, two-digit exponent (`1e+16`, `1e-05`).
pub fn float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug keeps the trailing `.0` and goes exponential below 1e-4 and
    // from 1e16 upwards.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

pub fn fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

pub fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
