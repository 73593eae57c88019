use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::format;
use crate::input::{Field, LineReader};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("integer text", FieldKind::Text),
    FieldSpec::new("float text", FieldKind::Text),
    FieldSpec::new("boolean text", FieldKind::Boolean),
    FieldSpec::new("integer", FieldKind::Integer),
    FieldSpec::new("float", FieldKind::Float),
];

/// Raw text fields are kept unconverted until the transcript is built.
#[derive(Debug, Clone, Copy)]
pub struct Conversions<'a> {
    pub int_text: Field<'a>,
    pub float_text: Field<'a>,
    pub bool_text: Field<'a>,
    pub int_value: i64,
    pub float_value: f64,
}

pub fn read<'a>(reader: &mut LineReader<'a>) -> Result<Conversions<'a>, InputError> {
    Ok(Conversions {
        int_text: reader.next_field(FIELDS[0].name)?,
        float_text: reader.next_field(FIELDS[1].name)?,
        bool_text: reader.next_field(FIELDS[2].name)?,
        int_value: reader.next_int(FIELDS[3].name)?,
        float_value: reader.next_float(FIELDS[4].name)?,
    })
}

pub fn int_to_bool(value: i64) -> bool {
    value != 0
}

pub fn float_to_bool(value: f64) -> bool {
    value != 0.0
}

/// Truncates toward zero. `None` for NaN and infinities.
///
/// Finite values beyond `i64` still have an exact integer value; it is
/// written out digit for digit.
pub fn float_to_int(value: f64) -> Option<String> {
    // 2^63; i64::MAX itself is not representable as f64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if (-LIMIT..LIMIT).contains(&truncated) {
        Some((truncated as i64).to_string())
    } else {
        Some(format!("{truncated:.0}"))
    }
}

pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let c = read(reader)?;

    let from_int_text = c.int_text.int()?;
    let from_float_text = c.float_text.float()?;
    let from_bool_text = c.bool_text.flag();
    let truncated = float_to_int(c.float_value).ok_or_else(|| InputError::OutOfRange {
        field: FIELDS[4].name,
        value: format::float(c.float_value),
    })?;

    let int_as_text = c.int_value.to_string();

    let mut out = Transcript::new();
    out.push(format!("String to int: {from_int_text}"));
    out.push(format!("String to float: {}", format::float(from_float_text)));
    out.push(format!("String to bool: {}", format::flag(from_bool_text)));

    out.push(format!("Int to string: {int_as_text}"));
    out.push(format!("Int to float: {}", format::float(c.int_value as f64)));
    out.push(format!(
        "Int to bool: {}",
        format::flag(int_to_bool(c.int_value))
    ));

    out.push(format!("Float to string: {}", format::float(c.float_value)));
    out.push(format!("Float to int: {truncated}"));
    out.push(format!(
        "Float to bool: {}",
        format::flag(float_to_bool(c.float_value))
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(input: &str) -> Result<Vec<String>, InputError> {
        solve(&mut LineReader::new(input)).map(|t| t.lines().to_vec())
    }

    #[test]
    fn converts_every_pair() {
        let lines = run("123\n45.67\ntrue\n0\n-9.99\n").unwrap();
        assert_eq!(
            lines,
            vec![
                "String to int: 123",
                "String to float: 45.67",
                "String to bool: true",
                "Int to string: 0",
                "Int to float: 0.0",
                "Int to bool: false",
                "Float to string: -9.99",
                "Float to int: -9",
                "Float to bool: true",
            ]
        );
    }

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(float_to_int(2.9).as_deref(), Some("2"));
        assert_eq!(float_to_int(-2.9).as_deref(), Some("-2"));
        assert_eq!(float_to_int(-0.5).as_deref(), Some("0"));
        assert_eq!(
            float_to_int(-9_223_372_036_854_775_808.0).as_deref(),
            Some("-9223372036854775808")
        );
        assert_eq!(float_to_int(f64::NAN), None);
        assert_eq!(float_to_int(f64::INFINITY), None);
        assert_eq!(float_to_int(f64::NEG_INFINITY), None);
    }

    #[test]
    fn huge_floats_truncate_to_exact_integers() {
        assert_eq!(
            float_to_int(1e19).as_deref(),
            Some("10000000000000000000")
        );
        assert_eq!(
            float_to_int(9.3e18).as_deref(),
            Some("9300000000000000000")
        );

        let lines = run("1\n1.0\ntrue\n1\n-1e300\n").unwrap();
        let digits = lines[7].strip_prefix("Float to int: ").unwrap();
        assert_eq!(digits.len(), 302);
        assert!(digits.starts_with("-100000000000000005250476025520442024870"));
        assert!(digits[1..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn zero_is_the_only_false_number() {
        assert!(!int_to_bool(0));
        assert!(int_to_bool(-1));
        assert!(!float_to_bool(0.0));
        assert!(!float_to_bool(-0.0));
        assert!(float_to_bool(0.001));
    }

    #[test]
    fn capitalised_true_is_not_true() {
        let lines = run("1\n1.0\nTrue\n1\n1.0\n").unwrap();
        assert_eq!(lines[2], "String to bool: false");
        let lines = run("1\n1.0\n  true \n1\n1.0\n").unwrap();
        assert_eq!(lines[2], "String to bool: true");
    }

    #[test]
    fn integer_round_trips_through_text() {
        for n in [0_i64, 1, -1, 42, i64::MAX, i64::MIN] {
            assert_eq!(n.to_string().parse::<i64>().unwrap(), n);
        }
    }

    #[test]
    fn float_round_trips_through_text() {
        for x in [0.1, -2.5, 1e-7, 6.02e23, 175.0] {
            assert_eq!(format::float(x).parse::<f64>().unwrap(), x);
        }
    }

    #[test]
    fn bad_integer_text_fails_on_its_line() {
        let err = run("12a\n1.0\ntrue\n1\n1.0\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidInteger { line: 1, .. }));
    }

    #[test]
    fn infinite_float_cannot_become_int() {
        let err = run("1\n1.0\nfalse\n1\ninf\n").unwrap_err();
        match err {
            InputError::OutOfRange { field, value } => {
                assert_eq!(field, "float");
                assert_eq!(value, "inf");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
