use std::fmt;

use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[FieldSpec::new("number", FieldKind::Integer)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn of(n: i64) -> Sign {
        if n > 0 {
            Sign::Positive
        } else if n < 0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
            Sign::Zero => "zero",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: i64) -> Parity {
        if n.rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(n: i64) -> String {
    format!("{} {} number", Sign::of(n), Parity::of(n))
}

pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let num = reader.next_int(FIELDS[0].name)?;

    let mut out = Transcript::new();
    out.push(format!("Number: {num}"));
    out.push(format!("Sign: {}", Sign::of(num)));
    out.push(format!("Parity: {}", Parity::of(num)));
    out.push(format!("Classification: {}", classify(num)));
    Ok(out)
}
