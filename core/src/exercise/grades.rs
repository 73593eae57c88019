use std::fmt;

use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[FieldSpec::new("score", FieldKind::Integer)];

pub const PASS_MARK: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Bands are checked from the top; the first threshold met wins.
    pub fn for_score(score: i64) -> Grade {
        if score >= 90 {
            Grade::A
        } else if score >= 80 {
            Grade::B
        } else if score >= 70 {
            Grade::C
        } else if score >= 60 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn performance(&self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Average",
            Grade::D => "Poor",
            Grade::F => "Fail",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn for_score(score: i64) -> Status {
        if score >= PASS_MARK {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
        })
    }
}

pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let score = reader.next_int(FIELDS[0].name)?;
    let grade = Grade::for_score(score);

    let mut out = Transcript::new();
    out.push(format!("Score: {score}"));
    out.push(format!("Grade: {grade}"));
    out.push(format!("Performance: {}", grade.performance()));
    out.push(format!("Status: {}", Status::for_score(score)));
    Ok(out)
}
