//! The seven exercises, their catalog entries and a single dispatch point.
//!
//! Every solver follows the same three steps: read its fixed fields with a
//! [`LineReader`], compute, and return the finished [`Transcript`]. Nothing
//! is printed until a solver has succeeded.

pub mod basic_io;
pub mod constants;
pub mod conversion;
pub mod grades;
pub mod if_else;
pub mod strings;
pub mod variables;

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::config::AppConfig;
use crate::error::InputError;
use crate::input::LineReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseInfo {
    pub number: u8,
    pub slug: &'static str,
    pub short: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    VariableDeclaration,
    DataTypesConversion,
    BasicInputOutput,
    StringOperations,
    ConstantsImmutable,
    IfElseStatements,
    NestedConditionals,
}

static CATALOG: [ExerciseInfo; 7] = [
    ExerciseInfo {
        number: 1,
        slug: "variable-declaration",
        short: "variables",
        title: "Variable Declaration",
        fields: variables::FIELDS,
    },
    ExerciseInfo {
        number: 2,
        slug: "data-types-conversion",
        short: "conversion",
        title: "Data Types & Conversion",
        fields: conversion::FIELDS,
    },
    ExerciseInfo {
        number: 3,
        slug: "basic-input-output",
        short: "io",
        title: "Basic Input/Output",
        fields: basic_io::FIELDS,
    },
    ExerciseInfo {
        number: 7,
        slug: "string-operations",
        short: "strings",
        title: "String Operations",
        fields: strings::FIELDS,
    },
    ExerciseInfo {
        number: 8,
        slug: "constants-immutable",
        short: "constants",
        title: "Constants & Immutability",
        fields: constants::FIELDS,
    },
    ExerciseInfo {
        number: 9,
        slug: "if-else-statements",
        short: "if-else",
        title: "If-Else Statements",
        fields: if_else::FIELDS,
    },
    ExerciseInfo {
        number: 10,
        slug: "nested-conditionals",
        short: "grades",
        title: "Nested Conditionals",
        fields: grades::FIELDS,
    },
];

impl Exercise {
    pub const ALL: [Exercise; 7] = [
        Exercise::VariableDeclaration,
        Exercise::DataTypesConversion,
        Exercise::BasicInputOutput,
        Exercise::StringOperations,
        Exercise::ConstantsImmutable,
        Exercise::IfElseStatements,
        Exercise::NestedConditionals,
    ];

    pub fn catalog() -> &'static [ExerciseInfo] {
        &CATALOG
    }

    pub fn info(self) -> &'static ExerciseInfo {
        let idx = match self {
            Exercise::VariableDeclaration => 0,
            Exercise::DataTypesConversion => 1,
            Exercise::BasicInputOutput => 2,
            Exercise::StringOperations => 3,
            Exercise::ConstantsImmutable => 4,
            Exercise::IfElseStatements => 5,
            Exercise::NestedConditionals => 6,
        };
        &CATALOG[idx]
    }

    /// Accepts the slug, the short name, or the course number (`7` or `07`).
    pub fn from_name(name: &str) -> Option<Exercise> {
        let name = name.trim();
        let number = name.parse::<u8>().ok();
        Exercise::ALL.into_iter().find(|ex| {
            let info = ex.info();
            info.slug.eq_ignore_ascii_case(name)
                || info.short.eq_ignore_ascii_case(name)
                || number == Some(info.number)
        })
    }

    pub fn solve(self, input: &str, cfg: &AppConfig) -> Result<Transcript, InputError> {
        let mut reader = LineReader::new(input);
        let result = match self {
            Exercise::VariableDeclaration => variables::solve(&mut reader),
            Exercise::DataTypesConversion => conversion::solve(&mut reader),
            Exercise::BasicInputOutput => basic_io::solve(&mut reader, cfg.reference_year),
            Exercise::StringOperations => strings::solve(&mut reader),
            Exercise::ConstantsImmutable => constants::solve(&mut reader),
            Exercise::IfElseStatements => if_else::solve(&mut reader),
            Exercise::NestedConditionals => grades::solve(&mut reader),
        };
        tracing::debug!(
            exercise = self.info().slug,
            lines_read = reader.lines_read(),
            ok = result.is_ok(),
            "exercise solved"
        );
        result
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().slug)
    }
}

/// Ordered output lines of one exercise run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
