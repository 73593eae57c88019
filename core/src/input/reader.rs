use std::str::Lines;

use crate::error::InputError;

/// One trimmed input line, remembered with its position so a later
/// conversion can still report where the bad value came from.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    line: usize,
    name: &'static str,
    text: &'a str,
}

impl<'a> Field<'a> {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn int(&self) -> Result<i64, InputError> {
        self.text
            .parse::<i64>()
            .map_err(|source| InputError::InvalidInteger {
                line: self.line,
                field: self.name,
                value: self.text.to_string(),
                source,
            })
    }

    pub fn float(&self) -> Result<f64, InputError> {
        self.text
            .parse::<f64>()
            .map_err(|source| InputError::InvalidFloat {
                line: self.line,
                field: self.name,
                value: self.text.to_string(),
                source,
            })
    }

    /// Only the literal `true` counts as true.
    pub fn flag(&self) -> bool {
        self.text == "true"
    }
}

/// Sequential reader over the lines of one exercise's input.
pub struct LineReader<'a> {
    lines: Lines<'a>,
    consumed: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            consumed: 0,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.consumed
    }

    pub fn next_field(&mut self, name: &'static str) -> Result<Field<'a>, InputError> {
        let line = self.consumed + 1;
        let text = self
            .lines
            .next()
            .ok_or(InputError::MissingLine { line, field: name })?;
        self.consumed = line;
        Ok(Field {
            line,
            name,
            text: text.trim(),
        })
    }

    pub fn next_str(&mut self, name: &'static str) -> Result<&'a str, InputError> {
        Ok(self.next_field(name)?.text())
    }

    pub fn next_int(&mut self, name: &'static str) -> Result<i64, InputError> {
        self.next_field(name)?.int()
    }

    pub fn next_float(&mut self, name: &'static str) -> Result<f64, InputError> {
        self.next_field(name)?.float()
    }

    pub fn next_flag(&mut self, name: &'static str) -> Result<bool, InputError> {
        Ok(self.next_field(name)?.flag())
    }
}
