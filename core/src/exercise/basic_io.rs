use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::format;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", FieldKind::Text),
    FieldSpec::new("age", FieldKind::Integer),
    FieldSpec::new("height", FieldKind::Float),
    FieldSpec::new("language", FieldKind::Text),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Profile<'a> {
    pub name: &'a str,
    pub age: i64,
    /// Meters.
    pub height: f64,
    pub language: &'a str,
}

pub fn read<'a>(reader: &mut LineReader<'a>) -> Result<Profile<'a>, InputError> {
    Ok(Profile {
        name: reader.next_str(FIELDS[0].name)?,
        age: reader.next_int(FIELDS[1].name)?,
        height: reader.next_float(FIELDS[2].name)?,
        language: reader.next_str(FIELDS[3].name)?,
    })
}

pub fn birth_year(reference_year: i64, age: i64) -> Option<i64> {
    reference_year.checked_sub(age)
}

pub fn meters_to_centimeters(meters: f64) -> f64 {
    meters * 100.0
}

pub fn solve(reader: &mut LineReader<'_>, reference_year: i64) -> Result<Transcript, InputError> {
    let p = read(reader)?;

    let born = birth_year(reference_year, p.age).ok_or_else(|| InputError::OutOfRange {
        field: FIELDS[1].name,
        value: p.age.to_string(),
    })?;
    let height = format::float(p.height);
    let height_cm = format::float(meters_to_centimeters(p.height));

    let mut out = Transcript::new();
    out.push(format!("Name (uppercase): {}", p.name.to_uppercase()));
    out.push(format!("Age: {} years", p.age));
    out.push(format!("Birth Year: {born}"));
    out.push(format!("Height: {height}m ({height_cm}cm)"));
    out.push(format!("Favorite Language: {}", p.language));
    out.push(format!(
        "Profile: {}, {} years old, {height}m tall, loves {}",
        p.name, p.age, p.language
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builds_profile_lines() {
        let t = solve(&mut LineReader::new("Alice\n25\n1.75\nRust\n"), 2024).unwrap();
        assert_eq!(
            t.lines(),
            [
                "Name (uppercase): ALICE",
                "Age: 25 years",
                "Birth Year: 1999",
                "Height: 1.75m (175.0cm)",
                "Favorite Language: Rust",
                "Profile: Alice, 25 years old, 1.75m tall, loves Rust",
            ]
        );
    }

    #[test]
    fn reference_year_drives_birth_year() {
        let t = solve(&mut LineReader::new("Bo\n30\n2\nGo\n"), 2030).unwrap();
        assert_eq!(t.lines()[2], "Birth Year: 2000");
        assert_eq!(t.lines()[3], "Height: 2.0m (200.0cm)");
    }

    #[test]
    fn uppercase_handles_non_ascii() {
        let t = solve(&mut LineReader::new("zoë\n1\n1.5\nC\n"), 2024).unwrap();
        assert_eq!(t.lines()[0], "Name (uppercase): ZOË");
    }

    #[test]
    fn overflowing_birth_year_is_rejected() {
        assert_eq!(birth_year(2024, i64::MIN), None);
        let err = solve(
            &mut LineReader::new("X\n-9223372036854775808\n1.0\nY\n"),
            2024,
        )
        .unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "age", .. }));
    }

    #[test]
    fn malformed_height_fails() {
        let err = solve(&mut LineReader::new("X\n20\ntall\nY\n"), 2024).unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidFloat {
                line: 3,
                field: "height",
                ..
            }
        ));
    }
}
