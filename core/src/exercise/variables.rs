use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::format;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("integer", FieldKind::Integer),
    FieldSpec::new("string", FieldKind::Text),
    FieldSpec::new("boolean", FieldKind::Boolean),
    FieldSpec::new("float", FieldKind::Float),
    FieldSpec::new("character", FieldKind::Text),
    FieldSpec::new("updated integer", FieldKind::Integer),
    FieldSpec::new("late-initialized value", FieldKind::Text),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Variables<'a> {
    pub integer: i64,
    pub string: &'a str,
    pub boolean: bool,
    pub float: f64,
    pub character: &'a str,
    pub updated_integer: i64,
    pub late_value: &'a str,
}

pub fn read<'a>(reader: &mut LineReader<'a>) -> Result<Variables<'a>, InputError> {
    Ok(Variables {
        integer: reader.next_int(FIELDS[0].name)?,
        string: reader.next_str(FIELDS[1].name)?,
        boolean: reader.next_flag(FIELDS[2].name)?,
        float: reader.next_float(FIELDS[3].name)?,
        character: reader.next_str(FIELDS[4].name)?,
        updated_integer: reader.next_int(FIELDS[5].name)?,
        late_value: reader.next_str(FIELDS[6].name)?,
    })
}

// Reassignment and deferred initialization are the point of this exercise.
#[allow(clippy::needless_late_init)]
pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let vars = read(reader)?;
    let mut out = Transcript::new();

    let mut integer = vars.integer;
    out.push(format!("Integer variable: {integer}"));
    out.push(format!("String variable: {}", vars.string));
    out.push(format!("Boolean variable: {}", format::flag(vars.boolean)));
    out.push(format!("Float variable: {}", format::float(vars.float)));
    out.push(format!("Character variable: {}", vars.character));

    integer = vars.updated_integer;
    out.push(format!("Updated integer variable: {integer}"));

    let late_initialized: &str;
    late_initialized = vars.late_value;
    out.push(format!("Late-initialized variable: {late_initialized}"));

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
    fn prints_every_variable_in_order() {
        let lines = run("42\nHello\ntrue\n3.5\nA\n100\nlate\n").unwrap();
        assert_eq!(
            lines,
            vec![
                "Integer variable: 42",
                "String variable: Hello",
                "Boolean variable: true",
                "Float variable: 3.5",
                "Character variable: A",
                "Updated integer variable: 100",
                "Late-initialized variable: late",
            ]
        );
    }

    #[test]
    fn non_true_boolean_prints_false() {
        for flag in ["false", "yes", "TRUE"] {
            let input = format!("1\ns\n{flag}\n2\nc\n3\nx\n");
            assert_eq!(run(&input).unwrap()[2], "Boolean variable: false");
        }
    }

    #[test]
    fn integral_float_keeps_fraction() {
        let lines = run("1\ns\ntrue\n7\nc\n3\nx\n").unwrap();
        assert_eq!(lines[3], "Float variable: 7.0");
    }

    #[test]
    fn string_values_are_trimmed() {
        let lines = run("1\n  padded  \nfalse\n0.5\n z \n2\n  tail\n").unwrap();
        assert_eq!(lines[1], "String variable: padded");
        assert_eq!(lines[4], "Character variable: z");
        assert_eq!(lines[6], "Late-initialized variable: tail");
    }

    #[test]
    fn malformed_updated_integer_fails() {
        let err = run("1\ns\ntrue\n2.0\nc\nsix\nx\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidInteger {
                line: 6,
                field: "updated integer",
                ..
            }
        ));
    }
}
