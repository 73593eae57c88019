use super::{FieldKind, FieldSpec, Transcript};
use crate::error::InputError;
use crate::input::LineReader;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("first string", FieldKind::Text),
    FieldSpec::new("second string", FieldKind::Text),
    FieldSpec::new("index", FieldKind::Integer),
];

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Suffix of `s` starting at character `index`.
///
/// Indices past the end give an empty string. A negative index counts back
/// from the end and stops at the first character.
pub fn substring_from(s: &str, index: i64) -> &str {
    let len = char_len(s) as i64;
    let start = if index < 0 {
        (len + index).max(0)
    } else {
        index.min(len)
    };
    match s.char_indices().nth(start as usize) {
        Some((byte, _)) => &s[byte..],
        None => "",
    }
}

pub fn solve(reader: &mut LineReader<'_>) -> Result<Transcript, InputError> {
    let first = reader.next_str(FIELDS[0].name)?;
    let second = reader.next_str(FIELDS[1].name)?;
    let index = reader.next_int(FIELDS[2].name)?;

    let joined = format!("{first}{second}");

    let mut out = Transcript::new();
    out.push(format!("Concatenation: {first} + {second} = {joined}"));
    out.push(format!("Length of first string: {}", char_len(first)));
    out.push(format!("Length of second string: {}", char_len(second)));
    out.push(format!("Uppercase: {}", first.to_uppercase()));
    out.push(format!("Lowercase: {}", second.to_lowercase()));
    out.push(format!(
        "Substring from index {index}: {}",
        substring_from(first, index)
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hello_world() {
        let t = solve(&mut LineReader::new("Hello\nWorld\n2\n")).unwrap();
        assert_eq!(
            t.lines(),
            [
                "Concatenation: Hello + World = HelloWorld",
                "Length of first string: 5",
                "Length of second string: 5",
                "Uppercase: HELLO",
                "Lowercase: world",
                "Substring from index 2: llo",
            ]
        );
    }

    #[test]
    fn substring_bounds() {
        assert_eq!(substring_from("Hello", 0), "Hello");
        assert_eq!(substring_from("Hello", 5), "");
        assert_eq!(substring_from("Hello", 99), "");
        assert_eq!(substring_from("", 0), "");
    }

    #[test]
    fn negative_index_counts_from_end() {
        assert_eq!(substring_from("Hello", -1), "o");
        assert_eq!(substring_from("Hello", -5), "Hello");
        assert_eq!(substring_from("Hello", -50), "Hello");
        assert_eq!(substring_from("Hello", i64::MIN), "Hello");
    }

    #[test]
    fn indices_are_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(substring_from("héllo", 2), "llo");
        assert_eq!(substring_from("日本語", 1), "本語");
    }

    #[test]
    fn malformed_index_fails() {
        let err = solve(&mut LineReader::new("a\nb\ntwo\n")).unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidInteger {
                line: 3,
                field: "index",
                ..
            }
        ));
    }
}
