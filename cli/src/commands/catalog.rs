use primer_core::api::Exercise;

use crate::commands::cli::ListFormat;

pub fn render_list(format: ListFormat) -> Result<String, serde_json::Error> {
    match format {
        ListFormat::Json => serde_json::to_string_pretty(Exercise::catalog()),
        ListFormat::Text => Ok(Exercise::catalog()
            .iter()
            .map(|info| format!("{:02}  {:<22}  {}", info.number, info.slug, info.title))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_fields(exercise: Exercise) -> Vec<String> {
    exercise
        .info()
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}. {} ({})", i + 1, f.name, f.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_list_has_one_row_per_exercise() {
        let text = render_list(ListFormat::Text).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 7);
        assert!(rows[0].starts_with("01  variable-declaration"));
        assert!(rows[6].ends_with("Nested Conditionals"));
    }

    #[test]
    fn json_list_carries_fields() {
        let json = render_list(ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[3]["slug"], "string-operations");
        assert_eq!(entries[3]["number"], 7);
        assert_eq!(entries[3]["fields"][2]["name"], "index");
        assert_eq!(entries[3]["fields"][2]["kind"], "integer");
    }

    #[test]
    fn describe_lists_fields_in_input_order() {
        assert_eq!(
            render_fields(Exercise::BasicInputOutput),
            vec![
                "1. name (text)",
                "2. age (integer)",
                "3. height (float)",
                "4. language (text)",
            ]
        );
    }
}
