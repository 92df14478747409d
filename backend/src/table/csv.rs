//! Minimal CSV reader/writer
//!
//! Handles the subset of RFC 4180 cleanup datasets use: comma separators,
//! double-quoted fields containing commas or newlines, `""` as an escaped
//! quote, and LF or CRLF line endings. Fields are not trimmed.

/// Split CSV text into records of fields. Blank lines are skipped.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Distinguishes `a,` (two fields) from an empty line
    let mut record_started = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                record_started = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                record_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if record_started || !field.is_empty() {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                record_started = false;
            }
            _ => {
                field.push(c);
                record_started = true;
            }
        }
    }

    if record_started || !field.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

/// Quote a field when it contains a separator, quote or line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render one record as a CSV line (without the trailing newline)
pub fn format_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let records = parse_records("Zone,GPS\n\"Goa, India\",\"15.1, 73.9\"\n");
        assert_eq!(
            records,
            vec![
                vec!["Zone".to_string(), "GPS".to_string()],
                vec!["Goa, India".to_string(), "15.1, 73.9".to_string()],
            ]
        );
    }

    #[test]
    fn test_doubled_quotes_and_crlf() {
        let records = parse_records("a,b\r\n\"say \"\"hi\"\"\",2\r\n");
        assert_eq!(records[1], vec!["say \"hi\"".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_trailing_empty_field_and_blank_lines() {
        let records = parse_records("a,b\n\n1,\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], vec!["1".to_string(), String::new()]);
    }

    #[test]
    fn test_newline_inside_quotes() {
        let records = parse_records("note\n\"line one\nline two\"\n");
        assert_eq!(records[1], vec!["line one\nline two".to_string()]);
    }

    #[test]
    fn test_format_record_escapes() {
        let line = format_record(&["plain", "Goa, India", "6\" pipe"]);
        assert_eq!(line, "plain,\"Goa, India\",\"6\"\" pipe\"");
        assert_eq!(parse_records(&line)[0], vec!["plain", "Goa, India", "6\" pipe"]);
    }
}
