//! Guest list text parsing
//!
//! Rows are `first name, last name[, group[, id]]`. Anything after the group
//! column is ignored. Fields are trimmed and stripped of surrounding quotes.

use shared::seating::GuestRow;

/// Rows read from one text upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    pub rows: Vec<GuestRow>,
    /// Non-blank lines without both a first and a last name
    pub dropped: usize,
    pub header_skipped: bool,
}

/// Parse comma-separated guest rows
pub fn parse_guest_rows(text: &str) -> ParsedRows {
    let mut parsed = ParsedRows::default();
    let mut seen_content = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(clean_field).collect();

        if !seen_content {
            seen_content = true;
            if is_header(&fields) {
                parsed.header_skipped = true;
                continue;
            }
        }

        let first = fields.first().copied().unwrap_or_default();
        let last = fields.get(1).copied().unwrap_or_default();
        if first.is_empty() || last.is_empty() {
            parsed.dropped += 1;
            continue;
        }
        let group = fields.get(2).copied().filter(|g| !g.is_empty());
        parsed.rows.push(GuestRow::new(first, last, group));
    }

    if parsed.dropped > 0 {
        tracing::debug!(dropped = parsed.dropped, "Dropped malformed guest rows");
    }
    parsed
}

fn clean_field(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

fn is_header(fields: &[&str]) -> bool {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase()
    };
    match (fields.first(), fields.get(1)) {
        (Some(first), Some(last)) => {
            matches!(normalize(first).as_str(), "firstname" | "first")
                && matches!(normalize(last).as_str(), "lastname" | "last" | "surname")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_with_header() {
        let text = "First Name,Last Name,Group\nJane,Smith,Family\nJohn,Doe,\n";
        let parsed = parse_guest_rows(text);
        assert!(parsed.header_skipped);
        assert_eq!(parsed.dropped, 0);
        assert_eq!(
            parsed.rows,
            vec![
                GuestRow::new("Jane", "Smith", Some("Family")),
                GuestRow::new("John", "Doe", None),
            ]
        );
    }

    #[test]
    fn test_trailing_id_column_is_ignored() {
        let parsed = parse_guest_rows("Ana,Ruiz,Friends,42\n");
        assert_eq!(parsed.rows, vec![GuestRow::new("Ana", "Ruiz", Some("Friends"))]);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let text = "Jane,Smith\nOnlyOne\n,Doe\n\n  \nBo,Lee\n";
        let parsed = parse_guest_rows(text);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.dropped, 2);
        assert!(!parsed.header_skipped);
    }

    #[test]
    fn test_quotes_and_whitespace_are_trimmed() {
        let parsed = parse_guest_rows("\"Jane\" , \" Smith +1\",\"Work\"\r\n");
        assert_eq!(parsed.rows, vec![GuestRow::new("Jane", "Smith +1", Some("Work"))]);
    }
}
