//! Naive delimiter-based parsing of the directory file.
//!
//! The format is deliberately simple: the first line is a comma-separated
//! header, every following non-blank line is a comma-separated row, and
//! each field is trimmed of surrounding whitespace. There is no quoting or
//! escaping support, so a value containing a literal comma mis-splits.
//! That limitation is part of the file format contract, not something to
//! repair here.

use std::collections::HashMap;

/// One parsed data row: header name to trimmed field value.
pub type Row = HashMap<String, String>;

/// Parse delimited text into rows, preserving input order.
///
/// The header row itself is not a record. Blank lines (after trimming)
/// produce nothing. A row shorter than the header fills the missing fields
/// with empty strings; fields beyond the header width are dropped.
pub fn parse(text: &str) -> Vec<Row> {
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        let mut row = Row::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or("");
            row.insert((*header).to_string(), value.to_string());
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let rows = parse("a,b,c\n1,2,3");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[0]["c"], "3");
    }

    #[test]
    fn test_short_row_pads_missing_fields() {
        let rows = parse("a,b,c\n1,2");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[0]["c"], "");
    }

    #[test]
    fn test_long_row_drops_extra_fields() {
        let rows = parse("a,b\n1,2,3,4");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse("a,b\n1,2\n\n   \n3,4\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[1]["a"], "3");
    }

    #[test]
    fn test_headers_and_values_trimmed() {
        let rows = parse(" a , b \n 1 ,2  ");
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse("a,b\r\n1,2\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_comma_inside_value_missplits() {
        // No quoting support: the comma splits the field.
        let rows = parse("name,specialty\nMaru,Iced latte, house blend");
        assert_eq!(rows[0]["specialty"], "Iced latte");
    }

    #[test]
    fn test_row_order_is_source_order() {
        let rows = parse("n\nzebra\napple\nmango");
        let names: Vec<&str> = rows.iter().map(|r| r["n"].as_str()).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_unrecognized_columns_are_kept() {
        let rows = parse("name,wifi\nMaru,yes");
        assert_eq!(rows[0]["wifi"], "yes");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("a,b,c").is_empty());
        assert!(parse("a,b,c\n\n").is_empty());
    }
}
