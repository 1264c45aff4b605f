// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::data::{ConferenceRecord, HEADERS, header_row};

const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
/// Line breaks inside quoted fields are kept verbatim.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse an exported file back into records. A leading header row is skipped.
pub fn parse_records(text: &str) -> Vec<ConferenceRecord> {
    let mut rows = parse_rows(text);
    if rows.first().is_some_and(|r| r.iter().map(String::as_str).eq(HEADERS)) {
        rows.remove(0);
    }
    rows.into_iter().map(ConferenceRecord::from_row).collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row, then one row per record, in order.
pub fn write_records<W: Write>(mut w: W, records: &[ConferenceRecord]) -> io::Result<()> {
    write_row(&mut w, &header_row())?;
    for r in records {
        write_row(&mut w, &r.to_row())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, title: &str, link: &str, text: &str) -> ConferenceRecord {
        ConferenceRecord { date: s!(date), title: s!(title), link: s!(link), text: s!(text) }
    }

    fn to_string(records: &[ConferenceRecord]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_and_plain_rows() {
        let s = to_string(&[rec("4 January 2024", "A", "https://x/a", "body")]);
        assert_eq!(s, "date,title,link,text\n4 January 2024,A,https://x/a,body\n");
    }

    #[test]
    fn quotes_commas_quotes_and_newlines() {
        let s = to_string(&[rec("d", "Rates, again", "l", "He said \"no\".\nNext line")]);
        assert_eq!(
            s,
            "date,title,link,text\nd,\"Rates, again\",l,\"He said \"\"no\"\".\nNext line\"\n"
        );
    }

    #[test]
    fn parse_handles_crlf_and_embedded_newlines() {
        let rows = parse_rows("a,b\r\n\"x\r\ny\",\"q\"\"q\"\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["x\r\ny", "q\"q"]]);
    }

    #[test]
    fn parse_keeps_trailing_empty_cell() {
        let rows = parse_rows("d,t,l,\n");
        assert_eq!(rows, vec![vec!["d", "t", "l", ""]]);
    }

    #[test]
    fn records_survive_a_round_trip() {
        let records = vec![
            rec("4 January 2024", "Press Conference A", "https://x/a", "\nAnswer, with \"quotes\""),
            rec("25 January 2024", "Press Conference B", "https://x/b", ""),
        ];
        assert_eq!(parse_records(&to_string(&records)), records);
    }
}
