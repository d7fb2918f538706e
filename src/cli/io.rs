//! JSON I/O handling for CLI
//!
//! - Records: a JSON array read from a file
//! - Requests: JSON lines on stdin
//! - Responses: one JSON object per line on stdout, UTF-8 only

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::Value;

use crate::record::Record;

use super::errors::{CliError, CliResult};

/// Read a JSON array of records from a file
pub fn read_records(path: &Path) -> CliResult<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::input_error(format!("Invalid records in {}: {}", path.display(), e)))
}

/// Read JSON-lines requests from stdin, skipping blank lines
pub fn read_requests() -> impl Iterator<Item = CliResult<Value>> {
    parse_lines(io::stdin().lock())
}

fn parse_lines<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Value>> {
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| {
            let line = line.map_err(CliError::from)?;
            serde_json::from_str(&line)
                .map_err(|e| CliError::request_error(format!("Malformed request: {}", e)))
        })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(&response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(&response)
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_lines_skips_blank() {
        let input = Cursor::new("{\"op\":\"remove\",\"id\":\"1\"}\n\n   \n{\"op\":\"add\"}\n");
        let parsed: Vec<_> = parse_lines(input).collect();

        assert_eq!(parsed.len(), 2);
        assert!(parsed.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn test_parse_lines_reports_bad_json() {
        let input = Cursor::new("not json\n");
        let parsed: Vec<_> = parse_lines(input).collect();

        let err = parsed[0].as_ref().unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_REQUEST_ERROR");
    }

    #[test]
    fn test_read_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, r#"[{"id": 1, "name": "Zoe"}, {"id": "x", "name": "Amy"}]"#).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "1");
    }

    #[test]
    fn test_read_records_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = read_records(&path).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_INPUT_ERROR");
    }
}
