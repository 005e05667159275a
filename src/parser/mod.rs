//! Source CSV loading with encoding auto-detection.
//!
//! Reads the comma-delimited source table into JSON objects keyed by header
//! name. No income-specific logic here; projection happens in
//! [`crate::transform::project`].

use serde_json::{json, Map, Value};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed rows as JSON objects, in source order
    pub records: Vec<Value>,
    /// Detected encoding of the source bytes
    pub encoding: String,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.to_string(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        // UTF-8 and anything unrecognized: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Parse the source CSV file.
///
/// Detects the encoding, decodes, and parses as comma-delimited text with a
/// header row.
///
/// # Errors
/// - [`CsvError::SourceNotFound`] if the file does not exist
/// - [`CsvError::Parse`] if the content is not valid delimited text
/// - [`CsvError::EmptyFile`] / [`CsvError::NoHeaders`] on degenerate input
pub fn parse_source_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CsvError::SourceNotFound(path.to_path_buf())
        } else {
            CsvError::Io(e)
        }
    })?;

    parse_bytes(&bytes)
}

/// Parse CSV bytes with encoding auto-detection.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    parse_content(&content, encoding)
}

/// Parse decoded CSV content into JSON objects.
///
/// Each row becomes a JSON object where keys are column headers. Rows shorter
/// than the header get empty strings for the missing cells; extra cells are
/// ignored.
fn parse_content(content: &str, encoding: String) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| CsvError::Parse(e.to_string()))?;

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let raw_value = row.get(i).unwrap_or("");
            obj.insert(header.clone(), json!(raw_value));
        }

        records.push(Value::Object(obj));
    }

    Ok(ParseResult {
        records,
        encoding,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let csv = "ZIP,AVG_INC_HH\n10007,250000\n10001,90000";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        assert_eq!(result.headers, vec!["ZIP", "AVG_INC_HH"]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0]["ZIP"], "10007");
        assert_eq!(result.records[1]["AVG_INC_HH"], "90000");
    }

    #[test]
    fn test_quoted_coordinate_field() {
        // The coordinate column contains the delimiter, so it arrives quoted
        let csv = "ZIP,COORDINATES\n10007,\"40.7128, -74.0060\"";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        assert_eq!(result.records[0]["COORDINATES"], "40.7128, -74.0060");
    }

    #[test]
    fn test_missing_values() {
        let csv = "a,b,c\n1,,3";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        assert_eq!(result.records[0]["a"], "1");
        assert_eq!(result.records[0]["b"], "");
        assert_eq!(result.records[0]["c"], "3");
    }

    #[test]
    fn test_short_row_padded() {
        let csv = "a,b,c\n1,2";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        assert_eq!(result.records[0]["c"], "");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "a,b\n1,2,3,4";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        assert_eq!(result.records[0]["a"], "1");
        assert_eq!(result.records[0]["b"], "2");
        assert!(result.records[0].get("c").is_none());
    }

    #[test]
    fn test_empty_file_error() {
        let result = parse_bytes(b"");
        assert!(matches!(result, Err(CsvError::EmptyFile)));

        let result = parse_bytes(b"   \n  \n");
        assert!(matches!(result, Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_source_not_found() {
        let result = parse_source_file("no/such/file.csv");
        assert!(matches!(result, Err(CsvError::SourceNotFound(_))));
    }

    #[test]
    fn test_row_order_preserved() {
        let csv = "ZIP\n3\n1\n2";
        let result = parse_bytes(csv.as_bytes()).unwrap();

        let zips: Vec<&str> = result
            .records
            .iter()
            .map(|r| r["ZIP"].as_str().unwrap())
            .collect();
        assert_eq!(zips, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert!(decoded.contains("Soci"));
    }

    #[test]
    fn test_detect_utf8() {
        assert_eq!(detect_encoding(b"ZIP,AVG_INC_HH\n10007,90000"), "utf-8");
    }
}
