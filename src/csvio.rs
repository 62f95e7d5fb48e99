use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use encoding_rs::UTF_8;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// An in-memory CSV table: header row kept verbatim plus data rows. Rows may
/// have fewer than two columns; short rows pass through untouched downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a whole CSV table, decoding as UTF-8 with BOM sniffing. The first
/// row is the header; a file without even a header row is an error.
pub fn read_table(path: &Path) -> anyhow::Result<Table> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read csv: {}", path.display()))?;
    let (text, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        return Err(anyhow!("invalid utf-8: {}", path.display()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(rec) => rec
            .with_context(|| format!("parse csv header: {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect(),
        None => return Err(anyhow!("empty csv, no header row: {}", path.display())),
    };

    let mut rows = Vec::new();
    for rec in records {
        let rec = rec.with_context(|| format!("parse csv row: {}", path.display()))?;
        rows.push(rec.iter().map(str::to_string).collect());
    }

    Ok(Table { header, rows })
}

/// Write a table as UTF-8 with a BOM prefix, all fields quoted. Returns the
/// number of data rows written (header excluded).
pub fn write_table(path: &Path, header: &[String], rows: &[Vec<String>]) -> anyhow::Result<usize> {
    let mut file =
        File::create(path).with_context(|| format!("create csv: {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("write bom: {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .flexible(true)
        .from_writer(file);
    writer
        .write_record(header)
        .with_context(|| format!("write csv header: {}", path.display()))?;
    for row in rows {
        writer
            .write_record(row)
            .with_context(|| format!("write csv row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;

    Ok(rows.len())
}

/// Derive the two half-output paths from the input path by inserting
/// `-part1` / `-part2` before the extension.
#[must_use]
pub fn part_paths(input: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let part = |n: usize| match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => input.with_file_name(format!("{stem}-part{n}.{ext}")),
        None => input.with_file_name(format!("{stem}-part{n}")),
    };
    (part(1), part(2))
}

#[cfg(test)]
mod tests {
    use super::{part_paths, read_table, write_table};
    use std::path::{Path, PathBuf};

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tm-splitter-csvio-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir.join(name)
    }

    #[test]
    fn part_path_derivation() {
        let (p1, p2) = part_paths(Path::new("/data/export-language.csv"));
        assert_eq!(p1, Path::new("/data/export-language-part1.csv"));
        assert_eq!(p2, Path::new("/data/export-language-part2.csv"));

        let (p1, _) = part_paths(Path::new("export"));
        assert_eq!(p1, Path::new("export-part1"));
    }

    #[test]
    fn round_trip_preserves_header_and_rows() {
        let path = temp_path("round-trip.csv");
        let header = vec!["en".to_string(), "ar".to_string()];
        let rows = vec![
            vec!["Hello".to_string(), "مرحبا".to_string()],
            vec!["only one column".to_string()],
            vec!["a,b \"quoted\"".to_string(), String::new()],
        ];

        let written = write_table(&path, &header, &rows).expect("write table");
        assert_eq!(written, 3);

        let table = read_table(&path).expect("read table");
        assert_eq!(table.header, header);
        assert_eq!(table.rows, rows);
    }

    #[test]
    fn output_starts_with_bom_and_quotes_all_fields() {
        let path = temp_path("bom.csv");
        let header = vec!["en".to_string(), "ar".to_string()];
        write_table(&path, &header, &[vec!["x".to_string(), "y".to_string()]])
            .expect("write table");

        let bytes = std::fs::read(&path).expect("read bytes");
        assert_eq!(&bytes[..3], &b"\xef\xbb\xbf"[..]);
        let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8");
        assert!(text.starts_with("\"en\",\"ar\""));
        assert!(text.contains("\"x\",\"y\""));
    }

    #[test]
    fn bom_is_stripped_on_read() {
        let path = temp_path("bom-read.csv");
        std::fs::write(&path, "\u{feff}en,ar\nHello,\n").expect("write raw");
        let table = read_table(&path).expect("read table");
        assert_eq!(table.header, vec!["en".to_string(), "ar".to_string()]);
        assert_eq!(table.rows, vec![vec!["Hello".to_string(), String::new()]]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_table(Path::new("/no/such/file.csv")).is_err());
    }
}
