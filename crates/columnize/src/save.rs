//! Save-file collaborators.
//!
//! A save request writes two files next to the requested path: the
//! normalized table as CSV (so ragged input can be re-consumed as clean
//! CSV) and the rendered lines as plain text. Each file name grows the
//! matching extension unless the path already ends with it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::table::{Row, Table};

/// Write the normalized table and the rendered lines for `base`.
pub(crate) fn write_outputs(base: &Path, table: &Table, lines: &[String]) -> Result<(), Error> {
    let csv_path = ensure_extension(base, "csv");
    write_csv(&csv_path, table)?;
    let txt_path = ensure_extension(base, "txt");
    write_text(&txt_path, lines)?;
    debug!(csv = %csv_path.display(), txt = %txt_path.display(), "saved outputs");
    Ok(())
}

/// Write the table as CSV, one record per row.
///
/// Passthrough rows become single-field records, so the file mixes
/// record lengths and the writer must tolerate that.
fn write_csv(path: &Path, table: &Table) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in table.rows() {
        match row {
            Row::Passthrough(text) => writer.write_record([text.as_str()])?,
            // A record needs at least one field to occupy a line.
            Row::Data(fields) if fields.is_empty() => writer.write_record([""])?,
            Row::Data(fields) => writer.write_record(fields)?,
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the rendered lines, each terminated by a newline.
fn write_text(path: &Path, lines: &[String]) -> Result<(), Error> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Append `.extension` unless `path` already ends with it.
fn ensure_extension(path: &Path, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension);
    if path.to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(&suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn data(fields: &[&str]) -> Row {
        Row::Data(fields.iter().map(|f| f.to_string()).collect())
    }

    // --- extension tests ---

    #[test]
    fn extension_is_appended_when_missing() {
        assert_eq!(ensure_extension(Path::new("out"), "csv"), Path::new("out.csv"));
        assert_eq!(ensure_extension(Path::new("out"), "txt"), Path::new("out.txt"));
    }

    #[test]
    fn matching_extension_is_kept() {
        assert_eq!(
            ensure_extension(Path::new("out.csv"), "csv"),
            Path::new("out.csv")
        );
    }

    #[test]
    fn mismatched_extension_is_stacked() {
        assert_eq!(
            ensure_extension(Path::new("out.csv"), "txt"),
            Path::new("out.csv.txt")
        );
    }

    // --- file content tests ---

    #[test]
    fn csv_quotes_fields_with_embedded_delimiters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let table = Table::new(vec![data(&["x", "y,1", "z"])], 3);
        write_csv(&path, &table).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x,\"y,1\",z\n");
    }

    #[test]
    fn csv_keeps_passthrough_rows_as_single_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let table = Table::new(
            vec![Row::Passthrough("title".to_string()), data(&["a", "b"])],
            2,
        );
        write_csv(&path, &table).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "title\na,b\n");
    }

    #[test]
    fn empty_data_row_still_occupies_a_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let table = Table::new(vec![data(&[]), data(&["a"])], 0);
        write_csv(&path, &table).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn text_lines_end_with_newlines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("render.txt");
        write_text(&path, &["a   b".to_string(), "c   d".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a   b\nc   d\n");
    }

    #[test]
    fn write_outputs_produces_both_files() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("report");
        let table = Table::new(vec![data(&["a", "b"])], 2);
        write_outputs(&base, &table, &["a  b".to_string()]).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("report.csv")).unwrap(),
            "a,b\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("report.txt")).unwrap(),
            "a  b\n"
        );
    }

    #[test]
    fn unwritable_base_is_an_error() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("missing").join("report");
        let table = Table::new(vec![data(&["a"])], 1);
        assert!(write_outputs(&base, &table, &["a".to_string()]).is_err());
    }
}
