//! Input sources and CSV field splitting.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;
use crate::table::{Cell, Row};

/// Tagged input for a columnize run, resolved once at the boundary.
///
/// The text shapes (`Lines`, `Reader`, `Path`) are split line by line
/// with CSV rules: a double-quoted field keeps its embedded commas,
/// single quotes are not special, and blank lines are dropped. `Rows`
/// input skips splitting entirely.
///
/// # Example
///
/// ```rust
/// use columnize::{Cell, Source};
///
/// let source = Source::rows(vec![
///     vec![Cell::from("apples"), Cell::from(12)],
///     vec![Cell::from("plums"), Cell::from(None::<u32>)],
/// ]);
/// ```
pub enum Source {
    /// Delimited text lines, one row per line.
    Lines(Vec<String>),
    /// Pre-split field rows, used as-is.
    Rows(Vec<Vec<Cell>>),
    /// A readable stream of delimited text.
    Reader(Box<dyn Read>),
    /// Path to a delimited-text file.
    Path(PathBuf),
}

impl Source {
    /// Rows from delimited text lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Source::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Rows from pre-split fields. Anything convertible to [`Cell`]
    /// works as a field.
    pub fn rows<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Source::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Rows from a readable stream of delimited text.
    pub fn reader(reader: impl Read + 'static) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Rows from a delimited-text file.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Source::Path(path.into())
    }

    /// Short description of the input for diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self {
            Source::Lines(lines) => format!("{} text line(s)", lines.len()),
            Source::Rows(rows) => format!("{} pre-split row(s)", rows.len()),
            Source::Reader(_) => "stream".to_string(),
            Source::Path(path) => format!("file '{}'", path.display()),
        }
    }

    /// Resolve the input into classified rows.
    ///
    /// Consumes the source: a stream can only be read once.
    pub(crate) fn resolve(self) -> Result<Vec<Row>, Error> {
        match self {
            Source::Lines(lines) => {
                debug!(lines = lines.len(), "splitting text lines");
                rows_from_lines(lines.iter().map(String::as_str))
            }
            Source::Rows(rows) => {
                debug!(rows = rows.len(), "using pre-split rows");
                Ok(rows
                    .into_iter()
                    .map(|fields| {
                        Row::from_fields(fields.into_iter().map(Cell::into_string).collect())
                    })
                    .collect())
            }
            Source::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                debug!(bytes = buffer.len(), "read stream");
                rows_from_lines(buffer.lines())
            }
            Source::Path(path) => {
                let content = fs::read_to_string(&path).map_err(|source| Error::InvalidInput {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = content.len(), "read file");
                rows_from_lines(content.lines())
            }
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn rows_from_lines<'a, I>(lines: I) -> Result<Vec<Row>, Error>
where
    I: Iterator<Item = &'a str>,
{
    let mut rows = Vec::new();
    for line in lines {
        if let Some(fields) = split_line(line)? {
            rows.push(Row::from_fields(fields));
        }
    }
    Ok(rows)
}

/// Split one line of delimited text into fields.
///
/// Returns `None` for a blank line. Each line is parsed on its own, so a
/// quoted field never spans lines.
pub fn split_line(line: &str) -> Result<Option<Vec<String>>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(record) => {
            let record = record?;
            Ok(Some(record.iter().map(str::to_string).collect()))
        }
        None => Ok(None),
    }
}
