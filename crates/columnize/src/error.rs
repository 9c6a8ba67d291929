//! Error and status types for columnizing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Errors that abort a columnize run.
///
/// Ragged rows are not in this list: a row whose field count disagrees
/// with the rest of the table is recovered by padding and reported as a
/// [`ShapeWarning`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not point to readable text.
    #[error("Cannot read input '{}': {source}", path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input resolved to zero rows.
    #[error("No rows to columnize from {0}.")]
    EmptyInput(String),

    /// A justification token was not `L`, `R`, or a run of spaces.
    #[error("Unrecognized justify token '{0}'. Expected 'L', 'R', or spaces.")]
    InvalidJustifyToken(String),

    /// The justification spec has no `L` or `R` token to apply or repeat.
    #[error("Justify spec '{0}' contains no 'L' or 'R' token.")]
    NoJustifyToken(String),

    /// Reading a stream or writing a save file failed.
    #[error("File operation failed: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing or writing failed.
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Which way a row's field count disagreed with the running maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeProblem {
    /// The row had more fields than any data row before it.
    Extra,
    /// The row had fewer fields than the running maximum.
    Missing,
}

/// A row whose field count disagreed with the rest of the table.
///
/// Shape problems are recovered, not raised: the run completes with
/// [`Status::Warnings`] and the full set of warnings on the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeWarning {
    /// Which way the row disagreed.
    pub problem: ShapeProblem,
    /// 1-based index among data rows. Passthrough rows are not counted.
    pub row: usize,
    /// Field count expected at the time the row was seen.
    pub expected: usize,
    /// Field count the row actually had.
    pub found: usize,
    /// The offending row's fields as seen during the scan.
    pub fields: Vec<String>,
}

impl fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            ShapeProblem::Extra => write!(
                f,
                "row {} contains an extra column: {} fields instead of {}. Row: {:?}. Padding all previous rows.",
                self.row, self.found, self.expected, self.fields
            ),
            ShapeProblem::Missing => write!(
                f,
                "row {} is missing a column: {} fields instead of {}. Row: {:?}. Padding the row.",
                self.row, self.found, self.expected, self.fields
            ),
        }
    }
}

/// Completion status of a columnize run.
///
/// Fatal failures travel as [`Error`]; a status exists only when output
/// was produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every data row matched the resolved column count.
    #[default]
    Clean,
    /// Rows had to be padded to reconcile their field counts.
    Warnings,
}

impl Status {
    /// Conventional process exit code: `0` clean, `2` padded.
    pub fn code(self) -> i32 {
        match self {
            Status::Clean => 0,
            Status::Warnings => 2,
        }
    }
}
