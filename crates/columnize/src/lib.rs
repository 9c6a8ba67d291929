//! CSV-aware column alignment with per-column justification.
//!
//! `columnize` takes tabular text (CSV lines, pre-split rows, a stream,
//! or a file path) and renders it as fixed-width columns, like a column
//! alignment utility that understands quoted fields. Each column is as
//! wide as its widest field; a justification spec chooses left or right
//! per column and may insert literal spacer gaps between columns.
//!
//! # Quick Start
//!
//! ```rust
//! use columnize::{columnize, Options, Source};
//!
//! let output = columnize(
//!     Source::lines(["Inventory", "apples,12", "pears,3"]),
//!     &Options::default(),
//! )
//! .unwrap();
//!
//! // Single-field rows pass through untouched.
//! assert_eq!(output.lines()[0], "Inventory");
//! assert_eq!(output.lines()[1], "apples   12");
//! assert_eq!(output.lines()[2], "pears     3");
//! ```
//!
//! # Input shapes
//!
//! [`Source`] names the four accepted shapes up front:
//!
//! ```text
//! Source
//! ├── Lines   raw text, split CSV-style per line
//! ├── Rows    pre-split cells, used as-is
//! ├── Reader  any std::io::Read, split like Lines
//! └── Path    a file on disk, split like Lines
//! ```
//!
//! # Justification
//!
//! The spec string holds one comma-separated token per column: `L`,
//! `R`, or a run of spaces inserted verbatim between two columns. A
//! spec shorter than the table repeats its last alignment token, so the
//! default `"L,R"` left-justifies the first column and right-justifies
//! every other one.
//!
//! ```rust
//! use columnize::{columnize, JustifySpec, Options, Source};
//!
//! let options = Options::default().justify(JustifySpec::parse("R").unwrap());
//! let output = columnize(Source::lines(["a,bb", "ccc,d"]), &options).unwrap();
//! assert_eq!(output.lines(), ["   a  bb", " ccc   d"]);
//! ```
//!
//! # Ragged input
//!
//! Rows whose field count disagrees with the rest of the table are
//! padded with empty fields rather than rejected. The run completes
//! with [`Status::Warnings`] and a [`ShapeWarning`] for each mismatch
//! the scan discovered; [`Status::code`] maps that to a conventional
//! process exit code.
//!
//! # Saving
//!
//! [`Options::save`] additionally writes the normalized table to
//! `<path>.csv` and the rendered lines to `<path>.txt`, growing each
//! extension only when the path does not already end with it.

mod error;
mod justify;
mod normalize;
mod render;
mod save;
mod source;
mod table;

// Re-export the whole public surface at the crate root
pub use error::{Error, ShapeProblem, ShapeWarning, Status};
pub use justify::{Align, JustifySpec};
pub use render::{columnize, Options, Output};
pub use source::{split_line, Source};
pub use table::{Cell, Row, Table};
