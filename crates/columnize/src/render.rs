//! Width computation and line rendering.
//!
//! [`columnize`] is the crate's entry point: it resolves a [`Source`]
//! into rows, reconciles their field counts, and renders one line per
//! row with every column padded to its widest field. Passthrough rows
//! skip all of that and come out exactly as they went in.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, ShapeWarning, Status};
use crate::justify::{Align, JustifySpec, Token};
use crate::normalize;
use crate::save;
use crate::source::Source;
use crate::table::{Row, Table};

/// Knobs for a columnize run.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Per-column justification. Defaults to `"L,R"`.
    pub justify: JustifySpec,
    /// When set, write the normalized table and the rendered lines next
    /// to this path as `.csv` and `.txt` files.
    pub save: Option<PathBuf>,
}

impl Options {
    /// Replace the justification spec.
    pub fn justify(mut self, spec: JustifySpec) -> Self {
        self.justify = spec;
        self
    }

    /// Write `.csv` and `.txt` files derived from `path` after rendering.
    pub fn save(mut self, path: impl Into<PathBuf>) -> Self {
        self.save = Some(path.into());
        self
    }
}

/// The product of a columnize run: rendered lines plus any shape
/// warnings picked up while reconciling row widths.
#[derive(Clone, Debug)]
pub struct Output {
    lines: Vec<String>,
    warnings: Vec<ShapeWarning>,
}

impl Output {
    /// Rendered lines, one per surviving input row, in input order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the output, yielding the rendered lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Rows whose field count disagreed with the rest of the table.
    pub fn warnings(&self) -> &[ShapeWarning] {
        &self.warnings
    }

    /// [`Status::Clean`] when no row needed padding.
    pub fn status(&self) -> Status {
        if self.warnings.is_empty() {
            Status::Clean
        } else {
            Status::Warnings
        }
    }
}

/// Align `source` into fixed-width columns.
///
/// Fails when the source cannot be read, resolves to zero rows, or a
/// requested save file cannot be written. Ragged rows do not fail: they
/// are padded, reported on the output, and reflected in its status.
///
/// # Example
///
/// ```rust
/// use columnize::{columnize, Options, Source};
///
/// let output = columnize(
///     Source::lines(["name,qty", "total,12"]),
///     &Options::default(),
/// )
/// .unwrap();
/// assert_eq!(output.lines(), ["name    qty", "total    12"]);
/// ```
pub fn columnize(source: Source, options: &Options) -> Result<Output, Error> {
    let origin = source.describe();
    let rows = source.resolve()?;
    if rows.is_empty() {
        return Err(Error::EmptyInput(origin));
    }
    debug!(source = %origin, rows = rows.len(), "resolved input");

    let (table, warnings) = normalize::reconcile(rows);
    let lines = render(&table, &options.justify);
    if let Some(path) = &options.save {
        save::write_outputs(path, &table, &lines)?;
    }
    Ok(Output { lines, warnings })
}

/// Render one line per row, data rows padded column by column.
fn render(table: &Table, spec: &JustifySpec) -> Vec<String> {
    let widths = column_widths(table);
    let plan = spec.resolve(table.columns());
    debug!(columns = table.columns(), ?widths, "rendering table");
    table
        .rows()
        .iter()
        .map(|row| match row {
            Row::Passthrough(text) => text.clone(),
            Row::Data(fields) => render_row(fields, &plan, &widths),
        })
        .collect()
}

/// Per-column maximum character count across data rows.
///
/// Runs after reconciliation, so every data row has a field for every
/// column. Width is measured in characters, not bytes.
fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0usize; table.columns()];
    for row in table.rows() {
        let Row::Data(fields) = row else { continue };
        for (column, field) in fields.iter().enumerate() {
            if let Some(width) = widths.get_mut(column) {
                *width = (*width).max(field.chars().count());
            }
        }
    }
    widths
}

/// Build one line from a data row.
///
/// Alignment tokens consume a column and pad its field to the column
/// width plus one. Consecutive aligned segments are joined with a
/// single space; a spacer is emitted verbatim and supplies its own
/// separation, so no space is added on either side of it.
fn render_row(fields: &[String], plan: &[Token], widths: &[usize]) -> String {
    let mut line = String::new();
    let mut column = 0;
    let mut separate = false;
    for token in plan {
        match token {
            Token::Spacer(gap) => {
                line.push_str(gap);
                separate = false;
            }
            Token::Align(align) => {
                if separate {
                    line.push(' ');
                }
                let field = fields.get(column).map(String::as_str).unwrap_or("");
                let width = widths.get(column).copied().unwrap_or(0) + 1;
                match align {
                    Align::Left => line.push_str(&format!("{:<width$}", field, width = width)),
                    Align::Right => line.push_str(&format!("{:>width$}", field, width = width)),
                }
                separate = true;
                column += 1;
            }
        }
    }
    line
}
