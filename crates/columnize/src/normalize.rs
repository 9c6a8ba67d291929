//! Row-shape reconciliation.
//!
//! Rows arrive with whatever field counts the input had. Reconciliation
//! establishes the column count as the running maximum over data rows
//! and pads short rows with empty fields. Each mismatch warns once and
//! pads every row to the new count, so later rows the padding already
//! reached scan clean. Passthrough rows pass the scan untouched.

use tracing::{debug, warn};

use crate::error::{ShapeProblem, ShapeWarning};
use crate::table::{Row, Table};

/// Reconcile classified rows into a uniform-width table.
///
/// Returns the new table plus the warnings the scan produced. A row
/// wider than the running column count warns and raises the count; a
/// shorter row warns only when no earlier warning has padded it to
/// size already. The column count only grows, and every data row ends
/// up resized to the final count.
pub(crate) fn reconcile(mut rows: Vec<Row>) -> (Table, Vec<ShapeWarning>) {
    let mut warnings = Vec::new();
    let mut columns: Option<usize> = None;
    let mut padded = 0usize;
    let mut data_row = 0usize;

    for row in &rows {
        let Row::Data(fields) = row else { continue };
        data_row += 1;
        let expected = match columns {
            Some(count) => count,
            None => {
                columns = Some(fields.len());
                continue;
            }
        };
        let found = fields.len();
        let problem = if found > expected {
            columns = Some(found);
            ShapeProblem::Extra
        } else if found.max(padded) < expected {
            ShapeProblem::Missing
        } else {
            continue;
        };
        let warning = ShapeWarning {
            problem,
            row: data_row,
            expected,
            found,
            fields: fields.clone(),
        };
        warn!(%warning, "reshaping row");
        warnings.push(warning);
        // Every warning pads every row to the new count, so trailing
        // rows no wider than `padded` are already reconciled.
        padded = expected.max(found);
    }

    let columns = columns.unwrap_or(0);
    for row in &mut rows {
        if let Row::Data(fields) = row {
            // columns is the maximum over data rows, so this only grows.
            fields.resize(columns, String::new());
        }
    }
    debug!(
        columns,
        rows = rows.len(),
        warnings = warnings.len(),
        "reconciled table"
    );
    (Table::new(rows, columns), warnings)
}
