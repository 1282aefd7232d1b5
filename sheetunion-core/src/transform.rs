//! Column to `select ... union all` generation

use crate::error::TransformError;
use crate::reader::{self, ColumnValues, SheetSelector};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Placed between two rendered `select` lines
pub const UNION_ALL_SEPARATOR: &str = "\n union all\n";

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub destination: PathBuf,
    pub sheet: String,
    /// Header text of the first column, when the sheet has a header row
    pub column_label: Option<String>,
    pub rows_written: usize,
}

/// Render one value as a select statement.
///
/// Quotes inside the value are written as-is.
pub fn render_select(value: &str) -> String {
    format!("select '{}'", value)
}

/// Render all values and join them with [`UNION_ALL_SEPARATOR`]
pub fn render_union_all<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| render_select(v.as_ref()))
        .collect::<Vec<_>>()
        .join(UNION_ALL_SEPARATOR)
}

/// Read the sheet and return the generated text without writing anything
pub fn render_sheet<P: AsRef<Path>>(
    source: P,
    sheet: &SheetSelector,
    header: bool,
) -> Result<String, TransformError> {
    read_and_render(source.as_ref(), sheet, header).map(|(_, text)| text)
}

fn read_and_render(
    source: &Path,
    sheet: &SheetSelector,
    header: bool,
) -> Result<(ColumnValues, String), TransformError> {
    let column = reader::read_first_column(source, sheet, header)?;
    if column.is_empty() {
        warn!(sheet = %column.sheet, "first column has no values");
    }
    let text = render_union_all(&column.values);
    Ok((column, text))
}

/// Generate the statements for `sheet` of `source` and write them to `destination`.
///
/// Any existing file at `destination` is overwritten. Nothing is written when
/// the source or sheet cannot be read.
pub fn transform<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    sheet: &SheetSelector,
    destination: Q,
    header: bool,
) -> Result<TransformReport, TransformError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let (column, text) = read_and_render(source, sheet, header)?;

    fs::write(destination, text).map_err(|e| TransformError::DestinationUnwritable {
        path: destination.to_path_buf(),
        source: e,
    })?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        rows = column.len(),
        "wrote union all statements"
    );

    let rows_written = column.len();
    Ok(TransformReport {
        destination: destination.to_path_buf(),
        sheet: column.sheet,
        column_label: column.header,
        rows_written,
    })
}
