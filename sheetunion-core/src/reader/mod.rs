//! Excel/ODS file reader using calamine

use crate::error::TransformError;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

pub mod workbook;

pub use workbook::{CellValue, ColumnValues, SheetSelector};

/// List the sheet names of a workbook, in workbook order
pub fn sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TransformError> {
    let path = path.as_ref();
    let excel = open_workbook_auto(path).map_err(|e| TransformError::unreadable(path, e))?;
    let names = excel.sheet_names();
    debug!(path = %path.display(), sheets = names.len(), "enumerated sheets");
    Ok(names)
}

/// Read the non-empty values of column `A` of the selected sheet.
///
/// With `header` set, the first row holding any data is taken as the column
/// label and is not part of the values.
pub fn read_first_column<P: AsRef<Path>>(
    path: P,
    sheet: &SheetSelector,
    header: bool,
) -> Result<ColumnValues, TransformError> {
    let path = path.as_ref();
    let mut excel = open_workbook_auto(path).map_err(|e| TransformError::unreadable(path, e))?;

    let names = excel.sheet_names();
    let name = sheet.resolve(&names)?.to_string();

    let range = excel
        .worksheet_range(&name)
        .map_err(|e| TransformError::unreadable(path, e))?;

    let column = first_column(&name, &range, header);
    debug!(
        path = %path.display(),
        sheet = %name,
        values = column.len(),
        "read first column"
    );
    Ok(column)
}

fn first_column(name: &str, range: &Range<Data>, header: bool) -> ColumnValues {
    let mut column = ColumnValues {
        sheet: name.to_string(),
        ..Default::default()
    };

    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return column;
    };

    let mut first_row = start.0;
    if header {
        column.header = range
            .get_value((start.0, 0))
            .and_then(|cell| parse_cell_value(cell).to_text());
        first_row += 1;
    }

    // Positions are absolute, so column A is read even when the used range
    // starts further right (those cells simply come back as `None`).
    for row in first_row..=end.0 {
        if let Some(text) = range
            .get_value((row, 0))
            .and_then(|cell| parse_cell_value(cell).to_text())
        {
            column.values.push(text);
        }
    }

    column
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
