//! Workbook data structures

use crate::error::TransformError;
use std::fmt;

/// Selects one sheet of a workbook, by name or by zero-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Name(String),
    Index(usize),
}

impl SheetSelector {
    /// Resolve against the sheet names enumerated from the workbook
    pub fn resolve<'a>(&self, sheet_names: &'a [String]) -> Result<&'a str, TransformError> {
        let found = match self {
            SheetSelector::Name(name) => sheet_names.iter().find(|s| *s == name),
            SheetSelector::Index(index) => sheet_names.get(*index),
        };

        found.map(String::as_str).ok_or_else(|| TransformError::SheetNotFound {
            sheet: self.to_string(),
            available: sheet_names.to_vec(),
        })
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Name(name) => write!(f, "{}", name),
            SheetSelector::Index(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        SheetSelector::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        SheetSelector::Name(name)
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Already formatted as `YYYY-MM-DD HH:MM:SS`
    DateTime(String),
    Error(String),
}

impl CellValue {
    /// Check if the cell counts as missing (no value, blank text or an error)
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty | CellValue::Error(_) => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Default textual form of the value, `None` for missing cells
    pub fn to_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            CellValue::Integer(i) => Some(i.to_string()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) | CellValue::DateTime(s) => Some(s.clone()),
            CellValue::Boolean(b) => Some(b.to_string()),
            CellValue::Empty | CellValue::Error(_) => None,
        }
    }
}

/// Non-empty values of the first column of a sheet, top to bottom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    pub sheet: String,
    /// Label of the column when the sheet has a header row
    pub header: Option<String>,
    pub values: Vec<String>,
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
