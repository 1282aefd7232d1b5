//! sheetunion-core: turn a spreadsheet column into `select ... union all` statements
//!
//! The first column of a sheet is read (header row skipped, blank cells dropped)
//! and every value becomes `select '<value>'`, joined by `union all`.

pub mod config;
pub mod error;
pub mod reader;
pub mod session;
pub mod transform;
pub mod validator;

pub use config::SheetUnionConfig;
pub use error::{OutputNameError, TransformError};
pub use reader::{ColumnValues, SheetSelector};
pub use session::Session;
pub use transform::{TransformReport, render_sheet, render_union_all, transform};
pub use validator::{is_ready, is_valid_output_name, validate_output_name};
