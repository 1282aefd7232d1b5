//! Input state for the generate action
//!
//! A [`Session`] holds the three inputs a front end collects (source file,
//! sheet, output file name). Every change re-runs the readiness check and
//! observers registered with [`Session::on_ready_changed`] are told when the
//! action becomes available or unavailable.

use crate::config::SheetUnionConfig;
use crate::error::TransformError;
use crate::reader::{self, SheetSelector};
use crate::transform::{self, TransformReport};
use crate::validator;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Called with the new readiness whenever it flips
pub type ReadyCallback = Box<dyn FnMut(bool) + Send>;

pub struct Session {
    config: SheetUnionConfig,
    source: Option<PathBuf>,
    sheet_names: Vec<String>,
    sheet: Option<String>,
    output_name: String,
    ready: bool,
    observers: Vec<ReadyCallback>,
}

impl Session {
    pub fn new(config: SheetUnionConfig) -> Self {
        Self {
            config,
            source: None,
            sheet_names: Vec::new(),
            sheet: None,
            output_name: String::new(),
            ready: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer for readiness changes
    pub fn on_ready_changed(&mut self, callback: ReadyCallback) {
        self.observers.push(callback);
    }

    /// Choose a new source file.
    ///
    /// Replaces the previous source and its sheets, selects the first sheet and
    /// resets the output name to `<stem>.<default_extension>`. When the sheets
    /// cannot be enumerated the path is kept but no sheet is selected.
    pub fn select_source<P: AsRef<Path>>(&mut self, path: P) -> Result<&[String], TransformError> {
        let path = path.as_ref();
        self.source = Some(path.to_path_buf());
        self.sheet_names.clear();
        self.sheet = None;

        let result = reader::sheet_names(path);
        if let Ok(names) = &result {
            self.sheet_names = names.clone();
            self.sheet = self.sheet_names.first().cloned();
            self.output_name = self.config.default_output_name(path);
            debug!(
                source = %path.display(),
                sheet = ?self.sheet,
                output = %self.output_name,
                "selected source"
            );
        }
        self.refresh();

        result.map(|_| self.sheet_names.as_slice())
    }

    /// Choose one of the enumerated sheets
    pub fn select_sheet(&mut self, sheet: &SheetSelector) -> Result<(), TransformError> {
        let name = sheet.resolve(&self.sheet_names)?.to_string();
        self.sheet = Some(name);
        self.refresh();
        Ok(())
    }

    /// Replace the raw output file name text
    pub fn set_output_name(&mut self, name: impl Into<String>) {
        self.output_name = name.into();
        self.refresh();
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Whether the generate action may run
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Output path: the trimmed output name inside the source file's directory
    pub fn destination(&self) -> Option<PathBuf> {
        let source = self.source.as_ref()?;
        let parent = source.parent().unwrap_or_else(|| Path::new(""));
        Some(parent.join(self.output_name.trim()))
    }

    /// Run the transformation with the current inputs
    pub fn run(&self) -> Result<TransformReport, TransformError> {
        if !self.ready {
            return Err(TransformError::SessionNotReady);
        }
        let (Some(source), Some(sheet), Some(destination)) =
            (self.source.as_ref(), self.sheet.as_ref(), self.destination())
        else {
            return Err(TransformError::SessionNotReady);
        };

        transform::transform(
            source,
            &SheetSelector::Name(sheet.clone()),
            destination,
            self.config.reader.header,
        )
    }

    fn refresh(&mut self) {
        let source_present = self
            .source
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty());
        let sheet_present = self.sheet.as_ref().is_some_and(|s| !s.is_empty());
        let ready = validator::is_ready(source_present, sheet_present, &self.output_name);

        if ready != self.ready {
            self.ready = ready;
            for observer in &mut self.observers {
                observer(ready);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SheetUnionConfig::default())
    }
}
