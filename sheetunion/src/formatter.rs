//! Output formatters for run outcomes

use anyhow::Result;
use colored::*;
use sheetunion_core::TransformReport;
use std::path::Path;

/// Print the sheets of a workbook, marking the default selection
pub fn print_sheets_human(file_path: &Path, sheets: &[String]) {
    println!("{}", format!("Sheets in {}:", file_path.display()).bold());
    for (index, name) in sheets.iter().enumerate() {
        let marker = if index == 0 { "*" } else { " " };
        println!("  {} {} {}", marker, format!("#{}", index).bright_black(), name.cyan());
    }
}

pub fn print_sheets_json(file_path: &Path, sheets: &[String]) -> Result<()> {
    let output = serde_json::json!({
        "file": file_path.display().to_string(),
        "sheets": sheets,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_report_human(source: &Path, report: &TransformReport) {
    println!(
        "{} {} statements from sheet {}",
        "✓ Generated".green().bold(),
        report.rows_written,
        report.sheet.cyan().bold()
    );
    println!("  {} {}", "Source:".bold(), source.display());
    if let Some(label) = &report.column_label {
        println!("  {} {}", "Column:".bold(), label);
    }
    println!("  {} {}", "Output:".bold(), report.destination.display());
    if report.rows_written == 0 {
        println!("  {}", "First column has no values; output file is empty".yellow());
    }
}

pub fn print_report_json(source: &Path, report: &TransformReport) -> Result<()> {
    let output = serde_json::json!({
        "source": source.display().to_string(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
