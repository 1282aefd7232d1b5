use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetunion_core::{Session, SheetSelector, SheetUnionConfig, render_sheet, validate_output_name};
use std::path::{Path, PathBuf};
use tracing::debug;

mod formatter;
mod logging;

#[derive(Parser)]
#[command(name = "sheetunion")]
#[command(about = "Generate select ... union all statements from the first column of a sheet", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Sheet to read (defaults to the first sheet)
    #[arg(short, long, value_name = "NAME", conflicts_with = "sheet_index")]
    sheet: Option<String>,

    /// Zero-based position of the sheet to read
    #[arg(long, value_name = "N")]
    sheet_index: Option<usize>,

    /// Output file name, written next to FILE (defaults to <stem>.out)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// List the sheets of FILE and exit
    #[arg(long)]
    list_sheets: bool,

    /// Print the statements instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

fn load_config(path: Option<&Path>) -> Result<SheetUnionConfig> {
    let config = if let Some(config_path) = path {
        SheetUnionConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("sheetunion.toml");
        if default_config_path.exists() {
            SheetUnionConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            SheetUnionConfig::default()
        }
    };

    config.validate().context("Invalid configuration")?;
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let header = config.reader.header;
    let mut session = Session::new(config);

    session
        .select_source(&cli.file)
        .with_context(|| format!("Failed to open {}", cli.file.display()))?;

    if cli.list_sheets {
        match cli.format {
            OutputFormat::Human => formatter::print_sheets_human(&cli.file, session.sheet_names()),
            OutputFormat::Json => formatter::print_sheets_json(&cli.file, session.sheet_names())?,
        }
        return Ok(());
    }

    let selector = match (&cli.sheet, cli.sheet_index) {
        (Some(name), _) => Some(SheetSelector::Name(name.clone())),
        (None, Some(index)) => Some(SheetSelector::Index(index)),
        (None, None) => None,
    };
    if let Some(selector) = selector {
        session
            .select_sheet(&selector)
            .context("Failed to select sheet")?;
    }

    if let Some(output) = &cli.output {
        session.set_output_name(output.as_str());
    }
    validate_output_name(session.output_name()).context("Invalid output file name")?;

    if !session.is_ready() {
        anyhow::bail!("Workbook {} has no sheet to read", cli.file.display());
    }

    if cli.dry_run {
        let sheet = SheetSelector::Name(session.sheet().unwrap_or_default().to_string());
        let text = render_sheet(&cli.file, &sheet, header)
            .with_context(|| format!("Failed to read sheet {}", sheet))?;
        println!("{}", text);
        return Ok(());
    }

    let report = session
        .run()
        .context("Failed to generate union all statements")?;

    match cli.format {
        OutputFormat::Human => formatter::print_report_human(&cli.file, &report),
        OutputFormat::Json => formatter::print_report_json(&cli.file, &report)?,
    }

    Ok(())
}
