//! Rendering chart listings

mod console;
mod json;

use crate::chart::Chart;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete listing for the given charts
    fn export(&self, charts: &[Chart], config: &Config, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Render the listing into memory so it can go to stdout and a file alike
pub fn render(charts: &[Chart], config: &Config) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    create_exporter(config.output_format).export(charts, config, &mut buf)?;
    Ok(buf)
}

/// Create (or truncate) `path`, creating missing parent directories
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    info!("Using file: {}", path.display());
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
