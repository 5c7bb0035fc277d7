//! JSON exporter

use crate::chart::Chart;
use crate::config::{Columns, Config};
use crate::error::{ChartsError, Result};
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput {
    header: String,
    charts: Vec<JsonChart>,
}

#[derive(Serialize)]
struct JsonChart {
    name: String,
    version: String,
    path: String,
}

impl Exporter for JsonExporter {
    fn export(&self, charts: &[Chart], config: &Config, writer: &mut dyn Write) -> Result<()> {
        let json = match config.columns {
            Columns::PathOnly => {
                let paths: Vec<String> = charts
                    .iter()
                    .map(|c| c.path.display().to_string())
                    .collect();
                serde_json::to_string_pretty(&paths)
            }
            Columns::NameOnly => {
                let names: Vec<&str> = charts.iter().map(|c| c.name.as_str()).collect();
                serde_json::to_string_pretty(&names)
            }
            Columns::All => serde_json::to_string_pretty(&JsonOutput {
                header: config.header(),
                charts: charts
                    .iter()
                    .map(|c| JsonChart {
                        name: c.name.clone(),
                        version: c.version.to_string(),
                        path: c.path.display().to_string(),
                    })
                    .collect(),
            }),
        }
        .map_err(|e| ChartsError::Other(e.to_string()))?;

        writeln!(writer, "{}", json)?;
        Ok(())
    }
}
