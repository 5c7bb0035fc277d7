//! Console (aligned table) exporter

use crate::chart::Chart;
use crate::config::{Columns, Config};
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Gap between table columns
const COLUMN_GAP: usize = 2;

/// Human-readable table exporter
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(&self, charts: &[Chart], config: &Config, writer: &mut dyn Write) -> Result<()> {
        match config.columns {
            Columns::PathOnly => {
                for chart in charts {
                    writeln!(writer, "{}", chart.path.display())?;
                }
            }
            Columns::NameOnly => {
                for chart in charts {
                    writeln!(writer, "{}", chart.name)?;
                }
            }
            Columns::All => {
                writeln!(writer, "{}", config.header())?;

                let mut rows = vec![[
                    "NAME".to_string(),
                    "VERSION".to_string(),
                    "PATH".to_string(),
                ]];
                rows.extend(charts.iter().map(|c| {
                    [
                        c.name.clone(),
                        c.version.to_string(),
                        c.path.display().to_string(),
                    ]
                }));

                let name_width = rows.iter().map(|r| r[0].chars().count()).max().unwrap_or(0);
                let version_width = rows.iter().map(|r| r[1].chars().count()).max().unwrap_or(0);

                for [name, version, path] in &rows {
                    writeln!(
                        writer,
                        "{:<nw$}{:<vw$}{}",
                        name,
                        version,
                        path,
                        nw = name_width + COLUMN_GAP,
                        vw = version_width + COLUMN_GAP,
                    )?;
                }
            }
        }
        Ok(())
    }
}
