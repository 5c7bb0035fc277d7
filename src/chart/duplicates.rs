//! Duplicate chart detection

use super::scanner::sort_charts;
use super::{scan, Chart};
use crate::config::ReportMode;
use crate::error::Result;
use std::path::Path;

/// Find charts that share a name with a chart at a different path.
///
/// In [`ReportMode::Pairwise`] a chart appears once for every namesake it
/// collides with; three charts named `common` yield six entries. In
/// [`ReportMode::Grouped`] each colliding chart appears once.
pub fn find_duplicates(
    root: &Path,
    exclude_dirs: &[String],
    relative_paths: bool,
    mode: ReportMode,
) -> Result<Vec<Chart>> {
    let charts = scan(root, exclude_dirs, relative_paths)?;
    Ok(collect_duplicates(&charts, mode))
}

fn collect_duplicates(charts: &[Chart], mode: ReportMode) -> Vec<Chart> {
    let mut dups = Vec::new();
    for i in charts {
        let partners = charts
            .iter()
            .filter(|j| i.name == j.name && i.path != j.path)
            .count();
        let copies = match mode {
            ReportMode::Pairwise => partners,
            ReportMode::Grouped => partners.min(1),
        };
        dups.extend(std::iter::repeat(i).take(copies).cloned());
    }
    sort_charts(&mut dups);
    dups
}
