//! Recursive chart discovery

use super::validate::has_excluded_segment;
use super::{absolutize, is_valid_chart_root, load_chart, Chart};
use crate::error::Result;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Charts collected without repeats, sorted on output
#[derive(Debug, Default)]
pub struct ChartSet {
    charts: Vec<Chart>,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chart unless an equal one is already present.
    /// Returns whether the chart was added.
    pub fn insert(&mut self, chart: Chart) -> bool {
        if self.charts.contains(&chart) {
            return false;
        }
        self.charts.push(chart);
        true
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Charts ordered by name, then by path
    pub fn into_sorted(self) -> Vec<Chart> {
        let mut charts = self.charts;
        sort_charts(&mut charts);
        charts
    }
}

/// Sort charts by name, breaking ties by path
pub(crate) fn sort_charts(charts: &mut [Chart]) {
    charts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
}

/// List every chart below `root`.
///
/// Any chart root with unreadable metadata or an invalid version aborts the
/// whole scan.
pub fn scan(root: &Path, exclude_dirs: &[String], relative_paths: bool) -> Result<Vec<Chart>> {
    let root = absolutize(root)?;
    let mut found = ChartSet::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !has_excluded_segment(Path::new(e.file_name()), exclude_dirs)
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !is_valid_chart_root(path, exclude_dirs) {
            continue;
        }

        let mut chart = load_chart(path)?;
        if relative_paths {
            chart.make_relative(&root);
        }

        debug!(name = %chart.name, path = %chart.path.display(), "found chart");
        found.insert(chart);
    }

    Ok(found.into_sorted())
}
