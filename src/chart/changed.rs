//! Mapping git changes to the charts that own them

use super::{absolutize, is_valid_chart_root, load_chart, Chart, ChartSet};
use crate::config::ChangedOptions;
use crate::error::{ChartsError, Result};
use crate::git::{ChangeLocator, Runner};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Walk upward from `changed` to the nearest chart root.
///
/// The walk stops with [`ChartsError::NoParentDirectory`] once it reaches
/// `root` (which is never reported itself) or the filesystem root.
pub fn find_chart_root(root: &Path, changed: &Path, exclude_dirs: &[String]) -> Result<PathBuf> {
    let mut current = changed;
    loop {
        if current == root {
            break;
        }
        if is_valid_chart_root(current, exclude_dirs) {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    Err(ChartsError::NoParentDirectory {
        path: changed.to_path_buf(),
    })
}

/// List charts below `root` changed between `<remote>/<branch>` and `commit`.
///
/// Git and repository failures abort. A changed file outside any chart, or a
/// chart whose metadata cannot be loaded, is skipped.
pub fn list_changed(
    root: &Path,
    exclude_dirs: &[String],
    opts: &ChangedOptions,
    relative_paths: bool,
) -> Result<Vec<Chart>> {
    let root = absolutize(root)?;
    let locator = ChangeLocator::open(&root, &opts.remote)?;
    changed_charts(
        &locator,
        &root,
        exclude_dirs,
        &opts.branch,
        &opts.commit,
        relative_paths,
    )
}

pub(crate) fn changed_charts<R: Runner>(
    locator: &ChangeLocator<R>,
    root: &Path,
    exclude_dirs: &[String],
    branch: &str,
    commit: &str,
    relative_paths: bool,
) -> Result<Vec<Chart>> {
    locator.verify_remote_configured()?;
    locator.fetch()?;

    let hash = locator.resolve_commit(commit)?;
    let upstream = format!("{}/{}", locator.remote(), branch);
    let base = locator.merge_base(&upstream, &hash)?;
    let changed = locator.list_changed_paths(&base, &hash)?;
    info!(files = changed.len(), base = %base, commit = %hash, "listed changed files");

    let mut visited = HashSet::new();
    let mut found = ChartSet::new();
    for file in &changed {
        let chart_root = match find_chart_root(root, file, exclude_dirs) {
            Ok(p) => p,
            Err(e) => {
                debug!("{}", e);
                continue;
            }
        };
        if !visited.insert(chart_root.clone()) {
            continue;
        }

        let mut chart = match load_chart(&chart_root) {
            Ok(c) => c,
            Err(e) => {
                warn!("failed to load chart metadata: {}", e);
                continue;
            }
        };

        if relative_paths && !chart.make_relative(root) {
            warn!(path = %chart.path.display(), "chart is outside the scanned directory");
            continue;
        }

        found.insert(chart);
    }

    if found.is_empty() {
        debug!("no chart owns any changed file");
    } else {
        info!(charts = found.len(), "resolved changed charts");
    }
    Ok(found.into_sorted())
}
