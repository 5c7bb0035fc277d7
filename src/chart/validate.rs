//! Chart root detection

use super::CHART_METADATA_FILE;
use std::path::{Component, Path};

/// Check whether `path` is a chart root.
///
/// The path must be absolute, none of its segments may equal an excluded
/// directory name, and it must directly contain `Chart.yaml`. Exclusions match
/// whole segments only, so excluding `charts` leaves `my-charts` alone.
pub fn is_valid_chart_root(path: &Path, exclude_dirs: &[String]) -> bool {
    if !path.is_absolute() {
        return false;
    }

    if has_excluded_segment(path, exclude_dirs) {
        return false;
    }

    path.join(CHART_METADATA_FILE).is_file()
}

/// True when any normal segment of `path` equals an entry of `exclude_dirs`
pub(crate) fn has_excluded_segment(path: &Path, exclude_dirs: &[String]) -> bool {
    if exclude_dirs.is_empty() {
        return false;
    }
    path.components().any(|c| match c {
        Component::Normal(segment) => exclude_dirs.iter().any(|e| segment == e.as_str()),
        _ => false,
    })
}
