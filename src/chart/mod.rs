//! Chart discovery and comparison
//!
//! A chart root is a directory that directly contains `Chart.yaml`. This module
//! finds chart roots below a directory, reads their metadata, reports charts
//! sharing a name at different paths and maps git changes back to the charts
//! that own them.

mod changed;
mod duplicates;
mod metadata;
mod scanner;
mod validate;

pub use changed::list_changed;
pub use duplicates::find_duplicates;
pub use metadata::{load_chart, Chart, CHART_METADATA_FILE};
pub use scanner::{scan, ChartSet};
pub use validate::is_valid_chart_root;

use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and drop `.`/`..` lexically
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}

/// Express `path` relative to `root`; `root` itself becomes `.`
pub(crate) fn relative_to(path: &Path, root: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        Some(PathBuf::from("."))
    } else {
        Some(rel.to_path_buf())
    }
}
