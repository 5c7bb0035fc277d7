//! Chart metadata loading

use crate::error::{ChartsError, Result};
use semver::Version;
use serde::Deserialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// File that marks a directory as a chart root
pub const CHART_METADATA_FILE: &str = "Chart.yaml";

/// A chart found on disk
#[derive(Debug, Clone)]
pub struct Chart {
    /// Chart name from Chart.yaml
    pub name: String,
    /// Parsed chart version
    pub version: Version,
    /// Chart root directory, absolute or relative to the scanned directory
    pub path: PathBuf,
}

impl Chart {
    /// Rewrite `path` relative to `root`.
    ///
    /// Returns false and leaves the chart untouched when the path is not below `root`.
    pub fn make_relative(&mut self, root: &Path) -> bool {
        match super::relative_to(&self.path, root) {
            Some(rel) => {
                self.path = rel;
                true
            }
            None => false,
        }
    }
}

/// Charts are equal when name, path and version precedence match.
/// Build metadata does not take part in the comparison.
impl PartialEq for Chart {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.version.cmp_precedence(&other.version) == Ordering::Equal
    }
}

impl Eq for Chart {}

/// The subset of Chart.yaml this tool reads
#[derive(Debug, Deserialize)]
struct ChartFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: Option<serde_yaml::Value>,
}

/// Read Chart.yaml from a chart root
pub fn load_chart(chart_root: &Path) -> Result<Chart> {
    let file = chart_root.join(CHART_METADATA_FILE);
    let unreadable = |reason: String| ChartsError::MetadataUnreadable {
        path: file.clone(),
        reason,
    };

    let content = fs::read_to_string(&file).map_err(|e| unreadable(e.to_string()))?;
    let meta: ChartFile = serde_yaml::from_str(&content).map_err(|e| unreadable(e.to_string()))?;

    if meta.name.trim().is_empty() {
        return Err(unreadable("missing 'name' field".to_string()));
    }

    let raw_version = match meta.version {
        None | Some(serde_yaml::Value::Null) => String::new(),
        Some(serde_yaml::Value::String(s)) => s,
        Some(serde_yaml::Value::Number(n)) => n.to_string(),
        Some(_) => {
            return Err(ChartsError::InvalidVersion {
                path: chart_root.to_path_buf(),
                version: String::new(),
                reason: "version must be a scalar".to_string(),
            })
        }
    };

    Ok(Chart {
        name: meta.name,
        version: parse_version(chart_root, &raw_version)?,
        path: chart_root.to_path_buf(),
    })
}

/// Parse a chart version.
///
/// A leading `v` is tolerated and a missing minor or patch number counts as
/// zero, so `v1.2` parses as `1.2.0`. Anything else must be SemVer 2.0.0.
pub fn parse_version(chart_root: &Path, raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let candidate = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(&pad_release(candidate)).map_err(|e| ChartsError::InvalidVersion {
        path: chart_root.to_path_buf(),
        version: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Fill `1` or `1.2` up to three release numbers, keeping any pre-release
/// or build suffix
fn pad_release(version: &str) -> Cow<'_, str> {
    let end = version.find(['-', '+']).unwrap_or(version.len());
    let (release, suffix) = version.split_at(end);
    let parts = release.split('.').count();
    if release.is_empty() || parts >= 3 {
        return Cow::Borrowed(version);
    }
    Cow::Owned(format!("{}{}{}", release, ".0".repeat(3 - parts), suffix))
}
