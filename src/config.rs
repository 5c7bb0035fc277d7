//! Configuration types for helm-charts

use std::path::PathBuf;

/// Directory segment excluded from duplicate detection unless vendored charts are requested
pub const VENDOR_DIR: &str = "vendor";

/// Output format for chart listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table for humans
    #[default]
    Console,
    /// JSON document
    Json,
}

/// Which columns of a chart record are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// Header lines plus name, version and path
    #[default]
    All,
    /// Only the chart path, no headers
    PathOnly,
    /// Only the chart name, no headers
    NameOnly,
}

/// How charts sharing a name are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportMode {
    /// One entry per colliding partner, so a chart with two namesakes is listed twice
    #[default]
    Pairwise,
    /// Each colliding chart is listed exactly once
    Grouped,
}

/// Git references used by `list-changed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedOptions {
    /// Remote whose branch is the comparison base
    pub remote: String,
    /// Branch on the remote
    pub branch: String,
    /// Commit (symbolic or hash) to compare
    pub commit: String,
}

impl Default for ChangedOptions {
    fn default() -> Self {
        Self {
            remote: String::from("origin"),
            branch: String::from("master"),
            commit: String::from("HEAD"),
        }
    }
}

/// Options for `find-duplicates`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DuplicateOptions {
    /// Also consider charts below `vendor` directories
    pub include_vendor: bool,
    /// Exit non-zero when duplicates are reported
    pub fail_on_duplicates: bool,
    /// Shape of the duplicate report
    pub report_mode: ReportMode,
}

/// The operation to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every chart below the directory
    List,
    /// List charts changed against a git reference
    ListChanged(ChangedOptions),
    /// List charts sharing a name at different paths
    FindDuplicates(DuplicateOptions),
}

/// Resolved configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation selected on the command line
    pub command: Command,

    /// Absolute directory to scan
    pub directory: PathBuf,

    /// Path segments that disqualify a chart root
    pub exclude_dirs: Vec<String>,

    /// Report chart paths relative to `directory`
    pub relative_paths: bool,

    /// Console table or JSON
    pub output_format: OutputFormat,

    /// Columns to write
    pub columns: Columns,

    /// When set, results are also written into this directory
    pub output_dir: Option<PathBuf>,

    /// File name used inside `output_dir`
    pub output_filename: String,

    /// Lower the log level to warnings
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Command::List,
            directory: PathBuf::from("."),
            exclude_dirs: Vec::new(),
            relative_paths: false,
            output_format: OutputFormat::Console,
            columns: Columns::All,
            output_dir: None,
            output_filename: String::from("results.txt"),
            quiet: false,
        }
    }
}

impl Config {
    /// Exclusions actually applied to the scan.
    ///
    /// `find-duplicates` skips vendored charts unless `--include-vendor` is given.
    pub fn effective_exclude_dirs(&self) -> Vec<String> {
        let mut dirs = self.exclude_dirs.clone();
        if let Command::FindDuplicates(opts) = &self.command {
            if !opts.include_vendor && !dirs.iter().any(|d| d == VENDOR_DIR) {
                dirs.push(VENDOR_DIR.to_string());
            }
        }
        dirs
    }

    /// Header line written above a console table
    pub fn header(&self) -> String {
        match &self.command {
            Command::List => "The following charts were found:".to_string(),
            Command::ListChanged(opts) => format!(
                "Compared to {}/{}:{} following charts were changed:",
                opts.remote, opts.branch, opts.commit
            ),
            Command::FindDuplicates(_) => "The following duplicate charts were found:".to_string(),
        }
    }

    /// Full path of the output file, if one was requested
    pub fn output_file(&self) -> Option<PathBuf> {
        self.output_dir
            .as_ref()
            .map(|dir| dir.join(&self.output_filename))
    }
}
