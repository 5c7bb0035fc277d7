//! CLI argument parsing using clap

use crate::chart::absolutize;
use crate::config::{
    ChangedOptions, Columns, Command, Config, DuplicateOptions, OutputFormat, ReportMode,
};
use crate::error::{ChartsError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Helper to manage Helm charts
#[derive(Parser, Debug)]
#[command(name = "helm-charts")]
#[command(version)]
#[command(about = "List Helm charts, find duplicates and detect changed charts", long_about = None)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List Helm charts in the given directory
    List {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// List Helm charts changed compared to a git commit
    ListChanged {
        #[command(flatten)]
        common: CommonArgs,

        /// Name of the git remote used to identify changes
        #[arg(long = "remote", value_name = "REMOTE", default_value = "origin")]
        remote: String,

        /// Name of the branch used to identify changes
        #[arg(long = "branch", value_name = "BRANCH", default_value = "master")]
        branch: String,

        /// Commit used to identify changes
        #[arg(long = "commit", value_name = "COMMIT", default_value = "HEAD")]
        commit: String,
    },

    /// Find charts with the same name in different directories
    FindDuplicates {
        #[command(flatten)]
        common: CommonArgs,

        /// Also consider charts in vendor directories
        #[arg(long = "include-vendor")]
        include_vendor: bool,

        /// Exit with code 1 if duplicate charts are found
        #[arg(long = "fail-on-duplicates")]
        fail_on_duplicates: bool,

        /// Report each chart once per namesake (pairwise) or once overall (grouped)
        #[arg(long = "report-mode", value_enum, default_value_t = ReportMode::Pairwise)]
        report_mode: ReportMode,
    },
}

/// Flags shared by every subcommand
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory to search for charts
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// List of (sub-)directories to exclude
    #[arg(long = "exclude-dirs", value_name = "DIRS", value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// If given, results are also written to a file in this directory
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name to use for output
    #[arg(long = "output-filename", value_name = "NAME", default_value = "results.txt")]
    pub output_filename: String,

    /// Only output the chart path
    #[arg(long = "only-path")]
    pub only_path: bool,

    /// Only output the chart name
    #[arg(long = "only-name")]
    pub only_name: bool,

    /// Report chart paths relative to the given directory
    #[arg(long = "relative-path")]
    pub relative_path: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        let (common, command) = match self.command {
            CliCommand::List { common } => (common, Command::List),
            CliCommand::ListChanged {
                common,
                remote,
                branch,
                commit,
            } => (
                common,
                Command::ListChanged(ChangedOptions {
                    remote,
                    branch,
                    commit,
                }),
            ),
            CliCommand::FindDuplicates {
                common,
                include_vendor,
                fail_on_duplicates,
                report_mode,
            } => (
                common,
                Command::FindDuplicates(DuplicateOptions {
                    include_vendor,
                    fail_on_duplicates,
                    report_mode,
                }),
            ),
        };

        if common.only_path && common.only_name {
            return Err(ChartsError::InvalidConfig(
                "specify only one of --only-path or --only-name".to_string(),
            ));
        }

        let columns = if common.only_path {
            Columns::PathOnly
        } else if common.only_name {
            Columns::NameOnly
        } else {
            Columns::All
        };

        let output_format = if common.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        let exclude_dirs = common
            .exclude_dirs
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(Config {
            command,
            directory: absolutize(&common.path)?,
            exclude_dirs,
            relative_paths: common.relative_path,
            output_format,
            columns,
            output_dir: common.output_dir,
            output_filename: common.output_filename,
            quiet: self.quiet,
        })
    }
}
