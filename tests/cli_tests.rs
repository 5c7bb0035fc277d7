//! CLI integration tests for helm-charts

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_helm-charts"))
}

/// Write a Chart.yaml below `root`
fn write_chart(root: &Path, rel: &str, name: &str, version: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(dir.join("templates")).expect("Failed to create chart dir");
    fs::write(
        dir.join("Chart.yaml"),
        format!(
            "apiVersion: v2\nname: {}\nversion: {}\ndescription: test chart\n",
            name, version
        ),
    )
    .expect("Failed to write Chart.yaml");
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

mod cli_behavior {
    use super::*;

    #[test]
    fn test_help_flag() {
        let output = run(&["--help"]);

        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("list"));
        assert!(out.contains("list-changed"));
        assert!(out.contains("find-duplicates"));
    }

    #[test]
    fn test_version_flag() {
        let output = run(&["--version"]);

        assert!(output.status.success());
        assert!(stdout(&output).contains("helm-charts"));
    }

    #[test]
    fn test_missing_subcommand() {
        let output = run(&[]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_conflicting_column_flags() {
        let temp = TempDir::new().unwrap();
        let output = run(&[
            "list",
            "--only-path",
            "--only-name",
            temp.path().to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("Invalid configuration"));
    }
}

mod list {
    use super::*;

    #[test]
    fn test_list_sorted_table() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "charts/foo", "foo", "1.0.0");
        write_chart(temp.path(), "charts/bar", "bar", "0.2.0-beta");

        let output = run(&["list", "--relative-path", temp.path().to_str().unwrap()]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let lines: Vec<String> = stdout(&output).lines().map(|l| l.to_string()).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "The following charts were found:");
        assert!(lines[1].starts_with("NAME"));
        assert!(lines[2].starts_with("bar"));
        assert!(lines[2].contains("0.2.0-beta"));
        assert!(lines[2].ends_with("charts/bar"));
        assert!(lines[3].starts_with("foo"));
        assert!(lines[3].ends_with("charts/foo"));
    }

    #[test]
    fn test_list_only_name() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "b", "beta", "1.0.0");
        write_chart(temp.path(), "a", "alpha", "1.0.0");

        let output = run(&["list", "--only-name", temp.path().to_str().unwrap()]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "alpha\nbeta\n");
    }

    #[test]
    fn test_list_only_path_absolute() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "apps/web", "web", "1.0.0");

        let output = run(&["list", "--only-path", temp.path().to_str().unwrap()]);

        assert!(output.status.success());
        let expected = format!("{}\n", temp.path().join("apps/web").display());
        assert_eq!(stdout(&output), expected);
    }

    #[test]
    fn test_list_excludes_whole_segments() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "charts/foo", "foo", "1.0.0");
        write_chart(temp.path(), "my-charts/bar", "bar", "1.0.0");

        let output = run(&[
            "list",
            "--only-name",
            "--exclude-dirs",
            "charts",
            temp.path().to_str().unwrap(),
        ]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "bar\n");
    }

    #[test]
    fn test_list_json() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "foo", "foo", "1.0.0");

        let output = run(&[
            "list",
            "--json",
            "--relative-path",
            temp.path().to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let json: serde_json::Value =
            serde_json::from_str(&stdout(&output)).expect("Failed to parse JSON");
        assert_eq!(json["charts"][0]["name"], "foo");
        assert_eq!(json["charts"][0]["version"], "1.0.0");
        assert_eq!(json["charts"][0]["path"], "foo");
    }

    #[test]
    fn test_list_invalid_version_fails() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "good", "good", "1.0.0");
        write_chart(temp.path(), "bad", "bad", "not-a-version");

        let output = run(&["list", temp.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("invalid version 'not-a-version'"));
        assert!(stdout(&output).is_empty());
    }

    #[test]
    fn test_list_empty_tree_fails() {
        let temp = TempDir::new().unwrap();

        let output = run(&["list", temp.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("not a single chart was found"));
    }

    #[test]
    fn test_list_writes_output_file() {
        let temp = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        write_chart(temp.path(), "foo", "foo", "1.0.0");

        let target = out_dir.path().join("reports");
        let output = run(&[
            "list",
            "--only-name",
            "--output-dir",
            target.to_str().unwrap(),
            "--output-filename",
            "charts.txt",
            temp.path().to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let written = fs::read_to_string(target.join("charts.txt")).unwrap();
        assert_eq!(written, "foo\n");
        assert_eq!(stdout(&output), "foo\n");
    }
}

mod find_duplicates {
    use super::*;

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "team1/common", "common", "1.0.0");
        write_chart(temp.path(), "team2/common", "common", "1.1.0");
        write_chart(temp.path(), "app", "app", "1.0.0");
        write_chart(temp.path(), "vendor/app", "app", "0.9.0");
        temp
    }

    #[test]
    fn test_reports_duplicates_excluding_vendor() {
        let temp = tree();

        let output = run(&[
            "find-duplicates",
            "--only-path",
            "--relative-path",
            temp.path().to_str().unwrap(),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "team1/common\nteam2/common\n");
    }

    #[test]
    fn test_include_vendor() {
        let temp = tree();

        let output = run(&[
            "find-duplicates",
            "--only-path",
            "--relative-path",
            "--include-vendor",
            temp.path().to_str().unwrap(),
        ]);

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "app\nvendor/app\nteam1/common\nteam2/common\n"
        );
    }

    #[test]
    fn test_pairwise_and_grouped_modes() {
        let temp = TempDir::new().unwrap();
        for team in ["a", "b", "c"] {
            write_chart(temp.path(), &format!("{}/common", team), "common", "1.0.0");
        }
        let dir = temp.path().to_str().unwrap();

        let pairwise = run(&["find-duplicates", "--only-name", dir]);
        assert_eq!(stdout(&pairwise).lines().count(), 6);

        let grouped = run(&[
            "find-duplicates",
            "--only-name",
            "--report-mode",
            "grouped",
            dir,
        ]);
        assert_eq!(stdout(&grouped).lines().count(), 3);
    }

    #[test]
    fn test_no_duplicates() {
        let temp = TempDir::new().unwrap();
        write_chart(temp.path(), "a", "a", "1.0.0");
        write_chart(temp.path(), "b", "b", "1.0.0");

        let output = run(&[
            "find-duplicates",
            "--fail-on-duplicates",
            temp.path().to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "No duplicates found.\n");
    }

    #[test]
    fn test_fail_on_duplicates() {
        let temp = tree();

        let output = run(&[
            "find-duplicates",
            "--fail-on-duplicates",
            temp.path().to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).contains("The following duplicate charts were found:"));
        assert!(stderr(&output).contains("found multiple helm charts with the same name"));
    }
}
