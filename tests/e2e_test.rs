/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use file_adapters::prelude::LINE_SEPARATOR;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn sample_output() -> String {
    format!(
        "TXT File Content: \nhello\nworld\n\nCSV File Content: \na,b{sep}c,d\n\nJSON File Content: \n{{\n  \"a\": 1,\n  \"b\": 2\n}}\n",
        sep = LINE_SEPARATOR
    )
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("file-adapters")
            .current_dir(fixtures_path().join("sample"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("file-adapters").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("file-adapters")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("file-adapters")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - input files missing
    #[test]
    fn test_exit_code_application_error_missing_files() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("file-adapters")
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stdout("TXT File Content: \n")
            .stderr(predicate::str::contains("File not found"));
    }
}

#[test]
fn test_e2e_prints_three_files_from_working_directory() {
    cargo_bin_cmd!("file-adapters")
        .current_dir(fixtures_path().join("sample"))
        .assert()
        .success()
        .stdout(sample_output());
}

#[test]
fn test_e2e_dir_option() {
    cargo_bin_cmd!("file-adapters")
        .args(["--dir"])
        .arg(fixtures_path().join("sample"))
        .assert()
        .success()
        .stdout(sample_output());
}

#[test]
fn test_e2e_quiet_stderr_by_default() {
    cargo_bin_cmd!("file-adapters")
        .current_dir(fixtures_path().join("sample"))
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_e2e_verbose_reports_progress_on_stderr() {
    cargo_bin_cmd!("file-adapters")
        .current_dir(fixtures_path().join("sample"))
        .arg("--verbose")
        .assert()
        .success()
        .stdout(sample_output())
        .stderr(
            predicate::str::contains("📖 Reading TXT file: example.txt")
                .and(predicate::str::contains("📖 Reading JSON file: example.json"))
                .and(predicate::str::contains("✅ Displayed 3 file(s)")),
        );
}

#[test]
fn test_e2e_invalid_json_keeps_earlier_output_and_its_header() {
    let expected = format!(
        "TXT File Content: \nhello\nworld\n\nCSV File Content: \na,b{}c,d\n\nJSON File Content: \n",
        LINE_SEPARATOR
    );

    cargo_bin_cmd!("file-adapters")
        .current_dir(fixtures_path().join("invalid-json"))
        .assert()
        .code(1)
        .stdout(expected)
        .stderr(
            predicate::str::contains("Failed to parse JSON file")
                .and(predicate::str::contains("Caused by:")),
        );
}

#[test]
fn test_e2e_path_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.txt"), "plain").unwrap();
    fs::write(dir.path().join("table.csv"), "1,2\r3,4\n").unwrap();
    fs::write(dir.path().join("doc.json"), "  [ 1 ]  ").unwrap();

    let expected = format!(
        "TXT File Content: \nplain\n\nCSV File Content: \n1,2{}3,4\n\nJSON File Content: \n[\n  1\n]\n",
        LINE_SEPARATOR
    );

    cargo_bin_cmd!("file-adapters")
        .arg("-d")
        .arg(dir.path())
        .args(["--txt", "readme.txt", "--csv", "table.csv", "--json", "doc.json"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_e2e_missing_csv_stops_sequence() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("example.txt"), "only text").unwrap();
    fs::write(dir.path().join("example.json"), "{}").unwrap();

    cargo_bin_cmd!("file-adapters")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("TXT File Content: \nonly text\n\nCSV File Content: \n")
        .stderr(predicate::str::contains("example.csv"));
}
