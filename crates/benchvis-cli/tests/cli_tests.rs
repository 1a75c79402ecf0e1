// Benchvis - Go benchmark output parser and visualizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

const SEPARATOR_OUTPUT: &str = "\
goos: darwin
goarch: arm64
pkg: example.com/fib
BenchmarkFib/10-8\t3000000\t358 ns/op\t16 B/op\t1 allocs/op
BenchmarkFib/20-8\t30000\t45210 ns/op\t16 B/op\t1 allocs/op
BenchmarkMemo/10-8\t9000000\t120 ns/op\t64 B/op\t2 allocs/op
PASS
ok  \texample.com/fib\t3.2s
";

const PATTERN_OUTPUT: &str = "\
goos: linux
goarch: amd64
pkg: example.com/sort
BenchmarkQuickSortRandom-4\t1000\t1500 ns/op
BenchmarkHeapSortRandom-4\t1000\t2500 ns/op
PASS
";

// Test helper to create a benchvis command
fn benchvis_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchvis").expect("Failed to find benchvis binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn create_input(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    benchvis_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse and visualize Go standard benchmark output"))
        .stdout(predicate::str::contains("--sep"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_output() {
    benchvis_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchvis"));
}

// ===== Flag Validation =====

#[test]
fn test_sep_and_regex_conflict() {
    benchvis_cmd()
        .args(["-s", "/", "-r", "^Bench(?<target>.+)(?<scenario>.+)$"])
        .assert()
        .failure();
}

#[test]
fn test_silent_and_verbose_conflict() {
    benchvis_cmd().args(["--silent", "--verbose"]).assert().failure();
}

#[test]
fn test_missing_output_dir() {
    let input = create_input(SEPARATOR_OUTPUT);
    benchvis_cmd()
        .args(["-s", "/", "-o", "/nonexistent/benchvis/out", "-f"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("/nonexistent/benchvis/out"));
}

#[test]
fn test_output_is_a_file() {
    let input = create_input(SEPARATOR_OUTPUT);
    benchvis_cmd()
        .args(["-s", "/", "-f"])
        .arg(input.path())
        .arg("-o")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_invalid_regex() {
    let dir = TempDir::new().unwrap();
    benchvis_cmd()
        .args(["-r", "(?<target>"])
        .arg("-o")
        .arg(dir.path())
        .write_stdin(SEPARATOR_OUTPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    benchvis_cmd()
        .args(["-s", "/", "-f", "/nonexistent/bench.txt"])
        .arg("-o")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/bench.txt"));
}

#[test]
fn test_bad_baseline() {
    let dir = TempDir::new().unwrap();
    benchvis_cmd()
        .args(["-s", "/", "--baseline", "1,2"])
        .arg("-o")
        .arg(dir.path())
        .write_stdin(SEPARATOR_OUTPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("baseline"));
}

// ===== JSON Mode =====

#[test]
fn test_json_to_output_dir() {
    let dir = TempDir::new().unwrap();
    let input = create_input(SEPARATOR_OUTPUT);

    benchvis_cmd()
        .args(["-s", "/", "--json", "--silent", "-f"])
        .arg(input.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("parsed_benchmark.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["goos"], "darwin");
    assert_eq!(value[0]["pkg"], "example.com/fib");
    assert_eq!(value[0]["targets"]["Fib"][1]["scenario"], "20");
    assert_eq!(value[0]["targets"]["Memo"][0]["mem"]["allocs_per_op"], 2.0);

    // JSON mode writes no chart pages
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_json_to_stdout() {
    let output = benchvis_cmd()
        .args(["-s", "/", "--json", "--silent", "-o", ""])
        .write_stdin(SEPARATOR_OUTPUT)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["targets"]["Fib"][0]["cpu_cores"], 8);
}

#[test]
fn test_default_pattern() {
    let output = benchvis_cmd()
        .args(["--json", "--silent", "-o", ""])
        .write_stdin(PATTERN_OUTPUT)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets = value[0]["targets"].as_object().unwrap();
    assert!(targets.contains_key("QuickSort"));
    assert_eq!(value[0]["targets"]["HeapSort"][0]["scenario"], "Random");
}

#[test]
fn test_baseline_flag() {
    let output = benchvis_cmd()
        .args(["-s", "/", "--json", "--silent", "-o", "", "--baseline", "1000,32,1"])
        .write_stdin(SEPARATOR_OUTPUT)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 358 ns/op * 8 cores = 2864 > 1000
    assert_eq!(value[0]["targets"]["Fib"][0]["reach_baseline"], false);
    // 120 * 8 = 960, but 64 B/op > 32
    assert_eq!(value[0]["targets"]["Memo"][0]["reach_baseline"], false);

    let output = benchvis_cmd()
        .args(["-s", "/", "--json", "--silent", "-o", "", "--baseline", "1000,65,3"])
        .write_stdin(SEPARATOR_OUTPUT)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["targets"]["Memo"][0]["reach_baseline"], true);
}

#[test]
fn test_truncated_input_fails() {
    benchvis_cmd()
        .args(["-s", "/", "--json", "-o", ""])
        .write_stdin("goos: linux\nBenchmarkFib/10-8\t100\t358 ns/op\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PASS"));
}

#[test]
fn test_malformed_record_reports_line() {
    benchvis_cmd()
        .args(["-s", "/", "--json", "-o", ""])
        .write_stdin("goos: linux\nBenchmarkFib/10-8\t100\t358\nPASS\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

// ===== Chart Mode =====

#[test]
fn test_chart_pages_written() {
    let dir = TempDir::new().unwrap();
    let input = create_input(SEPARATOR_OUTPUT);

    benchvis_cmd()
        .args(["-s", "/", "-f"])
        .arg(input.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("benchmark visualized"));

    let page = dir.path().join("example_com_fib.html");
    let html = fs::read_to_string(page).unwrap();
    assert!(html.contains("<svg"));
    assert!(html.contains("Memo"));
    assert!(!dir.path().join("parsed_benchmark.json").exists());
}

#[test]
fn test_no_runs_writes_nothing() {
    let dir = TempDir::new().unwrap();
    benchvis_cmd()
        .args(["-s", "/", "--silent"])
        .arg("-o")
        .arg(dir.path())
        .write_stdin("no benchmarks here\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
