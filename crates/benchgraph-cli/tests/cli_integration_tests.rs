// Dweve benchgraph - Benchmark result charting
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
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BENCH_OUTPUT: &str = "goos: linux
goarch: amd64
pkg: example.com/store
BenchmarkInsert/100-8         	  200000	       523 ns/op	     128 B/op	       3 allocs/op
BenchmarkInsert/1000-8        	   20000	      6120 ns/op	    1024 B/op	      12 allocs/op
BenchmarkLookup/100-8         	 1000000	        48.5 ns/op	       0 B/op	       0 allocs/op
BenchmarkLookup/1000-8        	  500000	        97.0 ns/op	       0 B/op	       0 allocs/op
Benchmark/oops-8              	    1000	        10 ns/op
PASS
ok  	example.com/store	4.211s
";

// Test helper to create a benchgraph command with colors off
fn benchgraph_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchgraph").expect("Failed to find benchgraph binary");
    cmd.env("NO_COLOR", "1").env_remove("BENCHGRAPH_MAX_LINE_LENGTH");
    cmd
}

// Test helper to read the written chart document
fn read_document(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read chart document");
    serde_json::from_str(&text).expect("Chart document is not valid JSON")
}

fn chart_titles(doc: &Value) -> Vec<String> {
    doc["charts"]
        .as_array()
        .expect("charts array")
        .iter()
        .map(|c| c["title"]["text"].as_str().expect("title text").to_string())
        .collect()
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchgraph_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchgraph - chart Go benchmark results"))
        .stdout(predicate::str::contains("--obn"))
        .stdout(predicate::str::contains("--shape"));
}

#[test]
fn test_version_output() {
    benchgraph_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchgraph"));
}

#[test]
fn test_unknown_shape_fails() {
    benchgraph_cmd()
        .args(["--shape", "pie"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .failure();
}

// ===== Transcript Tests =====

#[test]
fn test_transcript_marks_every_line() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("? goos: linux"))
        .stdout(predicate::str::contains("√ BenchmarkInsert/100-8"))
        .stdout(predicate::str::contains("√ BenchmarkLookup/1000-8"))
        .stdout(predicate::str::contains("! Benchmark/oops-8"))
        .stdout(predicate::str::contains("? PASS"));
}

#[test]
fn test_empty_input_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .write_stdin("PASS\nok  \texample.com/store\t0.002s\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("? PASS"))
        .stderr(predicate::str::contains("no data to show"));

    assert!(!out.exists());
}

#[test]
fn test_no_input_at_all() {
    let dir = TempDir::new().unwrap();

    benchgraph_cmd()
        .arg("-o")
        .arg(dir.path().join("charts.json"))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no data to show"));
}

// ===== Document Tests =====

#[test]
fn test_bar_document_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let doc = read_document(&out);
    assert_eq!(
        chart_titles(&doc),
        [
            "Graph: Benchmark results in iteration count",
            "Graph: Benchmark results in ns/op",
            "Graph: Benchmark results in B/op",
            "Graph: Benchmark results in allocs/op",
        ]
    );

    let ns = &doc["charts"][1];
    assert_eq!(ns["xAxis"]["data"], serde_json::json!(["100", "1000"]));
    assert_eq!(ns["series"][0]["name"], "Insert");
    assert_eq!(ns["series"][0]["type"], "bar");
    assert_eq!(ns["series"][0]["data"], serde_json::json!([523.0, 6120.0]));
    assert_eq!(ns["series"][1]["name"], "Lookup");
    assert_eq!(ns["series"][1]["data"], serde_json::json!([48.5, 97.0]));
}

#[test]
fn test_document_to_stdout() {
    let assert = benchgraph_cmd()
        .args(["-o", "-", "--shape", "line"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let start = stdout.find("{\n").expect("document after transcript");
    assert!(stdout[..start].contains("? PASS"));
    let doc: Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(doc["charts"][1]["series"][0]["type"], "line");
}

#[test]
fn test_custom_title_and_mark_lines() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .args(["--title", "store: ", "--max", "--avg"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let doc = read_document(&out);
    assert_eq!(doc["charts"][1]["title"]["text"], "store: ns/op");
    let marks = &doc["charts"][1]["series"][0]["markLine"]["data"];
    assert_eq!(marks[0]["type"], "max");
    assert_eq!(marks[1]["type"], "average");
}

#[test]
fn test_overlap_shape() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .args(["--shape", "overlap"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let doc = read_document(&out);
    let titles = chart_titles(&doc);
    assert_eq!(titles[0], "Graph: Benchmark results in B/op, allocs/op, ns/op");
    assert!(titles.contains(&"Graph: Benchmark results in iteration count".to_string()));
    assert!(!titles.contains(&"Graph: Benchmark results in ns/op".to_string()));
}

#[test]
fn test_stacked_shape() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .args(["--shape", "stacked"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let doc = read_document(&out);
    assert_eq!(chart_titles(&doc)[0], "Graph: Benchmark results in B/op + allocs/op");
    assert_eq!(doc["charts"][0]["series"][0]["stack"], "Insert-stack");
}

#[test]
fn test_order_overrides_select_and_sort() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .args(["--obn", "Lookup", "--oba", "1000,100"])
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .success();

    let doc = read_document(&out);
    let ns = &doc["charts"][1];
    assert_eq!(ns["xAxis"]["data"], serde_json::json!(["1000", "100"]));
    assert_eq!(ns["series"].as_array().unwrap().len(), 1);
    assert_eq!(ns["series"][0]["name"], "Lookup");
    assert_eq!(ns["series"][0]["data"], serde_json::json!([97.0, 48.5]));
}

#[test]
fn test_extra_metric_gets_its_own_chart() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .write_stdin("BenchmarkCopy/4k-8  100000  1200 ns/op  3413.33 MB/s\n")
        .assert()
        .success();

    let doc = read_document(&out);
    let titles = chart_titles(&doc);
    assert_eq!(titles.last().unwrap(), "Graph: Benchmark results in MB/s");
    assert_eq!(doc["charts"][2]["series"][0]["data"], serde_json::json!([0.0]));
}

// ===== Failure Tests =====

#[test]
fn test_line_length_limit_is_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .env("BENCHGRAPH_MAX_LINE_LENGTH", "32")
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("reading standard input"))
        .stderr(predicate::str::contains("too long"));

    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("charts.json");

    benchgraph_cmd()
        .arg("-o")
        .arg(&out)
        .write_stdin(BENCH_OUTPUT)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}
