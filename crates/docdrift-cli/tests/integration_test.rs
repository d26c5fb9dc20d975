//! End-to-end: scan a tree of Go files, analyze, apply fixes, re-analyze.

use std::fs;
use std::path::Path;

use docdrift_cli::fixes::apply_fixes;
use docdrift_cli::runner;
use docdrift_cli::scanner::{ScanOptions, Scanner};
use docdrift_core::CheckConfig;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

const TYPOED: &str = r#"package server

// serveHtpp handles websocket traffic.
func serveHTTP() {}

// Creates a new HTTP client for the pool.
func newHTTPClient() {}

// reflect.DeepEqual doesn't work here.
func deepEqual() {}
"#;

const CLEAN: &str = r#"package util

// clamp bounds v to the given range.
func clamp(v, lo, hi int) int {
	return v
}
"#;

#[test]
fn finds_and_fixes_the_typo() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = dir.path().join("server/server.go");
    write(&server, TYPOED);
    write(&dir.path().join("util/util.go"), CLEAN);
    write(&dir.path().join("vendor/dep/dep.go"), TYPOED);

    let scanner = Scanner::new(ScanOptions::default()).unwrap();
    let files = scanner.scan(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(files.len(), 2, "vendor must be skipped");

    let config = CheckConfig::default();
    let diagnostics = runner::run(&files, &config);
    assert_eq!(diagnostics.len(), 1);

    let diagnostic = &diagnostics[0];
    assert!(diagnostic.position.path.ends_with("server/server.go"));
    assert_eq!(diagnostic.position.line, 4);
    assert_eq!(
        diagnostic.message,
        "doc comment starts with 'serveHtpp' but symbol is 'serveHTTP' (possible typo or old name)"
    );

    let applied = apply_fixes(&diagnostics).unwrap();
    assert_eq!(applied, 1);
    let fixed = fs::read_to_string(&server).unwrap();
    assert!(fixed.contains("// serveHTTP handles websocket traffic."));

    // Re-running after the fix is clean.
    let diagnostics = runner::run(&files, &config);
    assert!(diagnostics.is_empty());
}

#[test]
fn generated_files_are_skipped_without_opt_in() {
    let dir = tempfile::TempDir::new().unwrap();
    let generated = format!("// Code generated by mockgen. DO NOT EDIT.\n{TYPOED}");
    write(&dir.path().join("gen.go"), &generated);

    let scanner = Scanner::new(ScanOptions::default()).unwrap();
    let files = scanner.scan(&[dir.path().to_path_buf()]).unwrap();

    let config = CheckConfig::default();
    assert!(runner::run(&files, &config).is_empty());

    let mut config = CheckConfig::default();
    config.include_generated = true;
    assert_eq!(runner::run(&files, &config).len(), 1);
}

#[test]
fn diagnostics_are_ordered_by_position() {
    let dir = tempfile::TempDir::new().unwrap();
    write(
        &dir.path().join("b.go"),
        "package p\n\n// readConfg loads.\nfunc readConfig() {}\n",
    );
    write(
        &dir.path().join("a.go"),
        "package p\n\n// writeConfg stores.\nfunc writeConfig() {}\n\n// readConfg loads.\nfunc readConfig() {}\n",
    );

    let scanner = Scanner::new(ScanOptions::default()).unwrap();
    let files = scanner.scan(&[dir.path().to_path_buf()]).unwrap();
    let diagnostics = runner::run(&files, &CheckConfig::default());

    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics[0].position.path.ends_with("a.go"));
    assert_eq!(diagnostics[0].position.line, 4);
    assert!(diagnostics[1].position.path.ends_with("a.go"));
    assert_eq!(diagnostics[1].position.line, 7);
    assert!(diagnostics[2].position.path.ends_with("b.go"));
}

#[test]
fn broken_files_are_skipped_not_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    write(&dir.path().join("bad.go"), "package p\n\nfunc {{{\n");
    write(
        &dir.path().join("good.go"),
        "package p\n\n// serveHtpp handles.\nfunc serveHTTP() {}\n",
    );

    let scanner = Scanner::new(ScanOptions::default()).unwrap();
    let files = scanner.scan(&[dir.path().to_path_buf()]).unwrap();
    let diagnostics = runner::run(&files, &CheckConfig::default());
    assert_eq!(diagnostics.len(), 1);
}
