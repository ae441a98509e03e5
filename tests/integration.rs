//! Integration tests for codestat


use assert_cmd::Command;
use harness::{TestTree, run_codestat};
use predicates::prelude::*;

#[test]
fn test_console_report() {
    let tree = TestTree::new();
    tree.add_file("a.cs", 100);
    tree.add_file("b.CS", 50);
    tree.add_file("web/app.js", 2_097_152);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &[]);
    assert!(success, "codestat should succeed");
    assert_eq!(stdout, ".js 2.000 MB\n.cs 0.000 MB\nTotal: 2.000 MB\n");
}

#[test]
fn test_git_directory_excluded_by_default() {
    let tree = TestTree::new();
    tree.add_file("a.cs", 100);
    tree.add_file("b.CS", 50);
    tree.add_file(".git/ignored.cs", 9999);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["--format", "csv"]);
    assert!(success);
    assert_eq!(stdout, "Extension; Size; Files Count\n.cs; 0.000; 2\n");
}

#[test]
fn test_no_default_ignores() {
    let tree = TestTree::new();
    tree.add_file("a.cs", 100);
    tree.add_file(".git/ignored.cs", 9999);

    let (stdout, _stderr, success) =
        run_codestat(tree.path(), &["-f", "csv", "--no-default-ignores"]);
    assert!(success);
    assert!(stdout.contains(".cs; 0.010; 2"), "got: {}", stdout);
}

#[test]
fn test_csv_order_by_size() {
    let tree = TestTree::new();
    tree.add_file("big.sql", 2_097_152);
    tree.add_file("small.go", 1_048_576);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["-f", "csv"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["Extension; Size; Files Count", ".sql; 2.000; 1", ".go; 1.000; 1"]
    );
}

#[test]
fn test_equal_sizes_sorted_by_extension() {
    let tree = TestTree::new();
    tree.add_file("x.yml", 10);
    tree.add_file("x.ts", 10);
    tree.add_file("x.css", 10);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["-f", "csv"]);
    assert!(success);
    let exts: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split(';').next().unwrap())
        .collect();
    assert_eq!(exts, vec![".css", ".ts", ".yml"]);
}

#[test]
fn test_dockerfile_record() {
    let tree = TestTree::new();
    tree.add_file("Dockerfile", 200);
    tree.add_file("docker/dockerfile", 300);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["-f", "csv"]);
    assert!(success);
    assert_eq!(stdout, "Extension; Size; Files Count\nDockerfile; 0.000; 1\n");
}

#[test]
fn test_unlisted_extensions_ignored() {
    let tree = TestTree::new();
    tree.add_file("README.md", 5000);
    tree.add_file("Makefile", 5000);
    tree.add_file("image.png", 5000);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "Total: 0.000 MB\n");
}

#[test]
fn test_unknown_format_falls_back_to_console() {
    let tree = TestTree::new();
    tree.add_file("main.go", 1_048_576);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["--format", "yaml"]);
    assert!(success);
    assert_eq!(stdout, ".go 1.000 MB\nTotal: 1.000 MB\n");
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("a.ts", 30);
    tree.add_file("b.ts", 20);
    tree.add_file("c.sh", 40);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["-f", "json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["total_size"], 90);
    assert_eq!(value["total_files"], 3);
    assert_eq!(value["extensions"][0]["extension"], ".ts");
    assert_eq!(value["extensions"][0]["files_count"], 2);
    assert_eq!(value["extensions"][1]["extension"], ".sh");
}

#[test]
fn test_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_file("src/app.js", 10);
    tree.add_file("node_modules/lib/index.js", 1_000_000);
    tree.add_file("bin-debug/out.json", 1_000_000);

    let (stdout, _stderr, success) =
        run_codestat(tree.path(), &["-f", "csv", "-I", "node_modules", "-I", "bin*"]);
    assert!(success);
    assert_eq!(stdout, "Extension; Size; Files Count\n.js; 0.000; 1\n");
}

#[test]
fn test_explicit_path_argument() {
    let tree = TestTree::new();
    tree.add_file("project/main.tf", 1_048_576);
    tree.add_file("other/skip.tf", 1_048_576);

    let (stdout, _stderr, success) = run_codestat(tree.path(), &["project"]);
    assert!(success);
    assert_eq!(stdout, ".tf 1.000 MB\nTotal: 1.000 MB\n");
}

#[test]
fn test_missing_root_fails_without_report() {
    let tree = TestTree::new();

    Command::cargo_bin("codestat")
        .unwrap()
        .arg(tree.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    let file = tree.add_file("a.cs", 1);

    Command::cargo_bin("codestat")
        .unwrap()
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_help() {
    Command::cargo_bin("codestat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"));
}
