use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn todos_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("todos");
    path
}

fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules/left-pad")).unwrap();

    fs::write(
        root.join("src/parser.js"),
        "function parse() {\n  // TODO alice; 2024-03-01; refactor parser!\n  return null;\n}\n",
    )
    .unwrap();
    fs::write(
        root.join("src/tests.js"),
        "// TODO bob; 2024-01-01; add tests\n",
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        "// TODO carol; 2025-01-01; markdown is not scanned\n",
    )
    .unwrap();
    fs::write(
        root.join("node_modules/left-pad/index.js"),
        "// TODO dave; 2025-01-01; dependency code\n",
    )
    .unwrap();

    tmp
}

/// Run `todos` in `dir`, piping `stdin`. Returns (stdout, stderr, success).
fn run_todos(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let binary = todos_binary();
    let mut child = Command::new(&binary)
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to run todos binary at {:?}: {}", binary, e));

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Data rows of every table in `stdout` (lines between dash separators).
fn table_rows(stdout: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut inside = false;
    for line in stdout.lines() {
        if !line.is_empty() && line.chars().all(|c| c == '-') {
            inside = !inside;
            continue;
        }
        if inside {
            rows.push(line.to_string());
        }
    }
    rows
}

#[test]
fn test_show_lists_scanned_todos() {
    let tmp = setup_project();
    let (stdout, stderr, success) = run_todos(tmp.path(), &[], "show\nexit\n");
    assert!(success, "show failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.starts_with("Please, write your command!"));

    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 2, "rows: {:?}", rows);
    assert!(rows[0].contains("alice") && rows[0].contains("parser.js"));
    assert!(rows[1].contains("bob") && rows[1].contains("tests.js"));
    assert!(!stdout.contains("markdown is not scanned"));
    assert!(!stdout.contains("dependency code"));
}

#[test]
fn test_scenario_commands() {
    let tmp = setup_project();

    let (stdout, _, _) = run_todos(tmp.path(), &[], "important\n");
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("!  |  alice"));

    let (stdout, _, _) = run_todos(tmp.path(), &[], "sort date\n");
    let rows = table_rows(&stdout);
    assert!(rows[0].contains("alice"));
    assert!(rows[1].contains("bob"));

    let (stdout, _, _) = run_todos(tmp.path(), &[], "user bob\n");
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("bob"));

    let (stdout, _, _) = run_todos(tmp.path(), &[], "date 2024-02-01\n");
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("alice"));
}

#[test]
fn test_errors_do_not_end_session() {
    let tmp = setup_project();
    let (stdout, _, success) = run_todos(
        tmp.path(),
        &[],
        "sort xyz\nuser nobody\ndate someday\nfrobnicate\nshow\n",
    );
    assert!(success);
    assert!(stdout.contains("unknown sort criterion: 'xyz'"));
    assert!(stdout.contains("no TODOs found for user: nobody"));
    assert!(stdout.contains("invalid date 'someday'"));
    assert!(stdout.contains("wrong command"));
    assert_eq!(table_rows(&stdout).len(), 2);
}

#[test]
fn test_exit_stops_processing() {
    let tmp = setup_project();
    let (stdout, _, success) = run_todos(tmp.path(), &[], "exit\nshow\n");
    assert!(success);
    assert_eq!(stdout.trim(), "Please, write your command!");
}

#[test]
fn test_empty_project_prints_empty_table() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.js"), "console.log('hi');\n").unwrap();

    let (stdout, _, success) = run_todos(tmp.path(), &["-c", "show"], "");
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "!  |  user  |  date  |  comment  |  file   ");
    assert_eq!(lines[1], lines[2]);
    assert!(lines[1].chars().all(|c| c == '-'));
}

#[test]
fn test_one_shot_commands_in_order() {
    let tmp = setup_project();
    let (stdout, stderr, success) = run_todos(
        tmp.path(),
        &["-c", "user bob", "-c", "important"],
        "",
    );
    assert!(success, "stderr={}", stderr);
    assert!(!stdout.contains("Please, write your command!"));
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("bob"));
    assert!(rows[1].contains("alice"));
}

#[test]
fn test_json_output() {
    let tmp = setup_project();
    let (stdout, _, success) = run_todos(tmp.path(), &["--json", "-c", "sort user"], "");
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["user"], "alice");
    assert_eq!(records[0]["comment"], "refactor parser!");
    assert_eq!(records[0]["importance_rank"], 1);
    assert_eq!(records[1]["file_name"], "tests.js");
}

#[test]
fn test_root_and_extension_flags() {
    let tmp = setup_project();
    let root = tmp.path().to_str().unwrap().to_string();
    let other = TempDir::new().unwrap();
    let (stdout, _, success) = run_todos(
        other.path(),
        &["--root", &root, "--ext", "md", "-c", "show"],
        "",
    );
    assert!(success);
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("carol"));
}

#[test]
fn test_missing_root_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_todos(tmp.path(), &["--root", "does-not-exist"], "");
    assert!(!success);
    assert!(stderr.contains("does-not-exist"));
}
