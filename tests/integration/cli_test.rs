//! Tests that run the built binary

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_barrelgen(dir: &Path, args: &[&str]) -> (String, String, Option<i32>) {
    let binary = env!("CARGO_BIN_EXE_barrelgen");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("BARRELGEN_OUTPUT_MODE")
        .env_remove("BARRELGEN_OUTPUT_DIR")
        .env_remove("BARRELGEN_OUTPUT_BASE_NAME")
        .env_remove("BARRELGEN_SPECIFIER_PREFIX")
        .env_remove("BARRELGEN_ANONYMOUS_EXPORTS")
        .output()
        .expect("Failed to run barrelgen");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

#[test]
fn test_no_paths_exits_with_usage() {
    let dir = tempdir().unwrap();
    let (stdout, stderr, code) = run_barrelgen(dir.path(), &[]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);
    assert!(stderr.contains("No paths given"), "stderr: {}", stderr);
}

#[test]
fn test_relative_path_is_resolved() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src").join("widget.js"), "export default function Foo() {}").unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--no-colors", "src"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Wrote"), "stdout: {}", stdout);
    assert_eq!(
        fs::read_to_string(dir.path().join("src").join("index.js")).unwrap(),
        "export { default as Foo } from './widget';"
    );
}

#[test]
fn test_nothing_found_notice() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--no-colors", "empty"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("No default exports found"), "stdout: {}", stdout);
    assert!(fs::read_dir(dir.path().join("empty")).unwrap().next().is_none());
}

#[test]
fn test_conflict_notice() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("mixed");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.js"), "export default function A() {}").unwrap();
    fs::write(root.join("b.ts"), "export default function B() {}").unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--no-colors", "mixed"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Mixed module types"), "stdout: {}", stdout);
    assert!(!root.join("index.js").exists());
    assert!(!root.join("index.ts").exists());
}

#[test]
fn test_failed_path_does_not_stop_the_next() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good");
    fs::create_dir_all(&good).unwrap();
    fs::write(good.join("a.ts"), "export default function A() {}").unwrap();

    let (stdout, stderr, code) = run_barrelgen(dir.path(), &["--no-colors", "missing", "good"]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("Cannot scan"), "stderr: {}", stderr);
    assert!(good.join("index.ts").exists());
    assert!(stdout.contains("1 barrel produced for 2 paths, 1 failed"), "stdout: {}", stdout);
}

#[test]
fn test_dry_run_prints_barrel() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "export default function A() {}").unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--no-colors", "--dry-run", "."]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Would write"), "stdout: {}", stdout);
    assert!(stdout.contains("export { default as A } from './a';"));
    assert!(!dir.path().join("index.ts").exists());
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "export default function A() {}").unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--output", "json", "."]);

    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["reports"][0]["outcome"]["status"], "written");
    assert_eq!(parsed["reports"][0]["statements"][0]["name"], "A");
}

#[test]
fn test_init_creates_config_once() {
    let dir = tempdir().unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--init"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Created default configuration file"));

    let config = dir.path().join(".barrelgen.toml");
    fs::write(&config, "output_base_name = \"mine\"").unwrap();

    let (stdout, _, code) = run_barrelgen(dir.path(), &["--init"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("already exists"));
    assert_eq!(fs::read_to_string(config).unwrap(), "output_base_name = \"mine\"");
}

#[test]
fn test_bad_config_is_critical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".barrelgen.toml"), "output_mode = \"sideways\"").unwrap();
    fs::write(dir.path().join("a.ts"), "export default function A() {}").unwrap();

    let (_, stderr, code) = run_barrelgen(dir.path(), &["."]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Error parsing configuration file"), "stderr: {}", stderr);
    assert!(!dir.path().join("index.ts").exists());
}
