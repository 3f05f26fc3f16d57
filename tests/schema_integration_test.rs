//! Integration tests for the schema command.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn pg2sqlite() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pg2sqlite"))
}

#[test]
fn test_schema_writes_document() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("database").join("sqlite_schema.sql");

    let output = pg2sqlite()
        .args(["schema", "-o", output_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);

    let result = fs::read_to_string(&output_file).unwrap();

    assert_eq!(result.matches("CREATE TABLE").count(), 13);
    assert!(result.contains("CREATE TABLE users ("));
    assert!(result.contains("CREATE TABLE forum_replies ("));
    assert!(result.contains("CREATE INDEX idx_reviews_user_id ON reviews(user_id);"));
}

#[test]
fn test_schema_byte_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.sql");
    let second = temp_dir.path().join("second.sql");

    for path in [&first, &second] {
        let output = pg2sqlite()
            .args(["schema", "-o", path.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(output.status.success(), "Command failed: {:?}", output);
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_schema_requires_no_input() {
    // The emitter takes no input at all; only the output path is read.
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("schema.sql");

    let output = pg2sqlite()
        .current_dir(temp_dir.path())
        .args(["schema", "-o", output_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_file.exists());
}
