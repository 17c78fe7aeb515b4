//! Runs the `travelog` binary against small exports written to a temp dir.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DUPLICATE_NOTES: &str = r#"[
    {"name": "Vienna", "country": "AT", "rating": 4, "source": "note"},
    {"name": "vienna", "country": "Austria", "rating": 5, "source": "note"},
    {"name": "Graz", "country": "AT", "source": "post"}
]"#;

const CLEAN: &str = r#"[
    {"name": "Vienna", "country": "AT", "rating": 4, "source": "note"},
    {"name": "Vienna", "country": "AT", "rating": 3, "source": "post"}
]"#;

fn write(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

fn travelog(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_travelog"))
        .args(args)
        .current_dir(dir)
        .env_remove("TRAVELOG_CONFIG")
        .env_remove("TRAVELOG_RATING_SCALE")
        .output()
        .unwrap()
}

#[test]
fn lint_exits_2_on_duplicate_notes() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "dups.json", DUPLICATE_NOTES);

    let out = travelog(dir.path(), &["lint", &input]);
    assert_eq!(out.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("duplicate manual rating: vienna-AT"), "{stdout}");
}

#[test]
fn lint_passes_with_one_note_per_city() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "clean.json", CLEAN);

    let out = travelog(dir.path(), &["lint", &input]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn table_flag_overrides_json_config() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "clean.json", CLEAN);
    let config = write(dir.path(), "travelog.toml", "[display]\njson = true\n");

    let out = travelog(dir.path(), &["-c", &config, "aggregate", &input]);
    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));

    let out = travelog(dir.path(), &["-c", &config, "aggregate", &input, "--table"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Vienna (AT)"), "{stdout}");
    assert!(serde_json::from_slice::<serde_json::Value>(&out.stdout).is_err());
}

#[test]
fn missing_input_is_exit_1() {
    let dir = TempDir::new().unwrap();
    let out = travelog(dir.path(), &["lint", "nope.json"]);
    assert_eq!(out.status.code(), Some(1));
}
