//! Integration tests that run the CLI binary against scratch documents.

use std::fs;
use std::path::Path;

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_llm", "-", "model", "-", "manager"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("LLM_MODELS_FILE");
    cmd
}

fn write_models(path: &Path, names: &[&str]) {
    let models: Vec<_> = names
        .iter()
        .map(|n| serde_json::json!({"model": n, "name": n}))
        .collect();
    fs::write(
        path,
        serde_json::to_string(&serde_json::json!({ "llmModels": models })).unwrap(),
    )
    .unwrap();
}

fn names_on_disk(path: &Path) -> Vec<String> {
    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    doc["llmModels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("llmModels"), "expected usage text in output");
    assert!(stdout.contains("move-up"));
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("llm-model-manager"));
}

#[test]
fn cli_list_on_first_run_creates_empty_document() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    let output = bin()
        .arg("list")
        .arg("--file")
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No models available."));
    assert!(doc.exists());
    assert!(names_on_disk(&doc).is_empty());
}

#[test]
fn cli_default_document_is_in_working_directory() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("list")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(tmp.path().join("models.json").exists());
}

#[test]
fn cli_list_prints_models_in_order() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["gpt-3.5-turbo", "gpt-4"]);
    let output = bin()
        .arg("list")
        .env("LLM_MODELS_FILE", &doc)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("gpt-3.5-turbo").expect("first model listed");
    let second = stdout.find("gpt-4 ").expect("second model listed");
    assert!(first < second);
    assert!(stdout.contains("2 model(s) listed"));
}

#[test]
fn cli_delete_is_idempotent() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["a", "b"]);

    for _ in 0..2 {
        let output = bin()
            .args(["delete", "a", "--file"])
            .arg(&doc)
            .output()
            .expect("binary not found - run cargo build first");
        assert!(output.status.success());
    }
    assert_eq!(names_on_disk(&doc), vec!["b"]);
}

#[test]
fn cli_move_up_swaps_with_previous() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["gpt-3.5-turbo", "gpt-4"]);

    let output = bin()
        .args(["move-up", "1", "--file"])
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    assert_eq!(names_on_disk(&doc), vec!["gpt-4", "gpt-3.5-turbo"]);

    // Already at the top: nothing changes.
    let output = bin()
        .args(["move-up", "0", "--file"])
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    assert_eq!(names_on_disk(&doc), vec!["gpt-4", "gpt-3.5-turbo"]);
}

#[test]
fn cli_move_down_at_bottom_is_noop() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["a", "b"]);

    let output = bin()
        .args(["move-down", "1", "--file"])
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("not moved"));
    assert_eq!(names_on_disk(&doc), vec!["a", "b"]);
}

#[test]
fn cli_corrupt_document_lists_nothing() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    fs::write(&doc, "{ not json").unwrap();

    let output = bin()
        .arg("list")
        .arg("--file")
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No models available."));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid model document"));
    assert_eq!(fs::read_to_string(&doc).unwrap(), "{ not json");
}

#[test]
fn cli_show_unknown_model_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["a"]);

    let output = bin()
        .args(["show", "missing", "--file"])
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no model named 'missing'"));
}

#[test]
fn cli_show_prints_fields_and_defaults() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let doc = tmp.path().join("config.json");
    write_models(&doc, &["glm-4"]);

    let output = bin()
        .args(["show", "glm-4", "--file"])
        .arg(&doc)
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("glm-4"));
    assert!(stdout.contains("16000"));
}
