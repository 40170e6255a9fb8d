//! Integration tests for the fields, render and defaults commands

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use criaprompt_testkit::{isolate_config_env, temp_dir_in_workspace, write_config, write_library};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn criaprompt(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("criaprompt"));
    isolate_config_env(&mut cmd, dir);
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_render_file_with_fallback() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "Hi #name, about #topic").unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt", "--set", "name=Ana"])
        .assert()
        .success()
        .stdout("Hi Ana, about [topic]\n");
}

#[test]
fn test_render_later_set_wins_over_bindings_file() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "#a #b #c").unwrap();
    fs::write(
        temp.path().join("values.json"),
        r#"{"a": "file-a", "b": "file-b", "unused": "x"}"#,
    )
    .unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt", "--bindings", "values.json", "-s", "b=cli-b"])
        .assert()
        .success()
        .stdout("file-a cli-b [c]\n");
}

#[test]
fn test_render_does_not_rescan_values() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "#x").unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt", "--set", "x=#x"])
        .assert()
        .success()
        .stdout("#x\n");
}

#[test]
fn test_render_from_stdin() {
    let temp = temp_dir_in_workspace();
    let cmd = criaprompt(temp.path());

    assert_cmd::Command::from_std(cmd)
        .args(["render", "--dialect", "bracket", "--set", "x=Z"])
        .write_stdin("(x) and {x} but not #x\n")
        .assert()
        .success()
        .stdout("Z and Z but not #x\n");
}

#[test]
fn test_render_uses_config_dialect() {
    let temp = temp_dir_in_workspace();
    write_config(temp.path(), "bracket", None);
    fs::write(temp.path().join("prompt.txt"), "{who} and #who").unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt"])
        .assert()
        .success()
        .stdout("[who] and #who\n");
}

#[test]
fn test_render_malformed_set_fails() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "#x").unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt", "--set", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed binding 'novalue'"));
}

#[test]
fn test_render_invalid_bindings_file_fails() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "#x").unwrap();
    fs::write(temp.path().join("values.json"), r#"["not", "an", "object"]"#).unwrap();

    criaprompt(temp.path())
        .args(["render", "prompt.txt", "--bindings", "values.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BINDINGS_INVALID"));
}

#[test]
fn test_render_library_prompt_uses_saved_defaults() {
    let temp = temp_dir_in_workspace();
    write_library(temp.path());
    write_config(temp.path(), "hash", Some("prompts.json"));

    criaprompt(temp.path())
        .args(["render", "--prompt", "explain-concept", "--set", "topic=borrowing"])
        .assert()
        .success()
        .stdout("Explain borrowing to beginners. Use one example about borrowing.\n");
}

#[test]
fn test_render_library_prompt_uses_record_dialect() {
    let temp = temp_dir_in_workspace();
    write_library(temp.path());
    write_config(temp.path(), "hash", Some("prompts.json"));

    criaprompt(temp.path())
        .args(["render", "-p", "code-review", "-s", "language=Rust", "-s", "focus=safety"])
        .assert()
        .success()
        .stdout("Review this Rust code focusing on safety:\n[code]\n");
}

#[test]
fn test_render_unknown_prompt_fails() {
    let temp = temp_dir_in_workspace();
    write_library(temp.path());
    write_config(temp.path(), "hash", Some("prompts.json"));

    criaprompt(temp.path())
        .args(["render", "--prompt", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROMPT_NOT_FOUND: prompt 'nope' not found"));
}

#[test]
fn test_fields_json_in_first_appearance_order() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "#b then #a then #b").unwrap();

    let output = criaprompt(temp.path())
        .args(["fields", "prompt.txt", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dialect"], "hash");
    assert_eq!(value["count"], 2);
    assert_eq!(value["fields"][0]["name"], "b");
    assert_eq!(value["fields"][0]["description"], "Field b");
    assert_eq!(value["fields"][0]["defaultValue"], "");
    assert_eq!(value["fields"][1]["name"], "a");
}

#[test]
fn test_fields_human_output_without_markers() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("prompt.txt"), "Nothing to fill").unwrap();

    criaprompt(temp.path())
        .args(["fields", "prompt.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No placeholders found"));
}

#[test]
fn test_defaults_for_library_prompt() {
    let temp = temp_dir_in_workspace();
    write_library(temp.path());
    write_config(temp.path(), "hash", Some("prompts.json"));

    let output = criaprompt(temp.path())
        .args(["defaults", "--prompt", "explain-concept"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "audience": "beginners", "topic": "" })
    );
}
