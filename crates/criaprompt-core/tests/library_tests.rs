//! Integration tests for loading and saving prompt libraries

use criaprompt_core::library::{PromptFilter, PromptLibrary, SortKey};
use criaprompt_core::template::{default_bindings, Dialect};
use criaprompt_core::CriapromptError;
use criaprompt_testkit::{sample_library_json, temp_dir_in_workspace, write_library, SAMPLE_PROMPT_IDS};
use std::fs;

#[test]
fn test_load_single_file_library() {
    let temp = temp_dir_in_workspace();
    let path = write_library(temp.path());

    let library = PromptLibrary::load(&path).unwrap();

    let ids: Vec<_> = library.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, SAMPLE_PROMPT_IDS);
}

#[test]
fn test_load_directory_library_in_path_order() {
    let temp = temp_dir_in_workspace();
    let records = sample_library_json();
    let nested = temp.path().join("nested");
    fs::create_dir_all(&nested).unwrap();

    fs::write(
        temp.path().join("b.json"),
        serde_json::to_string(&vec![&records[1]]).unwrap(),
    )
    .unwrap();
    fs::write(
        temp.path().join("a.json"),
        serde_json::to_string(&vec![&records[0]]).unwrap(),
    )
    .unwrap();
    fs::write(
        nested.join("c.json"),
        serde_json::to_string(&vec![&records[2]]).unwrap(),
    )
    .unwrap();
    fs::write(temp.path().join("README.md"), "not a library file").unwrap();

    let library = PromptLibrary::load(temp.path()).unwrap();

    let ids: Vec<_> = library.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["explain-concept", "code-review", "brainstorm"]);
}

#[test]
fn test_load_directory_rejects_duplicate_ids_across_files() {
    let temp = temp_dir_in_workspace();
    write_library(temp.path());
    fs::copy(temp.path().join("prompts.json"), temp.path().join("copy.json")).unwrap();

    let err = PromptLibrary::load(temp.path()).unwrap_err();
    assert!(matches!(err, CriapromptError::LibraryDuplicateId(_)));
}

#[test]
fn test_load_missing_library() {
    let temp = temp_dir_in_workspace();
    let err = PromptLibrary::load(temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CriapromptError::LibraryNotFound { .. }));
    assert!(err.to_string().starts_with("LIBRARY_NOT_FOUND"));
}

#[test]
fn test_load_malformed_library() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("prompts.json");
    fs::write(&path, r#"[{"id": "x", "title": "T"}]"#).unwrap();

    let err = PromptLibrary::load(&path).unwrap_err();
    match err {
        CriapromptError::LibraryParseError { path: err_path, reason } => {
            assert_eq!(err_path, path);
            assert!(reason.contains("content"));
        }
        other => panic!("Expected LibraryParseError, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_record() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("prompts.json");
    fs::write(
        &path,
        r#"[{"id": "x", "title": "T", "content": "", "tags": ["a", "A"]}]"#,
    )
    .unwrap();

    let err = PromptLibrary::load(&path).unwrap_err();
    assert!(matches!(err, CriapromptError::RecordInvalid { .. }));
}

#[test]
fn test_filter_loaded_library() {
    let temp = temp_dir_in_workspace();
    let library = PromptLibrary::load(write_library(temp.path())).unwrap();

    let writing = library.filter(&PromptFilter {
        tag: Some("writing".to_string()),
        sort: SortKey::Views,
        ..Default::default()
    });
    let ids: Vec<_> = writing.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["explain-concept", "brainstorm"]);
}

#[test]
fn test_save_synced_fields_and_reload() {
    let temp = temp_dir_in_workspace();
    let path = write_library(temp.path());
    let mut library = PromptLibrary::load(&path).unwrap();

    let mut record = library.require("explain-concept").unwrap().clone();
    assert!(record.sync_fields(Dialect::Hash));
    library.upsert(record).unwrap();
    library.save(&path).unwrap();

    let reloaded = PromptLibrary::load(&path).unwrap();
    assert_eq!(reloaded, library);

    let record = reloaded.require("explain-concept").unwrap();
    let names: Vec<_> = record.custom_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["topic", "audience"]);

    let bindings = default_bindings(&record.fields(Dialect::Hash));
    assert_eq!(
        record.preview(&bindings, Dialect::Hash),
        "Explain [topic] to beginners. Use one example about [topic]."
    );
}

#[test]
fn test_save_into_directory_fails() {
    let temp = temp_dir_in_workspace();
    let library = PromptLibrary::default();
    let err = library.save(temp.path()).unwrap_err();
    assert!(matches!(err, CriapromptError::LibraryWriteError(_)));
}
