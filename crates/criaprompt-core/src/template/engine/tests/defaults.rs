//! Default-binding (reset) tests

use super::helpers::HASH_PROMPT;
use super::*;
use crate::template::placeholder::merge_saved;

#[test]
fn test_default_bindings_from_declared_defaults() {
    let placeholders = vec![
        Placeholder::synthetic("tone").with_default("formal"),
        Placeholder::synthetic("topic"),
    ];

    let bindings = default_bindings(&placeholders);

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings.get("tone"), Some("formal"));
    assert_eq!(bindings.get("topic"), Some(""));
}

#[test]
fn test_default_bindings_empty_list() {
    assert!(default_bindings(&[]).is_empty());
}

#[test]
fn test_reset_restores_clean_preview() {
    let engine = TemplateEngine::new(Dialect::Hash);
    let saved = vec![Placeholder::synthetic("tone").with_default("friendly")];
    let fields = merge_saved(engine.extract(HASH_PROMPT), &saved);

    let mut session = engine.default_bindings(&fields);
    session.insert("tone", "sarcastic");
    session.insert("role", "pirate");
    assert!(engine.render(HASH_PROMPT, &session).contains("pirate"));

    let reset = engine.default_bindings(&fields);
    let preview = engine.render(HASH_PROMPT, &reset);

    assert_eq!(
        preview,
        "Act as a [role]. Explain [topic] to [audience] in a friendly tone. \
Keep the [topic] examples short."
    );
}

#[test]
fn test_default_bindings_is_deterministic() {
    let placeholders = vec![
        Placeholder::synthetic("b").with_default("2"),
        Placeholder::synthetic("a").with_default("1"),
    ];
    assert_eq!(default_bindings(&placeholders), default_bindings(&placeholders));
}
