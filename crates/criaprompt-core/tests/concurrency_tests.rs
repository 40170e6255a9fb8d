//! Concurrent use of the template engine
//!
//! The engine holds no mutable state, so independent previews can render
//! from many threads at once and must agree with a single-threaded render.

use criaprompt_core::template::{Bindings, Dialect, TemplateEngine};
use std::sync::{Arc, Barrier};
use std::thread;

const TEMPLATE: &str = "Write a #length #format about #topic for #audience. \
Mention #topic in the title.";

#[test]
fn test_concurrent_renders_agree() {
    let engine = TemplateEngine::new(Dialect::Hash);
    const NUM_THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut bindings = Bindings::new();
                bindings.insert("topic", format!("topic-{}", i));
                bindings.insert("format", "poem");

                barrier.wait();

                let outputs: Vec<String> =
                    (0..100).map(|_| engine.render(TEMPLATE, &bindings)).collect();
                (i, bindings, outputs)
            })
        })
        .collect();

    for handle in handles {
        let (i, bindings, outputs) = handle.join().unwrap();
        let expected = engine.render(TEMPLATE, &bindings);
        assert!(outputs.iter().all(|o| *o == expected));
        assert_eq!(
            expected,
            format!(
                "Write a [length] poem about topic-{i} for [audience]. Mention topic-{i} in the title."
            )
        );
    }
}

#[test]
fn test_concurrent_extraction_agrees() {
    let engine = TemplateEngine::new(Dialect::Hash);
    let expected = engine.extract(TEMPLATE);

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || engine.extract(TEMPLATE)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
