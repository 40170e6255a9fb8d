//! Render command - fill a template and print the result

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::output::print_raw;
use anyhow::Result;
use criaprompt_core::CriapromptError;
use criaprompt_core::template::{Bindings, default_bindings};
use std::path::Path;

/// Render a template
///
/// Values are layered: field defaults first, then the bindings file, then
/// each `--set` in order. Unfilled placeholders print as `[name]`.
pub fn run(
    config: Option<&Path>,
    source: &SourceArgs,
    set: &[String],
    bindings_file: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template_source(source)?;
    let fields = template.fields();

    let mut bindings = default_bindings(&fields);
    if let Some(path) = bindings_file {
        bindings.merge(Bindings::from_json_file(path)?);
    }
    bindings.merge(Bindings::from_assignments(set).map_err(CriapromptError::from)?);

    for (name, _) in bindings.iter() {
        if !fields.iter().any(|f| f.name == name) {
            tracing::debug!(name, "binding does not match any placeholder");
        }
    }

    let rendered = template.engine().render(&template.text, &bindings);
    print_raw(&rendered)?;
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
