//! Fields command - list the placeholders of a template

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use criaprompt_core::template::Placeholder;
use serde_json::json;
use std::path::Path;

/// List placeholders in order of first appearance
///
/// Templates from the library get their saved descriptions and defaults.
/// With `save`, the merged list is written back to the library record.
pub fn run(
    config: Option<&Path>,
    source: &SourceArgs,
    json: bool,
    save: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template_source(source)?;

    let fields = template.fields();

    if save {
        let Some(mut record) = template.record else {
            bail!("--save needs a library prompt (--prompt <id>)");
        };
        let path = ctx.library_path()?;
        let mut library = ctx.library()?;

        if record.sync_fields(ctx.config.template.dialect) {
            let id = record.id.clone();
            library.upsert(record)?;
            library.save(&path)?;
            if !json {
                println!("{} Saved {} field(s) to '{}'", "✓".green().bold(), fields.len(), id);
            }
        } else if !json {
            println!("{} Fields of '{}' already up to date", "✓".green().bold(), record.id);
        }
    }

    if json {
        print_json(&json!({
            "dialect": template.dialect,
            "fields": fields,
            "count": fields.len(),
        }))?;
    } else {
        output_fields_human(&fields, ctx.verbose);
    }

    Ok(())
}

fn output_fields_human(fields: &[Placeholder], verbose: bool) {
    if fields.is_empty() {
        println!("{} No placeholders found", "!".yellow());
        return;
    }

    for field in fields {
        if field.default_value.is_empty() {
            println!("{}  {}", field.name.bold(), field.description.dimmed());
        } else {
            println!(
                "{}  {} (default: {})",
                field.name.bold(),
                field.description.dimmed(),
                field.default_value
            );
        }
    }

    if verbose {
        println!("\n{} {} placeholder(s)", "→".cyan(), fields.len());
    }
}
