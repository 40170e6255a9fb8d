//! Show command - print one prompt with its fields

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use criaprompt_core::prompt::PromptRecord;
use criaprompt_core::template::{Dialect, Placeholder};
use serde_json::json;
use std::path::Path;

pub fn run(config: Option<&Path>, id: &str, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let library = ctx.library()?;
    let record = library.require(id)?;
    let dialect = record.dialect_or(ctx.config.template.dialect);
    let fields = record.fields(dialect);

    if json {
        print_json(&json!({
            "prompt": record,
            "dialect": dialect,
            "fields": fields,
        }))?;
    } else {
        output_prompt_human(record, dialect, &fields);
    }

    Ok(())
}

fn output_prompt_human(record: &PromptRecord, dialect: Dialect, fields: &[Placeholder]) {
    println!("{} {}", record.title.bold(), format!("[{}]", record.id).dimmed());

    if let Some(description) = &record.description {
        println!("{}", description);
    }
    if let Some(category) = &record.category {
        println!("category: {}", category);
    }
    if !record.tags.is_empty() {
        println!("tags: {}", record.tags.join(", ").cyan());
    }
    println!(
        "views: {}  favorites: {}  {}",
        record.views,
        record.favorites,
        if record.is_public { "public" } else { "private" }
    );

    println!("\n{}", record.content);

    println!("\n{} Fields ({} dialect):", "→".cyan(), dialect);
    if fields.is_empty() {
        println!("  none");
    }
    for field in fields {
        if field.default_value.is_empty() {
            println!("  {}  {}", field.name.bold(), field.description.dimmed());
        } else {
            println!(
                "  {}  {} (default: {})",
                field.name.bold(),
                field.description.dimmed(),
                field.default_value
            );
        }
    }
}
