//! List command - browse the prompt library

use crate::context::Context;
use crate::output::{one_line, print_json};
use anyhow::Result;
use colored::Colorize;
use criaprompt_core::config::consts::listing::PREVIEW_CHARS;
use criaprompt_core::library::PromptFilter;
use criaprompt_core::prompt::PromptRecord;
use serde_json::json;
use std::path::Path;

pub fn run(config: Option<&Path>, filter: &PromptFilter, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let library = ctx.library()?;
    let found = library.filter(filter);

    if json {
        print_json(&json!({
            "prompts": found,
            "count": found.len(),
        }))?;
    } else {
        output_prompts_human(&found, ctx.verbose);
    }

    Ok(())
}

fn output_prompts_human(prompts: &[&PromptRecord], verbose: bool) {
    if prompts.is_empty() {
        println!("{} No prompts found", "!".yellow());
        return;
    }

    for prompt in prompts {
        let visibility = if prompt.is_public { "public" } else { "private" };
        println!(
            "{}  {} {}",
            prompt.id.bold(),
            prompt.title,
            format!("({} views, {} favorites, {})", prompt.views, prompt.favorites, visibility)
                .dimmed()
        );
        if !prompt.tags.is_empty() {
            println!("    tags: {}", prompt.tags.join(", ").cyan());
        }
        if verbose {
            println!("    {}", one_line(&prompt.content, PREVIEW_CHARS).dimmed());
        }
    }

    println!("\n{} {} prompt(s)", "✓".green().bold(), prompts.len());
}
