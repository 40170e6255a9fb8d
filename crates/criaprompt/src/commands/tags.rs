//! Tags command - count prompts per tag

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(config: Option<&Path>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let tags = ctx.library()?.tags();

    if json {
        return print_json(&tags);
    }

    if tags.is_empty() {
        println!("{} No tags found", "!".yellow());
        return Ok(());
    }

    for (tag, count) in &tags {
        println!("{}  {}", tag.cyan(), count);
    }

    Ok(())
}
