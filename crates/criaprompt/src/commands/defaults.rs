//! Defaults command - print the clean-slate binding set

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use criaprompt_core::template::default_bindings;
use std::path::Path;

pub fn run(config: Option<&Path>, source: &SourceArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template_source(source)?;
    let fields = template.fields();

    print_json(&default_bindings(&fields))
}
