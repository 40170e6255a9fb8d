//! Schema command - print the prompt record JSON Schema

use crate::output::print_json;
use anyhow::Result;
use criaprompt_core::prompt::record_schema;

pub fn run() -> Result<()> {
    print_json(&record_schema())
}
