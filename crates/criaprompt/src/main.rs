mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Fields { source, json, save } => {
            commands::fields::run(config, &source, json, save, cli.verbose)
        }
        Commands::Render {
            source,
            set,
            bindings,
        } => commands::render::run(config, &source, &set, bindings.as_deref(), cli.verbose),
        Commands::Defaults { source } => commands::defaults::run(config, &source, cli.verbose),
        Commands::List {
            query,
            tag,
            category,
            public,
            sort,
            json,
        } => {
            let filter = criaprompt_core::library::PromptFilter {
                query,
                tag,
                category,
                public_only: public,
                sort,
            };
            commands::list::run(config, &filter, json, cli.verbose)
        }
        Commands::Show { id, json } => commands::show::run(config, &id, json, cli.verbose),
        Commands::Tags { json } => commands::tags::run(config, json, cli.verbose),
        Commands::Schema => commands::schema::run(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins, otherwise `warn` (or `debug` with --verbose)
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
