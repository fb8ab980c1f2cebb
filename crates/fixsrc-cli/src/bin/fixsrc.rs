#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use fixsrc_cli::args::{CliArgs, OutputFormat};
use fixsrc_cli::driver;
use fixsrc_cli::reporter::{Reporter, render_json};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_REPORTED: i32 = 1;
/// Usage, I/O, parse and bind failures.
const EXIT_FAILURE: i32 = 2;

fn main() {
    // Initialize tracing if FIXSRC_LOG or RUST_LOG is set (zero cost otherwise).
    fixsrc::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run(args: &CliArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::run(args, &cwd)?;

    for graph in &result.graphs {
        if let Some(dump) = &graph.dump {
            let edition = graph.edition.map_or("none", |edition| edition.as_str());
            eprintln!("== {} (edition {edition})", graph.path.display());
            eprint!("{dump}");
        }
    }

    match result.options.format {
        OutputFormat::Json => println!("{}", render_json(&result.diagnostics)?),
        OutputFormat::Text => {
            let pretty = result
                .options
                .pretty
                .unwrap_or_else(|| std::io::stderr().is_terminal());
            let output = Reporter::new(pretty).render(&result.diagnostics);
            if !output.is_empty() {
                // render() already includes all newlines
                eprint!("{output}");
            }
        }
    }

    Ok(if result.diagnostics.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DIAGNOSTICS_REPORTED
    })
}
