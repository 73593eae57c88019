use std::io::Write;

use primer_core::api::{self as core_api, CliError};

use crate::commands::catalog::{render_fields, render_list};
use crate::commands::cli::{Action, Args};
use crate::commands::exercise::run_exercise;
use crate::stdio::read_input_bytes;

pub fn run_app(args: Args) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(args, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run_with<W: Write>(args: Args, out: &mut W) -> Result<(), CliError> {
    let (cfg, source) = core_api::load(args.config.as_deref())?;
    tracing::debug!(config = %source, reference_year = cfg.reference_year, "config loaded");

    match args.command.action() {
        Action::List(format) => {
            let rendered = render_list(format).map_err(std::io::Error::from)?;
            writeln!(out, "{rendered}")?;
        }
        Action::Describe(exercise) => {
            for line in render_fields(exercise) {
                writeln!(out, "{line}")?;
            }
        }
        Action::Solve(exercise) => {
            let input = read_input_bytes(args.input_file.as_deref())?;
            run_exercise(exercise, &input, &cfg, out)?;
        }
    }
    Ok(())
}
