use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use counterpart::cli;
use counterpart::commands::{open_test_file, OpenRequest};
use counterpart::discovery::FsIndex;
use counterpart::editor::{CommandEditor, Editor, PrintEditor};
use counterpart::logging::{self, Verbosity};

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let index = FsIndex::new(&args.root).context("Cannot index workspace")?;
    let active_file = cli::resolve_active_file(args.command.file())?;

    let mut editor: Box<dyn Editor> = match args.editor.as_deref() {
        Some(command) => Box::new(CommandEditor::parse(command)?),
        None => Box::new(PrintEditor::new(std::io::stdout(), args.format)),
    };

    let request = OpenRequest {
        active_file: &active_file,
        active_pane: args.command.active_pane(),
    };

    let outcome = open_test_file(
        &index,
        editor.as_mut(),
        request,
        args.command.open_to_the_side(),
    )
    .with_context(|| format!("Cannot open counterpart of {active_file}"))?;

    if outcome.is_opened() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
