use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use parwrap_core::{Result, indent_wrap, wrap};

use crate::host::{DocumentSink, DocumentSource};

#[derive(Debug, Parser)]
#[command(
    name = "parwrap",
    about = "Reflow plain ASCII text to 79 columns",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow without continuation indents.
    Wrap(WrapArgs),

    /// Reflow with a 5-space indent on continuation lines.
    #[command(name = "indent-wrap")]
    IndentWrap(WrapArgs),
}

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// Input file; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Write the result back into FILE instead of printing to stdout.
    #[arg(long, requires = "file")]
    pub in_place: bool,
}

pub fn run_from_env() -> Result<&'static str> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<&'static str> {
    match cli.command {
        Commands::Wrap(args) => execute(args, false),
        Commands::IndentWrap(args) => execute(args, true),
    }
}

fn execute(args: WrapArgs, indent: bool) -> Result<&'static str> {
    let mut source = match &args.file {
        Some(path) => DocumentSource::from_path(path)?,
        None => DocumentSource::from_stdin()?,
    };
    let mut sink = match (&args.file, args.in_place) {
        (Some(path), true) => DocumentSink::File(path.clone()),
        _ => DocumentSink::Stdout,
    };
    if indent {
        indent_wrap(&mut source, &mut sink)
    } else {
        wrap(&mut source, &mut sink)
    }
}
