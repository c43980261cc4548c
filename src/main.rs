mod app;
mod scanner;
mod ui;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use app::ListOptions;

#[derive(Parser, Debug)]
#[command(name = "colls")]
#[command(version)]
#[command(about = "List directory contents in colorized columns", long_about = None)]
struct Args {
    /// Directory to list (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Layout width in columns instead of the terminal width
    #[arg(short, long)]
    width: Option<u16>,

    /// Diagnostic log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colls: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let options = ListOptions::new(args.path)
        .with_width(args.width)
        .with_color(!args.no_color);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&options, &mut out)
}

/// Output closed early (e.g. piped into `head`); not worth reporting.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
