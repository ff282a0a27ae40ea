//! zerofs CLI - Command line inspector for the empty file system
//!
//! Every command runs against a logged `EmptyFs`, so `-v` shows the
//! file system calls being made.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing::{debug, Level};
use zerofs::{
    collect_paths, EmptyFs, File, FsError, LoggedFs, ReadDirFs, ReadFileFs, StatFs, ROOT,
};

mod config;
mod logging;
mod platform;

use crate::config::{parse_level_arg, LogConfig, CLI_TARGET};
use crate::logging::LogFormat;
use crate::platform::{print_error, InfoReport, Output};

#[derive(Parser)]
#[command(
    name = "zerofs",
    about = "Inspect the zerofs empty file system",
    version
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log level for file system calls: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_level_arg, global = true)]
    log_vfs: Option<Level>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a path, print the handle's metadata, close it
    Open { path: String },
    /// Print metadata for a path
    Stat { path: String },
    /// List a directory
    Ls {
        #[arg(default_value = ROOT)]
        path: String,
    },
    /// Print a file's contents
    Cat { path: String },
    /// List every path under a directory
    Walk {
        #[arg(default_value = ROOT)]
        path: String,
    },
}

/// Failure of a command
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_vfs(cli.log_vfs);

    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_ref()) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(1);
    }

    let output = if cli.json { Output::Json } else { Output::Text };
    let fs = LoggedFs::new(EmptyFs::new());

    debug!(target: CLI_TARGET, command = ?cli.command, "dispatching");

    if let Err(e) = run(&fs, &cli.command, output) {
        match e {
            CliError::Fs(e) => print_error(&e, output),
            e => eprintln!("Error: {e}"),
        }
        process::exit(1);
    }
}

fn run<F>(fs: &F, command: &Command, output: Output) -> Result<(), CliError>
where
    F: StatFs + ReadDirFs + ReadFileFs,
{
    let mut stdout = io::stdout().lock();
    match command {
        Command::Open { path } => {
            let handle = fs.open(path)?;
            let report = InfoReport::from_info(&handle.stat()?);
            handle.close()?;
            writeln!(stdout, "{}", output.info(&report)?)?;
        }
        Command::Stat { path } => {
            let report = InfoReport::from_info(&fs.stat(path)?);
            writeln!(stdout, "{}", output.info(&report)?)?;
        }
        Command::Ls { path } => {
            let names: Vec<String> = fs.read_dir(path)?.into_iter().map(|e| e.name).collect();
            print_lines(&mut stdout, &output.names(&names)?)?;
        }
        Command::Cat { path } => {
            let content = fs.read_file(path)?;
            stdout.write_all(&content)?;
        }
        Command::Walk { path } => {
            let paths = collect_paths(fs, path)?;
            print_lines(&mut stdout, &output.names(&paths)?)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Print rendered output, skipping it entirely when there is nothing to show
fn print_lines<W: Write>(out: &mut W, rendered: &str) -> io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", rendered)
}
