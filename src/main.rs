//! CLI entry point for dirtree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::logging::init_logging;
use dirtree::{
    ColorMode, Console, DEFAULT_OUTPUT_FILE, ReportError, Status, TreeReporter, WalkerConfig,
    echo_report, save_report, should_use_color,
};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Write a directory tree and a list of every file in it to a text file")]
#[command(version)]
struct Args {
    /// Directory to scan (default: the directory containing this executable)
    path: Option<PathBuf>,

    /// File the report is written to, relative to the current directory
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Sort entries by name instead of using filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Do not descend into symlinked directories
    #[arg(long = "no-follow-symlinks")]
    no_follow_symlinks: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Directory holding the running executable.
fn executable_dir() -> Result<PathBuf, ReportError> {
    let exe = std::env::current_exe().map_err(ReportError::DefaultRoot)?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        ReportError::DefaultRoot(io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        ))
    })
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let root = match args.path.clone() {
        Some(path) => path,
        None => executable_dir().unwrap_or_else(|e| {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }),
    };

    let reporter = TreeReporter::new(WalkerConfig {
        follow_symlinks: !args.no_follow_symlinks,
        sort_entries: args.sort,
    });
    let report = reporter.generate(&root);

    let mut console = Console::new(should_use_color(args.color));
    let result = match save_report(&report.text, &args.output) {
        Ok(()) => console.status(
            Status::Success,
            &format!(
                "Directory tree and file list successfully saved to '{}'",
                args.output.display()
            ),
        ),
        Err(e) => {
            tracing::warn!("falling back to console output: {}", e);
            console
                .status(Status::Error, &format!("Error saving output to file: {}", e))
                .and_then(|_| echo_report(&mut io::stdout(), &report.text))
        }
    };

    if let Err(e) = result {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}
