//! CLI entry point for fix-imports: rewrites import alias paths in place

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::logging::init_logging;
use dirtree::rewrite::default_rules;
use dirtree::{
    ColorMode, Console, FileOutcome, FileReport, ImportRewriter, RewriteConfig, RewriteError,
    RewriteRule, Status, WalkerConfig, should_use_color,
};

#[derive(Parser, Debug)]
#[command(name = "fix-imports")]
#[command(about = "Rewrite import paths in every matching file under a directory")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = "src")]
    root: PathBuf,

    /// Only rewrite files whose names end with this extension
    #[arg(short = 'e', long = "ext", default_value = ".js")]
    extension: String,

    /// Rewrite rule as 'PATTERN=>REPLACEMENT' (regex pattern, literal
    /// replacement). Can be repeated; replaces the built-in alias rules.
    #[arg(short = 'r', long = "rule", value_parser = parse_rule)]
    rules: Vec<RewriteRule>,

    /// Show which files would change without writing them
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_rule(s: &str) -> Result<RewriteRule, String> {
    RewriteRule::parse(s).map_err(|e| e.to_string())
}

fn report_line(report: &FileReport, dry_run: bool) -> (Status, String) {
    let path = report.path.display();
    match &report.outcome {
        FileOutcome::Updated if dry_run => {
            (Status::Success, format!("Would update file: {}", path))
        }
        FileOutcome::Updated => (Status::Success, format!("Updating file: {}", path)),
        FileOutcome::Unchanged => (Status::Info, format!("No changes needed for: {}", path)),
        FileOutcome::Failed(e) => (Status::Error, format!("Error processing {}: {}", path, e)),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let rules = if args.rules.is_empty() {
        default_rules()
    } else {
        args.rules.clone()
    };
    let config = RewriteConfig {
        extension: args.extension.clone(),
        rules,
        dry_run: args.dry_run,
        walker: WalkerConfig::default(),
    };
    let rewriter = ImportRewriter::new(config);
    let mut console = Console::new(should_use_color(args.color));

    let mut write_failed = false;
    let result = rewriter.rewrite_tree(&args.root, |report| {
        let (status, line) = report_line(report, args.dry_run);
        if console.status(status, &line).is_err() {
            write_failed = true;
        }
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(RewriteError::RootNotDirectory(root)) => {
            let _ = console.status(
                Status::Error,
                &format!("Error: The directory '{}' does not exist.", root.display()),
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("fix-imports: {}", e);
            process::exit(1);
        }
    };
    tracing::info!(
        "{} updated, {} unchanged, {} failed",
        summary.updated,
        summary.unchanged,
        summary.failed
    );

    let done = console.status(
        Status::Info,
        "\nImport update process completed. Please run your server again.",
    );
    if write_failed || done.is_err() {
        eprintln!("fix-imports: error writing output");
        process::exit(1);
    }
}
