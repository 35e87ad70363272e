//! sliver CLI
//!
//! Parses one HTML document and prints its node tree.
//!
//! Usage:
//!   sliver <file>                 Print the tree as indented lines
//!   sliver <file> --json          Print the tree as JSON
//!   sliver --html '<p>hi</p>'     Parse an inline string instead of a file
//!
//! Exit status is 0 on success, 1 for malformed markup, and 2 when the
//! document parsed but was followed by more content.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as CliParser;
use owo_colors::OwoColorize;
use sliver_common::warning::Reporter;
use sliver_dom::print_tree;
use sliver_html::{DEFAULT_MAX_DEPTH, ParseError, Parser};

/// Command-line options.
#[derive(CliParser)]
#[command(name = "sliver", version, about)]
struct Cli {
    /// HTML file to parse
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    file: Option<PathBuf>,

    /// Parse this string instead of reading a file
    #[arg(long, value_name = "STRING")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(long, short)]
    json: bool,

    /// Accept a document whose root is a bare text run
    #[arg(long)]
    allow_text_root: bool,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not print parse warnings
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (name, source) = if let Some(html) = cli.html {
        ("<inline>".to_string(), html)
    } else if let Some(path) = cli.file {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        (path.display().to_string(), source)
    } else {
        // clap enforces one of the two.
        anyhow::bail!("no input file or --html provided");
    };

    let parser = Parser::new(&source)
        .with_max_depth(cli.max_depth)
        .with_text_root(cli.allow_text_root);

    let (root, issues) = match parser.run_with_issues() {
        Ok(parsed) => parsed,
        Err(err) => {
            report_error(&name, &source, &err);
            return Ok(ExitCode::from(err.kind.exit_code()));
        }
    };

    let mut reporter = if cli.quiet {
        Reporter::muted()
    } else {
        Reporter::new()
    };
    for issue in &issues {
        reporter.warn_once(
            "HTML",
            &format!("{name}: {} at byte {}: {}", issue.kind, issue.offset, issue.message),
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        print_tree(&root);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print a parse error with the offending source line and a caret under the
/// column where it was detected.
fn report_error(name: &str, source: &str, err: &ParseError) {
    eprintln!(
        "{}: {name}:{}:{}: {}",
        "error".red().bold(),
        err.line,
        err.column,
        err.kind
    );
    if let Some(line) = source.lines().nth(err.line - 1) {
        eprintln!("  {line}");
        eprintln!("  {}{}", " ".repeat(err.column - 1), "^".red());
    }
}
