//! sprig CLI
//!
//! Parses an HTML file or string and prints the node tree as JSON, or runs a
//! directory of fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use sprig_html::{HtmlParser, fixtures, print_tree};

/// sprig — turn HTML into a tree of element, text and comment nodes
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the node tree of a file as JSON
    sprig ./index.html

    # Parse inline HTML and show an indented tree instead
    sprig --tree --html '<p>Hi <b>there</b></p>'

    # Run every fixture directory (input.html + output.json) under a root
    sprig --check crates/sprig-html/tests/fixtures
"#)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", required_unless_present_any = ["html", "check"])]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print an indented tree instead of JSON
    #[arg(long)]
    tree: bool,

    /// Print JSON on a single line
    #[arg(long, conflicts_with = "tree")]
    compact: bool,

    /// List tolerated parse issues on stderr
    #[arg(long)]
    issues: bool,

    /// Run the fixture cases under this directory
    #[arg(long, value_name = "DIR", conflicts_with_all = ["path", "html"])]
    check: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref root) = cli.check {
        return check_fixtures(root);
    }

    let html = load_html(&cli)?;
    let (tree, issues) = HtmlParser::new(&html)
        .with_warnings(!cli.issues)
        .run_with_issues();

    if cli.issues {
        for issue in &issues {
            eprintln!("{} {issue}", "warning:".yellow());
        }
    }

    if cli.tree {
        print_tree(&tree, tree.root(), 0);
        return Ok(());
    }

    let nodes = tree.into_nodes();
    let json = if cli.compact {
        serde_json::to_string(&nodes)?
    } else {
        serde_json::to_string_pretty(&nodes)?
    };
    println!("{json}");

    Ok(())
}

/// Read the HTML source named on the command line.
fn load_html(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        return Ok(html.clone());
    }
    match cli.path {
        Some(ref path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => bail!("no input: pass a FILE or --html"),
    }
}

/// Run every fixture under `root`, printing one line per case.
fn check_fixtures(root: &Path) -> Result<()> {
    let outcomes = fixtures::run_all(root)
        .with_context(|| format!("running fixtures in {}", root.display()))?;

    let mut failed = 0;
    for outcome in &outcomes {
        if outcome.passed {
            println!("{} {}", "√".green(), outcome.name);
        } else {
            failed += 1;
            println!("{} {}", "×".red(), outcome.name);
            println!("{}", outcome.mismatch_report());
        }
    }

    if failed > 0 {
        bail!("{failed} of {} fixtures failed", outcomes.len());
    }
    println!("{} fixtures passed", outcomes.len());
    Ok(())
}
