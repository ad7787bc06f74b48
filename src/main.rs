//! SQL pretty-printer CLI
//!
//! Usage:
//!   sqlpretty [OPTIONS] [FILE]...
//!
//! With no files (or with `--stdin`) the query is read from standard input.
//! Formatting options come from, in increasing priority: built-in defaults,
//! `sqlpretty.toml` in the working directory (or the file named by
//! `--config`), and command-line flags.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use similar::{ChangeTag, TextDiff};

use sql_pretty::{format, CommaStyle, FormatConfig, KeywordCase};

/// Looked up in the working directory when `--config` is not given
const CONFIG_FILE_NAME: &str = "sqlpretty.toml";

#[derive(Parser)]
#[command(name = "sqlpretty", version)]
#[command(about = "Pretty-print SQL queries", long_about = None)]
struct Cli {
    /// SQL files to format
    files: Vec<PathBuf>,

    /// Read from standard input
    #[arg(long)]
    stdin: bool,

    /// Check if inputs are formatted (exit 1 if not)
    #[arg(long, short)]
    check: bool,

    /// Write formatted output back to files
    #[arg(long, short, conflicts_with = "check")]
    write: bool,

    /// Show diff of formatting changes
    #[arg(long)]
    diff: bool,

    /// Spaces per indentation level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    indent: Option<u8>,

    /// Keyword casing
    #[arg(long, value_enum)]
    keyword_case: Option<CaseArg>,

    /// Comma placement in lists
    #[arg(long, value_enum)]
    comma_style: Option<CommaArg>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging (-vv for lexer traces)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Upper,
    Preserve,
}

impl From<CaseArg> for KeywordCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper => KeywordCase::Uppercase,
            CaseArg::Preserve => KeywordCase::PreserveOriginal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CommaArg {
    Trailing,
    Leading,
}

impl From<CommaArg> for CommaStyle {
    fn from(arg: CommaArg) -> Self {
        match arg {
            CommaArg::Trailing => CommaStyle::TrailingOnSameLine,
            CommaArg::Leading => CommaStyle::LeadingOnNewLine,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_config(&cli).and_then(|config| {
        if cli.stdin || cli.files.is_empty() {
            run_stdin(&cli, &config)
        } else {
            run_files(&cli, &config)
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build_config(cli: &Cli) -> Result<FormatConfig, String> {
    let mut config = match &cli.config {
        Some(path) => FormatConfig::load(path).map_err(|e| e.to_string())?,
        None if Path::new(CONFIG_FILE_NAME).is_file() => {
            FormatConfig::load(Path::new(CONFIG_FILE_NAME)).map_err(|e| e.to_string())?
        }
        None => FormatConfig::default(),
    };

    if let Some(indent) = cli.indent {
        config.indent_width = usize::from(indent);
    }
    if let Some(case) = cli.keyword_case {
        config.keyword_case = case.into();
    }
    if let Some(style) = cli.comma_style {
        config.comma_style = style.into();
    }

    config.validate().map_err(|e| e.to_string())?;
    log::debug!("format config: {:?}", config);
    Ok(config)
}

/// Format `content` for writing out: formatted text plus a final newline
fn render(content: &str, config: &FormatConfig) -> String {
    let mut formatted = format(content, config);
    formatted.push('\n');
    formatted
}

fn run_stdin(cli: &Cli, config: &FormatConfig) -> Result<(), String> {
    if cli.write {
        return Err("--write needs file arguments".to_string());
    }

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    if content.trim().is_empty() {
        return Err("Input is empty, nothing to format".to_string());
    }

    let formatted = render(&content, config);
    let changed = formatted != content;

    if cli.diff && changed {
        print_diff(Path::new("<stdin>"), &content, &formatted);
    }

    if cli.check {
        if changed {
            return Err("Input is not formatted".to_string());
        }
    } else if !cli.diff {
        print!("{}", formatted);
    }
    Ok(())
}

fn run_files(cli: &Cli, config: &FormatConfig) -> Result<(), String> {
    let mut needs_formatting = Vec::new();
    let mut errors = Vec::new();

    for file in &cli.files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                errors.push((file.clone(), e.to_string()));
                continue;
            }
        };

        if content.trim().is_empty() {
            log::warn!("{}: empty input, skipped", file.display());
            continue;
        }

        let formatted = render(&content, config);
        let changed = formatted != content;
        log::info!("{}: {}", file.display(), if changed { "changed" } else { "unchanged" });

        if cli.diff && changed {
            print_diff(file, &content, &formatted);
        }

        if cli.check {
            if changed {
                needs_formatting.push(file.clone());
            }
        } else if cli.write {
            if changed {
                match fs::write(file, &formatted) {
                    Ok(()) => println!("{} {}", "Formatted:".green(), file.display()),
                    Err(e) => errors.push((file.clone(), e.to_string())),
                }
            }
        } else if !cli.diff {
            print!("{}", formatted);
        }
    }

    for (file, err) in &errors {
        eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
    }

    if cli.check && !needs_formatting.is_empty() {
        println!("{}", "The following files need formatting:".yellow());
        for file in &needs_formatting {
            println!("  {}", file.display());
        }
        return Err("Some files are not properly formatted".to_string());
    }

    if !errors.is_empty() {
        return Err("Some files could not be formatted".to_string());
    }
    Ok(())
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}
