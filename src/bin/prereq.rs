//! Command-line interface for prereq
//! This binary parses prerequisite descriptions and prints their trees in one of the registered
//! formats.
//!
//! Usage:
//!   prereq parse [`<text>`...] [--format `<format>`] [--config `<file>`] [--echo]
//!                                      - Parse each argument, or each stdin line when none given
//!   prereq tokens `<text>`               - Print the token stream
//!   prereq formats                     - List all available formats

use clap::{Parser, Subcommand};
use prereq::prereq::config::{Loader, PrereqConfig, SettingsError};
use prereq::prereq::formats::FormatRegistry;
use prereq::prereq::lexing::tokenize;
use prereq::prereq::parsing::parse;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "prereq",
    version,
    about = "Parse free-text course prerequisites into expression trees"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse prerequisite descriptions and print their trees
    Parse {
        /// Descriptions to parse; reads one per line from stdin when omitted
        texts: Vec<String>,
        /// Output format (e.g., 'json', 'yaml', 'treeviz')
        #[arg(short, long)]
        format: Option<String>,
        /// Configuration file layered over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print each input above its tree
        #[arg(long)]
        echo: bool,
    },
    /// Print the token stream of a description
    Tokens {
        text: String,
    },
    /// List all available output formats
    Formats,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Parse {
            texts,
            format,
            config,
            echo,
        } => handle_parse_command(texts, format, config, echo),
        Commands::Tokens { text } => handle_tokens_command(&text),
        Commands::Formats => {
            handle_formats_command();
            ExitCode::SUCCESS
        }
    }
}

fn load_config(
    path: Option<PathBuf>,
    format: Option<String>,
    echo: bool,
) -> Result<PrereqConfig, SettingsError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.with_format(format);
    }
    if echo {
        loader = loader.with_echo_input(true);
    }
    loader.build()
}

/// Handle the parse command
fn handle_parse_command(
    texts: Vec<String>,
    format: Option<String>,
    config: Option<PathBuf>,
    echo: bool,
) -> ExitCode {
    let config = match load_config(config, format, echo) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let registry = FormatRegistry::with_defaults();

    let texts = if texts.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        texts
    };

    let mut failed = false;
    for text in &texts {
        if config.output.echo_input {
            println!("{}", text);
        }
        let expr = match parse(text) {
            Ok(expr) => expr,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("  in: {}", text);
                eprintln!("      {}^", " ".repeat(column_of(text, e.position())));
                failed = true;
                continue;
            }
        };
        match registry.serialize(&expr, &config.output.format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Character column of a byte offset, for pointing at errors under the echoed input.
fn column_of(text: &str, position: usize) -> usize {
    text.get(..position)
        .map_or(text.chars().count(), |prefix| prefix.chars().count())
}

fn read_stdin_lines() -> std::io::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Handle the tokens command
fn handle_tokens_command(text: &str) -> ExitCode {
    match tokenize(text) {
        Ok(tokens) => {
            for (token, range) in tokens {
                println!("{:>3}..{:<3} {}", range.start, range.end, token);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {:<14} {}", name, description);
    }
}
