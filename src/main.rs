use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use pylex::error::scan_errors;
use pylex::lexicon::Lexicon;
use pylex::logging::{self, LogFormat};
use pylex::render;
use pylex::scanner::{self, ScanOptions};

#[derive(Parser, Debug)]
#[command(name = "pylex", about = "Tokenize Python-style source and print the token stream")]
struct Cli {
    /// Source file to tokenize, or a directory of .py/.txt samples
    path: PathBuf,

    /// Leave NEWLINE tokens out of the output
    #[arg(long)]
    no_newlines: bool,

    /// Leave COMMENT tokens out of the output
    #[arg(long)]
    no_comments: bool,

    /// Token stream output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// JSON file with keywords, operators and delimiters to use instead of Python's
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Report malformed input on stderr and exit with failure if any was found
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

/// Files to scan: the path itself, or the sorted samples inside a directory.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in
        std::fs::read_dir(path).with_context(|| format!("read directory '{}'", path.display()))?
    {
        let file = entry
            .with_context(|| format!("read directory '{}'", path.display()))?
            .path();
        let is_sample = file
            .extension()
            .is_some_and(|ext| ext == "py" || ext == "txt");
        if is_sample && file.is_file() {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Tokenize one file and print it; returns the number of ERROR tokens.
fn run_file(cli: &Cli, lexicon: &Lexicon, path: &Path, with_header: bool) -> Result<usize> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;
    let options = ScanOptions {
        emit_newlines: !cli.no_newlines,
        emit_comments: !cli.no_comments,
    };
    let tokens = scanner::tokenize_with(&source, lexicon, options);
    debug!(file = %path.display(), tokens = tokens.len(), "scanned file");

    if with_header {
        print!("{}", render::file_header(&display_name(path)));
    }
    match cli.format.as_str() {
        "json" => println!("{}", render::to_json(&tokens)),
        _ => print!("{}", render::to_listing(&tokens)),
    }

    let errors = scan_errors(&tokens);
    let count = errors.len();
    if cli.strict {
        let name = path.display().to_string();
        for e in errors {
            let report = miette::Report::new(e.with_source_code(name.clone(), source.clone()));
            eprintln!("{report:?}");
        }
    }
    Ok(count)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    let loaded;
    let lexicon = match &cli.lexicon {
        Some(path) => {
            loaded = Lexicon::load(path)
                .with_context(|| format!("load lexicon '{}'", path.display()))?;
            info!(path = %path.display(), "using custom lexicon");
            &loaded
        }
        None => Lexicon::python(),
    };

    let with_header = cli.path.is_dir();
    let files = collect_inputs(&cli.path)?;
    if with_header && files.is_empty() {
        bail!("no .py or .txt files in '{}'", cli.path.display());
    }

    let mut error_count = 0;
    for file in &files {
        error_count += run_file(&cli, lexicon, file, with_header)?;
    }

    if cli.strict && error_count > 0 {
        bail!("{error_count} malformed token(s)");
    }
    Ok(())
}
