//! Argument parsing and run orchestration.
//!
//! Input selection order: a `--test` mode reads its fixture through the
//! requested shape, a plain `FILE` argument is handed to the core as a
//! path, and otherwise piped stdin is read in full. Invoking with no
//! file and an interactive terminal is a usage error rather than a
//! silent block on stdin.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use columnize::{columnize, JustifySpec, Options, Output, Source, Status};
use tracing::debug;

use crate::stdin::{RealStdin, StdinReader};

#[derive(Parser)]
#[command(name = "columnize", version, about = "Align CSV data into fixed-width columns")]
pub struct Cli {
    /// CSV file to read; omit to read piped stdin
    file: Option<PathBuf>,

    /// Per-column justification: L, R, or spaces for a literal spacer
    #[arg(short, long, default_value = "L,R")]
    justify: String,

    /// Write <path>.csv (normalized table) and <path>.txt (rendered lines)
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Output debug trace messages
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Exercise one input shape against FILE and print the result
    #[arg(long, value_enum, requires = "file")]
    test: Option<TestMode>,
}

/// Which input shape a `--test` run feeds the core.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum TestMode {
    /// Hand the fixture path to the core untouched
    File,
    /// Read the fixture and feed its text lines
    Lines,
    /// Read the fixture, pre-split every line, and feed the rows
    Rows,
}

/// Parse arguments, columnize, and print the result.
///
/// Warnings go to stderr before the aligned lines go to stdout, so
/// redirected output stays clean.
pub fn run() -> Result<Status> {
    let cli = Cli::parse();
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let output = execute(&cli, &RealStdin)?;
    for warning in output.warnings() {
        eprintln!("Warning: {}", warning);
    }
    for line in output.lines() {
        println!("{}", line);
    }
    Ok(output.status())
}

fn execute(cli: &Cli, stdin: &dyn StdinReader) -> Result<Output> {
    let source = select_source(cli, stdin)?;
    let mut options = Options::default().justify(JustifySpec::parse(&cli.justify)?);
    if let Some(path) = &cli.save {
        options = options.save(path);
    }
    Ok(columnize(source, &options)?)
}

fn select_source(cli: &Cli, stdin: &dyn StdinReader) -> Result<Source> {
    if let Some(mode) = cli.test {
        // clap enforces the pairing; direct callers get the same error.
        let Some(path) = &cli.file else {
            bail!("--test requires a fixture FILE argument");
        };
        return fixture_source(mode, path);
    }
    if let Some(path) = &cli.file {
        return Ok(Source::path(path));
    }
    if stdin.is_terminal() {
        bail!("no input: pass a FILE argument or pipe CSV text on stdin (see --help)");
    }
    let piped = stdin.read_to_string().context("reading stdin")?;
    debug!(bytes = piped.len(), "read piped stdin");
    Ok(Source::lines(piped.lines()))
}

/// Build the source a `--test` mode asks for from the fixture file.
///
/// All three modes must agree on the same fixture; they differ only in
/// which entry shape carries the data.
fn fixture_source(mode: TestMode, path: &Path) -> Result<Source> {
    debug!(?mode, path = %path.display(), "using fixture shape");
    match mode {
        TestMode::File => Ok(Source::path(path)),
        TestMode::Lines => {
            let text = read_fixture(path)?;
            Ok(Source::lines(text.lines()))
        }
        TestMode::Rows => {
            let text = read_fixture(path)?;
            let mut rows = Vec::new();
            for line in text.lines() {
                if let Some(fields) = columnize::split_line(line)? {
                    rows.push(fields);
                }
            }
            Ok(Source::rows(rows))
        }
    }
}

fn read_fixture(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading fixture '{}'", path.display()))
}
