//! Chapter Number Recognition Tool
//!
//! Reads the chapter titles of one manga from stdin, one per line, and
//! prints one JSON record per line. A line may carry an already-known
//! number after a tab: `Bleach Oneshot\t-2`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shiori_core::{
    ChapterInput, ChapterNumber, ChapterRecognizer, NumberingMode, RecognizedChapter,
    RecognizerConfig,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "shiori-parse")]
#[command(about = "Recognize manga chapter numbers from chapter titles on stdin")]
#[command(version)]
struct Cli {
    /// Manga title, removed from chapter titles before parsing
    #[arg(short, long, env = "SHIORI_MANGA_TITLE", default_value = "")]
    manga_title: String,

    /// Ignore volume structure and parse every title on its own
    #[arg(long)]
    flat: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "SHIORI_LOG", default_value = "warn")]
    log_level: String,

    /// Pretty-print each JSON record
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn recognizer_config(&self) -> RecognizerConfig {
        let numbering = if self.flat {
            NumberingMode::Flat
        } else {
            NumberingMode::Cumulative
        };
        RecognizerConfig::new().with_numbering(numbering)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseOutput {
    pub input: String,
    pub number: Option<f64>,
    pub status: Option<String>,
    pub volume: Option<u32>,
    pub chapter_in_volume: Option<u32>,
    pub error: Option<String>,
}

impl ParseOutput {
    fn recognized(input: &str, chapter: &RecognizedChapter) -> Self {
        Self {
            input: input.to_string(),
            number: Some(chapter.number.to_raw()),
            status: Some(status_of(chapter.number).to_string()),
            volume: chapter.volume.map(|v| v.volume_number),
            chapter_in_volume: chapter.volume.map(|v| v.chapter_number),
            error: None,
        }
    }

    fn failed(input: &str, error: &anyhow::Error) -> Self {
        Self {
            input: input.to_string(),
            number: None,
            status: None,
            volume: None,
            chapter_in_volume: None,
            error: Some(format!("{error:#}")),
        }
    }
}

fn status_of(number: ChapterNumber) -> &'static str {
    match number {
        ChapterNumber::Unknown => "unknown",
        ChapterNumber::Unnumbered => "unnumbered",
        ChapterNumber::Value(_) => "value",
    }
}

/// Splits `name[\tnumber]` into a chapter input.
fn parse_line(line: &str) -> Result<ChapterInput> {
    let Some((name, raw)) = line.split_once('\t') else {
        return Ok(ChapterInput::new(line));
    };

    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .with_context(|| format!("invalid chapter number {raw:?}"))?;
    let number = ChapterNumber::try_from_raw(value)?;

    Ok(ChapterInput::new(name.trim()).with_number(number))
}

/// Recognizes every valid line as one batch and returns records in input order.
fn run(recognizer: &ChapterRecognizer, manga_title: &str, lines: &[String]) -> Vec<ParseOutput> {
    let parsed: Vec<Result<ChapterInput>> = lines.iter().map(|l| parse_line(l)).collect();

    let inputs: Vec<ChapterInput> = parsed
        .iter()
        .filter_map(|p| p.as_ref().ok().cloned())
        .collect();
    let mut recognized = recognizer.recognize_all(manga_title, &inputs).into_iter();

    lines
        .iter()
        .zip(&parsed)
        .map(|(line, input)| match input {
            Ok(_) => match recognized.next() {
                Some(chapter) => ParseOutput::recognized(line, &chapter),
                None => ParseOutput::failed(line, &anyhow::anyhow!("chapter was not recognized")),
            },
            Err(e) => {
                warn!(line = line.as_str(), error = %e, "skipping line");
                ParseOutput::failed(line, e)
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line.to_string());
    }
    debug!(lines = lines.len(), manga_title = cli.manga_title.as_str(), "read chapter titles");

    let recognizer = ChapterRecognizer::with_shared_patterns(cli.recognizer_config());
    let outputs = run(&recognizer, &cli.manga_title, &lines);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for output in &outputs {
        let json = if cli.pretty {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        writeln!(out, "{json}").context("Failed to write output")?;
    }

    Ok(())
}
