//! CLI tool for generating presentation outlines from web research.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use outline_core::{build_outline, Outline, OutlineExport, SlideAllocator, SourceRecord, TextRenderer};
use outline_web::{ScraperConfig, WebScraper};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Generate a slide outline for a topic from scraped web content.
#[derive(Parser, Debug)]
#[command(name = "outline-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation topic (e.g. "Artificial Intelligence")
    topic: String,

    /// Number of slides (5-12)
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(5..=12))]
    slides: u8,

    /// Number of search results to scrape (2-5)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=5))]
    sources: u8,

    /// Read sources from a JSON file instead of scraping the web
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Save the sources used to a JSON file
    #[arg(long)]
    save_sources: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Skip bullet punctuation cleanup
    #[arg(long)]
    raw: bool,

    /// Pause between page fetches, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let topic = args.topic.trim();
    if topic.is_empty() {
        bail!("Please enter a topic");
    }

    let sources = load_sources(topic, &args).await?;
    if args.verbose {
        eprintln!("Using {} sources", sources.len());
        for source in &sources {
            eprintln!("  {} - {}", source.source_label, source.url);
        }
    }

    if let Some(path) = &args.save_sources {
        let json = serde_json::to_string_pretty(&sources)?;
        write_output(path, &json)?;
        if args.verbose {
            eprintln!("Sources saved to: {}", path.display());
        }
    }

    let outline = generate_outline(topic, usize::from(args.slides), &sources, args.raw)?;
    if args.verbose {
        eprintln!("  Generated {} slides", outline.slides.len());
    }

    let now = Local::now().naive_local();
    let export = OutlineExport::new(&outline, &sources);

    if args.print {
        let mut stdout = io::stdout().lock();
        write_export(&mut stdout, args.format, &export, now.date())?;
        stdout.flush()?;
    } else {
        let output_path = get_output_path(args.output.as_ref(), args.format, now)?;
        let file = File::create(&output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);
        write_export(&mut writer, args.format, &export, now.date())
            .and_then(|()| writer.flush().map_err(Into::into))
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Build the outline, skipping bullet cleanup when `raw` is set.
fn generate_outline(topic: &str, slide_count: usize, sources: &[SourceRecord], raw: bool) -> Result<Outline> {
    let outline = if raw {
        SlideAllocator::new().allocate(topic, slide_count, sources)?
    } else {
        build_outline(topic, slide_count, sources)?
    };
    Ok(outline)
}

/// Write `export` to `writer` in the chosen format.
fn write_export<W: Write>(writer: W, format: Format, export: &OutlineExport, date: NaiveDate) -> Result<()> {
    match format {
        Format::Json => export.write_json(writer)?,
        Format::Text => TextRenderer::new().with_generated_on(date).write_to(writer, export)?,
    }
    Ok(())
}

/// Read sources from the input file, or scrape them from the web.
async fn load_sources(topic: &str, args: &Args) -> Result<Vec<SourceRecord>> {
    if let Some(path) = &args.input {
        log::debug!("Reading sources from {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let sources: Vec<SourceRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse sources in {}", path.display()))?;
        return Ok(sources);
    }

    if args.verbose {
        eprintln!("Scraping the web for: {}", topic);
    }
    let config = ScraperConfig::new().with_delay(Duration::from_millis(args.delay_ms));
    let scraper = WebScraper::new(config).context("Failed to create HTTP client")?;
    let sources = scraper.scrape_topic(topic, usize::from(args.sources)).await;

    if sources.is_empty() {
        bail!("Could not scrape any content. Try a different topic.");
    }
    Ok(sources)
}

/// Name of an export file created at `now`.
fn output_file_name(format: Format, now: NaiveDateTime) -> String {
    format!(
        "presentation_webscrape_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Determine the output path for an export.
fn get_output_path(output_dir: Option<&PathBuf>, format: Format, now: NaiveDateTime) -> Result<PathBuf> {
    let output_filename = output_file_name(format, now);

    let output_path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => PathBuf::from(output_filename),
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to {}", path.display()))
}
