//! readorder CLI - reading-order reconstruction for layout/OCR detections

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use readorder::{
    load_pages, to_json, to_text, JsonFormat, LayoutConfig, LineBlock, PagePipeline, Span,
};

#[derive(Parser)]
#[command(name = "readorder")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct page reading order from layout/OCR detections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order blocks, fill spans and emit the result as JSON
    Order {
        /// Page input JSON (one page object or an array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process pages one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Span-to-region overlap ratio
        #[arg(long, value_name = "RATIO", env = "READORDER_SPAN_REGION_RATIO")]
        span_region_ratio: Option<f32>,

        /// Block-to-region overlap ratio
        #[arg(long, value_name = "RATIO", env = "READORDER_BLOCK_REGION_RATIO")]
        block_region_ratio: Option<f32>,
    },

    /// Emit region-scoped line blocks and dropped spans only
    Lines {
        /// Page input JSON (one page object or an array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Emit the page text in reading order
    Text {
        /// Page input JSON (one page object or an array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Process pages one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Show per-page statistics
    Info {
        /// Page input JSON (one page object or an array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Line-stage result for one page, as written by the `lines` command.
#[derive(serde::Serialize)]
struct PageLines {
    page_no: u32,
    blocks: Vec<LineBlock>,
    dropped_spans: Vec<Span>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order {
            input,
            output,
            compact,
            sequential,
            span_region_ratio,
            block_region_ratio,
        } => {
            let mut config = LayoutConfig::new().with_parallel(!sequential);
            if let Some(ratio) = span_region_ratio {
                config = config.with_span_region_ratio(ratio);
            }
            if let Some(ratio) = block_region_ratio {
                config = config.with_block_region_ratio(ratio);
            }
            cmd_order(&input, output.as_deref(), compact, config)
        }
        Commands::Lines {
            input,
            output,
            compact,
        } => cmd_lines(&input, output.as_deref(), compact),
        Commands::Text {
            input,
            output,
            sequential,
        } => cmd_text(&input, output.as_deref(), sequential),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_order(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    config: LayoutConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;
    log::info!("Loaded {} pages from {}", pages.len(), input.display());

    let outputs = PagePipeline::with_config(config).process_pages(pages)?;
    let json = to_json(&outputs, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_lines(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;
    let pipeline = PagePipeline::new();

    let mut results = Vec::with_capacity(pages.len());
    for page in pages {
        page.validate()?;
        let (blocks, dropped_spans) = pipeline.build_line_blocks(page.spans, &page.regions);
        results.push(PageLines {
            page_no: page.page_no,
            blocks,
            dropped_spans,
        });
    }

    let json = to_json(&results, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;
    let config = LayoutConfig::new().with_parallel(!sequential);
    let outputs = PagePipeline::with_config(config).process_pages(pages)?;
    write_output(&to_text(&outputs), output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = load_pages(input)?;
    let outputs = PagePipeline::new().process_pages(pages)?;

    println!("{}", "Reading Order Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), outputs.len());

    for output in &outputs {
        let stats = &output.stats;
        println!();
        println!("{}", format!("Page {}", output.page_no).cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Spans".bold(), stats.input_spans);
        println!("{}: {}", "Lines".bold(), stats.lines);
        println!(
            "{}: {}",
            "Dropped spans".bold(),
            if stats.dropped_spans > 0 {
                stats.dropped_spans.to_string().yellow()
            } else {
                stats.dropped_spans.to_string().normal()
            }
        );
        println!("{}: {}", "Blocks in".bold(), stats.input_blocks);
        println!("{}: {}", "Blocks ordered".bold(), stats.ordered_blocks);
        println!("{}: {}", "Blocks excluded".bold(), stats.excluded_blocks);
        println!("{}: {}", "Blocks out".bold(), stats.output_blocks);
        println!("{}: {}", "Unassigned spans".bold(), stats.unassigned_spans);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "readorder".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reading-order reconstruction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/readorder".dimmed());
    println!("License: MIT");
}
