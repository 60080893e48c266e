mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use frontpage_core::{
    FRONT_PAGE_URL, FetchConfig, FrontPage, JsonConfig, JsonFormatter, PipelineMode, TextConfig, TextFormatter,
    fetch_file, fetch_stdin, fetch_url, resolve_mode,
};
use owo_colors::OwoColorize;
use url::Url;

use echo::{format_size, print_banner, print_detail, print_info, print_step, print_success, print_timing_summary};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the story list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// List the Hacker News front page, optionally filtered and sorted
#[derive(Parser, Debug)]
#[command(name = "frontpage")]
#[command(version)]
#[command(about = "List and rank Hacker News front page stories", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = FRONT_PAGE_URL)]
    input: String,

    /// View to apply: points-desc-short-titles, comments-desc-long-titles or all
    #[arg(short, long, default_value = "all", value_name = "MODE")]
    mode: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Include the mode and story count in the output
    #[arg(long)]
    header: bool,

    /// Wrap titles at this width in text output (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Show progress and timings on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// True for inputs that should be fetched over HTTP
fn is_http_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let started = Instant::now();
    let mut timings = Vec::new();

    let mode = resolve_mode(Some(&args.mode));

    if args.verbose {
        print_banner();
        if args.mode.parse::<PipelineMode>().is_err() {
            echo::print_warning(&format!("Unknown mode {:?}, showing all stories", args.mode));
        }
        print_info(&format!("Mode: {}", mode));
        eprintln!();
    }

    let step = Instant::now();
    let html = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if is_http_url(&args.input) {
        if args.verbose {
            print_step(
                1,
                3,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let mut config = FetchConfig { timeout: args.timeout, ..Default::default() };
        if let Some(user_agent) = args.user_agent {
            config.user_agent = user_agent;
        }

        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };
    timings.push(("Read", step.elapsed()));

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        eprintln!();
        print_step(2, 3, "Assembling stories");
    }

    let step = Instant::now();
    let page = FrontPage::new();
    let stories = page.parse(&html);
    let ranked = page.rank(&stories, mode);
    timings.push(("Assemble and rank", step.elapsed()));

    if args.verbose {
        print_detail("Stories", &stories.len().to_string());
        print_detail("Shown", &ranked.len().to_string());
        eprintln!();
        print_step(3, 3, "Writing output");
        print_detail("Format", &format!("{:?}", args.format));
    }

    let output = match args.format {
        OutputFormat::Json => {
            let config = JsonConfig { pretty: args.pretty, include_mode: args.header };
            JsonFormatter::new(config)
                .convert(&ranked, mode)
                .context("Failed to render JSON")?
        }
        OutputFormat::Text => {
            let config = TextConfig { line_width: args.width, include_header: args.header };
            TextFormatter::new(config).convert(&ranked, mode)
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    if args.verbose {
        print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
