//! Expomap CLI - Merge exhibitor feeds into the hall skeleton
//!
//! ```bash
//! expomap halls                      # Show the hall skeleton
//! expomap parse exhibitors.csv      # Merge a local feed file
//! expomap fetch https://…/feed.csv  # Fetch and merge the live feed
//! ```
//!
//! `fetch` without a URL uses the `EXPOMAP_DATA_URL` environment variable
//! (a `.env` file is honored).

use clap::{Parser, Subcommand};
use expomap::{load_catalog, merge_or_fallback, parser, skeleton, Hall};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the default feed URL.
const DATA_URL_VAR: &str = "EXPOMAP_DATA_URL";

#[derive(Parser)]
#[command(name = "expomap")]
#[command(about = "Merge exhibitor CSV feeds into the exhibition floor plan", long_about = None)]
struct Cli {
    /// JSON layout file overriding the built-in hall skeleton
    #[arg(short, long, global = true)]
    skeleton: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hall skeleton (no exhibitor data)
    Halls,

    /// Merge a local feed file into the skeleton
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the live feed and merge it into the skeleton
    Fetch {
        /// Feed URL (default: $EXPOMAP_DATA_URL)
        url: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let skeleton = match skeleton::load_or_default(cli.skeleton.as_deref()) {
        Ok(halls) => halls,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Halls => cmd_halls(&skeleton),
        Commands::Parse { input, output } => cmd_parse(&input, &skeleton, output.as_deref()),
        Commands::Fetch { url, output } => cmd_fetch(url, &skeleton, output.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("✗ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_halls(skeleton: &[Hall]) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("🗺  {} halls in the skeleton", skeleton.len());
    let json = serde_json::to_string_pretty(skeleton)?;
    println!("{}", json);
    Ok(())
}

fn cmd_parse(
    input: &Path,
    skeleton: &[Hall],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Merging feed: {}", input.display());

    let bytes = fs::read(input)?;
    let text = parser::decode_bytes(&bytes);
    let outcome = merge_or_fallback(&text, skeleton);

    report_and_write(outcome.halls(), outcome.fell_back(), output)
}

async fn cmd_fetch(
    url: Option<String>,
    skeleton: &[Hall],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = match url.or_else(|| std::env::var(DATA_URL_VAR).ok()) {
        Some(u) => u,
        None => return Err(format!("no feed URL given and {} is not set", DATA_URL_VAR).into()),
    };

    let outcome = load_catalog(&url, skeleton).await;
    report_and_write(outcome.halls(), outcome.fell_back(), output)
}

fn report_and_write(
    halls: &[Hall],
    fell_back: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let brand_count: usize = halls.iter().map(|h| h.brands.len()).sum();
    if fell_back {
        eprintln!("⚠  Feed unusable; wrote the bare skeleton");
    } else {
        eprintln!("✅ {} exhibitors across {} halls", brand_count, halls.len());
    }

    let json = serde_json::to_string_pretty(halls)?;
    write_output(&json, output)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
