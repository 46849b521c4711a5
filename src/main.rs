use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use songpick::catalog::{Catalog, RankedSong};
use songpick::selector::{self, CategoryFilter, Selection, COMBINED_LABEL};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "songpick", version, about = "Top Tamil & English movie songs by language/era")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories you can pick from
    Categories,

    /// Show the most popular songs, optionally within one category
    Top {
        /// Category to pick from (e.g. "Tamil/Modern-2025"); omit for the combined mix
        #[arg(short, long)]
        category: Option<String>,

        /// Number of songs (defaults to config default_count)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show catalog statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load config file (optional, defaults if missing)
    let config = songpick::config::AppConfig::load(cli.config.as_deref());

    // Build the catalog once; everything below borrows it
    let catalog = Catalog::with_custom(&config.songs)
        .context("Invalid song in config file")?;

    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Categories => {
            write_categories(&mut out, &catalog).context("Failed to write output")?;
        }

        Commands::Top { category, count, format } => {
            let count = config.resolve_count(count);
            config.check_count(count)?;

            let filter = CategoryFilter::from(category);
            let selection = selector::select(&catalog, &filter, count)
                .context("Selection failed")?;

            write_selection(&mut out, &filter, &selection, format)?;
        }

        Commands::Stats => {
            write_stats(&mut out, &catalog).context("Failed to write output")?;
        }
    }

    Ok(())
}

/// Write the combined label, then each category with its song count.
fn write_categories(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}", COMBINED_LABEL)?;
    for category in catalog.categories() {
        let n = catalog.category_count(category);
        writeln!(out, "{:<24} {:>3} {}", category, n, if n == 1 { "song" } else { "songs" })?;
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Catalog Statistics")?;
    writeln!(out, "==================")?;
    writeln!(out, "Total songs:      {}", catalog.len())?;
    writeln!(out, "Categories:       {}", catalog.categories().len())?;
    if let Some((first, last)) = catalog.year_span() {
        writeln!(out, "Release years:    {}-{}", first, last)?;
    }
    writeln!(out)?;

    if !catalog.is_empty() {
        writeln!(out, "Songs per category:")?;
        for category in catalog.categories() {
            writeln!(out, "  {:<24} {}", category, catalog.category_count(category))?;
        }
    }
    Ok(())
}

/// Write a selection in the requested format.
/// JSON mode writes `[]` when nothing matched; table mode writes the no-results notice.
fn write_selection(
    out: &mut impl Write,
    filter: &CategoryFilter,
    selection: &Selection,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &selection.ranked())
                .context("Failed to serialize results")?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if selection.is_empty() {
                writeln!(
                    out,
                    "No songs found in the '{}' category. Try the combined list.",
                    filter.heading()
                )?;
                return Ok(());
            }

            writeln!(out, "Top Picks in {}:", filter.heading())?;
            writeln!(out)?;
            write_song_table(out, &selection.ranked())?;
            writeln!(out)?;
            writeln!(out, "Found {} recommendations.", selection.len())?;
        }
    }
    Ok(())
}

/// Write ranked songs, one row each, with the listen URL last.
fn write_song_table(out: &mut impl Write, songs: &[RankedSong]) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:<40} {:<28} {:<20} {:>5}  {}",
        "Rank", "Song", "Artist", "Category", "Score", "Listen"
    )?;
    writeln!(out, "{}", "-".repeat(140))?;

    for s in songs {
        writeln!(
            out,
            "{:>4}  {:<40} {:<28} {:<20} {:>5.1}  {}",
            s.rank,
            truncate(s.title, 40),
            truncate(s.artist, 28),
            truncate(s.category, 20),
            s.popularity_score,
            s.listen_url,
        )?;
    }
    Ok(())
}

/// Truncate long text to `width` chars, ending in "..." when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
