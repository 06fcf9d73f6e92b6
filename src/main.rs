use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use marquee::app::App;
use marquee::catalog::{self, CategoryRow};
use marquee::config::Config;
use marquee::ui;

/// Get the config directory path (~/.config/marquee/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("marquee");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "marquee", about = "Terminal catalog browser", version)]
struct Args {
    /// Catalog JSON file (defaults to catalog_path in config, then ~/.config/marquee/movies.json)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file (defaults to ~/.config/marquee/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme variant: dark or light
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the category rows and exit
    #[arg(long)]
    list: bool,
}

/// Print every row with its titles, in display order.
fn write_listing(out: &mut impl Write, rows: &[CategoryRow]) -> std::io::Result<()> {
    for row in rows {
        writeln!(out, "{} ({})", row.category, row.titles.len())?;
        for title in &row.titles {
            writeln!(out, "  {:>6}  {} ({})", title.id, title.title, title.year)?;
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never land on the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_dir = get_config_dir()?;
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| config_dir.join("config.toml"));

    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let catalog_path = args
        .catalog
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| config_dir.join("movies.json"));

    if !catalog_path.exists() {
        eprintln!("Error: No catalog found at {}", catalog_path.display());
        eprintln!();
        eprintln!("Point marquee at a catalog file:");
        eprintln!("  marquee --catalog /path/to/movies.json");
        eprintln!();
        eprintln!("Or set catalog_path in {}.", config_path.display());
        std::process::exit(1);
    }

    let titles = catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog '{}'", catalog_path.display()))?;
    let rows = catalog::group_by_category(&titles);

    if rows.is_empty() && !titles.is_empty() {
        tracing::warn!(titles = titles.len(), "No title carries a category");
    }

    // Only presence is recorded; the identifier itself stays out of logs
    match config.analytics_id() {
        Some(_) => tracing::info!("Analytics identifier configured"),
        None => tracing::debug!("No analytics identifier configured"),
    }

    if args.list {
        let stdout = std::io::stdout();
        write_listing(&mut stdout.lock(), &rows).context("Failed to write listing")?;
        return Ok(());
    }

    let mut app = App::new(rows, &config);

    ui::run(&mut app).await?;

    Ok(())
}
