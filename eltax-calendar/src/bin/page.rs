use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, Result};
use chrono::{Datelike, Local};
use clap::Parser;

use eltax_calendar::{logging, write_page, Context, FiscalYear, Language, Schedule};

/// Generate the eLTAX operating calendar pages of fiscal years.
#[derive(Parser)]
#[command(name = "eltax-page", version)]
struct Cli {
    /// Years in which rendered fiscal years start, defaults to current year.
    years: Vec<i32>,

    /// Operating schedule of the filing system.
    #[arg(long, default_value = "docs/schedule.json")]
    schedule: PathBuf,

    /// Directory where pages are written.
    #[arg(long, default_value = "docs")]
    output_dir: PathBuf,

    /// Language of the page (en, ja).
    #[arg(short, long, default_value_t = Language::English)]
    lang: Language,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let schedule = Schedule::load(&cli.schedule)
        .with_context(|| format!("failed to load schedule {}", cli.schedule.display()))?;

    let ctx = Context::default()
        .with_language(cli.lang)
        .with_schedule(schedule);

    let years = if cli.years.is_empty() {
        vec![Local::now().year()]
    } else {
        cli.years
    };

    for year in years {
        let fiscal_year = FiscalYear::new(year)?;
        let path = write_page(&ctx, fiscal_year, &cli.output_dir)
            .with_context(|| format!("failed to write calendar of fiscal year {fiscal_year}"))?;

        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
