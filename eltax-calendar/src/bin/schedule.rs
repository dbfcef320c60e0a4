use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};

use eltax_calendar::{logging, schedule_template, Context, FiscalYear, Language};

/// Print the default eLTAX schedule of a fiscal year, to be adjusted by hand and saved as
/// `docs/schedule.json`.
#[derive(Parser)]
#[command(name = "eltax-schedule", version)]
struct Cli {
    /// Year in which the fiscal year starts (April 1 to March 31 of next year).
    year: Option<i32>,

    /// Language of holiday names (en, ja).
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
    let Some(year) = cli.year else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let fiscal_year = FiscalYear::new(year)?;
    let ctx = Context::default().with_language(cli.lang);
    let schedule = schedule_template(&ctx, fiscal_year);
    tracing::info!("Generated {} days for fiscal year {fiscal_year}", schedule.len());

    let mut stdout = BufWriter::new(io::stdout().lock());

    schedule
        .write_json(&mut stdout)
        .and_then(|()| stdout.flush())
        .context("failed to write schedule")?;

    Ok(())
}
