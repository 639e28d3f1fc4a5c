mod audit;
mod reports;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use golem_docs_web::clock::{Clock, ClockHandle, SystemClock};
use golem_docs_web::render::{render_document, render_footer};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for humans
    Console,
    /// Machine-readable audit results
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "golem-docs-tester", version)]
#[command(about = "Server-renders the Golem docs footer and audits its links and accessibility markup")]
struct Args {
    /// Calendar date to render with (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Write the rendered footer as a standalone HTML document to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start_time = Instant::now();

    let date = args.date.unwrap_or_else(|| SystemClock.today());
    let clock = ClockHandle::fixed(date);
    log::info!("rendering footer for {date}");

    if matches!(args.report, ReportFormat::Console) {
        announce_banner();
    }

    let first = render_footer(clock.clone(), false).await;
    let second = render_footer(clock.clone(), false).await;
    let report = audit::run(&first, &second, date);

    if let Some(path) = &args.output {
        let document = render_document(clock).await;
        std::fs::write(path, document)
            .with_context(|| format!("writing footer document to {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    let mut out = stdout().lock();
    match args.report {
        ReportFormat::Console => {
            reports::write_console_report(&mut out, &report, args.verbose, start_time.elapsed())?;
        }
        ReportFormat::Json => reports::write_json_report(&mut out, &report)?,
    }
    out.flush()?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn announce_banner() {
    println!("{}", "🗿 Golem Docs Footer Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}
