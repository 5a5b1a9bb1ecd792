//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting (summary panel, problematic row details)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use redirect_checker::report::{export_csv, is_problematic, problem_reason};
use redirect_checker::{init_logger_with, run_check, CheckReport, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_check(config.clone()).await {
        Ok(report) => {
            print_summary(&report);

            if config.export || config.output.is_some() {
                let written = export_csv(&report.results, config.output.as_deref())
                    .context("Failed to export results")?;
                if let Some(output) = &config.output {
                    println!("{} result rows written to {}", written, output.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("redirect_checker error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Prints the run summary and the detail of problematic rows.
fn print_summary(report: &CheckReport) {
    let summary = &report.summary;

    println!(
        "Checked {} row{} in {:.1}s",
        summary.total_rows,
        if summary.total_rows == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
    println!("  rows with redirects: {}", summary.redirect_rows);
    if summary.loop_rows > 0 {
        println!(
            "  redirect loops:      {}",
            summary.loop_rows.to_string().red().bold()
        );
    } else {
        println!("  redirect loops:      {}", "0".green());
    }
    if summary.problematic_rows > 0 {
        println!(
            "  problematic rows:    {}",
            summary.problematic_rows.to_string().red().bold()
        );
        println!();
        println!("{}", "Problematic rows (row numbers match the source CSV; header = row 1):".yellow());
        for row in report.results.iter().filter(|row| is_problematic(row)) {
            println!(
                "  row {}: {} -> {} | {}",
                row.row_id,
                row.from_url,
                row.to_url,
                problem_reason(row)
            );
        }
    } else {
        println!("  problematic rows:    {}", "0".green());
    }
}
