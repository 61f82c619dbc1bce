//! `legal-lens` scans legal documents for risk-bearing clauses and ranks them by risk.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]); CLI flags override it.
//! 3. Obtain the document text: inline, stdin, a text file, or a PDF ([`source`]).
//! 4. Analyze it against the clause catalogue ([`analysis`], [`clause`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0`, `1` when a clause at or above `fail_on` was found, `2` when
//!    the document could not be read or was rejected, or `3` when the config
//!    or the report output failed.

mod analysis;
mod clause;
mod cli;
mod config;
mod detector;
mod error;
mod models;
mod report;
mod source;

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use analysis::DocumentAnalyzer;
use cli::{Cli, ReportFormat};
use config::{load_config, violates_policy};
use detector::detect_format;
use error::ExtractionError;
use models::{AnalysisResult, ClauseCategory, InputFormat};
use source::plain::PlainTextSource;
use source::TextSource;

const EXIT_OK: u8 = 0;
const EXIT_POLICY: u8 = 1;
const EXIT_REJECTED: u8 = 2;
const EXIT_FAILURE: u8 = 3;
const DIAGNOSTIC_MAX_CHARS: usize = 200;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    install_panic_hook();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report_failure("legal-lens failed", &format!("{e:#}"));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Run one scan and return the process exit code.
///
/// Unreadable or rejected documents map to `EXIT_REJECTED`; config and
/// report-writing errors are returned as `Err`.
fn run(cli: &Cli) -> Result<u8> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cwd, cli.config.as_deref())?;

    let min_length = cli.min_length.unwrap_or(config.analysis.min_length);
    let mut excluded: Vec<ClauseCategory> = config.analysis.exclude.clone();
    for category in &cli.exclude_clause {
        if !excluded.contains(category) {
            excluded.push(*category);
        }
    }
    let fail_on = cli.fail_on.or(config.policy.fail_on);

    // Obtain the document text
    let (text, source_label) = match read_document(cli, min_length) {
        Ok(found) => found,
        Err(e) => {
            report_failure("Could not read document", &e.to_string());
            return Ok(EXIT_REJECTED);
        }
    };

    // Analyze; faults inside the analyzer are reported, never propagated
    let analyzer = DocumentAnalyzer::default()
        .with_min_length(min_length)
        .excluding(&excluded);

    let result = match panic::catch_unwind(AssertUnwindSafe(|| analyzer.analyze(&text))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            report_failure("Document rejected", &e.to_string());
            return Ok(EXIT_REJECTED);
        }
        Err(payload) => {
            report_failure("Analysis failed", &panic_message(payload.as_ref()));
            return Ok(EXIT_REJECTED);
        }
    };

    info!(source = %source_label, clauses = result.total_count, "analysis complete");
    emit_report(cli, &result, &source_label)?;

    if violates_policy(&result, fail_on) {
        return Ok(EXIT_POLICY);
    }
    Ok(EXIT_OK)
}

fn emit_report(cli: &Cli, result: &AnalysisResult, source_label: &str) -> Result<()> {
    match cli.report {
        ReportFormat::Terminal => {
            if let Some(path) = &cli.output {
                warn!(path = %path.display(), "--output is ignored for terminal reports");
            }
            report::terminal::render(result, source_label, cli.verbose, cli.quiet)
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(result)?;
            write_output(cli.output.as_deref(), &json)
        }
        ReportFormat::Html => write_output(cli.output.as_deref(), &report::html::render(result)),
        ReportFormat::Pdf => {
            let path = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("legal-lens-report.pdf"));
            report::pdf::render(result, source_label, &path)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Route panic messages through the logger instead of the default stderr dump.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        error!(location = ?info.location(), "panic: {}", panic_message(info.payload()));
    }));
}

/// Read the document named on the command line and return it with a display label.
fn read_document(cli: &Cli, min_length: usize) -> Result<(String, String), ExtractionError> {
    if let Some(text) = &cli.text {
        let text = PlainTextSource::Inline(text.clone()).read_text()?;
        return Ok((text, "inline text".to_string()));
    }

    let label = if cli.input == Path::new("-") {
        "<stdin>".to_string()
    } else {
        cli.input.display().to_string()
    };

    let format = detect_format(&cli.input);
    if !cli.quiet {
        eprintln!("  {} reading {} as {}", "→".cyan(), label, format);
    }

    let text = match format {
        InputFormat::Pdf if !cli.quiet => {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Extracting PDF text...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let text = source::load_text(&cli.input, format, min_length);
            spinner.finish_and_clear();
            text?
        }
        _ => source::load_text(&cli.input, format, min_length)?,
    };

    Ok((text, label))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}

fn report_failure(title: &str, detail: &str) {
    eprintln!("{} {}: {}", "✗".red().bold(), title.bold(), truncate_diagnostic(detail));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}

fn truncate_diagnostic(detail: &str) -> String {
    detail.chars().take(DIAGNOSTIC_MAX_CHARS).collect()
}
