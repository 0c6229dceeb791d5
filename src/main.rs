mod cli;
mod config;
mod error;
mod present;
mod report;
mod source;
mod types;

use crate::error::ReviewError;
use crate::present::session::ReviewSession;
use crate::present::status::build_status_view;
use crate::present::ViewOptions;
use crate::source::directory::{read_record, DirectorySource};
use crate::source::request::AnalyzeRequest;
use crate::source::ReviewSource;
use crate::types::config::ReviewConfig;
use crate::types::review::ReviewRecord;
use crate::types::status::StatusReport;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_env("UXREVIEW_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

/// Applies the requested disclosure to a freshly opened record.
fn open_session(record: ReviewRecord, args: &cli::ViewArgs) -> ReviewSession {
    let mut session = ReviewSession::new(record);
    if args.expand_all {
        session.expand_all();
    }
    for key in &args.expand {
        session.toggle(*key);
    }
    session
}

fn present(
    session: &ReviewSession,
    args: &cli::ViewArgs,
    cfg: &ReviewConfig,
) -> Result<(), ReviewError> {
    tracing::info!(
        review_id = session.record().id,
        expanded = session.expansion().len(),
        collapsed = session.expansion().is_empty(),
        "rendering review"
    );
    let view = session.view(ViewOptions::from_config(cfg));
    let rendered = report::render(&view, output_format(&args.format))?;
    println!("{rendered}");
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32, ReviewError> {
    match cli.command {
        cli::Commands::Render(cmd) => {
            let cfg = config::resolve(&cmd.view.config_dir)?;
            let record = read_record(&cmd.file)?;
            present(&open_session(record, &cmd.view), &cmd.view, &cfg)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => {
            let cfg = config::resolve(&cmd.view.config_dir)?;
            let source = DirectorySource::open(&cmd.store, cfg.history_limit())?;
            let Some((first, rest)) = cmd.ids.split_first() else {
                return Ok(exit_code::SUCCESS);
            };
            let mut session = open_session(source.fetch_review(*first)?, &cmd.view);
            present(&session, &cmd.view, &cfg)?;
            for id in rest {
                session.load(source.fetch_review(*id)?);
                present(&session, &cmd.view, &cfg)?;
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let cfg = config::resolve(&cmd.config_dir)?;
            let source = DirectorySource::open(&cmd.store, cfg.history_limit())?;
            let items = source.fetch_history()?;
            tracing::info!(count = items.len(), "loaded review history");
            let rendered = report::render_history(
                &items,
                output_format(&cmd.format),
                cfg.timestamp_format(),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::CheckUrl(cmd) => {
            let request = AnalyzeRequest::new(&cmd.url)?;
            println!("valid: {}", request.url);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Status(cmd) => {
            if !cmd.file.exists() {
                return Err(ReviewError::PathNotFound(cmd.file.display().to_string()));
            }
            let content = std::fs::read_to_string(&cmd.file)?;
            let snapshot = StatusReport::from_json(&content)?;
            let view = build_status_view(&snapshot);
            let rendered = report::render_status(&view, output_format(&cmd.format))?;
            println!("{rendered}");
            if view.operational {
                Ok(exit_code::SUCCESS)
            } else {
                tracing::warn!("one or more services are degraded");
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ReviewError::ReviewNotFound(_) => exit_code::NOT_FOUND,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
