use crate::present::expansion::ExpansionKey;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "uxreview",
    version,
    about = "Explore automated UX review reports from the command line"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single review record file
    Render(RenderCommand),
    /// Render reviews from a review store by id, one after another
    Show(ShowCommand),
    /// List the most recent reviews in a review store
    History(HistoryCommand),
    /// Validate a URL before submitting it for analysis
    CheckUrl(CheckUrlCommand),
    /// Render a service health snapshot
    Status(StatusCommand),
}

#[derive(Args)]
pub struct ViewArgs {
    /// Toggle an issue row, e.g. `Layout-0`; repeat to replay clicks
    #[arg(long = "expand", value_name = "KEY", value_parser = parse_key)]
    pub expand: Vec<ExpansionKey>,
    /// Expand every issue row
    #[arg(long, conflicts_with = "expand")]
    pub expand_all: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Directory holding uxreview.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct RenderCommand {
    pub file: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct ShowCommand {
    pub store: PathBuf,
    /// Review ids; `--expand` toggles apply to the first, later ones open collapsed
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<i64>,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct HistoryCommand {
    pub store: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct CheckUrlCommand {
    pub url: String,
}

#[derive(Args)]
pub struct StatusCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_key(raw: &str) -> Result<ExpansionKey, String> {
    raw.parse::<ExpansionKey>().map_err(|e| e.to_string())
}
