//! CLI argument definitions for the job application recorder.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jobrec",
    version,
    about = "Job Application Recorder - track applications in a local JSON file",
    long_about = "Record companies, postings, salary ranges and interview notes.\n\n\
                  Data lives in a JSON file you choose; the last-used file is\n\
                  remembered in the application settings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Use an alternate settings file instead of the platform default.
    #[arg(long = "settings-file", value_name = "PATH", global = true)]
    pub settings_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new, empty data file and remember it as last used.
    Init(InitArgs),

    /// Validate and record one job application.
    Add(AddArgs),

    /// List the applications in a data file.
    List(ListArgs),

    /// Show the currency choices available to the add form.
    Currencies(CurrenciesArgs),
}

#[derive(Parser)]
pub struct InitArgs {
    /// Where to create the data file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Company you applied to.
    #[arg(long)]
    pub company: Option<String>,

    /// Advertised job title.
    #[arg(long)]
    pub title: Option<String>,

    /// Link to the posting.
    #[arg(long)]
    pub url: Option<String>,

    /// Where the job is located.
    #[arg(long)]
    pub location: Option<String>,

    /// Work arrangement: In-Office, Hybrid or Remote.
    #[arg(long)]
    pub flexibility: Option<String>,

    /// Minimum advertised salary (separators are stripped).
    #[arg(long = "min")]
    pub min_salary: Option<String>,

    /// Maximum advertised salary (separators are stripped).
    #[arg(long = "max")]
    pub max_salary: Option<String>,

    /// Currency selection, e.g. "$ - USD".
    #[arg(long)]
    pub currency: Option<String>,

    /// Date you applied (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Free-form notes.
    #[arg(long)]
    pub notes: Option<String>,

    /// Data file to append to (defaults to the last-used file).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Currency reference file.
    #[arg(long = "currency-data", value_name = "PATH", default_value = "currency_data.json")]
    pub currency_data: PathBuf,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Data file to read (defaults to the last-used file).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CurrenciesArgs {
    /// Currency reference file.
    #[arg(long = "currency-data", value_name = "PATH", default_value = "currency_data.json")]
    pub currency_data: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
