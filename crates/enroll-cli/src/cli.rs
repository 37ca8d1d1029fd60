//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use enroll_model::Term;
use enroll_persistence::DEFAULT_SNAPSHOT_FILE;

#[derive(Parser)]
#[command(
    name = "enroll",
    version,
    about = "Course registration validator for year 2 and 3 elective selection",
    long_about = "Select elective courses for four year/semester terms and check them \
                  against group quotas, required credit hours, category limits and \
                  the cross-semester duplicate rule.\n\n\
                  The selection is saved after every change and can be exported as a \
                  summary document, submission CSV or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include student name and id number in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Args)]
pub struct SessionArgs {
    /// Course catalog (JSON array or CSV with the same headers).
    #[arg(long, value_name = "PATH", default_value = "courses.json", global = true)]
    pub catalog: PathBuf,

    /// Saved selection snapshot.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SNAPSHOT_FILE, global = true)]
    pub state: PathBuf,

    /// Rule overrides (JSON); defaults apply to any field left out.
    #[arg(long, value_name = "PATH", global = true)]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalog courses by term and group, marking the current selection.
    Catalog(CatalogArgs),

    /// Evaluate the current selection (exit code 1 if export is not allowed).
    Check,

    /// Add courses to the selection.
    Select(CourseIdsArgs),

    /// Remove courses from the selection.
    Deselect(CourseIdsArgs),

    /// Set the student's name and/or id number.
    Identity(IdentityArgs),

    /// Clear the selection and identity, then re-select mandatory courses.
    Reset,

    /// Write the registration summary.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show one term (e.g. Y2S1).
    #[arg(long, value_name = "TERM")]
    pub term: Option<Term>,
}

#[derive(Args)]
pub struct CourseIdsArgs {
    /// Course ids.
    #[arg(value_name = "COURSE_ID", required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("identity").required(true).multiple(true)))]
pub struct IdentityArgs {
    /// Student name.
    #[arg(long, group = "identity")]
    pub name: Option<String>,

    /// Student id number.
    #[arg(long = "id", value_name = "ID_NUMBER", group = "identity")]
    pub id_number: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: ExportFormatArg,

    /// Directory for the exported file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Export even if the selection does not satisfy the registration rules.
    ///
    /// WARNING: the exported summary may not be accepted.
    #[arg(long)]
    pub force: bool,

    /// Text file whose contents replace the document title (text format only).
    #[arg(long, value_name = "PATH")]
    pub letterhead: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Text,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
