//! CLI argument definitions for the requested-analysis submitter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use motion_api::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use motion_cli::logging::LogFormat;
use motion_model::DominantHand;
use motion_model::segment::{BASEBALL_PITCHING, HAWKEYE_HFR};
use tracing::level_filters::LevelFilter;

pub const DEFAULT_INPUT: &str = "resources/movements_with_pitch_types.csv";
pub const DEFAULT_NAME: &str = "Example Pitcher Fastballs vs Curveballs";

#[derive(Parser)]
#[command(
    name = "request-analysis",
    version,
    about = "Request a segment comparison report from the motion-analysis API",
    long_about = "Split movement ids from a CSV file into two groups by label, create a\n\
                  player group segment for each group and request a comparison analysis\n\
                  between them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Include external context ids in trace logs.
    #[arg(long = "log-ids", global = true)]
    pub log_ids: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create both segments and request the comparison analysis.
    Submit(SubmitArgs),

    /// Show how the input splits into groups without calling the API.
    Preview(InputArgs),
}

/// Input file and grouping options shared by all commands.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Delimited file with one movement per row.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Column holding the external context id.
    #[arg(long = "id-column", value_name = "NAME", default_value = "MLBPlayId")]
    pub id_column: String,

    /// Column holding the label rows are grouped by.
    #[arg(long = "label-column", value_name = "NAME", default_value = "PitchType")]
    pub label_column: String,

    /// Label value of the primary group.
    #[arg(long = "primary", value_name = "LABEL", default_value = "Fastball")]
    pub primary: String,

    /// Label value of the comparison group.
    #[arg(long = "comparison", value_name = "LABEL", default_value = "Curveball")]
    pub comparison: String,

    /// Single-byte field delimiter.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,
}

#[derive(Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Analysis name shown in the dashboard.
    #[arg(long = "name", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Movement type id shared by both segments.
    #[arg(long = "movement-type-id", default_value_t = BASEBALL_PITCHING)]
    pub movement_type_id: u32,

    /// Motion-capture type id shared by both segments.
    #[arg(long = "mocap-type-id", default_value_t = HAWKEYE_HFR)]
    pub mocap_type_id: u32,

    /// Dominant hand shared by both segments.
    #[arg(long = "dom-hand", value_enum, default_value = "rha")]
    pub dom_hand: DomHandArg,

    /// API key sent as `x-api-key`.
    #[arg(long = "api-key", env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL.
    #[arg(long = "base-url", env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds (0 waits indefinitely).
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Print the request payloads without sending anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI dominant hand choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DomHandArg {
    Rha,
    Lha,
}

impl From<DomHandArg> for DominantHand {
    fn from(arg: DomHandArg) -> Self {
        match arg {
            DomHandArg::Rha => DominantHand::Right,
            DomHandArg::Lha => DominantHand::Left,
        }
    }
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(format!("delimiter must be a single byte, got {value:?}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn test_submit_defaults() {
        let cli = Cli::try_parse_from(["request-analysis", "submit"]).unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.input.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(args.input.id_column, "MLBPlayId");
        assert_eq!(args.input.label_column, "PitchType");
        assert_eq!(args.input.primary, "Fastball");
        assert_eq!(args.input.comparison, "Curveball");
        assert_eq!(args.name, DEFAULT_NAME);
        assert_eq!(args.movement_type_id, 2);
        assert_eq!(args.mocap_type_id, 104);
        assert_eq!(DominantHand::from(args.dom_hand), DominantHand::Right);
        assert_eq!(args.timeout_secs, 30);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_preview_rejects_api_flags() {
        assert!(Cli::try_parse_from(["request-analysis", "preview", "--api-key", "k"]).is_err());
    }

    #[test]
    fn test_global_log_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "request-analysis",
            "preview",
            "--log-ids",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.log_ids);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }
}
