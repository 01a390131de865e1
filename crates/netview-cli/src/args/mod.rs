// Each resource kind gets its own subcommand; the kind picks the transform
// pipeline, so nothing downstream has to inspect the input to decide.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netview")]
#[command(
    about = "Render address groups and network policies as tables or JSON",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $NETVIEW_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Maximum width of collection-valued table cells
    #[arg(long, global = true)]
    pub max_column_width: Option<usize>,

    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show address groups (pod and node members)
    #[command(visible_alias = "ag")]
    AddressGroup(ResourceArgs),

    /// Show network policies
    #[command(visible_alias = "np")]
    NetworkPolicy(ResourceArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ResourceArgs {
    /// Input holds a single object instead of a list
    #[arg(long)]
    pub single: bool,

    /// Sort field for lists ("CreationTimestamp"; anything else sorts by name)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// JSON input file; stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "netview",
            "network-policy",
            "--sort-by",
            "CreationTimestamp",
            "policies.json",
        ])
        .unwrap();

        match cli.command {
            Commands::NetworkPolicy(args) => {
                assert!(!args.single);
                assert_eq!(args.sort_by.as_deref(), Some("CreationTimestamp"));
                assert_eq!(args.file, Some(PathBuf::from("policies.json")));
            }
            Commands::AddressGroup(_) => panic!("wrong subcommand"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "netview",
            "ag",
            "--single",
            "--output",
            "json",
            "--max-column-width",
            "20",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.max_column_width, Some(20));
        assert!(matches!(cli.command, Commands::AddressGroup(ResourceArgs { single: true, .. })));
    }
}
