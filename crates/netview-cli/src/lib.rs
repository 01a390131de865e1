// NOTE: netview layering
//
// - netview-types: wire objects only, no display logic
// - netview-engine: decode, sort, transform, table rows (pure, synchronous)
// - netview (this crate): argument parsing, config, logging, reading input, printing
//
// The CLI never inspects resource contents; it picks the resource kind from the
// subcommand and hands the byte stream to the matching engine factory.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ResourceArgs};
pub use commands::run;
