use super::args::{Cli, Commands};
use super::handlers::resource::{self, RenderSettings};
use crate::config::Config;
use anyhow::Result;
use netview_engine::{AddressGroupKind, NetworkPolicyKind};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = RenderSettings {
        output: config.output(cli.output),
        max_column_width: config.max_column_width(cli.max_column_width),
    };
    tracing::debug!(?settings, "resolved render settings");

    match cli.command {
        Commands::AddressGroup(args) => resource::handle::<AddressGroupKind>(&args, settings),
        Commands::NetworkPolicy(args) => resource::handle::<NetworkPolicyKind>(&args, settings),
    }
}
