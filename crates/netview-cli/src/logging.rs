use crate::args::LogLevel;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    // A global subscriber may already be set when tests call this twice
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(LogLevel::Debug);
        init(LogLevel::Warn);
        tracing::debug!("still routed to the first subscriber");
    }
}
