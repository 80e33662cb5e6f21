use std::io::IsTerminal;

use anyhow::anyhow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over `verbose`; an already
/// installed subscriber is left in place.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info,tasklist_core=debug",
        2 => "debug",
        _ => "trace",
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| anyhow!("bad default log filter {default_level:?}: {e}"))?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        debug!("keeping the subscriber that was already installed");
    }

    Ok(())
}
