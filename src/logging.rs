//! logging
//!
//! Diagnostic logging setup.
//!
//! Core operations emit `tracing` events at debug level. The binary installs
//! a single fmt subscriber on stderr so diagnostics never mix with REPL
//! output on stdout.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Filter used when `--debug` is given.
const DEBUG_FILTER: &str = "minigit=debug";

/// Filter used when neither `--debug` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// With `debug`, all minigit events are shown regardless of `RUST_LOG`.
/// Otherwise `RUST_LOG` is honoured, falling back to warnings only.
/// Only the first call has any effect.
pub fn init(debug: bool) {
    INIT_ONCE.call_once(|| {
        let filter = if debug {
            EnvFilter::new(DEBUG_FILTER)
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        };

        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_idempotent() {
        init(true);
        init(false);
        init(true);
    }
}
