/**
 * Logging Setup
 *
 * The library only emits `tracing` events. Applications embedding it call
 * `init_tracing` once at startup to print them; `RUST_LOG` overrides the
 * default filter.
 */

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "lengua_client=info";

/// Install a formatting subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(true)
        .try_init()
        .is_ok()
}
