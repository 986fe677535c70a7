//! Utility functions: tracing setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .try_init();
}
