//! Integration test crate for Gamutscape.
//!
//! This crate exists solely to hold cross-crate integration tests covering
//! the full sampling → triangulation → assembly → derived-view pipeline.

/// Install a fmt subscriber honoring `RUST_LOG` so pipeline debug events
/// show up when tests run with logging enabled. Safe to call repeatedly.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod pipeline;

#[cfg(test)]
mod views;
