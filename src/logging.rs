//! Diagnostic logging.
//!
//! Events go to stderr so stdout stays limited to the generated numbers. The level is
//! controlled by `RUST_LOG` (e.g. `RUST_LOG=blur_weights=debug` prints the raw
//! coefficients as they are computed) and defaults to `warn`.

use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize the global subscriber. Later calls keep the first subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let result = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // Only fails when a global subscriber is already set (a second call, the test
    // harness, or a binary embedding the library); events go to that one.
    if let Err(err) = result {
        debug!(%err, "global subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::debug!("logging initialized");
    }
}
