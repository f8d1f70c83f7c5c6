//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, which
/// leaves that subscriber in place.
pub fn init() -> bool {
    match fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(error = %error, "tracing init failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_keeps_the_first_subscriber() {
        init();
        assert!(!init(), "a subscriber is already installed");
    }
}
