//! Tracing subscriber setup for the command-line binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool, configured: &str) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

/// Installs a stderr formatter.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` wins over the configured
/// level.
pub fn init(verbose: bool, configured: &str) {
    let directive = default_directive(verbose, configured);
    let filter = if verbose {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true, "warn"), "debug");
        assert_eq!(default_directive(false, "info"), "info");
    }
}
