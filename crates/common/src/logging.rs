//! Logging setup and configuration

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the log filter
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used.
pub fn build_filter(default_level: &str) -> crate::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| crate::Error::Config(format!("Invalid log filter: {}", e)))
}

/// Setup tracing subscriber for the application
///
/// Log lines go to stderr; stdout is reserved for the tool's own output.
pub fn setup_logging(default_level: &str) -> crate::Result<()> {
    let filter = build_filter(default_level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| crate::Error::Config(format!("Logging already initialized: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        for level in ["trace", "debug", "info", "warn", "error", "setservostik=debug"] {
            assert!(build_filter(level).is_ok(), "level {level} rejected");
        }
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("setservostik=loudest").unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"));
    }
}
