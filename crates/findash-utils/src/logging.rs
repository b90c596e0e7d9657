//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with `RUST_LOG`, falling back to `info`
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Initialize tracing with `RUST_LOG`, falling back to `default_filter`
///
/// Output goes to stderr so that reports printed on stdout can be piped.
/// Calling this twice is harmless: the second call is ignored.
pub fn init_tracing_with_default(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Like [`init_tracing_with_default`] but emits one JSON object per event
pub fn init_json_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_tracing_with_default("warn");
        init_tracing();
        init_json_tracing("info");
        tracing::info!("still alive");
    }
}
