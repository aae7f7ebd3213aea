use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set. Serenity's gateway chatter is
/// kept to warnings.
const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,tracing::span=warn";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when present, otherwise falls back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
