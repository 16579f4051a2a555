use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. The database driver logs every
/// statement at `info`, which drowns out access-code audit lines.
pub const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn,sea_orm=warn,sea_orm_migration=warn";

/// `RUST_LOG` if it parses, otherwise `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install the JSON stdout subscriber with [`DEFAULT_DIRECTIVES`].
pub fn init_tracing() {
    init_tracing_with(DEFAULT_DIRECTIVES);
}

/// Install the JSON stdout subscriber. Event fields are flattened to the top
/// level so `code_id`/`email` audit fields can be queried directly.
///
/// Only the first call installs anything; later calls are no-ops.
pub fn init_tracing_with(default_directives: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_target(true),
        )
        .try_init();
}
