//! Logging setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr, keeping stdout clean for the dashboard.
///
/// The level applies to both the shell and the engine; `RUST_LOG`
/// overrides it when set.
pub fn init(level: &str) {
    let default_filter = format!("patrimonio={level},patrimonio_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
}
