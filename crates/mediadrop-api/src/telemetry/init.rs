use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "mediadrop=debug,tower_http=debug";

/// `RUST_LOG` directives when set and valid, otherwise the default filter.
fn resolve_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing: `RUST_LOG` filter, compact console output.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    let filter = resolve_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let filter_directives = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_fmt)
        .try_init()?;

    tracing::debug!(filter = %filter_directives, "Tracing initialized");
    Ok(())
}
