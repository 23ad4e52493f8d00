use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the diagnostics subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `level`. Calling
/// this twice is harmless.
pub fn enable_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
