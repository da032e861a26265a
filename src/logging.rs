use tracing::Level;

/// Installs the global fmt subscriber. Later calls are ignored.
pub fn init_logger(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
