use tracing::Level;

/// Installs a stderr `fmt` subscriber at `WARN` for the driver binaries.
///
/// Stdout stays reserved for the single result line.
pub fn init_driver_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();
}
