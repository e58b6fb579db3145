use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Sends `tracing` output to `file_name` in the working directory so the terminal stays
/// free for the maze. `DEBUG=1` turns on per-step carving logs.
///
/// Keep the returned guard alive until exit, dropping it flushes the log.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    let appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
