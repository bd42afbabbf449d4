use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr; stdout is reserved for the streamed model output.
pub fn init_logging(log_level: Level, log_file: Option<&str>) {
    let level_filter = LevelFilter::from_level(log_level);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if let Some(path) = log_file {
        let path = PathBuf::from(path);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(move || make_file_writer(&path));
        tracing_subscriber::registry()
            .with(stderr_layer.with_filter(level_filter))
            .with(file_layer.with_filter(level_filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(stderr_layer.with_filter(level_filter))
            .init();
    }
}

fn make_file_writer(path: &PathBuf) -> Box<dyn Write> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Box::new(file),
        // A broken log file must not take down the run
        Err(_) => Box::new(std::io::sink()),
    }
}
