use std::path::PathBuf;

use color_eyre::eyre::eyre;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "SAAVN_LOG";
pub const DATA_ENV: &str = "SAAVN_DATA";
const LOG_FILE: &str = "saavn.log";

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "saavn", "saavn-tui")
}

/// Directory holding the log file. `SAAVN_DATA` wins over the platform data dir.
pub fn data_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_ENV) {
        return PathBuf::from(dir);
    }
    project_directory()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))
}
