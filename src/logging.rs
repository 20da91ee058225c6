use crate::config::Settings;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Logs go to `settings.log_file` when set. Without a log file, non-interactive runs log
/// to stderr and interactive runs stay silent since the alternate screen owns the terminal.
pub fn init(settings: &Settings, interactive: bool) {
    let filter = EnvFilter::new(settings.log_filter.as_str());

    if let Some(path) = &settings.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
                return;
            }
            Err(e) => {
                eprintln!("failed to open log file {}: {e}", path.display());
            }
        }
    }

    if interactive {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
