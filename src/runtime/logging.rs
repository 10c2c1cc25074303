use std::fs::{File, OpenOptions};

use env_logger::{Builder, Target};

use crate::config::LoggingSettings;

/// Install the global logger.
///
/// The terminal belongs to the UI, so records only ever go to `logging.file`.
/// Without a usable file no logger is installed and every record is dropped,
/// whatever `RUST_LOG` says. `RUST_LOG` overrides `logging.level` otherwise.
pub fn init(settings: &LoggingSettings) {
    let Some(file) = open_log_file(settings) else {
        return;
    };

    let mut builder = Builder::new();
    builder
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .parse_filters(&settings.level)
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

/// Open `logging.file` for appending, if one is configured.
pub(super) fn open_log_file(settings: &LoggingSettings) -> Option<File> {
    let path = settings.file.as_ref()?;
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("breather: cannot open log file {}: {e}", path.display());
            None
        }
    }
}
