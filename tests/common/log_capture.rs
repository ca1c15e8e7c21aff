use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, OnceLock};

/// Global logger that keeps every lifecycle message in memory.
pub struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();

impl CaptureLogger {
    pub fn install() -> &'static CaptureLogger {
        let logger = LOGGER.get_or_init(|| CaptureLogger {
            lines: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    }

    /// Drain everything captured so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == "matrix_buffer::lifecycle"
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}
