use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::{Arc, Mutex};

/// `log` backend that keeps recent records in memory for the TUI log panel.
/// Writing to stderr would tear the alternate screen.
pub struct TuiLogger {
    level: LevelFilter,
    log_buffer: Arc<Mutex<Vec<String>>>,
}

impl TuiLogger {
    pub const CAPACITY: usize = 100;

    pub fn new(level: LevelFilter) -> (Self, Arc<Mutex<Vec<String>>>) {
        let log_buffer = Arc::new(Mutex::new(Vec::new()));
        (TuiLogger { level, log_buffer: log_buffer.clone() }, log_buffer)
    }

    /// Install as the global logger and return the shared buffer.
    pub fn install(level: LevelFilter) -> Result<Arc<Mutex<Vec<String>>>, SetLoggerError> {
        let (logger, buffer) = Self::new(level);
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(buffer)
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format!("{:<5} {}", record.level(), record.args());
            if let Ok(mut buffer) = self.log_buffer.lock() {
                buffer.push(msg);
                if buffer.len() > Self::CAPACITY {
                    buffer.remove(0);
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn buffers_enabled_records_and_caps_length() {
        let (logger, buffer) = TuiLogger::new(LevelFilter::Info);
        for i in 0..(TuiLogger::CAPACITY + 5) {
            logger.log(
                &Record::builder().level(Level::Info).args(format_args!("line {i}")).build(),
            );
        }
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("hidden")).build());

        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), TuiLogger::CAPACITY);
        assert_eq!(lines[0], "INFO  line 5");
        assert!(lines.iter().all(|l| !l.contains("hidden")));
    }
}
