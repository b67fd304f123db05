use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every domain log line is emitted under, e.g. `RUST_LOG=inventory=debug`.
pub const LOG_TARGET: &str = "inventory";

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
