use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Logger adapter backed by the tracing crate.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "analyzer", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "analyzer", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "analyzer", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "analyzer", "{}", message);
    }
}
