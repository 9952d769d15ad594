use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logs to `tracing`, tagged with the component that
/// emitted them so a single filter can follow one flow (`cart`, `order`, ...).
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "food_order", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "food_order", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "food_order", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "food_order", component = self.component, "{}", message);
    }
}
