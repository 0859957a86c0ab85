use crate::domain::ports::Logger;

// Component name attached to every log line from the response helper.
pub const DEFAULT_COMPONENT: &str = "serverutils";

// Logger adapter that forwards to `tracing` events.
#[derive(Clone, Copy, Debug)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub const fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT)
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(component = self.component, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = self.component, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(component = self.component, "{message}");
    }
}
