use tokio::time::Instant;
use tracing::Span;

/// A started operation: the span it runs in and when it began.
#[derive(Debug, Clone)]
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation_name: &'static str, component: &'static str) -> Self {
        let span = tracing::info_span!("service_operation", operation = operation_name, component);
        span.in_scope(|| tracing::debug!("Starting operation: {operation_name}"));

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
