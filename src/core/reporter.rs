use crate::core::{Clock, Elapsed, Timed};
use std::future::Future;

/// Times one operation and reports the duration once it settles, whatever its outcome.
pub struct ElapsedTimeReporter<C: Clock> {
    clock: C,
    closing_message: Option<String>,
}

impl<C: Clock> ElapsedTimeReporter<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            closing_message: None,
        }
    }

    /// Line printed just before the runtime report.
    pub fn with_closing_message(mut self, message: impl Into<String>) -> Self {
        self.closing_message = Some(message.into());
        self
    }

    pub async fn measure<F, T>(&self, operation: F) -> Timed<T>
    where
        F: Future<Output = T>,
    {
        let start = self.clock.now();
        let outcome = operation.await;
        let end = self.clock.now();

        let elapsed = Elapsed::new(end.saturating_duration_since(start));
        self.report(&elapsed);

        Timed { outcome, elapsed }
    }

    fn report(&self, elapsed: &Elapsed) {
        tracing::debug!(elapsed_ms = elapsed.as_millis_f64(), "Batch settled");
        if let Some(message) = &self.closing_message {
            println!("{}", message);
        }
        println!("Runtime took {} to complete.", elapsed);
    }
}
