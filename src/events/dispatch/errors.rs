// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler #{position} for {event_name} failed: {source}")]
    HandlerFailed {
        event_name: String,
        position: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// A failed invocation collected by `notify_isolated`
#[derive(Debug)]
pub struct HandlerFailure {
    pub position: usize,
    pub error: anyhow::Error,
}

/// Outcome of a `notify_isolated` call
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub invoked: usize,
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
