use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for event dispatch
// ============================================================================
//
// Provides metrics for:
// - Events notified, per event name
// - Handler invocations and their outcome
// - Number of handler registrations currently held
//
// All metrics live in one Registry; `encode_text` renders the exposition
// format for logging or scraping.
// ============================================================================

pub struct DispatchMetrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub registered_handlers: IntGauge,
}

impl DispatchMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("events_notified_total", "Total events passed to notify"),
            &["event_name"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new("handler_invocations_total", "Total handler invocations by outcome"),
            &["event_name", "outcome"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let registered_handlers = IntGauge::new(
            "registered_handlers",
            "Handler registrations currently held by the dispatcher",
        )?;
        registry.register(Box::new(registered_handlers.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            handler_invocations,
            registered_handlers,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_notify(&self, event_name: &str) {
        self.events_notified.with_label_values(&[event_name]).inc();
    }

    pub fn record_invocation(&self, event_name: &str, success: bool) {
        let outcome = if success { "ok" } else { "error" };
        self.handler_invocations
            .with_label_values(&[event_name, outcome])
            .inc();
    }

    pub fn set_registered_handlers(&self, count: usize) {
        self.registered_handlers.set(count as i64);
    }

    /// Render every metric in the Prometheus text format
    pub fn encode_text(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.record_notify("ProductCreatedEvent");
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_notify_and_invocations() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.record_notify("CustomerCreatedEvent");
        metrics.record_invocation("CustomerCreatedEvent", true);
        metrics.record_invocation("CustomerCreatedEvent", true);
        metrics.record_invocation("CustomerCreatedEvent", false);

        assert_eq!(
            metrics
                .events_notified
                .with_label_values(&["CustomerCreatedEvent"])
                .get(),
            1
        );
        assert_eq!(
            metrics
                .handler_invocations
                .with_label_values(&["CustomerCreatedEvent", "ok"])
                .get(),
            2
        );
        assert_eq!(
            metrics
                .handler_invocations
                .with_label_values(&["CustomerCreatedEvent", "error"])
                .get(),
            1
        );
    }

    #[test]
    fn test_encode_text() {
        let metrics = DispatchMetrics::new().unwrap();
        metrics.set_registered_handlers(3);
        metrics.record_notify("ProductCreatedEvent");

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("registered_handlers 3"));
        assert!(text.contains("events_notified_total{event_name=\"ProductCreatedEvent\"} 1"));
    }
}
