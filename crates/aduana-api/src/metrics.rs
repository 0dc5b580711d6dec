//! Minimal prometheus registry for the API.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct ApiMetrics {
    registry: Registry,
    pub validations: IntCounter,
    pub explanations: IntCounter,
}

impl ApiMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let validations = IntCounter::new("aduana_validations_total", "Invoices validated")
            .expect("valid metric definition");
        let explanations = IntCounter::new("aduana_explanations_total", "Explanations generated")
            .expect("valid metric definition");

        let _ = registry.register(Box::new(validations.clone()));
        let _ = registry.register(Box::new(explanations.clone()));

        Self {
            registry,
            validations,
            explanations,
        }
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}
