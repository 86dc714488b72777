//! Diagnostics emission for conversion operations
//!
//! Specifications report shape problems through a fire-and-forget sink. A
//! caller may inject a [`DiagnosticsSink`] through the configuration;
//! without one, messages go to the `log` facade at the matching level.
//! Whether a message is recorded never changes the outcome of a conversion.

use crate::config::ConversionConfig;
use crate::error::Severity;

/// Receiver for diagnostic messages produced during conversion
pub trait DiagnosticsSink: Send + Sync {
    /// Record one message; no return value is consumed by the caller
    fn emit(&self, severity: Severity, message: &str);
}

/// Route a diagnostic to the configured sink, or to the `log` facade
pub fn emit(config: &ConversionConfig, severity: Severity, message: &str) {
    match config.sink() {
        Some(sink) => sink.emit(severity, message),
        None => match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Info => log::info!("{}", message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<(Severity, String)>>,
    }

    impl DiagnosticsSink for RecordingSink {
        fn emit(&self, severity: Severity, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }

    #[test]
    fn test_emit_routes_to_configured_sink() {
        let sink = Arc::new(RecordingSink::default());
        let config = ConversionConfig::new().with_sink(sink.clone());

        emit(&config, Severity::Warning, "shape drift at $.items");

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, Severity::Warning);
        assert_eq!(messages[0].1, "shape drift at $.items");
    }

    #[test]
    fn test_emit_without_sink_does_not_panic() {
        let config = ConversionConfig::new();
        emit(&config, Severity::Error, "goes to the log facade");
    }
}
