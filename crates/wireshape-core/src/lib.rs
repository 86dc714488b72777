//! Wireshape Core - type specifications for shape validation and wire conversion
//!
//! This crate provides the core of the Wireshape family of composable type
//! specifications: reusable descriptors that convert already-decoded generic
//! values between an in-memory shape and a wire-transmissible shape, while
//! validating shape conformance and reporting structural errors with precise
//! locations.
//!
//! # Main Components
//!
//! - **Error Handling**: closed error taxonomy using `thiserror`
//! - **Location Tracking**: immutable structural paths for error reporting
//! - **Configuration**: caller-supplied strictness flags and composite type table
//! - **Specifications**: the [`TypeSpec`] capability, with sequence and
//!   primitive implementations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::json;
//! use wireshape_core::{ConversionConfig, Location, PrimitiveSpec, SequenceSpec, TypeSpec};
//!
//! # fn example() -> wireshape_core::Result<()> {
//! let spec = SequenceSpec::of(Arc::new(PrimitiveSpec::integer()));
//! let config = ConversionConfig::new();
//!
//! let wire = spec.serialize(&Location::root(), &json!([1, 2, 3]), &config)?;
//! assert_eq!(wire, json!([1, 2, 3]));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod location;
pub mod spec;

// Re-export main types for convenience
pub use config::ConversionConfig;
pub use diagnostics::DiagnosticsSink;
pub use error::{Error, Result, Severity};
pub use location::Location;
pub use spec::{
    Direction, ElementDescriptor, PrimitiveKind, PrimitiveSpec, SequenceSpec, SpecKind, TypeSpec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_specs_are_shareable_across_threads() {
        use serde_json::json;
        use std::sync::Arc;

        let spec: Arc<dyn TypeSpec> =
            Arc::new(SequenceSpec::of(Arc::new(PrimitiveSpec::integer())));
        let config = ConversionConfig::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let spec = Arc::clone(&spec);
                let config = config.clone();
                std::thread::spawn(move || {
                    spec.serialize(&Location::root(), &json!([1, 2, 3]), &config)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
