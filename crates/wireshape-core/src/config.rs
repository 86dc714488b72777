//! Conversion configuration
//!
//! A [`ConversionConfig`] is supplied by the caller on every conversion and
//! is read-only from a specification's perspective. It carries the two
//! per-direction strictness flags, the composite type table used to resolve
//! named element descriptors at call time, and an optional diagnostics sink.
//! There is no ambient or process-wide configuration; concurrent conversions
//! with different configurations cannot interfere.

use crate::diagnostics::DiagnosticsSink;
use crate::spec::{Direction, TypeSpec};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Read-only configuration threaded through every conversion call
#[derive(Clone)]
pub struct ConversionConfig {
    strict_serialization: bool,
    strict_deserialization: bool,
    composite_types: Option<HashMap<String, Arc<dyn TypeSpec>>>,
    sink: Option<Arc<dyn DiagnosticsSink>>,
}

impl ConversionConfig {
    /// Strict in both directions, no composite table, no sink
    pub fn new() -> Self {
        Self {
            strict_serialization: true,
            strict_deserialization: true,
            composite_types: None,
            sink: None,
        }
    }

    /// Lenient in both directions: shape mismatches warn and pass through
    pub fn lenient() -> Self {
        Self::new()
            .with_strict_serialization(false)
            .with_strict_deserialization(false)
    }

    pub fn with_strict_serialization(mut self, strict: bool) -> Self {
        self.strict_serialization = strict;
        self
    }

    pub fn with_strict_deserialization(mut self, strict: bool) -> Self {
        self.strict_deserialization = strict;
        self
    }

    /// Replace the composite type table
    pub fn with_composite_types(
        mut self,
        types: HashMap<String, Arc<dyn TypeSpec>>,
    ) -> Self {
        self.composite_types = Some(types);
        self
    }

    /// Add one named specification to the composite type table
    pub fn with_composite_type<S: Into<String>>(
        mut self,
        name: S,
        spec: Arc<dyn TypeSpec>,
    ) -> Self {
        self.composite_types
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), spec);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Strictness flag for one conversion direction
    pub fn is_strict(&self, direction: Direction) -> bool {
        match direction {
            Direction::Serialize => self.strict_serialization,
            Direction::Deserialize => self.strict_deserialization,
        }
    }

    /// Look up a named specification in the composite type table
    ///
    /// Returns `None` both when the table is absent and when it has no
    /// entry for `name`; the two cases are indistinguishable to callers.
    pub fn composite_type(&self, name: &str) -> Option<Arc<dyn TypeSpec>> {
        self.composite_types.as_ref()?.get(name).cloned()
    }

    pub fn sink(&self) -> Option<&dyn DiagnosticsSink> {
        self.sink.as_deref()
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut type_names: Vec<&str> = self
            .composite_types
            .as_ref()
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        type_names.sort_unstable();
        f.debug_struct("ConversionConfig")
            .field("strict_serialization", &self.strict_serialization)
            .field("strict_deserialization", &self.strict_deserialization)
            .field("composite_types", &type_names)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
