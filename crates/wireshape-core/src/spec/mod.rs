//! Type specifications: the conversion capability and its building blocks
//!
//! A type specification pairs a `serialize` and a `deserialize` operation
//! over already-decoded generic values. Specifications are immutable and
//! stateless; one instance is constructed at program initialization and
//! reused across arbitrarily many concurrent conversions.

pub mod primitive;
pub mod sequence;

use crate::config::ConversionConfig;
use crate::diagnostics;
use crate::error::{Error, Result, Severity};
use crate::location::Location;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub use primitive::{PrimitiveKind, PrimitiveSpec};
pub use sequence::SequenceSpec;

/// Conversion direction, selecting the matching strictness flag and
/// delegate operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// In-memory shape to wire-transmissible shape
    Serialize,
    /// Wire-transmissible shape to in-memory shape
    Deserialize,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Serialize => write!(f, "serialize"),
            Direction::Deserialize => write!(f, "deserialize"),
        }
    }
}

/// Shape category tag carried by every specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecKind {
    Sequence,
    Primitive,
    Composite,
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecKind::Sequence => write!(f, "Sequence"),
            SpecKind::Primitive => write!(f, "Primitive"),
            SpecKind::Composite => write!(f, "Composite"),
        }
    }
}

/// The conversion capability implemented by every type specification
///
/// Implementations must be stateless with respect to conversion: both
/// operations take the current location, the candidate value, and the
/// caller's configuration explicitly, and neither may retain state between
/// calls. Errors raised by a delegate propagate unchanged.
pub trait TypeSpec: Send + Sync {
    /// Shape category of this specification
    fn kind(&self) -> SpecKind;

    /// Convert a deserialized value to its wire shape
    fn serialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value>;

    /// Convert a wire value to its in-memory shape
    fn deserialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value>;

    /// Dispatch to `serialize` or `deserialize` by direction
    fn convert(
        &self,
        direction: Direction,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        match direction {
            Direction::Serialize => self.serialize(location, value, config),
            Direction::Deserialize => self.deserialize(location, value, config),
        }
    }
}

impl fmt::Debug for dyn TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeSpec").field(&self.kind()).finish()
    }
}

/// Element descriptor of a container specification: either an inline
/// delegate or the name of a composite type resolved at conversion time
#[derive(Clone)]
pub enum ElementDescriptor {
    /// Concrete delegate specification, used directly
    Inline(Arc<dyn TypeSpec>),
    /// Composite type name, looked up in the configuration's table on
    /// every call so one specification instance can serve different
    /// tables and self-referential type graphs
    Named(String),
}

impl ElementDescriptor {
    /// Name a composite type for call-time resolution
    pub fn named<S: Into<String>>(name: S) -> Self {
        ElementDescriptor::Named(name.into())
    }

    /// Resolve this descriptor against the configuration's composite table
    ///
    /// A missing table or a missing entry is a hard failure in both
    /// strictness modes: there is no valid fallback value to reconstruct.
    pub fn resolve(
        &self,
        location: &Location,
        config: &ConversionConfig,
    ) -> Result<Arc<dyn TypeSpec>> {
        match self {
            ElementDescriptor::Inline(spec) => Ok(Arc::clone(spec)),
            ElementDescriptor::Named(name) => {
                config.composite_type(name).ok_or_else(|| {
                    let message = format!(
                        "Missing composite specification entry in composite type \
                         dictionary for type named \"{}\" at property {}.",
                        name, location
                    );
                    diagnostics::emit(config, Severity::Error, &message);
                    Error::MissingTypeDefinition {
                        type_name: name.clone(),
                        message,
                    }
                })
            }
        }
    }
}

impl fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementDescriptor::Inline(spec) => {
                f.debug_tuple("Inline").field(&spec.kind()).finish()
            }
            ElementDescriptor::Named(name) => {
                f.debug_tuple("Named").field(name).finish()
            }
        }
    }
}

/// Shared strict/lenient handling for a value that fails a shape check
///
/// Strict: the message is error-logged and the conversion fails with
/// [`Error::ShapeMismatch`]. Lenient: the message is warning-logged and the
/// original value is returned unconverted, with its original type.
pub(crate) fn shape_fallback(
    expected: &str,
    direction: Direction,
    location: &Location,
    value: &Value,
    config: &ConversionConfig,
) -> Result<Value> {
    let message = format!("expected {} at {}, found {}", expected, location, value);
    if config.is_strict(direction) {
        diagnostics::emit(config, Severity::Error, &message);
        Err(Error::ShapeMismatch { message })
    } else {
        diagnostics::emit(config, Severity::Warning, &message);
        Ok(value.clone())
    }
}
