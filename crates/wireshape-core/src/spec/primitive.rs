//! Primitive specifications for scalar values
//!
//! Scalars have identical wire and in-memory shapes, so conversion is a
//! shape check followed by returning the value unchanged. The strict and
//! lenient behaviors are the same as for sequences.

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::location::Location;
use crate::spec::{shape_fallback, Direction, SpecKind, TypeSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Scalar shape accepted by a [`PrimitiveSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Float,
    String,
    Null,
}

impl PrimitiveKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            PrimitiveKind::Boolean => value.is_boolean(),
            PrimitiveKind::Integer => value.is_i64() || value.is_u64(),
            // Integers are acceptable floats on the wire.
            PrimitiveKind::Float => value.is_number(),
            PrimitiveKind::String => value.is_string(),
            PrimitiveKind::Null => value.is_null(),
        }
    }

    /// Shape name with article, as embedded in mismatch messages
    fn expected(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "a Boolean",
            PrimitiveKind::Integer => "an Integer",
            PrimitiveKind::Float => "a Float",
            PrimitiveKind::String => "a String",
            PrimitiveKind::Null => "a Null",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Boolean => write!(f, "Boolean"),
            PrimitiveKind::Integer => write!(f, "Integer"),
            PrimitiveKind::Float => write!(f, "Float"),
            PrimitiveKind::String => write!(f, "String"),
            PrimitiveKind::Null => write!(f, "Null"),
        }
    }
}

/// Type specification for one scalar shape
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveSpec {
    kind: PrimitiveKind,
}

impl PrimitiveSpec {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    pub fn boolean() -> Self {
        Self::new(PrimitiveKind::Boolean)
    }

    pub fn integer() -> Self {
        Self::new(PrimitiveKind::Integer)
    }

    pub fn float() -> Self {
        Self::new(PrimitiveKind::Float)
    }

    pub fn string() -> Self {
        Self::new(PrimitiveKind::String)
    }

    pub fn null() -> Self {
        Self::new(PrimitiveKind::Null)
    }

    pub fn primitive_kind(&self) -> PrimitiveKind {
        self.kind
    }

    fn check(
        &self,
        direction: Direction,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        if self.kind.matches(value) {
            Ok(value.clone())
        } else {
            shape_fallback(self.kind.expected(), direction, location, value, config)
        }
    }
}

impl TypeSpec for PrimitiveSpec {
    fn kind(&self) -> SpecKind {
        SpecKind::Primitive
    }

    fn serialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        self.check(Direction::Serialize, location, value, config)
    }

    fn deserialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        self.check(Direction::Deserialize, location, value, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_matching_scalar_is_returned_unchanged() {
        let spec = PrimitiveSpec::string();
        let config = ConversionConfig::new();

        let out = spec
            .serialize(&Location::root(), &json!("hello"), &config)
            .unwrap();
        assert_eq!(out, json!("hello"));
    }

    #[test]
    fn test_integer_accepted_as_float() {
        let spec = PrimitiveSpec::float();
        let config = ConversionConfig::new();

        assert!(spec
            .deserialize(&Location::root(), &json!(3), &config)
            .is_ok());
        assert!(spec
            .deserialize(&Location::root(), &json!(3.5), &config)
            .is_ok());
    }

    #[test]
    fn test_float_rejected_as_integer() {
        let spec = PrimitiveSpec::integer();
        let config = ConversionConfig::new();

        let err = spec
            .deserialize(&Location::from_segments(["count"]), &json!(3.5), &config)
            .unwrap_err();
        match err {
            Error::ShapeMismatch { message } => {
                assert_eq!(message, "expected an Integer at $.count, found 3.5");
            }
            other => panic!("Expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_mismatch_passes_through() {
        let spec = PrimitiveSpec::boolean();
        let config = ConversionConfig::new().with_strict_deserialization(false);

        let out = spec
            .deserialize(&Location::root(), &json!("yes"), &config)
            .unwrap();
        assert_eq!(out, json!("yes"));
    }

    #[test]
    fn test_null_spec_accepts_only_null() {
        let spec = PrimitiveSpec::null();
        let config = ConversionConfig::new();

        assert!(spec
            .serialize(&Location::root(), &json!(null), &config)
            .is_ok());
        assert!(spec
            .serialize(&Location::root(), &json!(0), &config)
            .is_err());
    }
}
