//! Sequence specification: validation and conversion of array-shaped values
//!
//! A [`SequenceSpec`] describes an array whose elements are all governed by
//! one delegate specification, given inline or by composite type name. Both
//! public operations share one conversion routine: shape check first, then
//! delegate resolution, then element-wise conversion. A value that is not
//! array-shaped never triggers a named-type lookup.

use crate::config::ConversionConfig;
use crate::error::Result;
use crate::location::Location;
use crate::spec::{shape_fallback, Direction, ElementDescriptor, SpecKind, TypeSpec};
use serde_json::Value;
use std::sync::Arc;

/// Type specification for array-shaped values
#[derive(Debug, Clone)]
pub struct SequenceSpec {
    element: ElementDescriptor,
}

impl SequenceSpec {
    pub fn new(element: ElementDescriptor) -> Self {
        Self { element }
    }

    /// Sequence over an inline delegate specification
    pub fn of(spec: Arc<dyn TypeSpec>) -> Self {
        Self::new(ElementDescriptor::Inline(spec))
    }

    /// Sequence over a named composite type, resolved per call
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::new(ElementDescriptor::named(name))
    }

    pub fn element(&self) -> &ElementDescriptor {
        &self.element
    }

    fn convert_elements(
        &self,
        direction: Direction,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        let Some(items) = value.as_array() else {
            // Strict: error + ShapeMismatch. Lenient: warn + the original
            // value passed through with its original type.
            return shape_fallback("an Array", direction, location, value, config);
        };

        let delegate = self.element.resolve(location, config)?;

        let mut converted = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let element_location = location.extend_index(index);
            // Fail-fast: the first delegate error aborts the remaining
            // elements and propagates unchanged.
            converted.push(delegate.convert(direction, &element_location, item, config)?);
        }
        Ok(Value::Array(converted))
    }
}

impl TypeSpec for SequenceSpec {
    fn kind(&self) -> SpecKind {
        SpecKind::Sequence
    }

    fn serialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        self.convert_elements(Direction::Serialize, location, value, config)
    }

    fn deserialize(
        &self,
        location: &Location,
        value: &Value,
        config: &ConversionConfig,
    ) -> Result<Value> {
        self.convert_elements(Direction::Deserialize, location, value, config)
    }
}
