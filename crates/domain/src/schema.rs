//! Schema model describing the attributes a data source exposes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value::{AttributeValue, State};

/// Type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 string.
    String,
}

impl AttributeType {
    /// Returns the lowercase type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::String => "string",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Value type.
    #[serde(rename = "type")]
    pub kind: AttributeType,
    /// Human-readable description (markdown).
    pub description: String,
    /// Set by the data source, never by the practitioner.
    #[serde(default)]
    pub computed: bool,
}

impl Attribute {
    /// Creates a computed attribute.
    #[must_use]
    pub fn computed(kind: AttributeType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            computed: true,
        }
    }
}

/// Data source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Human-readable description of the data source.
    pub description: String,
    /// Schema version, bumped when the state layout changes.
    pub version: i64,
    /// Attributes keyed by name.
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Creates an empty schema with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            version: 0,
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Checks a single value against the declared attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is not declared or the value has
    /// the wrong type.
    pub fn check_value(&self, name: &str, value: &AttributeValue) -> DomainResult<()> {
        let attribute = self
            .attribute(name)
            .ok_or_else(|| DomainError::UnknownAttribute(name.to_string()))?;

        let actual = value.attribute_type();
        if attribute.kind != actual {
            return Err(DomainError::TypeMismatch {
                name: name.to_string(),
                expected: attribute.kind,
                actual,
            });
        }
        Ok(())
    }

    /// Checks every value of `state`, collecting all violations.
    #[must_use]
    pub fn check_state(&self, state: &State) -> Vec<DomainError> {
        state
            .iter()
            .filter_map(|(name, value)| self.check_value(name, value).err())
            .collect()
    }
}
