//! Test doubles: labelled stand-ins answering a fixed set of attribute reads
//!
//! A [`Double`] is plain data: a label and a map of stubbed attributes. It
//! answers [`Respond::read`] for the stubbed names only and always reports
//! [`Kind::Double`], so it is never an instance of a real entity.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::respond::{Kind, Respond, Value};

/// Stubbed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Stub {
    Text(String),
    Object(Double),
}

impl From<&str> for Stub {
    fn from(value: &str) -> Self {
        Stub::Text(value.to_string())
    }
}

impl From<String> for Stub {
    fn from(value: String) -> Self {
        Stub::Text(value)
    }
}

impl From<Double> for Stub {
    fn from(value: Double) -> Self {
        Stub::Object(value)
    }
}

/// Labelled stand-in object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Double {
    label: String,
    #[serde(default)]
    attributes: BTreeMap<String, Stub>,
}

impl Double {
    /// Create a double with no stubs; every read fails until stubs are added.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_text(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(attribute.into(), Stub::Text(value.into()));
        self
    }

    pub fn with_object(mut self, attribute: impl Into<String>, value: Double) -> Self {
        self.attributes.insert(attribute.into(), Stub::Object(value));
        self
    }

    pub fn stub(&self, attribute: &str) -> Option<&Stub> {
        self.attributes.get(attribute)
    }
}

/// Build a double from `(attribute, stub)` pairs.
///
/// ```
/// use arbor::domain::{double, Kind, Respond};
///
/// let leaf = double("Equals green", [("color", "green")]);
/// assert_eq!(leaf.read("color").unwrap().as_text(), Some("green"));
/// assert_ne!(leaf.kind(), Kind::Leaf);
/// ```
pub fn double<I, K, S>(label: impl Into<String>, stubs: I) -> Double
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: Into<Stub>,
{
    Double {
        label: label.into(),
        attributes: stubs
            .into_iter()
            .map(|(name, stub)| (name.into(), stub.into()))
            .collect(),
    }
}

impl Respond for Double {
    fn kind(&self) -> Kind {
        Kind::Double
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn attributes(&self) -> Vec<&str> {
        self.attributes.keys().map(String::as_str).collect()
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        match self.attributes.get(attribute) {
            Some(Stub::Text(text)) => Ok(Value::Text(text)),
            Some(Stub::Object(inner)) => Ok(Value::Object(inner)),
            None => Err(DomainError::unexpected(
                format!("#<Double {:?}>", self.label),
                attribute,
            )),
        }
    }
}
