//! Attribute paths: dot-separated chains of reads such as `branch.tree.bark`

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::respond::{Kind, Respond, Value};

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("segment pattern is valid")
});

/// Parsed, non-empty chain of attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<String>,
}

/// Outcome of walking a path: the kind of every object read from, and the final value.
#[derive(Debug, Clone)]
pub struct Trail<'a> {
    pub kinds: Vec<Kind>,
    pub value: Value<'a>,
}

impl AttributePath {
    /// Parse `a.b.c`. Segments must be identifiers (`[A-Za-z_][A-Za-z0-9_]*`);
    /// whitespace anywhere is rejected.
    pub fn parse(input: &str) -> DomainResult<Self> {
        if input.is_empty() {
            return Err(invalid(input, "path is empty"));
        }

        let mut segments = Vec::new();
        for segment in input.split('.') {
            if segment.is_empty() {
                return Err(invalid(input, "empty segment"));
            }
            if !SEGMENT.is_match(segment) {
                return Err(invalid(input, &format!("'{segment}' is not an identifier")));
            }
            segments.push(segment.to_string());
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path made of the first `len` segments, for error reporting.
    fn prefix(&self, len: usize) -> String {
        self.segments[..len].join(".")
    }

    /// Walk the path from `root`, recording the kind of each object read from.
    pub fn walk<'a>(&self, root: &'a dyn Respond) -> DomainResult<Trail<'a>> {
        let mut kinds = Vec::with_capacity(self.segments.len());
        let mut current = Value::Object(root);

        for (idx, segment) in self.segments.iter().enumerate() {
            let obj = current.as_object().ok_or_else(|| DomainError::NotAnObject {
                path: self.prefix(idx),
            })?;
            kinds.push(obj.kind());
            current = obj.read(segment)?;
        }

        Ok(Trail {
            kinds,
            value: current,
        })
    }

    /// Resolve the path against `root`.
    pub fn resolve<'a>(&self, root: &'a dyn Respond) -> DomainResult<Value<'a>> {
        self.walk(root).map(|trail| trail.value)
    }

    /// Resolve the path and require the final value to be text.
    pub fn read_text<'a>(&self, root: &'a dyn Respond) -> DomainResult<&'a str> {
        self.resolve(root)?
            .as_text()
            .ok_or_else(|| DomainError::NotText {
                path: self.to_string(),
            })
    }
}

impl FromStr for AttributePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

fn invalid(path: &str, reason: &str) -> DomainError {
    DomainError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
