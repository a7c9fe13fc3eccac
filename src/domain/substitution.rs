//! Substitutability check between a real object and a stand-in
//!
//! A stand-in substitutes for a real object along a path when it reads the
//! same text at the end of the path, and no object it visits on the way has
//! the same nominal kind as the real object at that position.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::path::AttributePath;
use crate::domain::respond::{Kind, Respond, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub path: AttributePath,
    pub real_value: String,
    pub stand_in_value: String,
    /// Kinds visited on the real side, one per segment.
    pub real_kinds: Vec<Kind>,
    /// Kinds visited on the stand-in side, one per segment.
    pub stand_in_kinds: Vec<Kind>,
}

impl Substitution {
    pub fn values_match(&self) -> bool {
        self.real_value == self.stand_in_value
    }

    /// Positions where the stand-in reports the same kind as the real object.
    pub fn indistinct_levels(&self) -> Vec<usize> {
        self.real_kinds
            .iter()
            .zip(&self.stand_in_kinds)
            .enumerate()
            .filter(|(_, (real, stand_in))| real == stand_in)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn holds(&self) -> bool {
        self.values_match() && self.indistinct_levels().is_empty()
    }
}

/// Resolve `path` on both objects and compare.
pub fn check_substitution(
    real: &dyn Respond,
    stand_in: &dyn Respond,
    path: &AttributePath,
) -> DomainResult<Substitution> {
    let real_trail = path.walk(real)?;
    let stand_in_trail = path.walk(stand_in)?;

    let text = |value: Value<'_>| {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| DomainError::NotText {
                path: path.to_string(),
            })
    };

    let substitution = Substitution {
        path: path.clone(),
        real_value: text(real_trail.value)?,
        stand_in_value: text(stand_in_trail.value)?,
        real_kinds: real_trail.kinds,
        stand_in_kinds: stand_in_trail.kinds,
    };
    tracing::debug!(
        path = %substitution.path,
        holds = substitution.holds(),
        "checked substitution"
    );
    Ok(substitution)
}
