//! Inspection service
//!
//! Loads doubles from disk and reads, checks and renders attribute paths
//! against either the real chain or a loaded double.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{OutputStyle, Settings};
use crate::domain::{
    check_substitution, flatten, real_chain, render, AttributePath, Double, Leaf, Respond,
    Substitution,
};
use crate::infrastructure::traits::FileSystem;

/// Object an operation is run against.
#[derive(Debug, Clone)]
pub enum Subject {
    /// The real `Leaf(Branch(Tree))` chain
    Real(Leaf),
    /// A stand-in loaded from a double file
    Double(Double),
}

impl Subject {
    pub fn real() -> Self {
        Subject::Real(real_chain())
    }

    pub fn root(&self) -> &dyn Respond {
        match self {
            Subject::Real(leaf) => leaf,
            Subject::Double(double) => double,
        }
    }
}

/// Service for reading attribute paths through real objects and doubles.
pub struct InspectService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl InspectService {
    /// Create a new inspect service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Load a double by file path or by name under the configured doubles directory.
    pub fn load_double(&self, reference: &str) -> ApplicationResult<Double> {
        let path = self.settings.double_path(reference);
        debug!("load_double: reference={} path={}", reference, path.display());

        if !self.fs.is_file(&path) {
            return Err(ApplicationError::DoubleNotFound(path));
        }
        let content = self
            .fs
            .read_to_string(&path)
            .with_path_context("read double", &path)?;
        parse_double(&content, &path)
    }

    /// The real chain, or the double named by `reference`.
    pub fn subject(&self, reference: Option<&str>) -> ApplicationResult<Subject> {
        match reference {
            Some(reference) => self.load_double(reference).map(Subject::Double),
            None => Ok(Subject::real()),
        }
    }

    /// Read the text at `path`.
    pub fn read(&self, subject: &Subject, path: &AttributePath) -> ApplicationResult<String> {
        let text = path.read_text(subject.root())?;
        debug!("read: {} = {:?}", path, text);
        Ok(text.to_string())
    }

    /// Check `stand_in` against the real chain along `path`.
    pub fn check(&self, stand_in: &Double, path: &AttributePath) -> ApplicationResult<Substitution> {
        let real = real_chain();
        Ok(check_substitution(&real, stand_in, path)?)
    }

    /// Render the subject in the given style, or the configured one.
    pub fn render(&self, subject: &Subject, style: Option<OutputStyle>) -> String {
        match style.unwrap_or(self.settings.style) {
            OutputStyle::Tree => render(subject.root()).to_string(),
            OutputStyle::Plain => flatten(subject.root())
                .into_iter()
                .map(|(path, text)| format!("{path} = {text}\n"))
                .collect(),
        }
    }
}

/// Parse TOML double content.
fn parse_double(content: &str, path: &Path) -> ApplicationResult<Double> {
    toml::from_str(content).map_err(|e| ApplicationError::InvalidDouble {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
