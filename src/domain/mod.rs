//! Domain layer: entities, the read protocol and test doubles
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod double;
pub mod entities;
pub mod error;
pub mod path;
pub mod render;
pub mod respond;
pub mod substitution;

pub use double::{double, Double, Stub};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use path::{AttributePath, Trail};
pub use render::{flatten, render};
pub use respond::{describe, is_instance_of, Kind, Respond, Value};
pub use substitution::{check_substitution, Substitution};
