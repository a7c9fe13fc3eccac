//! arbor: a tree, branch and leaf object graph with substitutable test doubles.
//!
//! Real entities ([`domain::Tree`], [`domain::Branch`], [`domain::Leaf`]) and
//! stand-ins ([`domain::Double`]) share the [`domain::Respond`] read protocol,
//! so tests can swap one for the other and still tell them apart by
//! [`domain::Kind`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
