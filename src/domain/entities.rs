//! Domain entities: tree, branch and leaf
//!
//! Each entity exposes fixed-value attributes and, for branch and leaf, the
//! collaborator it was built with. Collaborators are generic so callers
//! choose between owning (`Branch<Tree>`) and borrowing (`Branch<&Tree>`).

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::respond::{Kind, Respond, Value};

pub const BARK: &str = "thick and brown";
pub const LENGTH: &str = "4 feet";
pub const COLOR: &str = "green";

/// Root of the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tree;

impl Tree {
    pub fn new() -> Self {
        Self
    }

    pub fn bark(&self) -> &'static str {
        BARK
    }
}

impl Respond for Tree {
    fn kind(&self) -> Kind {
        Kind::Tree
    }

    fn attributes(&self) -> Vec<&str> {
        vec!["bark"]
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        match attribute {
            "bark" => Ok(Value::Text(self.bark())),
            _ => Err(DomainError::unexpected(self.label(), attribute)),
        }
    }
}

/// A branch attached to a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<T = Tree> {
    tree: T,
}

impl<T: Respond> Branch<T> {
    /// Attach to `tree`. Any value answering the read protocol is accepted.
    pub fn new(tree: T) -> Self {
        Self { tree }
    }
}

impl<T> Branch<T> {
    pub fn length(&self) -> &'static str {
        LENGTH
    }

    /// The collaborator passed to [`Branch::new`].
    pub fn tree(&self) -> &T {
        &self.tree
    }
}

impl<T: Respond> Respond for Branch<T> {
    fn kind(&self) -> Kind {
        Kind::Branch
    }

    fn attributes(&self) -> Vec<&str> {
        vec!["length", "tree"]
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        match attribute {
            "length" => Ok(Value::Text(self.length())),
            "tree" => Ok(Value::Object(&self.tree)),
            _ => Err(DomainError::unexpected(self.label(), attribute)),
        }
    }
}

/// A leaf attached to a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<B = Branch> {
    branch: B,
}

impl<B: Respond> Leaf<B> {
    /// Attach to `branch`. Any value answering the read protocol is accepted.
    pub fn new(branch: B) -> Self {
        Self { branch }
    }
}

impl<B> Leaf<B> {
    pub fn color(&self) -> &'static str {
        COLOR
    }

    /// The collaborator passed to [`Leaf::new`].
    pub fn branch(&self) -> &B {
        &self.branch
    }
}

impl<B: Respond> Respond for Leaf<B> {
    fn kind(&self) -> Kind {
        Kind::Leaf
    }

    fn attributes(&self) -> Vec<&str> {
        vec!["color", "branch"]
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        match attribute {
            "color" => Ok(Value::Text(self.color())),
            "branch" => Ok(Value::Object(&self.branch)),
            _ => Err(DomainError::unexpected(self.label(), attribute)),
        }
    }
}

/// The fully real chain `Leaf(Branch(Tree))`.
pub fn real_chain() -> Leaf<Branch<Tree>> {
    Leaf::new(Branch::new(Tree::new()))
}
