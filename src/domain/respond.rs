//! Read protocol shared by real objects and doubles
//!
//! Anything that can stand in for a tree, branch or leaf implements [`Respond`]:
//! it answers named attribute reads and reports its nominal [`Kind`].

use std::fmt;
use std::rc::Rc;

use crate::domain::error::DomainResult;

/// Nominal type of an object, used for instance-of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Tree,
    Branch,
    Leaf,
    Double,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Tree => "Tree",
            Kind::Branch => "Branch",
            Kind::Leaf => "Leaf",
            Kind::Double => "Double",
        };
        f.write_str(name)
    }
}

/// Result of reading a single attribute.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Text(&'a str),
    Object(&'a dyn Respond),
}

impl<'a> Value<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Value::Text(text) => Some(text),
            Value::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a dyn Respond> {
        match *self {
            Value::Text(_) => None,
            Value::Object(obj) => Some(obj),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(&describe(*obj)).finish(),
        }
    }
}

/// Read interface for objects in the graph.
pub trait Respond {
    /// Nominal type reported by instance-of checks.
    fn kind(&self) -> Kind;

    /// Human readable name, used in error messages.
    fn label(&self) -> String {
        self.kind().to_string()
    }

    /// Names of the attributes this object answers, in display order.
    fn attributes(&self) -> Vec<&str>;

    /// Read a single attribute by name.
    fn read(&self, attribute: &str) -> DomainResult<Value<'_>>;
}

impl<R: Respond + ?Sized> Respond for &R {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn attributes(&self) -> Vec<&str> {
        (**self).attributes()
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        (**self).read(attribute)
    }
}

impl<R: Respond + ?Sized> Respond for Box<R> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn attributes(&self) -> Vec<&str> {
        (**self).attributes()
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        (**self).read(attribute)
    }
}

impl<R: Respond + ?Sized> Respond for Rc<R> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn attributes(&self) -> Vec<&str> {
        (**self).attributes()
    }

    fn read(&self, attribute: &str) -> DomainResult<Value<'_>> {
        (**self).read(attribute)
    }
}

/// Instance-of check: true only when `obj` reports exactly `kind`.
pub fn is_instance_of<R: Respond + ?Sized>(obj: &R, kind: Kind) -> bool {
    obj.kind() == kind
}

/// One-line description: `Leaf`, or `Double "Leaf"` for stand-ins.
pub fn describe(obj: &dyn Respond) -> String {
    match obj.kind() {
        Kind::Double => format!("Double {:?}", obj.label()),
        kind => kind.to_string(),
    }
}
