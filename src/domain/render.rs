//! Rendering of object graphs for display

use termtree::Tree as TermTree;

use crate::domain::respond::{describe, Respond, Value};

/// Render `obj` and its collaborators as a tree.
pub fn render(obj: &dyn Respond) -> TermTree<String> {
    let mut node = TermTree::new(describe(obj));
    for attribute in obj.attributes() {
        match obj.read(attribute) {
            Ok(Value::Text(text)) => {
                node.push(TermTree::new(format!("{attribute}: {text}")));
            }
            Ok(Value::Object(inner)) => {
                let mut child = render(inner);
                child.root = format!("{attribute}: {}", child.root);
                node.push(child);
            }
            Err(e) => {
                node.push(TermTree::new(format!("{attribute}: <{e}>")));
            }
        }
    }
    node
}

/// Flatten `obj` into `(path, text)` pairs, depth first.
pub fn flatten(obj: &dyn Respond) -> Vec<(String, String)> {
    let mut lines = Vec::new();
    flatten_into(obj, "", &mut lines);
    lines
}

fn flatten_into(obj: &dyn Respond, prefix: &str, lines: &mut Vec<(String, String)>) {
    for attribute in obj.attributes() {
        let path = if prefix.is_empty() {
            attribute.to_string()
        } else {
            format!("{prefix}.{attribute}")
        };
        match obj.read(attribute) {
            Ok(Value::Text(text)) => lines.push((path, text.to_string())),
            Ok(Value::Object(inner)) => flatten_into(inner, &path, lines),
            Err(e) => lines.push((path, format!("<{e}>"))),
        }
    }
}
