//! Tests for tree, branch and leaf construction and collaborator identity

use std::rc::Rc;

use arbor::domain::{real_chain, AttributePath, Branch, Kind, Leaf, Respond, Tree, Value};

#[test]
fn given_borrowed_tree_when_building_branch_then_tree_is_same_object() {
    // Arrange
    let tree = Tree::new();

    // Act
    let branch = Branch::new(&tree);

    // Assert
    assert_eq!(branch.length(), "4 feet");
    assert!(std::ptr::eq(*branch.tree(), &tree));
}

#[test]
fn given_borrowed_branch_when_building_leaf_then_branch_is_same_object() {
    // Arrange
    let tree = Tree::new();
    let branch = Branch::new(&tree);

    // Act
    let leaf = Leaf::new(&branch);

    // Assert
    assert_eq!(leaf.color(), "green");
    assert!(std::ptr::eq(*leaf.branch(), &branch));
    assert!(std::ptr::eq(*leaf.branch().tree(), &tree));
}

#[test]
fn given_shared_tree_when_building_two_branches_then_both_hold_it() {
    // Arrange
    let tree = Rc::new(Tree::new());

    // Act
    let left = Branch::new(Rc::clone(&tree));
    let right = Branch::new(Rc::clone(&tree));

    // Assert
    assert!(Rc::ptr_eq(left.tree(), right.tree()));
    assert_eq!(Rc::strong_count(&tree), 3);
}

#[test]
fn given_real_chain_when_reading_tree_through_protocol_then_object_is_tree() {
    // Arrange
    let leaf = real_chain();
    let path = AttributePath::parse("branch.tree").unwrap();

    // Act
    let value = path.resolve(&leaf).unwrap();

    // Assert
    match value {
        Value::Object(tree) => {
            assert_eq!(tree.kind(), Kind::Tree);
            assert_eq!(tree.attributes(), vec!["bark"]);
        }
        Value::Text(text) => panic!("expected tree object, got text {text:?}"),
    }
}

#[test]
fn given_boxed_branch_when_reading_through_protocol_then_delegates() {
    let leaf = Leaf::new(Box::new(Branch::new(Tree::new())));

    assert_eq!(leaf.branch().kind(), Kind::Branch);
    assert_eq!(
        leaf.read("branch")
            .unwrap()
            .as_object()
            .unwrap()
            .read("length")
            .unwrap()
            .as_text(),
        Some("4 feet")
    );
}

#[test]
fn given_real_chain_when_reading_text_path_as_object_then_not_text() {
    let leaf = real_chain();

    let err = AttributePath::parse("branch.tree")
        .unwrap()
        .read_text(&leaf)
        .unwrap_err();

    assert_eq!(err.to_string(), "expected text at branch.tree, found an object");
}

#[test]
fn given_unknown_attribute_on_real_branch_when_reading_then_unexpected_message() {
    let branch = Branch::new(Tree::new());

    let err = branch.read("leaves").unwrap_err();

    assert_eq!(err.to_string(), "Branch received unexpected message :leaves");
}
