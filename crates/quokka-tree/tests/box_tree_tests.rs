//! Tests for box tree mutation, containing-block resolution and the
//! out-of-flow index.

use quokka_style::{ComputedStyle, DisplayType, PositionType};
use quokka_tree::{BoxId, BoxTree, TreeError};

fn container(tree: &mut BoxTree, position: PositionType) -> BoxId {
    tree.create_container(ComputedStyle::positioned(position))
}

fn attach(tree: &mut BoxTree, parent: BoxId, position: PositionType) -> BoxId {
    let id = container(tree, position);
    tree.append_child(parent, id).expect("append");
    id
}

// ========== structure ==========

#[test]
fn test_new_tree_holds_only_the_initial_containing_block() {
    let tree = BoxTree::new();
    let root = tree.root();
    assert_eq!(tree.len(), 1);
    assert!(tree.get(root).unwrap().is_initial_containing_block());
    assert!(tree.get(root).unwrap().establishes_formatting_context());
    assert_eq!(tree.containing_block(root), None);
    assert_eq!(tree.formatting_context_root(root), Some(root));
}

#[test]
fn test_append_links_siblings_in_order() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let b = attach(&mut tree, root, PositionType::Static);
    let c = attach(&mut tree, root, PositionType::Static);

    assert_eq!(tree.children(root), &[a, b, c]);
    assert_eq!(tree.previous_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.previous_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.parent(b), Some(root));
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let b = attach(&mut tree, root, PositionType::Static);
    let c = attach(&mut tree, root, PositionType::Static);

    tree.remove_child(root, b).unwrap();

    assert_eq!(tree.children(root), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.previous_sibling(c), Some(a));
    assert_eq!(tree.parent(b), None);
    assert!(tree.contains(b));
}

#[test]
fn test_in_flow_queries_skip_out_of_flow_siblings() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let _abs = attach(&mut tree, root, PositionType::Absolute);
    let b = attach(&mut tree, root, PositionType::Relative);
    let _fixed = attach(&mut tree, root, PositionType::Fixed);

    assert_eq!(tree.in_flow_children(root).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(tree.first_in_flow_child(root), Some(a));
    assert_eq!(tree.last_in_flow_child(root), Some(b));
    assert_eq!(tree.previous_in_flow_sibling(b), Some(a));
    assert_eq!(tree.previous_in_flow_sibling(a), None);
}

#[test]
fn test_descendants_are_pre_order() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let a1 = attach(&mut tree, a, PositionType::Static);
    let a2 = attach(&mut tree, a, PositionType::Static);
    let b = attach(&mut tree, root, PositionType::Static);

    assert_eq!(tree.descendants(root).collect::<Vec<_>>(), vec![a, a1, a2, b]);
    assert_eq!(tree.ancestors(a2).collect::<Vec<_>>(), vec![a, root]);
    assert!(tree.is_descendant_of(a2, root));
    assert!(!tree.is_descendant_of(b, a));
}

// ========== containing blocks ==========

#[test]
fn test_static_and_relative_boxes_use_their_parent() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let outer = attach(&mut tree, root, PositionType::Static);
    let rel = attach(&mut tree, outer, PositionType::Relative);
    let inner = attach(&mut tree, rel, PositionType::Static);

    assert_eq!(tree.containing_block(outer), Some(root));
    assert_eq!(tree.containing_block(rel), Some(outer));
    assert_eq!(tree.containing_block(inner), Some(rel));
}

#[test]
fn test_absolute_box_uses_nearest_positioned_ancestor() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let rel = attach(&mut tree, root, PositionType::Relative);
    let plain = attach(&mut tree, rel, PositionType::Static);
    let abs = attach(&mut tree, plain, PositionType::Absolute);

    assert_eq!(tree.containing_block(abs), Some(rel));
    assert_eq!(tree.out_of_flow_descendants(rel), &[abs]);
    assert!(tree.out_of_flow_descendants(plain).is_empty());
}

#[test]
fn test_absolute_box_without_positioned_ancestor_uses_root() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let plain = attach(&mut tree, root, PositionType::Static);
    let abs = attach(&mut tree, plain, PositionType::Absolute);

    assert_eq!(tree.containing_block(abs), Some(root));
    assert_eq!(tree.out_of_flow_descendants(root), &[abs]);
}

#[test]
fn test_fixed_box_skips_positioned_ancestors() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let rel = attach(&mut tree, root, PositionType::Relative);
    let fixed = attach(&mut tree, rel, PositionType::Fixed);

    assert_eq!(tree.containing_block(fixed), Some(root));
    assert_eq!(tree.out_of_flow_descendants(root), &[fixed]);
    assert!(tree.out_of_flow_descendants(rel).is_empty());
}

#[test]
fn test_formatting_context_root_follows_containing_blocks() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let plain = attach(&mut tree, root, PositionType::Static);
    let flow_root = tree.create_container(ComputedStyle {
        display: DisplayType::FlowRoot,
        ..ComputedStyle::default()
    });
    tree.append_child(plain, flow_root).unwrap();
    let inner = attach(&mut tree, flow_root, PositionType::Static);
    let abs = attach(&mut tree, inner, PositionType::Absolute);
    let abs_child = attach(&mut tree, abs, PositionType::Static);

    assert_eq!(tree.formatting_context_root(plain), Some(root));
    assert_eq!(tree.formatting_context_root(flow_root), Some(root));
    assert_eq!(tree.formatting_context_root(inner), Some(flow_root));
    assert_eq!(tree.formatting_context_root(abs), Some(root));
    assert_eq!(tree.formatting_context_root(abs_child), Some(abs));
}

// ========== out-of-flow index maintenance ==========

#[test]
fn test_index_follows_a_reparented_subtree() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let rel = attach(&mut tree, root, PositionType::Relative);
    let holder = attach(&mut tree, rel, PositionType::Static);
    let abs = attach(&mut tree, holder, PositionType::Absolute);
    assert_eq!(tree.out_of_flow_descendants(rel), &[abs]);

    tree.remove_child(rel, holder).unwrap();
    assert!(tree.out_of_flow_descendants(rel).is_empty());
    assert_eq!(tree.containing_block(abs), None);

    tree.append_child(root, holder).unwrap();
    assert_eq!(tree.containing_block(abs), Some(root));
    assert_eq!(tree.out_of_flow_descendants(root), &[abs]);
}

#[test]
fn test_detached_subtree_keeps_internal_registrations() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let rel = attach(&mut tree, root, PositionType::Relative);
    let abs = attach(&mut tree, rel, PositionType::Absolute);

    tree.remove_child(root, rel).unwrap();
    assert_eq!(tree.out_of_flow_descendants(rel), &[abs]);
    assert!(tree.out_of_flow_descendants(root).is_empty());
}

#[test]
fn test_index_is_built_for_subtrees_assembled_before_attachment() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let holder = container(&mut tree, PositionType::Static);
    let abs = attach(&mut tree, holder, PositionType::Absolute);
    let fixed = attach(&mut tree, holder, PositionType::Fixed);
    assert!(tree.out_of_flow_descendants(holder).is_empty());

    tree.append_child(root, holder).unwrap();
    assert_eq!(tree.out_of_flow_descendants(root), &[abs, fixed]);
}

#[test]
fn test_remove_subtree_invalidates_handles_and_index() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let holder = attach(&mut tree, root, PositionType::Static);
    let abs = attach(&mut tree, holder, PositionType::Absolute);
    let leaf = tree.create_leaf(ComputedStyle::default());
    tree.append_child(abs, leaf).unwrap();

    tree.remove_subtree(holder).unwrap();

    assert!(!tree.contains(holder));
    assert!(!tree.contains(abs));
    assert!(tree.get(leaf).is_none());
    assert!(tree.children(root).is_empty());
    assert!(tree.out_of_flow_descendants(root).is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_reused_slot_does_not_revive_stale_handle() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let old = attach(&mut tree, root, PositionType::Static);
    tree.remove_subtree(old).unwrap();

    let new = attach(&mut tree, root, PositionType::Static);
    assert_eq!(old.index(), new.index());
    assert_ne!(old, new);
    assert!(tree.get(old).is_none());
    assert_eq!(tree.parent(old), None);
    assert!(tree.children(old).is_empty());
}

// ========== rejected mutations ==========

#[test]
fn test_append_rejects_invalid_requests() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let child = attach(&mut tree, a, PositionType::Static);
    let leaf = tree.create_leaf(ComputedStyle::default());
    let other = container(&mut tree, PositionType::Static);

    assert_eq!(tree.append_child(root, child), Err(TreeError::AlreadyAttached(child)));
    assert_eq!(tree.append_child(leaf, other), Err(TreeError::NotAContainer(leaf)));
    assert_eq!(tree.append_child(a, root), Err(TreeError::InitialContainingBlock));

    tree.remove_child(root, a).unwrap();
    assert_eq!(
        tree.append_child(child, a),
        Err(TreeError::Cycle { parent: child, child: a })
    );

    tree.remove_subtree(other).unwrap();
    assert_eq!(tree.append_child(root, other), Err(TreeError::StaleBox(other)));
}

#[test]
fn test_remove_rejects_wrong_parent_and_root() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let a = attach(&mut tree, root, PositionType::Static);
    let b = attach(&mut tree, a, PositionType::Static);

    assert_eq!(
        tree.remove_child(root, b),
        Err(TreeError::NotAChild { parent: root, child: b })
    );
    assert_eq!(tree.remove_subtree(root), Err(TreeError::InitialContainingBlock));
    assert_eq!(tree.children(a), &[b]);
}
