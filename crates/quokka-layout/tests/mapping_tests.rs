//! Integration tests for coordinate mapping between containing blocks.

use quokka_layout::{
    LayoutContext, Position, Size, map_box_to_ancestor, map_coordinate_to_ancestor,
    map_top_left_to_ancestor,
};
use quokka_style::{Au, ComputedStyle, Edges, LengthPercentage, LengthPercentageOrAuto, PositionType};
use quokka_tree::{BoxId, BoxTree};

fn px(value: i32) -> Au {
    Au::from_px(value)
}

fn append(tree: &mut BoxTree, parent: BoxId, style: ComputedStyle) -> BoxId {
    let id = tree.create_container(style);
    tree.append_child(parent, id).unwrap();
    id
}

fn absolute_at(left: i32, top: i32) -> ComputedStyle {
    let mut style = ComputedStyle::positioned(PositionType::Absolute);
    style.inset.left = LengthPercentageOrAuto::px(left);
    style.inset.top = LengthPercentageOrAuto::px(top);
    style.width = LengthPercentageOrAuto::px(100);
    style.height = LengthPercentageOrAuto::px(100);
    style.border_width = Edges::all(px(1));
    style.padding = Edges::all(LengthPercentage::px(4));
    style
}

/// root -> outer (30, 20) -> middle (10, 10) -> inner (5, 5)
fn chain() -> (BoxTree, [BoxId; 3]) {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let outer = append(&mut tree, root, absolute_at(30, 20));
    let middle = append(&mut tree, outer, absolute_at(10, 10));
    let inner = append(&mut tree, middle, absolute_at(5, 5));
    (tree, [outer, middle, inner])
}

#[test]
fn test_map_adds_content_box_offsets() {
    let (tree, [outer, middle, inner]) = chain();
    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    // Each step adds the corner plus border and padding (5px).
    assert_eq!(
        map_top_left_to_ancestor(&ctx, middle, tree.root()),
        Position::new(px(45), px(35))
    );
    assert_eq!(
        map_top_left_to_ancestor(&ctx, inner, tree.root()),
        Position::new(px(55), px(45))
    );
    assert_eq!(
        map_top_left_to_ancestor(&ctx, inner, outer),
        Position::new(px(20), px(20))
    );
}

#[test]
fn test_mapping_is_associative() {
    let (tree, [outer, _, inner]) = chain();
    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    let direct = map_top_left_to_ancestor(&ctx, inner, tree.root());
    let via_outer = map_coordinate_to_ancestor(
        &ctx,
        outer,
        map_top_left_to_ancestor(&ctx, inner, outer),
        tree.root(),
    );
    assert_eq!(direct, via_outer);
}

#[test]
fn test_map_to_self_is_identity() {
    let (tree, [_, middle, _]) = chain();
    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    let point = Position::new(px(7), px(-3));
    assert_eq!(map_coordinate_to_ancestor(&ctx, middle, point, middle), point);
}

#[test]
fn test_map_box_keeps_sizes() {
    let (tree, [_, _, inner]) = chain();
    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    let mapped = map_box_to_ancestor(&ctx, inner, tree.root());
    assert_eq!(mapped.top_left(), Position::new(px(55), px(45)));
    assert_eq!(mapped.border_box_width(), ctx.display_box(inner).border_box_width());
    assert_eq!(mapped.margin_box_height(), ctx.display_box(inner).margin_box_height());
}

#[test]
#[should_panic(expected = "not on the containing-block chain")]
fn test_map_to_unrelated_box_panics() {
    let (mut tree, [outer, _, _]) = chain();
    let root = tree.root();
    let unrelated = append(&mut tree, root, ComputedStyle::default());
    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    let _ = map_top_left_to_ancestor(&ctx, outer, unrelated);
}
