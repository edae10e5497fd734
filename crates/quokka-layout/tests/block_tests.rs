//! Integration tests for normal-flow block layout.

use quokka_layout::{
    BlockFormattingContext, FormattingContext, LayoutContext, LayoutError, Position, Size,
};
use quokka_style::{
    Au, ComputedStyle, DisplayType, Edges, LengthPercentage, LengthPercentageOrAuto, PositionType,
};
use quokka_tree::{BoxId, BoxTree};

fn px(value: i32) -> Au {
    Au::from_px(value)
}

fn append(tree: &mut BoxTree, parent: BoxId, style: ComputedStyle) -> BoxId {
    let id = tree.create_container(style);
    tree.append_child(parent, id).unwrap();
    id
}

fn block_with_height(height: LengthPercentageOrAuto) -> ComputedStyle {
    let mut style = ComputedStyle::default();
    style.height = height;
    style
}

#[test]
fn test_blocks_stack_without_collapsing() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = block_with_height(LengthPercentageOrAuto::px(20));
    style.margin.top = LengthPercentageOrAuto::px(10);
    style.margin.bottom = LengthPercentageOrAuto::px(10);
    let first = append(&mut tree, root, style.clone());
    let second = append(&mut tree, root, style);

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    assert_eq!(ctx.display_box(first).top(), px(10));
    assert_eq!(ctx.display_box(second).top(), px(50));
    assert_eq!(ctx.display_box(second).content_box_width(), px(800));
}

#[test]
fn test_auto_margins_center_fixed_width() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::default();
    style.width = LengthPercentageOrAuto::px(200);
    style.margin.left = LengthPercentageOrAuto::Auto;
    style.margin.right = LengthPercentageOrAuto::Auto;
    let centered = append(&mut tree, root, style);

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    let display_box = ctx.display_box(centered);
    assert_eq!(display_box.margin_left(), px(300));
    assert_eq!(display_box.margin_right(), px(300));
    assert_eq!(display_box.left(), px(300));
}

#[test]
fn test_min_height_raises_content_height() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::default();
    style.min_height = LengthPercentageOrAuto::px(80);
    let container = append(&mut tree, root, style);
    let _ = append(&mut tree, container, block_with_height(LengthPercentageOrAuto::px(30)));

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    assert_eq!(ctx.display_box(container).content_box_height(), px(80));
}

#[test]
fn test_relative_offsets_do_not_change_parent_height() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let parent = append(&mut tree, root, ComputedStyle::default());
    let mut shifted_style = block_with_height(LengthPercentageOrAuto::px(20));
    shifted_style.position = PositionType::Relative;
    shifted_style.inset.top = LengthPercentageOrAuto::px(15);
    shifted_style.inset.right = LengthPercentageOrAuto::px(5);
    let shifted = append(&mut tree, parent, shifted_style);
    let after = append(&mut tree, parent, block_with_height(LengthPercentageOrAuto::px(10)));

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    assert_eq!(ctx.display_box(shifted).top_left(), Position::new(px(-5), px(15)));
    assert_eq!(ctx.display_box(after).top(), px(20));
    assert_eq!(ctx.display_box(parent).content_box_height(), px(30));
}

#[test]
fn test_percentage_height_needs_definite_containing_block() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let half = || block_with_height(LengthPercentageOrAuto::percent(50.0));
    let against_viewport = append(&mut tree, root, half());
    let definite = append(&mut tree, root, block_with_height(LengthPercentageOrAuto::px(100)));
    let against_definite = append(&mut tree, definite, half());
    let indefinite = append(&mut tree, root, ComputedStyle::default());
    let against_indefinite = append(&mut tree, indefinite, half());

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    assert_eq!(ctx.display_box(against_viewport).content_box_height(), px(300));
    assert_eq!(ctx.display_box(against_definite).content_box_height(), px(50));
    assert_eq!(ctx.display_box(against_indefinite).content_box_height(), px(0));
}

#[test]
fn test_padding_percentages_use_containing_block_width() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::default();
    style.padding = Edges::all(LengthPercentage::percent(10.0));
    style.border_width = Edges::all(px(2));
    let padded = append(&mut tree, root, style);

    let mut ctx = LayoutContext::new(&tree, Size::from_px(500, 600));
    ctx.layout();

    let display_box = ctx.display_box(padded);
    assert_eq!(display_box.padding_top(), Some(px(50)));
    assert_eq!(display_box.content_box_width(), px(396));
    assert_eq!(display_box.border_box_height(), px(104));
}

#[test]
fn test_flow_root_child_runs_nested_context() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::default();
    style.display = DisplayType::FlowRoot;
    style.width = LengthPercentageOrAuto::px(300);
    let flow_root = append(&mut tree, root, style);
    let inner = append(&mut tree, flow_root, block_with_height(LengthPercentageOrAuto::px(40)));

    let mut ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    ctx.layout();

    assert!(ctx.formatting_roots().contains(&flow_root));
    assert_eq!(ctx.display_box(inner).content_box_width(), px(300));
    assert_eq!(ctx.display_box(flow_root).content_box_height(), px(40));
}

#[test]
fn test_stale_root_reports_error() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let doomed = append(&mut tree, root, ComputedStyle::default());
    tree.remove_subtree(doomed).unwrap();

    let ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    let formatting_context = BlockFormattingContext::new(doomed);
    assert_eq!(
        formatting_context.try_root(&ctx).err(),
        Some(LayoutError::StaleFormattingRoot(doomed))
    );
}

#[test]
#[should_panic(expected = "no longer in the box tree")]
fn test_stale_root_panics_on_access() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let doomed = append(&mut tree, root, ComputedStyle::default());
    tree.remove_subtree(doomed).unwrap();

    let ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    let _ = BlockFormattingContext::new(doomed).root(&ctx);
}

#[test]
#[should_panic(expected = "does not establish a formatting context")]
fn test_formatting_context_requires_root() {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let plain = append(&mut tree, root, ComputedStyle::default());

    let ctx = LayoutContext::new(&tree, Size::from_px(800, 600));
    let _ = ctx.formatting_context(plain);
}
