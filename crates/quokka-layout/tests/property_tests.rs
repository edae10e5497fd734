//! Property tests for the size-constraint loop and out-of-flow layout.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use quokka_layout::formatting_context::constraints::resolve_with_size_constraints;
use quokka_layout::{
    DisplayBox, IntrinsicWidthConstraints, LayoutContext, Position, Size,
    map_coordinate_to_ancestor,
};
use quokka_style::{Au, ComputedStyle, LengthPercentage, LengthPercentageOrAuto, PositionType};
use quokka_tree::{BoxId, BoxTree};

fn px(value: u16) -> Au {
    Au::from_px(i32::from(value))
}

fn resolve(natural: u16, max: Option<u16>, min: Option<u16>) -> Au {
    resolve_with_size_constraints(
        |used: Option<Au>| used.unwrap_or(px(natural)),
        |size: &Au| *size,
        max.map(px),
        min.map(px),
    )
}

#[quickcheck]
fn prop_min_takes_precedence_over_max(natural: u16, max: u16, min: u16) -> TestResult {
    if min <= max {
        return TestResult::discard();
    }
    TestResult::from_bool(resolve(natural, Some(max), Some(min)) == px(min))
}

#[quickcheck]
fn prop_constraints_bound_the_result(natural: u16, max: Option<u16>, min: Option<u16>) -> bool {
    let used = resolve(natural, max, min);
    let below_max = max.is_none_or(|max| used <= px(max) || min.is_some_and(|min| min > max));
    let above_min = min.is_none_or(|min| used >= px(min));
    below_max && above_min
}

#[quickcheck]
fn prop_shrink_to_fit_is_monotonic(minimum: u16, maximum: u16, a: u16, b: u16) -> bool {
    let constraints = IntrinsicWidthConstraints {
        minimum: px(minimum.min(maximum)),
        maximum: px(minimum.max(maximum)),
    };
    let (narrow, wide) = (a.min(b), a.max(b));
    constraints.shrink_to_fit(px(narrow)) <= constraints.shrink_to_fit(px(wide))
}

/// Absolutely positioned boxes under a 1000px wide relative containing
/// block, one per `(left, width)` pair, appended in the given order.
fn positioned_siblings(boxes: &[(u16, u16)], reversed: bool) -> (BoxTree, BoxId, Vec<BoxId>) {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut containing_style = ComputedStyle::positioned(PositionType::Relative);
    containing_style.width = LengthPercentageOrAuto::px(1000);
    containing_style.height = LengthPercentageOrAuto::px(1000);
    let containing_block = tree.create_container(containing_style);
    tree.append_child(root, containing_block).unwrap();

    let ids: Vec<BoxId> = boxes
        .iter()
        .map(|&(left, width)| {
            let mut style = ComputedStyle::positioned(PositionType::Absolute);
            style.inset.left = LengthPercentageOrAuto::px(i32::from(left % 500));
            style.width = LengthPercentageOrAuto::px(i32::from(width % 500));
            tree.create_container(style)
        })
        .collect();
    let order: Vec<BoxId> = if reversed {
        ids.iter().rev().copied().collect()
    } else {
        ids.clone()
    };
    for id in order {
        tree.append_child(containing_block, id).unwrap();
    }
    (tree, containing_block, ids)
}

fn records(ctx: &LayoutContext<'_>, ids: &[BoxId]) -> Vec<DisplayBox> {
    ids.iter().map(|id| ctx.display_box(*id).clone()).collect()
}

#[quickcheck]
fn prop_registration_order_does_not_change_geometry(boxes: Vec<(u16, u16)>) -> bool {
    let (forward_tree, _, forward_ids) = positioned_siblings(&boxes, false);
    let (reverse_tree, _, reverse_ids) = positioned_siblings(&boxes, true);

    let mut forward = LayoutContext::new(&forward_tree, Size::from_px(1200, 1200));
    forward.layout();
    let mut reverse = LayoutContext::new(&reverse_tree, Size::from_px(1200, 1200));
    reverse.layout();

    records(&forward, &forward_ids) == records(&reverse, &reverse_ids)
}

#[quickcheck]
fn prop_out_of_flow_layout_is_idempotent(boxes: Vec<(u16, u16)>) -> bool {
    let (tree, containing_block, ids) = positioned_siblings(&boxes, false);
    let mut ctx = LayoutContext::new(&tree, Size::from_px(1200, 1200));
    ctx.layout();
    let first = records(&ctx, &ids);

    let formatting_context = ctx.formatting_context(tree.root());
    formatting_context.layout_out_of_flow_descendants(&mut ctx, containing_block);
    records(&ctx, &ids) == first
}

#[quickcheck]
fn prop_right_edge_shrink_to_fit_fills_containing_block(content_width: u16) -> bool {
    let content_width = i32::from(content_width % 1000);
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::positioned(PositionType::Absolute);
    style.inset.right = LengthPercentageOrAuto::ZERO;
    let positioned = tree.create_container(style);
    tree.append_child(root, positioned).unwrap();
    let mut content_style = ComputedStyle::default();
    content_style.width = LengthPercentageOrAuto::px(content_width);
    let content = tree.create_leaf(content_style);
    tree.append_child(positioned, content).unwrap();

    let mut ctx = LayoutContext::new(&tree, Size::from_px(1000, 1000));
    ctx.layout();

    let display_box = ctx.display_box(positioned);
    display_box.content_box_width() == Au::from_px(content_width)
        && display_box.left() + display_box.content_box_width() == Au::from_px(1000)
}

#[quickcheck]
fn prop_map_to_self_is_identity(left: i16, top: i16) -> bool {
    let tree = BoxTree::new();
    let ctx = LayoutContext::new(&tree, Size::from_px(100, 100));
    let point = Position::new(Au::from_px(i32::from(left)), Au::from_px(i32::from(top)));
    map_coordinate_to_ancestor(&ctx, tree.root(), point, tree.root()) == point
}

/// A right-aligned absolute box under a 1000px viewport holding a leaf of
/// `content_width`, with optional width constraints.
fn right_aligned(
    content_width: i32,
    min_width: Option<i32>,
    max_width: Option<i32>,
) -> (BoxTree, BoxId) {
    let mut tree = BoxTree::new();
    let root = tree.root();
    let mut style = ComputedStyle::positioned(PositionType::Absolute);
    style.inset.right = LengthPercentageOrAuto::ZERO;
    style.margin.left = LengthPercentageOrAuto::Auto;
    if let Some(min_width) = min_width {
        style.min_width = LengthPercentageOrAuto::px(min_width);
    }
    style.max_width = max_width.map(LengthPercentage::px);
    let positioned = tree.create_container(style);
    tree.append_child(root, positioned).unwrap();
    let mut content_style = ComputedStyle::default();
    content_style.width = LengthPercentageOrAuto::px(content_width);
    let content = tree.create_leaf(content_style);
    tree.append_child(positioned, content).unwrap();
    (tree, positioned)
}

#[quickcheck]
fn prop_non_binding_constraints_do_not_change_geometry(
    content_width: u16,
    below: u16,
    above: u16,
) -> bool {
    let content_width = i32::from(content_width % 1000);
    let min_width = content_width - i32::from(below) % (content_width + 1);
    let max_width = content_width + i32::from(above % 200);

    let (free_tree, free) = right_aligned(content_width, None, None);
    let (bounded_tree, bounded) = right_aligned(content_width, Some(min_width), Some(max_width));

    let mut free_ctx = LayoutContext::new(&free_tree, Size::from_px(1000, 1000));
    free_ctx.layout();
    let mut bounded_ctx = LayoutContext::new(&bounded_tree, Size::from_px(1000, 1000));
    bounded_ctx.layout();

    free_ctx.display_box(free) == bounded_ctx.display_box(bounded)
}
