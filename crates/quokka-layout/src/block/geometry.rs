//! Widths, heights and intrinsic sizes of block-level boxes in normal flow.

use quokka_common::warning::warn_once;
use quokka_style::{Au, HorizontalEdges, LengthPercentage, LengthPercentageOrAuto, VerticalEdges};
use quokka_tree::BoxId;

use crate::formatting_context::geometry::{
    HeightAndMargin, IntrinsicWidthConstraints, WidthAndMargin, computed_height,
    computed_value_if_not_auto, content_height,
};
use crate::layout_context::LayoutContext;

/// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
///
/// "The following constraints must hold among the used values of the other
/// properties:
///
/// 'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
/// 'padding-right' + 'border-right-width' + 'margin-right' = width of
/// containing block"
///
/// `used_width` replaces the computed `width` when present.
///
/// [§ 10.3.4 Block-level, replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#block-replaced-width)
/// boxes without an authored width get no intrinsic size and are 0 wide.
#[must_use]
pub fn in_flow_width_and_margin(
    ctx: &LayoutContext<'_>,
    id: BoxId,
    used_width: Option<Au>,
) -> WidthAndMargin {
    let layout_box = ctx.layout_box(id);
    let style = layout_box.style();
    let containing_block_width = ctx
        .display_box(ctx.containing_block(id))
        .content_box_width();
    let border_and_padding = ctx.display_box(id).horizontal_border_and_padding();

    let mut width =
        used_width.or_else(|| computed_value_if_not_auto(style.width, containing_block_width));
    if width.is_none() && layout_box.is_replaced() {
        let _ = warn_once("Layout", "replaced box without a width is laid out 0px wide");
        width = Some(Au(0));
    }
    let mut margin_left = computed_value_if_not_auto(style.margin.left, containing_block_width);
    let mut margin_right = computed_value_if_not_auto(style.margin.right, containing_block_width);
    let non_computed_margin = HorizontalEdges {
        left: margin_left.unwrap_or(Au(0)),
        right: margin_right.unwrap_or(Au(0)),
    };

    // STEP 1: "If 'width' is not 'auto' and 'border-left-width' +
    // 'padding-left' + 'width' + 'padding-right' + 'border-right-width' (plus
    // any of 'margin-left' or 'margin-right' that are not 'auto') is larger
    // than the width of the containing block, then any 'auto' values for
    // 'margin-left' or 'margin-right' are, for the following rules, treated
    // as zero."
    if let Some(width) = width {
        let total =
            non_computed_margin.left + border_and_padding + width + non_computed_margin.right;
        if total > containing_block_width {
            margin_left = Some(non_computed_margin.left);
            margin_right = Some(non_computed_margin.right);
        }
    }

    let remaining = |known: Au| containing_block_width - known;

    // STEP 2: Apply the rule that matches.
    let (width, margin) = match (width, margin_left, margin_right) {
        // "If 'width' is set to 'auto', any other 'auto' values become '0' and
        // 'width' follows from the resulting equality."
        (None, _, _) => {
            let width = remaining(non_computed_margin.sum() + border_and_padding);
            (width, non_computed_margin)
        }
        // "If both 'margin-left' and 'margin-right' are 'auto', their used
        // values are equal. This horizontally centers the element with respect
        // to the edges of the containing block."
        (Some(width), None, None) => {
            let available = remaining(border_and_padding + width);
            let start = available / 2;
            let margin = HorizontalEdges {
                left: start,
                right: available - start,
            };
            (width, margin)
        }
        // "If there is exactly one value specified as 'auto', its used value
        // follows from the equality."
        (Some(width), None, Some(margin_right)) => {
            let margin = HorizontalEdges {
                left: remaining(border_and_padding + width + margin_right),
                right: margin_right,
            };
            (width, margin)
        }
        // "If all of the above have a computed value other than 'auto', the
        // values are said to be "over-constrained" and one of the used values
        // will have to be different from its computed value. If the
        // 'direction' property of the containing block has the value 'ltr',
        // the specified value of 'margin-right' is ignored and the value is
        // calculated so as to make the equality true."
        (Some(width), Some(margin_left), _) => {
            let margin = HorizontalEdges {
                left: margin_left,
                right: remaining(margin_left + border_and_padding + width),
            };
            (width, margin)
        }
    };

    WidthAndMargin {
        width,
        margin,
        non_computed_margin,
    }
}

/// [§ 10.6.3 Block-level non-replaced elements in normal flow when 'overflow' computes to 'visible'](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
///
/// "If 'margin-top', or 'margin-bottom' are 'auto', their used value is 0."
#[must_use]
pub fn in_flow_vertical_margin(ctx: &LayoutContext<'_>, id: BoxId) -> VerticalEdges {
    let style = ctx.layout_box(id).style();
    let containing_block_width = ctx
        .display_box(ctx.containing_block(id))
        .content_box_width();
    VerticalEdges {
        top: computed_value_if_not_auto(style.margin.top, containing_block_width)
            .unwrap_or(Au(0)),
        bottom: computed_value_if_not_auto(style.margin.bottom, containing_block_width)
            .unwrap_or(Au(0)),
    }
}

/// [§ 10.6.3](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
///
/// "If 'height' is 'auto', the height depends on whether the element has any
/// block-level children and whether it has padding or borders."
///
/// Margins do not collapse, so the content height runs from the first
/// in-flow child's top margin edge to the last one's bottom margin edge.
#[must_use]
pub fn in_flow_height_and_margin(
    ctx: &LayoutContext<'_>,
    id: BoxId,
    used_height: Option<Au>,
) -> HeightAndMargin {
    let height = used_height
        .or_else(|| computed_height(ctx, id))
        .unwrap_or_else(|| content_height(ctx, id));
    let margin = in_flow_vertical_margin(ctx, id);
    HeightAndMargin {
        height,
        margin,
        non_collapsed_margin: margin,
        collapsed_margin: None,
    }
}

fn fixed(value: LengthPercentageOrAuto) -> Option<Au> {
    value.value().and_then(LengthPercentage::fixed)
}

/// The preferred minimum and preferred widths `id` adds to its parent,
/// margin box included.
///
/// Percentages have no reference while intrinsic sizes are measured, so
/// they count as `auto` (or zero for margins and padding).
pub fn intrinsic_width_contribution(
    ctx: &mut LayoutContext<'_>,
    id: BoxId,
) -> IntrinsicWidthConstraints {
    let layout_box = ctx.layout_box(id);
    let style = layout_box.style();

    let content = match fixed(style.width) {
        Some(width) => IntrinsicWidthConstraints::fixed(width),
        None if layout_box.is_replaced() => {
            let _ = warn_once("Layout", "replaced box without a width has no intrinsic size");
            IntrinsicWidthConstraints::ZERO
        }
        None if layout_box.establishes_formatting_context() => {
            let formatting_context = ctx.formatting_context(id);
            ctx.with_nesting(|ctx| formatting_context.intrinsic_width_constraints(ctx))
        }
        None => ctx.with_nesting(|ctx| intrinsic_width_of_in_flow_children(ctx, id)),
    };
    let content = content.clamped(
        fixed(style.min_width),
        style.max_width.and_then(LengthPercentage::fixed),
    );

    let margin =
        fixed(style.margin.left).unwrap_or(Au(0)) + fixed(style.margin.right).unwrap_or(Au(0));
    let padding = style.padding.left.fixed().unwrap_or(Au(0))
        + style.padding.right.fixed().unwrap_or(Au(0));
    let border = style.border_width.left + style.border_width.right;
    content + (margin + border + padding)
}

/// The widest in-flow child contribution of `id`.
pub fn intrinsic_width_of_in_flow_children(
    ctx: &mut LayoutContext<'_>,
    id: BoxId,
) -> IntrinsicWidthConstraints {
    let mut constraints = IntrinsicWidthConstraints::ZERO;
    for child in ctx.tree().in_flow_children(id) {
        constraints = constraints.union(intrinsic_width_contribution(ctx, child));
    }
    constraints
}
