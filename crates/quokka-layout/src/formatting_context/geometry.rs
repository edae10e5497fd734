//! Box-model geometry shared by every formatting context.
//!
//! [§ 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! The solvers here are pure: they read the tree and the records already
//! produced by the pass, and return candidate geometry without storing it.
//! The min/max override loop in
//! [`constraints`](super::constraints) calls them up to three times per axis.

use std::ops::Add;

use quokka_common::warning::warn_once;
use quokka_style::{
    Au, Edges, HorizontalEdges, LengthPercentage, LengthPercentageOrAuto, PositionType,
    VerticalEdges,
};
use quokka_tree::{BoxId, LayoutBox};

use crate::display_box::Position;
use crate::layout_context::LayoutContext;

use super::mapping::map_coordinate_to_ancestor;

/// Used width and margins for one solution of the horizontal equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthAndMargin {
    /// Content-box width.
    pub width: Au,
    /// Used left and right margins.
    pub margin: HorizontalEdges,
    /// Margins as authored, with `auto` as zero.
    pub non_computed_margin: HorizontalEdges,
}

/// A candidate solution of [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalGeometry {
    /// Used `left`.
    pub left: Au,
    /// Used `right`.
    pub right: Au,
    /// Used width and margins.
    pub width_and_margin: WidthAndMargin,
}

/// Used height and margins for one solution of the vertical equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightAndMargin {
    /// Content-box height.
    pub height: Au,
    /// Used top and bottom margins.
    pub margin: VerticalEdges,
    /// Margins before any collapsing.
    pub non_collapsed_margin: VerticalEdges,
    /// The collapsed margin, for boxes that take part in collapsing.
    pub collapsed_margin: Option<VerticalEdges>,
}

/// A candidate solution of [§ 10.6.4](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalGeometry {
    /// Used `top`.
    pub top: Au,
    /// Used `bottom`.
    pub bottom: Au,
    /// Used height and margins.
    pub height_and_margin: HeightAndMargin,
}

/// Preferred minimum and preferred widths of a box's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrinsicWidthConstraints {
    /// The preferred minimum width.
    pub minimum: Au,
    /// The preferred width.
    pub maximum: Au,
}

impl IntrinsicWidthConstraints {
    /// No content.
    pub const ZERO: Self = Self {
        minimum: Au(0),
        maximum: Au(0),
    };

    /// Content that is exactly `width` wide.
    #[must_use]
    pub const fn fixed(width: Au) -> Self {
        Self {
            minimum: width,
            maximum: width,
        }
    }

    /// The wider of two constraints on each bound.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            minimum: self.minimum.max(other.minimum),
            maximum: self.maximum.max(other.maximum),
        }
    }

    /// Apply `max-width` and then `min-width` to both bounds.
    #[must_use]
    pub fn clamped(self, min: Option<Au>, max: Option<Au>) -> Self {
        let clamp = |width: Au| {
            let width = max.map_or(width, |max| width.min(max));
            min.map_or(width, |min| width.max(min))
        };
        Self {
            minimum: clamp(self.minimum),
            maximum: clamp(self.maximum),
        }
    }

    /// [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// "the shrink-to-fit width is: min(max(preferred minimum width,
    /// available width), preferred width)."
    #[must_use]
    pub fn shrink_to_fit(self, available: Au) -> Au {
        available.max(self.minimum).min(self.maximum)
    }
}

impl Default for IntrinsicWidthConstraints {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add<Au> for IntrinsicWidthConstraints {
    type Output = Self;

    fn add(self, extra: Au) -> Self {
        Self {
            minimum: self.minimum + extra,
            maximum: self.maximum + extra,
        }
    }
}

/// [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
///
/// The used value of a `<length-percentage> | auto` property, or `None`
/// for `auto`.
#[must_use]
pub fn computed_value_if_not_auto(value: LengthPercentageOrAuto, reference: Au) -> Option<Au> {
    value.value().map(|value| value.resolve(reference))
}

/// The used value of a `max-width` / `max-height` style property, or `None`
/// for `none`.
#[must_use]
pub fn computed_max_value(value: Option<LengthPercentage>, reference: Au) -> Option<Au> {
    value.map(|value| value.resolve(reference))
}

/// Like [`computed_value_if_not_auto`], but a percentage without a definite
/// reference behaves as `auto`.
fn computed_value_against_optional(
    value: LengthPercentageOrAuto,
    reference: Option<Au>,
) -> Option<Au> {
    let value = value.value()?;
    value
        .fixed()
        .or_else(|| reference.map(|reference| value.resolve(reference)))
}

/// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
#[must_use]
pub const fn computed_border(layout_box: &LayoutBox) -> Edges<Au> {
    layout_box.style().border_width
}

/// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
///
/// "The percentage is calculated with respect to the width of the
/// generated box's containing block, even for 'padding-top' and
/// 'padding-bottom'."
#[must_use]
pub fn computed_padding(layout_box: &LayoutBox, containing_block_width: Au) -> Edges<Au> {
    layout_box
        .style()
        .padding
        .map(|padding| padding.resolve(containing_block_width))
}

/// [§ 10.5 Content height](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
///
/// The content height of `id` when it is already known, before its
/// descendants are laid out.
///
/// "The percentage is calculated with respect to the height of the
/// generated box's containing block. If the height of the containing block
/// is not specified explicitly (i.e., it depends on content height), and
/// this element is not absolutely positioned, the value computes to 'auto'."
///
/// The initial containing block always qualifies. Any other box qualifies
/// when its own height does not depend on content; its height is then
/// stored before its children run.
#[must_use]
pub fn definite_content_height(ctx: &LayoutContext<'_>, id: BoxId) -> Option<Au> {
    let layout_box = ctx.layout_box(id);
    let definite = if layout_box.is_initial_containing_block() {
        true
    } else if layout_box.is_out_of_flow_positioned() {
        out_of_flow_height_is_definite(ctx, id)
    } else {
        computed_height(ctx, id).is_some()
    };
    definite.then(|| ctx.display_box(id).content_box_height())
}

/// [§ 10.6.4](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height)
///
/// Whether the vertical geometry of the out-of-flow box `id` can be solved
/// without its content: `height` resolves, or 'top' and 'bottom' are both
/// given and rule 5 solves for 'height'. Min and max heights never depend
/// on content.
#[must_use]
pub fn out_of_flow_height_is_definite(ctx: &LayoutContext<'_>, id: BoxId) -> bool {
    if computed_height(ctx, id).is_some() {
        return true;
    }
    let inset = &ctx.layout_box(id).style().inset;
    !inset.top.is_auto() && !inset.bottom.is_auto()
}

/// The reference for percentage heights of `id`: the content height of its
/// containing block, when that is definite.
fn percentage_reference_height(ctx: &LayoutContext<'_>, id: BoxId) -> Option<Au> {
    let containing_block = ctx.containing_block(id);
    if ctx.layout_box(id).is_out_of_flow_positioned() {
        // Out-of-flow boxes run after their containing block is complete.
        return Some(ctx.display_box(containing_block).content_box_height());
    }
    definite_content_height(ctx, containing_block)
}

/// [§ 10.5](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
///
/// The used `height` of `id`, or `None` when it is `auto` or a percentage
/// that computes to `auto`.
#[must_use]
pub fn computed_height(ctx: &LayoutContext<'_>, id: BoxId) -> Option<Au> {
    let style = ctx.layout_box(id).style();
    computed_value_against_optional(style.height, percentage_reference_height(ctx, id))
}

/// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
///
/// The used `max-height`, or `None` for `none`.
///
/// "If the height of the containing block is not specified explicitly (i.e.,
/// it depends on content height), and this element is not absolutely
/// positioned, the percentage value is treated as 'none'."
#[must_use]
pub fn computed_max_height(ctx: &LayoutContext<'_>, id: BoxId) -> Option<Au> {
    let style = ctx.layout_box(id).style();
    let max_height = style.max_height?;
    max_height.fixed().or_else(|| {
        percentage_reference_height(ctx, id).map(|reference| max_height.resolve(reference))
    })
}

/// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
///
/// The used `min-height`, or `None` when no minimum applies. A percentage
/// without a definite reference is treated as 0.
#[must_use]
pub fn computed_min_height(ctx: &LayoutContext<'_>, id: BoxId) -> Option<Au> {
    let style = ctx.layout_box(id).style();
    computed_value_against_optional(style.min_height, percentage_reference_height(ctx, id))
}

/// [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
///
/// The offset of an in-flow positioned box from its normal-flow position.
///
/// "If both 'left' and 'right' are 'auto' (their initial values), the used
/// values are '0' (i.e., the boxes stay in their original position).
/// If 'left' is 'auto', its used value is minus the value of 'right'.
/// If 'right' is 'auto', its used value is minus the value of 'left'.
/// If neither 'left' nor 'right' is 'auto', the position is
/// over-constrained, and one of them has to be ignored. If the 'direction'
/// property of the containing block is 'ltr', the value of 'left' wins."
///
/// "The 'top' and 'bottom' properties move relatively positioned element(s)
/// up or down without changing their size."
#[must_use]
pub fn in_flow_positioned_position(ctx: &LayoutContext<'_>, id: BoxId) -> Position {
    let layout_box = ctx.layout_box(id);
    let style = layout_box.style();
    if style.position == PositionType::Sticky {
        let _ = warn_once("Layout", "position: sticky is laid out as position: relative");
    }

    let containing_block = ctx.containing_block(id);
    let containing_block_width = ctx.display_box(containing_block).content_box_width();
    let containing_block_height = definite_content_height(ctx, containing_block);

    let left = computed_value_if_not_auto(style.inset.left, containing_block_width);
    let right = computed_value_if_not_auto(style.inset.right, containing_block_width);
    let horizontal = match (left, right) {
        (None, None) => Au(0),
        (Some(left), _) => left,
        (None, Some(right)) => -right,
    };

    // "If neither is 'auto', 'bottom' is ignored."
    let top = computed_value_against_optional(style.inset.top, containing_block_height);
    let bottom = computed_value_against_optional(style.inset.bottom, containing_block_height);
    let vertical = match (top, bottom) {
        (None, None) => Au(0),
        (Some(top), _) => top,
        (None, Some(bottom)) => -bottom,
    };

    Position::new(horizontal, vertical)
}

/// The relative offset applied to `id`, or zero for boxes that are not
/// in-flow positioned.
fn applied_relative_offset(ctx: &LayoutContext<'_>, id: BoxId) -> Position {
    if ctx.layout_box(id).is_in_flow_positioned() {
        in_flow_positioned_position(ctx, id)
    } else {
        Position::ZERO
    }
}

/// Top margin edge of an in-flow box at its normal-flow position.
fn normal_flow_margin_box_top(ctx: &LayoutContext<'_>, id: BoxId) -> Au {
    ctx.display_box(id).margin_box_top() - applied_relative_offset(ctx, id).top
}

/// Bottom margin edge of an in-flow box at its normal-flow position.
fn normal_flow_margin_box_bottom(ctx: &LayoutContext<'_>, id: BoxId) -> Au {
    ctx.display_box(id).margin_box_bottom() - applied_relative_offset(ctx, id).top
}

/// [§ 10.6.7 'Auto' heights for block formatting context roots](https://www.w3.org/TR/CSS2/visudet.html#root-height)
///
/// "If it only has block-level children, the height is the distance between
/// the top margin-edge of the topmost block-level child box and the bottom
/// margin-edge of the bottommost block-level child box."
///
/// Relative offsets of the children do not count. 0 without in-flow
/// children.
#[must_use]
pub fn content_height(ctx: &LayoutContext<'_>, id: BoxId) -> Au {
    let tree = ctx.tree();
    let (Some(first), Some(last)) = (tree.first_in_flow_child(id), tree.last_in_flow_child(id))
    else {
        return Au(0);
    };
    normal_flow_margin_box_bottom(ctx, last) - normal_flow_margin_box_top(ctx, first)
}

/// [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
///
/// The content-box origin of the parent of `id`, in the content space of
/// the containing block of `id`.
fn static_position_origin(ctx: &LayoutContext<'_>, id: BoxId) -> Position {
    let containing_block = ctx.containing_block(id);
    let Some(parent) = ctx.tree().parent(id) else {
        panic!("out-of-flow box {id:?} has no parent");
    };
    if parent == containing_block {
        return Position::ZERO;
    }
    map_coordinate_to_ancestor(ctx, parent, Position::ZERO, containing_block)
}

/// "the 'static position' for 'left' is the distance from the left edge of
/// the containing block to the left margin edge of a hypothetical box that
/// would have been the first box of the element if its 'position' property
/// had been 'static' and 'float' had been 'none'."
#[must_use]
pub fn static_horizontal_position(ctx: &LayoutContext<'_>, id: BoxId) -> Au {
    static_position_origin(ctx, id).left
}

/// [§ 10.6.4](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height)
///
/// "the static position for 'top' is the distance from the top edge of the
/// containing block to the top margin edge of a hypothetical box that would
/// have been the first box of the element if its specified 'position' value
/// had been 'static'..."
///
/// The hypothetical box follows the previous in-flow sibling's bottom
/// margin edge.
#[must_use]
pub fn static_vertical_position(ctx: &LayoutContext<'_>, id: BoxId) -> Au {
    let flow_offset = ctx
        .tree()
        .previous_in_flow_sibling(id)
        .map_or(Au(0), |sibling| normal_flow_margin_box_bottom(ctx, sibling));
    static_position_origin(ctx, id).top + flow_offset
}

fn shrink_to_fit_width(ctx: &mut LayoutContext<'_>, id: BoxId, available: Au) -> Au {
    ctx.formatting_context(id)
        .intrinsic_width_constraints(ctx)
        .shrink_to_fit(available)
}

/// [§ 10.3.7 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
///
/// "The constraint that determines the used values for these elements is:
///
/// 'left' + 'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
/// 'padding-right' + 'border-right-width' + 'margin-right' + 'right' =
/// width of containing block"
///
/// `used_width` replaces the computed `width` when present. Border and
/// padding are read from the record, so they must be resolved first.
/// Direction is always 'ltr'.
pub fn out_of_flow_horizontal_geometry(
    ctx: &mut LayoutContext<'_>,
    id: BoxId,
    used_width: Option<Au>,
) -> HorizontalGeometry {
    let style = ctx.layout_box(id).style();
    let containing_block_width = ctx
        .display_box(ctx.containing_block(id))
        .content_box_width();
    let border_and_padding = ctx.display_box(id).horizontal_border_and_padding();

    let left = computed_value_if_not_auto(style.inset.left, containing_block_width);
    let right = computed_value_if_not_auto(style.inset.right, containing_block_width);
    let width =
        used_width.or_else(|| computed_value_if_not_auto(style.width, containing_block_width));
    let computed_margin_left = computed_value_if_not_auto(style.margin.left, containing_block_width);
    let computed_margin_right =
        computed_value_if_not_auto(style.margin.right, containing_block_width);
    let non_computed_margin = HorizontalEdges {
        left: computed_margin_left.unwrap_or(Au(0)),
        right: computed_margin_right.unwrap_or(Au(0)),
    };

    // Everything but the unknowns, subtracted from the containing block.
    let remaining = |known: Au| containing_block_width - known;
    // Outside the over-constrained case, "set auto values for 'margin-left'
    // and 'margin-right' to 0".
    let margin_left = non_computed_margin.left;
    let margin_right = non_computed_margin.right;
    let horizontal_extras = margin_left + border_and_padding + margin_right;

    let (left, width, right, margin) = match (left, width, right) {
        // "If all three of 'left', 'width', and 'right' are 'auto': First set
        // any 'auto' values for 'margin-left' and 'margin-right' to 0. Then,
        // if the 'direction' property of the element establishing the
        // static-position containing block is 'ltr' set 'left' to the static
        // position and apply rule number three below."
        (None, None, None) => {
            let left = static_horizontal_position(ctx, id);
            let width = shrink_to_fit_width(ctx, id, remaining(left + horizontal_extras));
            let right = remaining(left + horizontal_extras + width);
            (left, width, right, non_computed_margin)
        }
        // "If none of the three is 'auto': If both 'margin-left' and
        // 'margin-right' are 'auto', solve the equation under the extra
        // constraint that the two margins get equal values, unless this would
        // make them negative, in which case when direction of the containing
        // block is 'ltr' ('rtl'), set 'margin-left' ('margin-right') to zero
        // and solve for 'margin-right' ('margin-left'). If one of
        // 'margin-left' or 'margin-right' is 'auto', solve the equation for
        // that value. If the values are over-constrained, ignore the value
        // for 'left' (in case the 'direction' property of the containing
        // block is 'rtl') or 'right' (in case 'direction' is 'ltr') and solve
        // for that value."
        (Some(left), Some(width), Some(right)) => {
            let fixed = left + border_and_padding + width + right;
            match (computed_margin_left, computed_margin_right) {
                (None, None) => {
                    let available = remaining(fixed);
                    let margin = if available >= Au(0) {
                        let start = available / 2;
                        HorizontalEdges {
                            left: start,
                            right: available - start,
                        }
                    } else {
                        HorizontalEdges {
                            left: Au(0),
                            right: available,
                        }
                    };
                    (left, width, right, margin)
                }
                (None, Some(margin_right)) => {
                    let margin = HorizontalEdges {
                        left: remaining(fixed + margin_right),
                        right: margin_right,
                    };
                    (left, width, right, margin)
                }
                (Some(margin_left), None) => {
                    let margin = HorizontalEdges {
                        left: margin_left,
                        right: remaining(fixed + margin_left),
                    };
                    (left, width, right, margin)
                }
                (Some(margin_left), Some(margin_right)) => {
                    let right = remaining(
                        left + margin_left + border_and_padding + width + margin_right,
                    );
                    (left, width, right, non_computed_margin)
                }
            }
        }
        // "1. 'left' and 'width' are 'auto' and 'right' is not 'auto', then the
        // width is shrink-to-fit. Then solve for 'left'"
        (None, None, Some(right)) => {
            let width = shrink_to_fit_width(ctx, id, remaining(horizontal_extras + right));
            let left = remaining(horizontal_extras + width + right);
            (left, width, right, non_computed_margin)
        }
        // "2. 'left' and 'right' are 'auto' and 'width' is not 'auto', then if
        // the 'direction' property of the element establishing the
        // static-position containing block is 'ltr' set 'left' to the static
        // position, otherwise set 'right' to the static position. Then solve
        // for 'left' (if 'direction is 'rtl') or 'right' (if 'direction' is
        // 'ltr')."
        (None, Some(width), None) => {
            let left = static_horizontal_position(ctx, id);
            let right = remaining(left + horizontal_extras + width);
            (left, width, right, non_computed_margin)
        }
        // "3. 'width' and 'right' are 'auto' and 'left' is not 'auto', then the
        // width is shrink-to-fit . Then solve for 'right'"
        (Some(left), None, None) => {
            let width = shrink_to_fit_width(ctx, id, remaining(left + horizontal_extras));
            let right = remaining(left + horizontal_extras + width);
            (left, width, right, non_computed_margin)
        }
        // "4. 'left' is 'auto', 'width' and 'right' are not 'auto', then solve
        // for 'left'"
        (None, Some(width), Some(right)) => {
            let left = remaining(horizontal_extras + width + right);
            (left, width, right, non_computed_margin)
        }
        // "5. 'width' is 'auto', 'left' and 'right' are not 'auto', then solve
        // for 'width'"
        (Some(left), None, Some(right)) => {
            let width = remaining(left + horizontal_extras + right);
            (left, width, right, non_computed_margin)
        }
        // "6. 'right' is 'auto', 'left' and 'width' are not 'auto', then solve
        // for 'right'"
        (Some(left), Some(width), None) => {
            let right = remaining(left + horizontal_extras + width);
            (left, width, right, non_computed_margin)
        }
    };

    HorizontalGeometry {
        left,
        right,
        width_and_margin: WidthAndMargin {
            width,
            margin,
            non_computed_margin,
        },
    }
}

/// [§ 10.6.4 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height)
///
/// "For absolutely positioned elements, the used values of the vertical
/// dimensions must satisfy this constraint:
///
/// 'top' + 'margin-top' + 'border-top-width' + 'padding-top' + 'height' +
/// 'padding-bottom' + 'border-bottom-width' + 'margin-bottom' + 'bottom' =
/// height of containing block"
///
/// `used_height` replaces the computed `height` when present. An `auto`
/// height is the content height of the box's laid-out interior.
#[must_use]
pub fn out_of_flow_vertical_geometry(
    ctx: &LayoutContext<'_>,
    id: BoxId,
    used_height: Option<Au>,
) -> VerticalGeometry {
    let style = ctx.layout_box(id).style();
    let containing_block = ctx.display_box(ctx.containing_block(id));
    let containing_block_width = containing_block.content_box_width();
    let containing_block_height = containing_block.content_box_height();
    let border_and_padding = ctx.display_box(id).vertical_border_and_padding();

    let top = computed_value_if_not_auto(style.inset.top, containing_block_height);
    let bottom = computed_value_if_not_auto(style.inset.bottom, containing_block_height);
    let height = used_height.or_else(|| computed_height(ctx, id));
    // Vertical margin percentages refer to the containing block's width.
    let computed_margin_top = computed_value_if_not_auto(style.margin.top, containing_block_width);
    let computed_margin_bottom =
        computed_value_if_not_auto(style.margin.bottom, containing_block_width);
    let authored_margin = VerticalEdges {
        top: computed_margin_top.unwrap_or(Au(0)),
        bottom: computed_margin_bottom.unwrap_or(Au(0)),
    };

    let remaining = |known: Au| containing_block_height - known;
    let vertical_extras = authored_margin.top + border_and_padding + authored_margin.bottom;

    let (top, height, bottom, margin) = match (top, height, bottom) {
        // "If all three of 'top', 'height', and 'bottom' are auto, set 'top'
        // to the static position and apply rule number three below."
        (None, None, None) => {
            let top = static_vertical_position(ctx, id);
            let height = content_height(ctx, id);
            let bottom = remaining(top + vertical_extras + height);
            (top, height, bottom, authored_margin)
        }
        // "If none of the three are 'auto': If both 'margin-top' and
        // 'margin-bottom' are 'auto', solve the equation under the extra
        // constraint that the two margins get equal values. If one of
        // 'margin-top' or 'margin-bottom' is 'auto', solve the equation for
        // that value. If the values are over-constrained, ignore the value
        // for 'bottom' and solve for that value."
        (Some(top), Some(height), Some(bottom)) => {
            let fixed = top + border_and_padding + height + bottom;
            match (computed_margin_top, computed_margin_bottom) {
                (None, None) => {
                    let available = remaining(fixed);
                    let start = available / 2;
                    let margin = VerticalEdges {
                        top: start,
                        bottom: available - start,
                    };
                    (top, height, bottom, margin)
                }
                (None, Some(margin_bottom)) => {
                    let margin = VerticalEdges {
                        top: remaining(fixed + margin_bottom),
                        bottom: margin_bottom,
                    };
                    (top, height, bottom, margin)
                }
                (Some(margin_top), None) => {
                    let margin = VerticalEdges {
                        top: margin_top,
                        bottom: remaining(fixed + margin_top),
                    };
                    (top, height, bottom, margin)
                }
                (Some(margin_top), Some(margin_bottom)) => {
                    let bottom = remaining(
                        top + margin_top + border_and_padding + height + margin_bottom,
                    );
                    (top, height, bottom, authored_margin)
                }
            }
        }
        // "Otherwise, pick the one of the following six rules that applies.
        //
        // 1. 'top' and 'height' are 'auto' and 'bottom' is not 'auto', then
        // the height is based on the content per 10.6.7, set 'auto' values
        // for 'margin-top' and 'margin-bottom' to 0, and solve for 'top'"
        (None, None, Some(bottom)) => {
            let height = content_height(ctx, id);
            let top = remaining(vertical_extras + height + bottom);
            (top, height, bottom, authored_margin)
        }
        // "2. 'top' and 'bottom' are 'auto' and 'height' is not 'auto', then
        // set 'top' to the static position, set 'auto' values for
        // 'margin-top' and 'margin-bottom' to 0, and solve for 'bottom'"
        (None, Some(height), None) => {
            let top = static_vertical_position(ctx, id);
            let bottom = remaining(top + vertical_extras + height);
            (top, height, bottom, authored_margin)
        }
        // "3. 'height' and 'bottom' are 'auto' and 'top' is not 'auto', then
        // the height is based on the content per 10.6.7, set 'auto' values
        // for 'margin-top' and 'margin-bottom' to 0, and solve for 'bottom'"
        (Some(top), None, None) => {
            let height = content_height(ctx, id);
            let bottom = remaining(top + vertical_extras + height);
            (top, height, bottom, authored_margin)
        }
        // "4. 'top' is 'auto', 'height' and 'bottom' are not 'auto', then set
        // 'auto' values for 'margin-top' and 'margin-bottom' to 0, and solve
        // for 'top'"
        (None, Some(height), Some(bottom)) => {
            let top = remaining(vertical_extras + height + bottom);
            (top, height, bottom, authored_margin)
        }
        // "5. 'height' is 'auto', 'top' and 'bottom' are not 'auto', then
        // 'auto' values for 'margin-top' and 'margin-bottom' are set to 0 and
        // solve for 'height'"
        (Some(top), None, Some(bottom)) => {
            let height = remaining(top + vertical_extras + bottom);
            (top, height, bottom, authored_margin)
        }
        // "6. 'bottom' is 'auto', 'top' and 'height' are not 'auto', then set
        // 'auto' values for 'margin-top' and 'margin-bottom' to 0 and solve
        // for 'bottom'"
        (Some(top), Some(height), None) => {
            let bottom = remaining(top + vertical_extras + height);
            (top, height, bottom, authored_margin)
        }
    };

    VerticalGeometry {
        top,
        bottom,
        height_and_margin: HeightAndMargin {
            height,
            margin,
            // "Margins of absolutely positioned boxes do not collapse."
            non_collapsed_margin: margin,
            collapsed_margin: None,
        },
    }
}
