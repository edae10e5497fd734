//! Block formatting context.
//!
//! [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
//!
//! "In a block formatting context, boxes are laid out one after the other,
//! vertically, beginning at the top of a containing block. The vertical
//! distance between two sibling boxes is determined by the 'margin'
//! properties."
//!
//! Vertical margins are not collapsed.

pub mod geometry;

use quokka_common::warning::warn_once;
use quokka_style::{Au, HorizontalEdges, VerticalEdges};
use quokka_tree::{BoxId, LayoutBox};

use crate::display_box::Position;
use crate::formatting_context::FormattingContext;
use crate::formatting_context::constraints::resolve_with_size_constraints;
use crate::formatting_context::geometry::{
    HeightAndMargin, IntrinsicWidthConstraints, WidthAndMargin, computed_height,
    computed_max_height, computed_max_value, computed_min_height, computed_value_if_not_auto,
};
use crate::layout_context::{FormattingState, LayoutContext};

use self::geometry::{
    in_flow_height_and_margin, in_flow_vertical_margin, in_flow_width_and_margin,
    intrinsic_width_of_in_flow_children,
};

/// The block formatting context rooted at one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFormattingContext {
    root: BoxId,
}

impl BlockFormattingContext {
    /// A context for the formatting root `root`.
    #[must_use]
    pub const fn new(root: BoxId) -> Self {
        Self { root }
    }

    /// Stack the in-flow children of `container` from its content top.
    fn layout_in_flow_children(&self, ctx: &mut LayoutContext<'_>, container: BoxId) {
        let mut current_top = Au(0);
        for child in ctx.tree().in_flow_children(container) {
            current_top = ctx.with_nesting(|ctx| self.layout_block_level_box(ctx, child, current_top));
        }
    }

    /// Lay out one block-level box whose top margin edge sits at
    /// `margin_box_top`. Returns its bottom margin edge.
    ///
    /// STEP 1: Border and padding.
    /// STEP 2: Width and horizontal margins, through the min/max loop.
    /// STEP 3: Position.
    /// STEP 4: Height, when it does not depend on content.
    /// STEP 5: The interior: a nested formatting context or the box's own
    ///   children.
    /// STEP 6: Relative offsets of the children.
    /// STEP 7: Height, when it depends on content.
    fn layout_block_level_box(
        &self,
        ctx: &mut LayoutContext<'_>,
        id: BoxId,
        margin_box_top: Au,
    ) -> Au {
        let layout_box = ctx.layout_box(id);

        // STEP 1
        self.compute_border_and_padding(ctx, id);

        // STEP 2
        compute_in_flow_width_and_margin(ctx, id);

        // STEP 3
        // [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
        //
        // "In a block formatting context, each box's left outer edge touches
        // the left edge of the containing block."
        let vertical_margin = in_flow_vertical_margin(ctx, id);
        let display_box = ctx.display_box_for_layout_box(id);
        display_box.set_top_left(Position::new(
            display_box.margin_left(),
            margin_box_top + vertical_margin.top,
        ));
        display_box.set_vertical_margin(vertical_margin);

        // STEP 4
        let height_is_definite = computed_height(ctx, id).is_some();
        if height_is_definite {
            compute_in_flow_height_and_margin(ctx, id);
        }

        // STEP 5
        if layout_box.establishes_formatting_context() {
            let _ = ctx.create_formatting_state_for_formatting_root_if_needed(id);
            ctx.formatting_context(id).layout(ctx);
        } else {
            self.layout_in_flow_children(ctx, id);
        }

        // STEP 6
        self.place_in_flow_positioned_children(ctx, id);

        // STEP 7
        if !height_is_definite {
            compute_in_flow_height_and_margin(ctx, id);
        }

        log::trace!("block {id:?}: {:?}", ctx.display_box(id));
        ctx.display_box(id).margin_box_bottom()
    }

    /// In-flow positioned boxes of this context. They are containing blocks
    /// for out-of-flow boxes, and nobody else drives those.
    fn in_flow_positioned_boxes(&self, ctx: &LayoutContext<'_>) -> Vec<BoxId> {
        let tree = ctx.tree();
        tree.descendants(self.root)
            .filter(|id| {
                tree.get(*id).is_some_and(LayoutBox::is_in_flow_positioned)
                    && tree.formatting_context_root(*id) == Some(self.root)
            })
            .collect()
    }
}

/// [§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths) over
/// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth).
fn compute_in_flow_width_and_margin(ctx: &mut LayoutContext<'_>, id: BoxId) {
    let style = ctx.layout_box(id).style();
    let containing_block_width = ctx
        .display_box(ctx.containing_block(id))
        .content_box_width();
    let max_width = computed_max_value(style.max_width, containing_block_width);
    let min_width = computed_value_if_not_auto(style.min_width, containing_block_width);

    let width_and_margin = resolve_with_size_constraints(
        |used_width| in_flow_width_and_margin(ctx, id, used_width),
        |candidate: &WidthAndMargin| candidate.width,
        max_width,
        min_width,
    );

    let display_box = ctx.display_box_for_layout_box(id);
    display_box.set_content_box_width(width_and_margin.width);
    display_box.set_horizontal_margin(width_and_margin.margin);
    display_box.set_horizontal_non_computed_margin(width_and_margin.non_computed_margin);
    display_box.set_horizontal_inset(HorizontalEdges::ZERO);
}

/// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights) over
/// [§ 10.6.3](https://www.w3.org/TR/CSS2/visudet.html#normal-block).
fn compute_in_flow_height_and_margin(ctx: &mut LayoutContext<'_>, id: BoxId) {
    let max_height = computed_max_height(ctx, id);
    let min_height = computed_min_height(ctx, id);

    let height_and_margin = resolve_with_size_constraints(
        |used_height| in_flow_height_and_margin(ctx, id, used_height),
        |candidate: &HeightAndMargin| candidate.height,
        max_height,
        min_height,
    );

    let display_box = ctx.display_box_for_layout_box(id);
    display_box.set_content_box_height(height_and_margin.height);
    display_box.set_vertical_margin(height_and_margin.margin);
    display_box.set_vertical_non_collapsed_margin(height_and_margin.non_collapsed_margin);
    display_box.set_vertical_inset(VerticalEdges::ZERO);
}

impl FormattingContext for BlockFormattingContext {
    fn root_handle(&self) -> BoxId {
        self.root
    }

    fn layout(&self, ctx: &mut LayoutContext<'_>) {
        let root = self.root(ctx);
        log::debug!(
            "-> block formatting context {:?} ({} wide)",
            self.root,
            ctx.display_box(self.root).content_box_width().to_f32_px()
        );
        if root.is_replaced() {
            let _ = warn_once("Layout", "replaced content is not laid out");
        }

        self.layout_in_flow_children(ctx, self.root);
        self.place_in_flow_positioned_children(ctx, self.root);

        for positioned in self.in_flow_positioned_boxes(ctx) {
            ctx.with_nesting(|ctx| self.layout_out_of_flow_descendants(ctx, positioned));
        }
        log::debug!("<- block formatting context {:?}", self.root);
    }

    fn intrinsic_width_constraints(&self, ctx: &mut LayoutContext<'_>) -> IntrinsicWidthConstraints {
        if let Some(constraints) = ctx
            .formatting_state(self.root)
            .and_then(FormattingState::intrinsic_width_constraints)
        {
            return constraints;
        }

        let constraints = if self.root(ctx).is_replaced() {
            let _ = warn_once("Layout", "replaced box without a width has no intrinsic size");
            IntrinsicWidthConstraints::ZERO
        } else {
            intrinsic_width_of_in_flow_children(ctx, self.root)
        };
        ctx.create_formatting_state_for_formatting_root_if_needed(self.root)
            .set_intrinsic_width_constraints(constraints);
        constraints
    }
}
