//! Formatting contexts.
//!
//! [§ 9.4 Normal flow](https://www.w3.org/TR/CSS2/visuren.html#normal-flow)
//!
//! "Boxes in the normal flow belong to a formatting context, which in CSS
//! 2.2 may be table, block or inline."
//!
//! Everything that does not depend on the kind of formatting context lives
//! here as default methods: border and padding, the out-of-flow geometry
//! resolvers, relative offsets and the out-of-flow recursion driver.

pub mod constraints;
pub mod geometry;
pub mod mapping;
#[cfg(any(debug_assertions, feature = "validate-geometry"))]
pub mod validation;

use quokka_style::{HorizontalEdges, VerticalEdges};
use quokka_tree::{BoxId, LayoutBox};

use crate::error::LayoutError;
use crate::layout_context::LayoutContext;

use self::constraints::resolve_with_size_constraints;
use self::geometry::{HorizontalGeometry, IntrinsicWidthConstraints, VerticalGeometry};

/// A layout scope rooted at one box.
///
/// The context only holds a handle to its root. Every access goes through
/// the tree and fails fast if the root was removed.
pub trait FormattingContext {
    /// The handle of the box that establishes this context.
    fn root_handle(&self) -> BoxId;

    /// Lay out the in-flow interior of the root. The root's own content
    /// width is resolved before this runs.
    fn layout(&self, ctx: &mut LayoutContext<'_>);

    /// [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// "Calculation of the shrink-to-fit width is similar to calculating the
    /// width of a table cell using the automatic table layout algorithm.
    /// Roughly: calculate the preferred width by formatting the content
    /// without breaking lines other than where explicit line breaks occur,
    /// and also calculate the preferred minimum width."
    fn intrinsic_width_constraints(&self, ctx: &mut LayoutContext<'_>) -> IntrinsicWidthConstraints;

    /// The root box, if it is still in the tree.
    ///
    /// # Errors
    ///
    /// [`LayoutError::StaleFormattingRoot`] if the root was removed.
    fn try_root<'tree>(&self, ctx: &LayoutContext<'tree>) -> Result<&'tree LayoutBox, LayoutError> {
        let id = self.root_handle();
        ctx.tree()
            .get(id)
            .ok_or(LayoutError::StaleFormattingRoot(id))
    }

    /// The root box.
    ///
    /// # Panics
    ///
    /// Panics if the root was removed from the tree.
    fn root<'tree>(&self, ctx: &LayoutContext<'tree>) -> &'tree LayoutBox {
        match self.try_root(ctx) {
            Ok(root) => root,
            Err(error) => panic!("{error}"),
        }
    }

    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    ///
    /// "The percentage is calculated with respect to the width of the
    /// generated box's containing block, even for 'padding-top' and
    /// 'padding-bottom'."
    ///
    /// Independent of the width and height resolvers, which read the stored
    /// values.
    fn compute_border_and_padding(&self, ctx: &mut LayoutContext<'_>, id: BoxId) {
        let containing_block = ctx.containing_block(id);
        let containing_block_width = ctx.display_box(containing_block).content_box_width();
        let border = geometry::computed_border(ctx.layout_box(id));
        let padding = geometry::computed_padding(ctx.layout_box(id), containing_block_width);

        let display_box = ctx.display_box_for_layout_box(id);
        display_box.set_border(border);
        display_box.set_padding(padding);
    }

    /// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// "1. The tentative used width is calculated (without 'min-width' and
    /// 'max-width') following the rules under 'Calculating widths and
    /// margins' above.
    /// 2. If the tentative used width is greater than 'max-width', the rules
    /// above are applied again, but this time using the computed value of
    /// 'max-width' as the computed value for 'width'.
    /// 3. If the resulting width is smaller than 'min-width', the rules above
    /// are applied again, but this time using the value of 'min-width' as
    /// the computed value for 'width'."
    fn compute_out_of_flow_horizontal_geometry(&self, ctx: &mut LayoutContext<'_>, id: BoxId) {
        let style = ctx.layout_box(id).style();
        let containing_block_width = ctx
            .display_box(ctx.containing_block(id))
            .content_box_width();
        let max_width = geometry::computed_max_value(style.max_width, containing_block_width);
        let min_width = geometry::computed_value_if_not_auto(style.min_width, containing_block_width);

        let horizontal_geometry = resolve_with_size_constraints(
            |used_width| geometry::out_of_flow_horizontal_geometry(ctx, id, used_width),
            |candidate: &HorizontalGeometry| candidate.width_and_margin.width,
            max_width,
            min_width,
        );
        log::trace!("out-of-flow {id:?} horizontal: {horizontal_geometry:?}");

        let width_and_margin = horizontal_geometry.width_and_margin;
        let display_box = ctx.display_box_for_layout_box(id);
        display_box.set_left(horizontal_geometry.left + width_and_margin.margin.left);
        display_box.set_content_box_width(width_and_margin.width);
        display_box.set_horizontal_margin(width_and_margin.margin);
        display_box.set_horizontal_non_computed_margin(width_and_margin.non_computed_margin);
        display_box.set_horizontal_inset(HorizontalEdges {
            left: horizontal_geometry.left,
            right: horizontal_geometry.right,
        });
    }

    /// [§ 10.7 Minimum and maximum heights](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    ///
    /// The same three steps as the horizontal axis, with 'height',
    /// 'max-height' and 'min-height'.
    ///
    /// # Panics
    ///
    /// Panics if the solver reports a collapsed margin: "Margins of
    /// absolutely positioned boxes do not collapse."
    fn compute_out_of_flow_vertical_geometry(&self, ctx: &mut LayoutContext<'_>, id: BoxId) {
        let max_height = geometry::computed_max_height(ctx, id);
        let min_height = geometry::computed_min_height(ctx, id);

        let vertical_geometry = resolve_with_size_constraints(
            |used_height| geometry::out_of_flow_vertical_geometry(ctx, id, used_height),
            |candidate: &VerticalGeometry| candidate.height_and_margin.height,
            max_height,
            min_height,
        );
        log::trace!("out-of-flow {id:?} vertical: {vertical_geometry:?}");

        let height_and_margin = vertical_geometry.height_and_margin;
        assert!(
            height_and_margin.collapsed_margin.is_none(),
            "out-of-flow box {id:?} resolved a collapsed margin"
        );
        let display_box = ctx.display_box_for_layout_box(id);
        display_box.set_top(vertical_geometry.top + height_and_margin.margin.top);
        display_box.set_content_box_height(height_and_margin.height);
        display_box.set_vertical_margin(height_and_margin.margin);
        display_box.set_vertical_non_collapsed_margin(height_and_margin.non_collapsed_margin);
        display_box.set_vertical_inset(VerticalEdges {
            top: vertical_geometry.top,
            bottom: vertical_geometry.bottom,
        });
    }

    /// [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
    ///
    /// "Once a box has been laid out according to the normal flow or
    /// floated, it may be shifted relative to this position."
    ///
    /// A container that roots a nested formatting context already offset
    /// its children during its own pass.
    fn place_in_flow_positioned_children(&self, ctx: &mut LayoutContext<'_>, container: BoxId) {
        let container_box = ctx.layout_box(container);
        if container != self.root_handle() && container_box.establishes_formatting_context() {
            return;
        }

        for &child in container_box.children() {
            if !ctx.layout_box(child).is_in_flow_positioned() {
                continue;
            }
            let offset = geometry::in_flow_positioned_position(ctx, child);
            ctx.display_box_for_layout_box(child).move_by(offset);
        }
    }

    /// [§ 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// Lay out every out-of-flow box whose containing block is `id`, then
    /// the ones attached to them, and so on down.
    ///
    /// The order of the per-box steps matters: nested layout needs the
    /// resolved width, and a content-dependent height needs the nested
    /// layout. Any other height is resolved before the nested layout.
    ///
    /// # Panics
    ///
    /// Panics if an out-of-flow box does not root its own formatting
    /// context, or the chain nests deeper than
    /// [`MAX_NESTING_DEPTH`](crate::layout_context::MAX_NESTING_DEPTH).
    fn layout_out_of_flow_descendants(&self, ctx: &mut LayoutContext<'_>, id: BoxId) {
        let layout_box = ctx.layout_box(id);
        if !layout_box.is_positioned() && !layout_box.is_initial_containing_block() {
            return;
        }
        if !layout_box.has_child() {
            return;
        }

        log::debug!("-> out-of-flow descendants of {id:?}");
        for &descendant in ctx.tree().out_of_flow_descendants(id) {
            assert!(
                ctx.layout_box(descendant).establishes_formatting_context(),
                "out-of-flow box {descendant:?} must establish a formatting context"
            );

            self.compute_border_and_padding(ctx, descendant);
            self.compute_out_of_flow_horizontal_geometry(ctx, descendant);

            // A content-independent height is stored first so percentage
            // heights inside the box resolve against it.
            let height_is_definite = geometry::out_of_flow_height_is_definite(ctx, descendant);
            if height_is_definite {
                self.compute_out_of_flow_vertical_geometry(ctx, descendant);
            }

            let formatting_context = ctx.formatting_context(descendant);
            ctx.with_nesting(|ctx| {
                let _ = ctx.create_formatting_state_for_formatting_root_if_needed(descendant);
                formatting_context.layout(ctx);
            });

            if !height_is_definite {
                self.compute_out_of_flow_vertical_geometry(ctx, descendant);
            }

            ctx.with_nesting(|ctx| {
                formatting_context.layout_out_of_flow_descendants(ctx, descendant);
            });
        }
        log::debug!("<- out-of-flow descendants of {id:?}");
    }

    /// Assert the box-model equations hold for every box this context
    /// formatted.
    ///
    /// # Panics
    ///
    /// Panics listing every violation found.
    #[cfg(any(debug_assertions, feature = "validate-geometry"))]
    fn validate_geometry_constraints_after_layout(&self, ctx: &LayoutContext<'_>) {
        let violations = validation::geometry_violations(ctx, self.root_handle());
        assert!(
            violations.is_empty(),
            "geometry constraints violated under {:?}: {violations:?}",
            self.root_handle()
        );
    }
}
