//! Post-layout checks of the box-model equations.
//!
//! Only compiled with `debug_assertions` or the `validate-geometry` feature.
//! A violation means a layout algorithm regressed; it is never caused by
//! style input.

use quokka_style::Au;
use quokka_tree::BoxId;
use thiserror::Error;

use crate::layout_context::LayoutContext;

/// One unbalanced box-model equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryViolation {
    /// [§ 10.3](https://www.w3.org/TR/CSS2/visudet.html#Computing_widths_and_margins)
    #[error("{layout_box:?}: horizontal terms sum to {actual:?}, containing block width is {expected:?}")]
    Horizontal {
        /// The offending box.
        layout_box: BoxId,
        /// Sum of the used horizontal terms.
        actual: Au,
        /// Content width of the containing block.
        expected: Au,
    },
    /// [§ 10.6](https://www.w3.org/TR/CSS2/visudet.html#Computing_heights_and_margins)
    #[error("{layout_box:?}: vertical terms sum to {actual:?}, containing block height is {expected:?}")]
    Vertical {
        /// The offending box.
        layout_box: BoxId,
        /// Sum of the used vertical terms.
        actual: Au,
        /// Content height of the containing block.
        expected: Au,
    },
}

/// Check every box whose formatting context root is `root`. Boxes of nested
/// formatting contexts are left to their own root.
///
/// Horizontally, for non-replaced block-level boxes in flow and out-of-flow
/// boxes:
///
/// ```text
/// left + margin-left + border-left + padding-left + width
///     + padding-right + border-right + margin-right + right
///     = containing block width
/// ```
///
/// Vertically, for non-replaced out-of-flow boxes, the same with `top`,
/// `height` and `bottom`. In-flow boxes carry zero insets.
#[must_use]
pub fn geometry_violations(ctx: &LayoutContext<'_>, root: BoxId) -> Vec<GeometryViolation> {
    let tree = ctx.tree();
    let mut violations = Vec::new();

    for id in tree.descendants(root) {
        if tree.formatting_context_root(id) != Some(root) {
            continue;
        }
        let layout_box = ctx.layout_box(id);
        if layout_box.is_replaced() {
            continue;
        }
        let display_box = ctx.display_box(id);
        let containing_block = ctx.display_box(ctx.containing_block(id));

        let in_flow_block = layout_box.is_block_level_box() && layout_box.is_in_flow();
        if in_flow_block || layout_box.is_out_of_flow_positioned() {
            let inset = display_box.horizontal_inset();
            let actual = inset.left + display_box.margin_box_width() + inset.right;
            let expected = containing_block.content_box_width();
            if actual != expected {
                violations.push(GeometryViolation::Horizontal {
                    layout_box: id,
                    actual,
                    expected,
                });
            }
        }

        if layout_box.is_out_of_flow_positioned() {
            let inset = display_box.vertical_inset();
            let actual = inset.top + display_box.margin_box_height() + inset.bottom;
            let expected = containing_block.content_box_height();
            if actual != expected {
                violations.push(GeometryViolation::Vertical {
                    layout_box: id,
                    actual,
                    expected,
                });
            }
        }
    }

    violations
}
