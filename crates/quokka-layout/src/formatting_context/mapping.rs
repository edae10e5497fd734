//! Moving positions between containing-block coordinate spaces.
//!
//! Every [`DisplayBox`] stores its corner relative to the content box of its
//! own containing block. Reaching an ancestor's space is a walk up the
//! containing-block chain that adds, at each step, the box's corner and the
//! offset of its content box. Translation only: CSS 2.1 boxes are never
//! scaled or rotated.

use quokka_tree::BoxId;

use crate::display_box::{DisplayBox, Position};
use crate::layout_context::LayoutContext;

/// Map `coordinate`, given in the content space of `id`, into the content
/// space of `ancestor`. `ancestor == id` maps to itself.
///
/// Each step adds the border and padding of the box being left as well as
/// its corner, so the result differs from summing bare corners whenever a
/// box on the chain has border or padding.
///
/// # Panics
///
/// Panics if `ancestor` is not on the containing-block chain of `id`.
#[must_use]
pub fn map_coordinate_to_ancestor(
    ctx: &LayoutContext<'_>,
    id: BoxId,
    coordinate: Position,
    ancestor: BoxId,
) -> Position {
    let mut position = coordinate;
    let mut current = id;
    while current != ancestor {
        let display_box = ctx.display_box(current);
        position = position + display_box.top_left() + display_box.content_box_offset();
        current = match ctx.tree().containing_block(current) {
            Some(containing_block) => containing_block,
            None => panic!("{ancestor:?} is not on the containing-block chain of {id:?}"),
        };
    }
    position
}

/// The border-box corner of `id` in the content space of `ancestor`.
///
/// # Panics
///
/// Panics if `ancestor` is `id` itself or is not on its containing-block
/// chain.
#[must_use]
pub fn map_top_left_to_ancestor(ctx: &LayoutContext<'_>, id: BoxId, ancestor: BoxId) -> Position {
    assert_ne!(id, ancestor, "a box is not its own ancestor");
    let Some(containing_block) = ctx.tree().containing_block(id) else {
        panic!("{ancestor:?} is not on the containing-block chain of {id:?}");
    };
    map_coordinate_to_ancestor(ctx, containing_block, ctx.display_box(id).top_left(), ancestor)
}

/// A copy of the record of `id` with its corner in the content space of
/// `ancestor`. Sizes, margins, borders and padding are unchanged.
///
/// # Panics
///
/// Same conditions as [`map_top_left_to_ancestor`].
#[must_use]
pub fn map_box_to_ancestor(ctx: &LayoutContext<'_>, id: BoxId, ancestor: BoxId) -> DisplayBox {
    let mut display_box = ctx.display_box(id).clone();
    display_box.set_top_left(map_top_left_to_ancestor(ctx, id, ancestor));
    display_box
}
