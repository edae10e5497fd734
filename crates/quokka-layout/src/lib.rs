//! Box geometry for the Quokka layout engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Block formatting** ([§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting))
//!   - Width and margins of block-level boxes in normal flow
//!   - Content-based heights, without margin collapsing
//!   - Relative offsets ([§ 9.4.3](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning))
//!
//! - **Out-of-flow geometry** ([§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width),
//!   [§ 10.6.4](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-height))
//!   - Static positions
//!   - Shrink-to-fit widths
//!   - The min/max override loop ([§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths),
//!     [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights))
//!   - Recursive layout of positioned descendants
//!
//! - **Coordinate mapping** between containing-block spaces
//!
//! - **Geometry validation** after each pass, in debug builds or with the
//!   `validate-geometry` feature
//!
//! # Not Yet Implemented
//!
//! - Inline, table, flex and grid formatting
//! - Floats and margin collapsing
//! - Replaced content sizing
//! - Right-to-left containing blocks

/// Block formatting contexts.
pub mod block;
/// Per-box geometry records.
pub mod display_box;
/// Layout errors.
pub mod error;
/// The formatting context abstraction and shared geometry.
pub mod formatting_context;
/// Per-pass state.
pub mod layout_context;

pub use block::BlockFormattingContext;
pub use display_box::{DisplayBox, Position, Size};
pub use error::LayoutError;
pub use formatting_context::FormattingContext;
pub use formatting_context::geometry::IntrinsicWidthConstraints;
pub use formatting_context::mapping::{
    map_box_to_ancestor, map_coordinate_to_ancestor, map_top_left_to_ancestor,
};
#[cfg(any(debug_assertions, feature = "validate-geometry"))]
pub use formatting_context::validation::{GeometryViolation, geometry_violations};
pub use layout_context::{FormattingState, LayoutContext, MAX_NESTING_DEPTH};
