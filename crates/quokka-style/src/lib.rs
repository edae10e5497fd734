//! Style values consumed by layout.
//!
//! Style resolution happens upstream. This crate only describes the shape of
//! its output: lengths already converted to [`Au`](app_units::Au), percentages
//! still waiting for a reference extent, and `auto` kept as a distinct value.
//!
//! # Relevant Specifications
//!
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)
//! - [CSS 2.1 § 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

pub mod computed;
pub mod display;
pub mod edges;
pub mod error;
pub mod values;

pub use app_units::Au;
pub use computed::ComputedStyle;
pub use display::{DisplayType, PositionType};
pub use edges::{Edges, HorizontalEdges, VerticalEdges};
pub use error::StyleParseError;
pub use values::{AutoOr, LengthPercentage, LengthPercentageOrAuto, parse_max_size};
