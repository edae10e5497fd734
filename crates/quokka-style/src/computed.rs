//! Computed style as seen by layout.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)

use app_units::Au;

use crate::display::{DisplayType, PositionType};
use crate::edges::Edges;
use crate::values::{LengthPercentage, LengthPercentageOrAuto};

/// The box-model properties of one box, after the cascade.
///
/// "The computed value is the result of resolving the specified value...
/// as far as possible without laying out the document."
///
/// Percentages and `auto` are left for layout. Lengths are in app units.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// The `display` property.
    pub display: DisplayType,
    /// The `position` property.
    pub position: PositionType,
    /// [§ 9.3.2](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    /// The `top`, `right`, `bottom` and `left` properties.
    pub inset: Edges<LengthPercentageOrAuto>,
    /// [§ 10.2](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    pub width: LengthPercentageOrAuto,
    /// [§ 10.5](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    pub height: LengthPercentageOrAuto,
    /// [§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    /// `auto` means no minimum applies.
    pub min_width: LengthPercentageOrAuto,
    /// `None` is the keyword `none`.
    pub max_width: Option<LengthPercentage>,
    /// [§ 10.7](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    /// `auto` means no minimum applies.
    pub min_height: LengthPercentageOrAuto,
    /// `None` is the keyword `none`.
    pub max_height: Option<LengthPercentage>,
    /// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    pub margin: Edges<LengthPercentageOrAuto>,
    /// [§ 8.4](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    pub padding: Edges<LengthPercentage>,
    /// [§ 8.5.1](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
    /// Border widths have no percentage form.
    pub border_width: Edges<Au>,
}

impl Default for ComputedStyle {
    /// Initial values for every property.
    fn default() -> Self {
        Self {
            display: DisplayType::Block,
            position: PositionType::Static,
            inset: Edges::all(LengthPercentageOrAuto::Auto),
            width: LengthPercentageOrAuto::Auto,
            height: LengthPercentageOrAuto::Auto,
            min_width: LengthPercentageOrAuto::Auto,
            max_width: None,
            min_height: LengthPercentageOrAuto::Auto,
            max_height: None,
            margin: Edges::all(LengthPercentageOrAuto::ZERO),
            padding: Edges::all(LengthPercentage::ZERO),
            border_width: Edges::ZERO,
        }
    }
}

impl ComputedStyle {
    /// Style for a box with the given positioning scheme and otherwise
    /// initial values.
    #[must_use]
    pub fn positioned(position: PositionType) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}
