//! The `display` and `position` properties.

use serde::Deserialize;
use strum_macros::{Display, EnumString};

/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Only block-level outer display types are modeled. Inline layout is
/// handled by a different engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DisplayType {
    /// "The element generates a block box."
    #[default]
    Block,
    /// "The element generates a block container box, and lays out its
    /// contents using flow layout. It always establishes a new block
    /// formatting context for its contents."
    FlowRoot,
}

impl DisplayType {
    /// Whether the box establishes a block formatting context on its own.
    #[must_use]
    pub const fn establishes_formatting_context(self) -> bool {
        matches!(self, Self::FlowRoot)
    }
}

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Module Level 3 § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    ///
    /// Scroll containers are not modeled, so a sticky box is offset the way
    /// a relatively positioned box is.
    Sticky,
}

impl PositionType {
    /// [§ 9.3.2](https://www.w3.org/TR/CSS2/visuren.html#position-props)
    ///
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Positioned, but still laid out in normal flow before being offset.
    #[must_use]
    pub const fn is_in_flow_positioned(self) -> bool {
        matches!(self, Self::Relative | Self::Sticky)
    }

    /// [§ 9.6 Absolute positioning](https://www.w3.org/TR/CSS2/visuren.html#absolute-positioning)
    ///
    /// "In the absolute positioning model, a box is explicitly offset with
    /// respect to its containing block. It is removed from the normal flow
    /// entirely."
    #[must_use]
    pub const fn is_out_of_flow_positioned(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_predicates() {
        assert!(!PositionType::Static.is_positioned());
        assert!(PositionType::Relative.is_in_flow_positioned());
        assert!(PositionType::Sticky.is_in_flow_positioned());
        assert!(PositionType::Fixed.is_out_of_flow_positioned());
        assert!(!PositionType::Relative.is_out_of_flow_positioned());
    }

    #[test]
    fn test_keyword_round_trip_through_strum() {
        assert_eq!("absolute".parse(), Ok(PositionType::Absolute));
        assert_eq!("flow-root".parse(), Ok(DisplayType::FlowRoot));
        assert_eq!(PositionType::Fixed.to_string(), "fixed");
        assert_eq!(
            "inline".parse::<DisplayType>(),
            Err(strum::ParseError::VariantNotFound)
        );
    }
}
