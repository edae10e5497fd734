//! Length, percentage and `auto` values.
//!
//! [§ 4 Textual data types](https://www.w3.org/TR/css-values-4/#textual-values)

use std::str::FromStr;

use app_units::Au;

use crate::error::StyleParseError;

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "A `<length-percentage>` value can be either a `<length>` or a
/// `<percentage>`."
///
/// Lengths arrive already converted to app units. Percentages stay symbolic
/// until layout supplies the reference extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthPercentage {
    /// An absolute length in app units.
    Length(Au),
    /// A percentage, stored as written (`50.0` means 50%).
    Percentage(f32),
}

impl LengthPercentage {
    /// A zero length.
    pub const ZERO: Self = Self::Length(Au(0));

    /// A length of `px` CSS pixels.
    #[must_use]
    pub fn px(px: i32) -> Self {
        Self::Length(Au::from_px(px))
    }

    /// A percentage of the reference extent.
    #[must_use]
    pub const fn percent(percentage: f32) -> Self {
        Self::Percentage(percentage)
    }

    /// [§ 4.3](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// "Percentage values are always relative to another quantity."
    #[must_use]
    pub fn resolve(self, reference: Au) -> Au {
        match self {
            Self::Length(length) => length,
            Self::Percentage(percentage) => reference.scale_by(percentage / 100.0),
        }
    }

    /// The length if this value does not depend on a reference extent.
    #[must_use]
    pub const fn fixed(self) -> Option<Au> {
        match self {
            Self::Length(length) => Some(length),
            Self::Percentage(_) => None,
        }
    }

    /// Whether resolving this value needs a reference extent.
    #[must_use]
    pub const fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for LengthPercentage {
    type Err = StyleParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(number) = trimmed.strip_suffix("px") {
            return parse_number(number, trimmed).map(|px| Self::Length(Au::from_f32_px(px)));
        }
        if let Some(number) = trimmed.strip_suffix('%') {
            return parse_number(number, trimmed).map(Self::Percentage);
        }
        // [§ 6 Distance units](https://www.w3.org/TR/css-values-4/#lengths)
        // "for zero lengths the unit identifier is optional"
        if parse_number(trimmed, trimmed).is_ok_and(|number| number == 0.0) {
            return Ok(Self::ZERO);
        }
        if trimmed.eq_ignore_ascii_case("auto") {
            return Err(StyleParseError::UnexpectedAuto);
        }
        Err(StyleParseError::UnsupportedUnit(trimmed.to_string()))
    }
}

fn parse_number(number: &str, input: &str) -> Result<f32, StyleParseError> {
    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| StyleParseError::InvalidNumber(input.to_string()))
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr<T> {
    /// The value is 'auto' and must be resolved during layout.
    #[default]
    Auto,
    /// A specified value.
    Value(T),
}

impl<T: Copy> AutoOr<T> {
    /// Check if the value is 'auto'.
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The specified value, if not 'auto'.
    pub const fn value(&self) -> Option<T> {
        match self {
            Self::Auto => None,
            Self::Value(value) => Some(*value),
        }
    }

    /// Map the specified value, keeping 'auto' as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AutoOr<U> {
        match self {
            Self::Auto => AutoOr::Auto,
            Self::Value(value) => AutoOr::Value(f(value)),
        }
    }

    /// The specified value, or `default` if 'auto'.
    pub fn auto_is(self, default: T) -> T {
        self.value().unwrap_or(default)
    }
}

/// The common `<length-percentage> | auto` property value.
pub type LengthPercentageOrAuto = AutoOr<LengthPercentage>;

impl AutoOr<LengthPercentage> {
    /// A zero length (not 'auto').
    pub const ZERO: Self = Self::Value(LengthPercentage::ZERO);

    /// A length of `px` CSS pixels.
    #[must_use]
    pub fn px(px: i32) -> Self {
        Self::Value(LengthPercentage::px(px))
    }

    /// A percentage of the reference extent.
    #[must_use]
    pub const fn percent(percentage: f32) -> Self {
        Self::Value(LengthPercentage::Percentage(percentage))
    }

    /// Resolve against `reference`, keeping 'auto'.
    #[must_use]
    pub fn resolve(self, reference: Au) -> AutoOr<Au> {
        self.map(|value| value.resolve(reference))
    }
}

impl<T> FromStr for AutoOr<T>
where
    T: FromStr<Err = StyleParseError>,
{
    type Err = StyleParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        input.parse().map(Self::Value)
    }
}

/// Parse a `max-width` / `max-height` value, where `none` means no maximum.
///
/// # Errors
///
/// Returns a [`StyleParseError`] when the value is neither `none` nor a
/// `<length-percentage>`.
pub fn parse_max_size(input: &str) -> Result<Option<LengthPercentage>, StyleParseError> {
    if input.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    input.parse().map(Some)
}
