//! Per-side values for margins, borders, padding and insets.
//!
//! [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)

use std::ops::Add;

use app_units::Au;

/// Four values, one per side of a box.
///
/// Field order follows the CSS shorthand order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges<T> {
    /// Top edge value.
    pub top: T,
    /// Right edge value.
    pub right: T,
    /// Bottom edge value.
    pub bottom: T,
    /// Left edge value.
    pub left: T,
}

impl<T: Copy> Edges<T> {
    /// Build edges in shorthand order.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on every side.
    pub const fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Transform every side.
    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges::new(f(self.top), f(self.right), f(self.bottom), f(self.left))
    }
}

impl Edges<Au> {
    /// All sides zero.
    pub const ZERO: Self = Self::all(Au(0));

    /// The left and right sides.
    #[must_use]
    pub const fn horizontal(&self) -> HorizontalEdges {
        HorizontalEdges {
            left: self.left,
            right: self.right,
        }
    }

    /// The top and bottom sides.
    #[must_use]
    pub const fn vertical(&self) -> VerticalEdges {
        VerticalEdges {
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// Left and right values of a horizontal box-model term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalEdges {
    /// Left side.
    pub left: Au,
    /// Right side.
    pub right: Au,
}

impl HorizontalEdges {
    /// Both sides zero.
    pub const ZERO: Self = Self {
        left: Au(0),
        right: Au(0),
    };

    /// `left + right`.
    #[must_use]
    pub fn sum(&self) -> Au {
        self.left + self.right
    }
}

impl Default for HorizontalEdges {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for HorizontalEdges {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            left: self.left + other.left,
            right: self.right + other.right,
        }
    }
}

/// Top and bottom values of a vertical box-model term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalEdges {
    /// Top side.
    pub top: Au,
    /// Bottom side.
    pub bottom: Au,
}

impl VerticalEdges {
    /// Both sides zero.
    pub const ZERO: Self = Self {
        top: Au(0),
        bottom: Au(0),
    };

    /// `top + bottom`.
    #[must_use]
    pub fn sum(&self) -> Au {
        self.top + self.bottom
    }
}

impl Default for VerticalEdges {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for VerticalEdges {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            bottom: self.bottom + other.bottom,
        }
    }
}
