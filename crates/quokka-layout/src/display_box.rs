//! Per-box geometry records.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use std::ops::{Add, Neg, Sub};

use quokka_style::{Au, Edges, HorizontalEdges, VerticalEdges};

/// A point, or a translation, in app units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate.
    pub left: Au,
    /// Vertical coordinate.
    pub top: Au,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self {
        left: Au(0),
        top: Au(0),
    };

    /// Build a position from its two coordinates.
    #[must_use]
    pub const fn new(left: Au, top: Au) -> Self {
        Self { left, top }
    }

    /// This position translated by `offset`.
    #[must_use]
    pub fn moved_by(self, offset: Self) -> Self {
        self + offset
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.left + other.left, self.top + other.top)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.left - other.left, self.top - other.top)
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.left, -self.top)
    }
}

/// A width and a height in app units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Horizontal extent.
    pub width: Au,
    /// Vertical extent.
    pub height: Au,
}

impl Size {
    /// Build a size from whole CSS pixels.
    #[must_use]
    pub fn from_px(width: i32, height: i32) -> Self {
        Self {
            width: Au::from_px(width),
            height: Au::from_px(height),
        }
    }
}

/// The resolved geometry of one box.
///
/// `top_left` is the border-box corner, relative to the content-box origin
/// of the box's containing block. It is never a viewport coordinate. Use
/// [`map_top_left_to_ancestor`](crate::formatting_context::mapping::map_top_left_to_ancestor)
/// to move it into an ancestor's space.
///
/// ```text
///  top_left
///     +--------------------- border box ----------------------+
///     | border | padding |   content box   | padding | border |
///     +-------------------------------------------------------+
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBox {
    top_left: Position,
    content_box_width: Au,
    content_box_height: Au,
    border: Edges<Au>,
    padding: Option<Edges<Au>>,
    horizontal_margin: HorizontalEdges,
    vertical_margin: VerticalEdges,
    /// Margins as authored, with `auto` as zero.
    horizontal_non_computed_margin: HorizontalEdges,
    vertical_non_collapsed_margin: VerticalEdges,
    /// Used `left` / `right`. Zero for boxes in normal flow.
    horizontal_inset: HorizontalEdges,
    /// Used `top` / `bottom`. Zero for boxes in normal flow.
    vertical_inset: VerticalEdges,
}

impl DisplayBox {
    /// A record with every value zero and the padding still unresolved.
    pub const EMPTY: Self = Self {
        top_left: Position::ZERO,
        content_box_width: Au(0),
        content_box_height: Au(0),
        border: Edges::ZERO,
        padding: None,
        horizontal_margin: HorizontalEdges::ZERO,
        vertical_margin: VerticalEdges::ZERO,
        horizontal_non_computed_margin: HorizontalEdges::ZERO,
        vertical_non_collapsed_margin: VerticalEdges::ZERO,
        horizontal_inset: HorizontalEdges::ZERO,
        vertical_inset: VerticalEdges::ZERO,
    };

    /// The border-box top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Position {
        self.top_left
    }

    /// Top border edge.
    #[must_use]
    pub const fn top(&self) -> Au {
        self.top_left.top
    }

    /// Left border edge.
    #[must_use]
    pub const fn left(&self) -> Au {
        self.top_left.left
    }

    /// Bottom border edge.
    #[must_use]
    pub fn bottom(&self) -> Au {
        self.top() + self.border_box_height()
    }

    /// Right border edge.
    #[must_use]
    pub fn right(&self) -> Au {
        self.left() + self.border_box_width()
    }

    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub fn border_box_width(&self) -> Au {
        self.border.left
            + self.padding_left_or_zero()
            + self.content_box_width
            + self.padding_right_or_zero()
            + self.border.right
    }

    /// Border-box height.
    #[must_use]
    pub fn border_box_height(&self) -> Au {
        self.border.top
            + self.padding_top_or_zero()
            + self.content_box_height
            + self.padding_bottom_or_zero()
            + self.border.bottom
    }

    /// `border-left + padding-left + padding-right + border-right`.
    #[must_use]
    pub fn horizontal_border_and_padding(&self) -> Au {
        self.border_box_width() - self.content_box_width
    }

    /// `border-top + padding-top + padding-bottom + border-bottom`.
    #[must_use]
    pub fn vertical_border_and_padding(&self) -> Au {
        self.border_box_height() - self.content_box_height
    }

    /// Content-box width.
    #[must_use]
    pub const fn content_box_width(&self) -> Au {
        self.content_box_width
    }

    /// Content-box height.
    #[must_use]
    pub const fn content_box_height(&self) -> Au {
        self.content_box_height
    }

    /// Distance from the border-box left edge to the content-box left edge.
    #[must_use]
    pub fn content_box_left(&self) -> Au {
        self.border.left + self.padding_left_or_zero()
    }

    /// Distance from the border-box top edge to the content-box top edge.
    #[must_use]
    pub fn content_box_top(&self) -> Au {
        self.border.top + self.padding_top_or_zero()
    }

    /// The content-box origin relative to the border-box top-left.
    #[must_use]
    pub fn content_box_offset(&self) -> Position {
        Position::new(self.content_box_left(), self.content_box_top())
    }

    /// Border widths.
    #[must_use]
    pub const fn border(&self) -> Edges<Au> {
        self.border
    }

    /// Padding, or `None` while unresolved.
    #[must_use]
    pub const fn padding(&self) -> Option<Edges<Au>> {
        self.padding
    }

    /// Top padding, if resolved.
    #[must_use]
    pub fn padding_top(&self) -> Option<Au> {
        self.padding.map(|padding| padding.top)
    }

    /// Right padding, if resolved.
    #[must_use]
    pub fn padding_right(&self) -> Option<Au> {
        self.padding.map(|padding| padding.right)
    }

    /// Bottom padding, if resolved.
    #[must_use]
    pub fn padding_bottom(&self) -> Option<Au> {
        self.padding.map(|padding| padding.bottom)
    }

    /// Left padding, if resolved.
    #[must_use]
    pub fn padding_left(&self) -> Option<Au> {
        self.padding.map(|padding| padding.left)
    }

    fn padding_top_or_zero(&self) -> Au {
        self.padding_top().unwrap_or(Au(0))
    }

    fn padding_right_or_zero(&self) -> Au {
        self.padding_right().unwrap_or(Au(0))
    }

    fn padding_bottom_or_zero(&self) -> Au {
        self.padding_bottom().unwrap_or(Au(0))
    }

    fn padding_left_or_zero(&self) -> Au {
        self.padding_left().unwrap_or(Au(0))
    }

    /// Used left and right margins.
    #[must_use]
    pub const fn horizontal_margin(&self) -> HorizontalEdges {
        self.horizontal_margin
    }

    /// Used top and bottom margins.
    #[must_use]
    pub const fn vertical_margin(&self) -> VerticalEdges {
        self.vertical_margin
    }

    /// Horizontal margins before `auto` resolution and over-constraint.
    #[must_use]
    pub const fn horizontal_non_computed_margin(&self) -> HorizontalEdges {
        self.horizontal_non_computed_margin
    }

    /// Vertical margins before any collapsing.
    #[must_use]
    pub const fn vertical_non_collapsed_margin(&self) -> VerticalEdges {
        self.vertical_non_collapsed_margin
    }

    /// Used `left` and `right` insets.
    #[must_use]
    pub const fn horizontal_inset(&self) -> HorizontalEdges {
        self.horizontal_inset
    }

    /// Used `top` and `bottom` insets.
    #[must_use]
    pub const fn vertical_inset(&self) -> VerticalEdges {
        self.vertical_inset
    }

    /// Used top margin.
    #[must_use]
    pub const fn margin_top(&self) -> Au {
        self.vertical_margin.top
    }

    /// Used bottom margin.
    #[must_use]
    pub const fn margin_bottom(&self) -> Au {
        self.vertical_margin.bottom
    }

    /// Used left margin.
    #[must_use]
    pub const fn margin_left(&self) -> Au {
        self.horizontal_margin.left
    }

    /// Used right margin.
    #[must_use]
    pub const fn margin_right(&self) -> Au {
        self.horizontal_margin.right
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub fn margin_box_top(&self) -> Au {
        self.top() - self.margin_top()
    }

    /// Bottom margin edge.
    #[must_use]
    pub fn margin_box_bottom(&self) -> Au {
        self.bottom() + self.margin_bottom()
    }

    /// Left margin edge.
    #[must_use]
    pub fn margin_box_left(&self) -> Au {
        self.left() - self.margin_left()
    }

    /// Margin-box width.
    #[must_use]
    pub fn margin_box_width(&self) -> Au {
        self.margin_left() + self.border_box_width() + self.margin_right()
    }

    /// Margin-box height.
    #[must_use]
    pub fn margin_box_height(&self) -> Au {
        self.margin_top() + self.border_box_height() + self.margin_bottom()
    }

    /// Move the border-box corner.
    pub const fn set_top_left(&mut self, top_left: Position) {
        self.top_left = top_left;
    }

    /// Set the top border edge.
    pub const fn set_top(&mut self, top: Au) {
        self.top_left.top = top;
    }

    /// Set the left border edge.
    pub const fn set_left(&mut self, left: Au) {
        self.top_left.left = left;
    }

    /// Translate the box without touching its size.
    pub fn move_by(&mut self, offset: Position) {
        self.top_left = self.top_left.moved_by(offset);
    }

    /// Set the content-box width.
    pub const fn set_content_box_width(&mut self, width: Au) {
        self.content_box_width = width;
    }

    /// Set the content-box height.
    pub const fn set_content_box_height(&mut self, height: Au) {
        self.content_box_height = height;
    }

    /// Set the border widths.
    pub const fn set_border(&mut self, border: Edges<Au>) {
        self.border = border;
    }

    /// Set the resolved padding.
    pub const fn set_padding(&mut self, padding: Edges<Au>) {
        self.padding = Some(padding);
    }

    /// Set the used left and right margins.
    pub const fn set_horizontal_margin(&mut self, margin: HorizontalEdges) {
        self.horizontal_margin = margin;
    }

    /// Set the used top and bottom margins.
    pub const fn set_vertical_margin(&mut self, margin: VerticalEdges) {
        self.vertical_margin = margin;
    }

    /// Set the authored horizontal margins.
    pub const fn set_horizontal_non_computed_margin(&mut self, margin: HorizontalEdges) {
        self.horizontal_non_computed_margin = margin;
    }

    /// Set the vertical margins before collapsing.
    pub const fn set_vertical_non_collapsed_margin(&mut self, margin: VerticalEdges) {
        self.vertical_non_collapsed_margin = margin;
    }

    /// Set the used `left` and `right`.
    pub const fn set_horizontal_inset(&mut self, inset: HorizontalEdges) {
        self.horizontal_inset = inset;
    }

    /// Set the used `top` and `bottom`.
    pub const fn set_vertical_inset(&mut self, inset: VerticalEdges) {
        self.vertical_inset = inset;
    }
}

impl Default for DisplayBox {
    fn default() -> Self {
        Self::EMPTY
    }
}
