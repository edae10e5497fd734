//! Layout boxes stored in the arena.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use quokka_style::ComputedStyle;

use crate::BoxId;

/// Whether a box can hold children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxKind {
    /// A block container.
    Container(ContainerData),
    /// A box without children (for example a replaced element).
    Leaf,
}

/// Children and out-of-flow bookkeeping of a container box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerData {
    pub(crate) children: Vec<BoxId>,
    /// Out-of-flow boxes anywhere in this subtree whose containing block is
    /// this container, in registration order.
    pub(crate) out_of_flow_descendants: Vec<BoxId>,
}

/// One node of the box tree.
///
/// Relationships are stored as [`BoxId`] handles into the owning
/// [`BoxTree`](crate::BoxTree). A handle never keeps its target alive.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub(crate) style: ComputedStyle,
    pub(crate) kind: BoxKind,
    pub(crate) replaced: bool,
    pub(crate) initial_containing_block: bool,
    pub(crate) parent: Option<BoxId>,
    pub(crate) previous_sibling: Option<BoxId>,
    pub(crate) next_sibling: Option<BoxId>,
    /// The container whose out-of-flow index lists this box.
    pub(crate) registered_with: Option<BoxId>,
}

impl LayoutBox {
    pub(crate) fn new(style: ComputedStyle, kind: BoxKind, replaced: bool) -> Self {
        Self {
            style,
            kind,
            replaced,
            initial_containing_block: false,
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            registered_with: None,
        }
    }

    /// The computed style of this box.
    #[must_use]
    pub const fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// The tree parent.
    #[must_use]
    pub const fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    /// Whether this box may hold children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self.kind, BoxKind::Container(_))
    }

    /// Whether this box is a container with at least one child.
    #[must_use]
    pub fn has_child(&self) -> bool {
        !self.children().is_empty()
    }

    /// Direct children in tree order. Empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[BoxId] {
        match &self.kind {
            BoxKind::Container(data) => &data.children,
            BoxKind::Leaf => &[],
        }
    }

    /// [§ 10.3.2 Inline, replaced elements](https://www.w3.org/TR/CSS2/visudet.html#inline-replaced-width)
    ///
    /// Whether the box has intrinsic replaced content.
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        self.replaced
    }

    /// [§ 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "The containing block in which the root element lives is a rectangle
    /// called the initial containing block."
    #[must_use]
    pub const fn is_initial_containing_block(&self) -> bool {
        self.initial_containing_block
    }

    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        self.style.position.is_positioned()
    }

    /// Relatively (or stickily) positioned.
    #[must_use]
    pub const fn is_in_flow_positioned(&self) -> bool {
        self.style.position.is_in_flow_positioned()
    }

    /// Absolutely or fixed positioned.
    #[must_use]
    pub const fn is_out_of_flow_positioned(&self) -> bool {
        self.style.position.is_out_of_flow_positioned()
    }

    /// Takes part in the normal flow of its parent.
    #[must_use]
    pub const fn is_in_flow(&self) -> bool {
        !self.is_out_of_flow_positioned()
    }

    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    ///
    /// Every modeled display type is block-level. The initial containing
    /// block is a rectangle, not a box in the flow.
    #[must_use]
    pub const fn is_block_level_box(&self) -> bool {
        !self.initial_containing_block
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Floats, absolutely positioned elements, block containers (such as
    /// inline-blocks, table-cells, and table-captions) that are not block
    /// boxes, and block boxes with 'overflow' other than 'visible' ...
    /// establish new block formatting contexts for their contents."
    #[must_use]
    pub const fn establishes_formatting_context(&self) -> bool {
        self.initial_containing_block
            || self.is_out_of_flow_positioned()
            || self.style.display.establishes_formatting_context()
    }

    pub(crate) const fn container_data(&self) -> Option<&ContainerData> {
        match &self.kind {
            BoxKind::Container(data) => Some(data),
            BoxKind::Leaf => None,
        }
    }

    pub(crate) const fn container_data_mut(&mut self) -> Option<&mut ContainerData> {
        match &mut self.kind {
            BoxKind::Container(data) => Some(data),
            BoxKind::Leaf => None,
        }
    }
}
