//! Per-pass layout state.
//!
//! A [`LayoutContext`] borrows the box tree for one layout pass and owns the
//! geometry produced by it: one [`DisplayBox`] per box and one
//! [`FormattingState`] per formatting context root.

use std::collections::HashMap;

use quokka_style::{Edges, HorizontalEdges, VerticalEdges};
use quokka_tree::{BoxId, BoxTree, LayoutBox};

use crate::block::BlockFormattingContext;
use crate::display_box::{DisplayBox, Position, Size};
use crate::formatting_context::FormattingContext;
use crate::formatting_context::geometry::IntrinsicWidthConstraints;

/// Upper bound on nested formatting contexts, block containers and
/// out-of-flow chains entered during one pass.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Layout results owned by a formatting context root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattingState {
    intrinsic_width_constraints: Option<IntrinsicWidthConstraints>,
}

impl FormattingState {
    /// [§ 10.3.7](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// The cached preferred minimum and preferred widths of the root.
    #[must_use]
    pub const fn intrinsic_width_constraints(&self) -> Option<IntrinsicWidthConstraints> {
        self.intrinsic_width_constraints
    }

    /// Cache the root's intrinsic width constraints.
    pub const fn set_intrinsic_width_constraints(&mut self, constraints: IntrinsicWidthConstraints) {
        self.intrinsic_width_constraints = Some(constraints);
    }
}

/// Geometry store and formatting context factory for one layout pass.
///
/// The tree is borrowed immutably: boxes, styles and containing-block links
/// stay fixed while the pass runs, and only the records change.
pub struct LayoutContext<'tree> {
    tree: &'tree BoxTree,
    display_boxes: HashMap<BoxId, DisplayBox>,
    formatting_states: HashMap<BoxId, FormattingState>,
    nesting_depth: usize,
}

impl<'tree> LayoutContext<'tree> {
    /// Start a pass over `tree`. The initial containing block receives the
    /// viewport as its content box.
    ///
    /// [§ 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "For continuous media, it has the dimensions of the viewport and is
    /// anchored at the canvas origin."
    #[must_use]
    pub fn new(tree: &'tree BoxTree, viewport: Size) -> Self {
        let mut initial_containing_block = DisplayBox::EMPTY;
        initial_containing_block.set_top_left(Position::ZERO);
        initial_containing_block.set_content_box_width(viewport.width);
        initial_containing_block.set_content_box_height(viewport.height);
        initial_containing_block.set_border(Edges::ZERO);
        initial_containing_block.set_padding(Edges::ZERO);
        initial_containing_block.set_horizontal_margin(HorizontalEdges::ZERO);
        initial_containing_block.set_vertical_margin(VerticalEdges::ZERO);

        let mut display_boxes = HashMap::new();
        let _ = display_boxes.insert(tree.root(), initial_containing_block);

        Self {
            tree,
            display_boxes,
            formatting_states: HashMap::new(),
            nesting_depth: 0,
        }
    }

    /// The tree this pass lays out.
    #[must_use]
    pub const fn tree(&self) -> &'tree BoxTree {
        self.tree
    }

    /// Resolve a handle that layout requires to be live.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale. Layout never walks to a removed box unless
    /// the tree was corrupted.
    #[must_use]
    pub fn layout_box(&self, id: BoxId) -> &'tree LayoutBox {
        match self.tree.get(id) {
            Some(layout_box) => layout_box,
            None => panic!("layout reached stale box {id:?}"),
        }
    }

    /// The containing block layout requires `id` to have.
    ///
    /// # Panics
    ///
    /// Panics for the initial containing block and for boxes in a detached
    /// subtree.
    #[must_use]
    pub fn containing_block(&self, id: BoxId) -> BoxId {
        match self.tree.containing_block(id) {
            Some(containing_block) => containing_block,
            None => panic!("{id:?} has no containing block in this tree"),
        }
    }

    /// Get or create the record for `id`.
    pub fn display_box_for_layout_box(&mut self, id: BoxId) -> &mut DisplayBox {
        self.display_boxes.entry(id).or_default()
    }

    /// The record for `id`, or an empty one if none was created yet.
    #[must_use]
    pub fn display_box(&self, id: BoxId) -> &DisplayBox {
        self.display_boxes.get(&id).unwrap_or(&DisplayBox::EMPTY)
    }

    /// Whether layout produced a record for `id`.
    #[must_use]
    pub fn has_display_box(&self, id: BoxId) -> bool {
        self.display_boxes.contains_key(&id)
    }

    /// [§ 9.4 Normal flow](https://www.w3.org/TR/CSS2/visuren.html#normal-flow)
    ///
    /// The formatting context rooted at `id`. Block formatting is the only
    /// kind modeled.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not establish a formatting context.
    #[must_use]
    pub fn formatting_context(&self, id: BoxId) -> Box<dyn FormattingContext> {
        assert!(
            self.layout_box(id).establishes_formatting_context(),
            "{id:?} does not establish a formatting context"
        );
        Box::new(BlockFormattingContext::new(id))
    }

    /// Get or create the state owned by the formatting root `id`.
    pub fn create_formatting_state_for_formatting_root_if_needed(
        &mut self,
        id: BoxId,
    ) -> &mut FormattingState {
        self.formatting_states.entry(id).or_default()
    }

    /// The state of the formatting root `id`, if one was created.
    #[must_use]
    pub fn formatting_state(&self, id: BoxId) -> Option<&FormattingState> {
        self.formatting_states.get(&id)
    }

    /// Every formatting root that owns a state, in arena order.
    #[must_use]
    pub fn formatting_roots(&self) -> Vec<BoxId> {
        let mut roots: Vec<BoxId> = self.formatting_states.keys().copied().collect();
        roots.sort_unstable();
        roots
    }

    /// Run `f` one nesting level deeper.
    ///
    /// # Panics
    ///
    /// Panics when the pass would exceed [`MAX_NESTING_DEPTH`].
    pub fn with_nesting<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        assert!(
            self.nesting_depth < MAX_NESTING_DEPTH,
            "layout nesting exceeds {MAX_NESTING_DEPTH} levels"
        );
        self.nesting_depth += 1;
        let result = f(self);
        self.nesting_depth -= 1;
        result
    }

    /// Lay out the whole tree.
    ///
    /// With `debug_assertions` or the `validate-geometry` feature, every
    /// formatting root touched by the pass is validated afterwards.
    pub fn layout(&mut self) {
        let root = self.tree.root();
        log::debug!("layout pass start ({} boxes)", self.tree.len());
        self.layout_formatting_context_subtree(root);

        #[cfg(any(debug_assertions, feature = "validate-geometry"))]
        for formatting_root in self.formatting_roots() {
            self.formatting_context(formatting_root)
                .validate_geometry_constraints_after_layout(self);
        }
        log::debug!("layout pass end");
    }

    /// Lay out the interior of the formatting root `id`, then the
    /// out-of-flow boxes it is the containing block of.
    ///
    /// The root's own width must already be resolved. For out-of-flow roots
    /// the recursion driver calls the two steps separately, because the
    /// root's height is resolved between them.
    pub fn layout_formatting_context_subtree(&mut self, id: BoxId) {
        let _ = self.create_formatting_state_for_formatting_root_if_needed(id);
        let formatting_context = self.formatting_context(id);
        formatting_context.layout(self);
        formatting_context.layout_out_of_flow_descendants(self, id);
    }
}
