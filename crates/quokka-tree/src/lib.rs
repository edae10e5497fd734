//! Box tree for the Quokka layout engine.
//!
//! # Design
//!
//! The tree uses arena allocation with generation-checked [`BoxId`] handles
//! for all relationships. Parent, sibling and containing-block links are
//! handles, never references, so a box that is removed cannot be reached
//! through a stale link: the slot's generation no longer matches and every
//! lookup returns `None`.
//!
//! Out-of-flow boxes attach to a containing block that may be several
//! levels above their parent. Each container keeps an index of those boxes,
//! updated by the mutation methods for the affected subtree only.

pub mod error;
pub mod layout_box;

pub use error::TreeError;
pub use layout_box::{BoxKind, ContainerData, LayoutBox};

use quokka_style::{ComputedStyle, PositionType};

/// A generation-checked index into a [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId {
    index: u32,
    generation: u32,
}

impl BoxId {
    /// Position of the slot in the arena.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<LayoutBox>,
}

/// Arena-based box tree rooted at the initial containing block.
///
/// The tree is the sole owner of every [`LayoutBox`]. Layout borrows it
/// immutably for the duration of a pass.
#[derive(Debug, Clone)]
pub struct BoxTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: BoxId,
}

impl BoxTree {
    /// Create a tree holding only the initial containing block.
    #[must_use]
    pub fn new() -> Self {
        let mut icb = LayoutBox::new(
            ComputedStyle::default(),
            BoxKind::Container(ContainerData::default()),
            false,
        );
        icb.initial_containing_block = true;
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: BoxId {
                index: 0,
                generation: 0,
            },
        };
        tree.root = tree.alloc(icb);
        tree
    }

    /// The initial containing block.
    #[must_use]
    pub const fn root(&self) -> BoxId {
        self.root
    }

    /// The number of live boxes, including the initial containing block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// Always false: the initial containing block cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a detached container box.
    pub fn create_container(&mut self, style: ComputedStyle) -> BoxId {
        self.alloc(LayoutBox::new(
            style,
            BoxKind::Container(ContainerData::default()),
            false,
        ))
    }

    /// Allocate a detached leaf box.
    pub fn create_leaf(&mut self, style: ComputedStyle) -> BoxId {
        self.alloc(LayoutBox::new(style, BoxKind::Leaf, false))
    }

    /// Allocate a detached leaf box with replaced content.
    pub fn create_replaced(&mut self, style: ComputedStyle) -> BoxId {
        self.alloc(LayoutBox::new(style, BoxKind::Leaf, true))
    }

    fn alloc(&mut self, node: LayoutBox) -> BoxId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return BoxId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        assert!(index < u32::MAX, "box arena exhausted");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        BoxId {
            index,
            generation: 0,
        }
    }

    /// Get a box by its handle. `None` if the box was removed.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&LayoutBox> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: BoxId) -> Option<&mut LayoutBox> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Whether the handle still refers to a live box.
    #[must_use]
    pub fn contains(&self, id: BoxId) -> bool {
        self.get(id).is_some()
    }

    /// Appends `child` as the last child of `parent`, updating sibling links
    /// and the out-of-flow index of the moved subtree.
    ///
    /// # Errors
    ///
    /// Fails without changing the tree if either handle is stale, `parent`
    /// is a leaf, `child` already has a parent or is the initial containing
    /// block, or `parent` lies inside `child`'s subtree.
    pub fn append_child(&mut self, parent: BoxId, child: BoxId) -> Result<(), TreeError> {
        let parent_box = self.get(parent).ok_or(TreeError::StaleBox(parent))?;
        if !parent_box.is_container() {
            return Err(TreeError::NotAContainer(parent));
        }
        let child_box = self.get(child).ok_or(TreeError::StaleBox(child))?;
        if child_box.is_initial_containing_block() {
            return Err(TreeError::InitialContainingBlock);
        }
        if child_box.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(TreeError::Cycle { parent, child });
        }

        let previous_last_child = self.children(parent).last().copied();
        if let Some(data) = self.get_mut(parent).and_then(LayoutBox::container_data_mut) {
            data.children.push(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
            node.previous_sibling = previous_last_child;
            node.next_sibling = None;
        }
        if let Some(previous) = previous_last_child.and_then(|id| self.get_mut(id)) {
            previous.next_sibling = Some(child);
        }

        self.reindex_out_of_flow_subtree(child);
        Ok(())
    }

    /// Detach `child` from `parent`. The subtree stays allocated and can be
    /// appended elsewhere.
    ///
    /// # Errors
    ///
    /// Fails without changing the tree if either handle is stale or `child`
    /// is not a direct child of `parent`.
    pub fn remove_child(&mut self, parent: BoxId, child: BoxId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::StaleBox(parent));
        }
        let child_box = self.get(child).ok_or(TreeError::StaleBox(child))?;
        if child_box.parent != Some(parent) {
            return Err(TreeError::NotAChild { parent, child });
        }
        let (previous, next) = (child_box.previous_sibling, child_box.next_sibling);

        if let Some(data) = self.get_mut(parent).and_then(LayoutBox::container_data_mut) {
            data.children.retain(|id| *id != child);
        }
        if let Some(previous) = previous.and_then(|id| self.get_mut(id)) {
            previous.next_sibling = next;
        }
        if let Some(next) = next.and_then(|id| self.get_mut(id)) {
            next.previous_sibling = previous;
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
            node.previous_sibling = None;
            node.next_sibling = None;
        }

        self.reindex_out_of_flow_subtree(child);
        Ok(())
    }

    /// Detach `id` (if attached) and free it together with its descendants.
    /// Every handle into the subtree becomes stale.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale or refers to the initial containing block.
    pub fn remove_subtree(&mut self, id: BoxId) -> Result<(), TreeError> {
        let node = self.get(id).ok_or(TreeError::StaleBox(id))?;
        if node.is_initial_containing_block() {
            return Err(TreeError::InitialContainingBlock);
        }
        let parent = node.parent;
        if let Some(parent) = parent {
            self.remove_child(parent, id)?;
        }

        let doomed: Vec<BoxId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for &doomed_id in &doomed {
            self.unregister_out_of_flow(doomed_id);
        }
        for doomed_id in doomed {
            let slot = &mut self.slots[doomed_id.index as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(doomed_id.index);
        }
        log::trace!("removed subtree rooted at {id:?}");
        Ok(())
    }

    fn unregister_out_of_flow(&mut self, id: BoxId) {
        let Some(registered_with) = self.get_mut(id).and_then(|node| node.registered_with.take())
        else {
            return;
        };
        if let Some(data) = self
            .get_mut(registered_with)
            .and_then(LayoutBox::container_data_mut)
        {
            data.out_of_flow_descendants.retain(|entry| *entry != id);
        }
    }

    /// Re-register every out-of-flow box of a subtree that was just attached
    /// or detached. Boxes outside the subtree keep their containing block.
    fn reindex_out_of_flow_subtree(&mut self, subtree_root: BoxId) {
        let out_of_flow: Vec<BoxId> = std::iter::once(subtree_root)
            .chain(self.descendants(subtree_root))
            .filter(|id| self.get(*id).is_some_and(LayoutBox::is_out_of_flow_positioned))
            .collect();

        for id in out_of_flow {
            let containing_block = self.containing_block(id);
            let registered_with = self.get(id).and_then(|node| node.registered_with);
            if registered_with == containing_block {
                continue;
            }
            self.unregister_out_of_flow(id);
            let Some(containing_block) = containing_block else {
                continue;
            };
            if let Some(data) = self
                .get_mut(containing_block)
                .and_then(LayoutBox::container_data_mut)
            {
                data.out_of_flow_descendants.push(id);
            }
            if let Some(node) = self.get_mut(id) {
                node.registered_with = Some(containing_block);
            }
        }
    }

    /// Get the parent of a box.
    #[must_use]
    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Get all children of a box. Empty for leaves and stale handles.
    #[must_use]
    pub fn children(&self, id: BoxId) -> &[BoxId] {
        self.get(id).map_or(&[][..], LayoutBox::children)
    }

    /// Get the previous sibling of a box.
    #[must_use]
    pub fn previous_sibling(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).and_then(|node| node.previous_sibling)
    }

    /// Get the next sibling of a box.
    #[must_use]
    pub fn next_sibling(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).and_then(|node| node.next_sibling)
    }

    /// Children that take part in normal flow, in tree order.
    pub fn in_flow_children(&self, id: BoxId) -> impl Iterator<Item = BoxId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.get(*child).is_some_and(LayoutBox::is_in_flow))
    }

    /// The first in-flow child.
    #[must_use]
    pub fn first_in_flow_child(&self, id: BoxId) -> Option<BoxId> {
        self.in_flow_children(id).next()
    }

    /// The last in-flow child.
    #[must_use]
    pub fn last_in_flow_child(&self, id: BoxId) -> Option<BoxId> {
        self.in_flow_children(id).last()
    }

    /// The closest preceding sibling that takes part in normal flow.
    #[must_use]
    pub fn previous_in_flow_sibling(&self, id: BoxId) -> Option<BoxId> {
        let mut current = self.previous_sibling(id);
        while let Some(sibling) = current {
            if self.get(sibling).is_some_and(LayoutBox::is_in_flow) {
                return Some(sibling);
            }
            current = self.previous_sibling(sibling);
        }
        None
    }

    /// Out-of-flow boxes whose containing block is `id`.
    #[must_use]
    pub fn out_of_flow_descendants(&self, id: BoxId) -> &[BoxId] {
        self.get(id)
            .and_then(LayoutBox::container_data)
            .map_or(&[][..], |data| data.out_of_flow_descendants.as_slice())
    }

    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// - "For other elements, if the element's position is 'relative' or
    ///   'static', the containing block is formed by the content edge of the
    ///   nearest ancestor box that is a block container."
    /// - "If the element has 'position: fixed', the containing block is
    ///   established by the viewport."
    /// - "If the element has 'position: absolute', the containing block is
    ///   established by the nearest ancestor with a 'position' of 'absolute',
    ///   'relative' or 'fixed'." Without one, it is the initial containing
    ///   block.
    ///
    /// `None` for the initial containing block, stale handles, and boxes of
    /// a detached subtree whose containing block would lie outside it.
    #[must_use]
    pub fn containing_block(&self, id: BoxId) -> Option<BoxId> {
        let node = self.get(id)?;
        if node.is_initial_containing_block() {
            return None;
        }
        match node.style().position {
            PositionType::Absolute => self.ancestors(id).find(|ancestor| {
                self.get(*ancestor)
                    .is_some_and(|a| a.is_positioned() || a.is_initial_containing_block())
            }),
            PositionType::Fixed => self.ancestors(id).find(|ancestor| {
                self.get(*ancestor)
                    .is_some_and(LayoutBox::is_initial_containing_block)
            }),
            PositionType::Static | PositionType::Relative | PositionType::Sticky => node.parent,
        }
    }

    /// The root of the formatting context `id` takes part in: the nearest
    /// box on its containing-block chain that establishes one. The initial
    /// containing block is its own root.
    #[must_use]
    pub fn formatting_context_root(&self, id: BoxId) -> Option<BoxId> {
        if self.get(id)?.is_initial_containing_block() {
            return Some(id);
        }
        let mut current = self.containing_block(id);
        while let Some(ancestor) = current {
            if self
                .get(ancestor)
                .is_some_and(LayoutBox::establishes_formatting_context)
            {
                return Some(ancestor);
            }
            current = self.containing_block(ancestor);
        }
        None
    }

    /// Check if `descendant` is a strict descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: BoxId, ancestor: BoxId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a box, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: BoxId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over the strict descendants of a box in pre-order.
    #[must_use]
    pub fn descendants(&self, id: BoxId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: self.children(id).iter().rev().copied().collect(),
        }
    }
}

impl Default for BoxTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a box.
pub struct Ancestors<'a> {
    tree: &'a BoxTree,
    current: Option<BoxId>,
}

impl Iterator for Ancestors<'_> {
    type Item = BoxId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a box.
pub struct Descendants<'a> {
    tree: &'a BoxTree,
    stack: Vec<BoxId>,
}

impl Iterator for Descendants<'_> {
    type Item = BoxId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
