//! Errors returned by box tree mutations.

use thiserror::Error;

use crate::BoxId;

/// A rejected box tree mutation. The tree is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle refers to a box that was removed, or never existed.
    #[error("box {0:?} is not in the tree")]
    StaleBox(BoxId),
    /// Only container boxes hold children.
    #[error("box {0:?} is not a container")]
    NotAContainer(BoxId),
    /// A box is appended while it still has a parent.
    #[error("box {0:?} already has a parent")]
    AlreadyAttached(BoxId),
    /// `remove_child` was asked to detach a box from the wrong parent.
    #[error("box {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The container passed in.
        parent: BoxId,
        /// The box that is not among its children.
        child: BoxId,
    },
    /// The append would make a box its own ancestor.
    #[error("appending {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The would-be parent.
        parent: BoxId,
        /// The box being appended.
        child: BoxId,
    },
    /// The initial containing block is the fixed root of the tree.
    #[error("the initial containing block cannot be detached or removed")]
    InitialContainingBlock,
}
