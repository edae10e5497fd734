//! Errors surfaced by the layout core.

use quokka_tree::BoxId;
use thiserror::Error;

/// A failed lookup through a non-owning layout handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A formatting context outlived the box that roots it.
    #[error("formatting context root {0:?} is no longer in the box tree")]
    StaleFormattingRoot(BoxId),
}
