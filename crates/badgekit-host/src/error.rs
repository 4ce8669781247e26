//! Error types for host view-tree operations.

use crate::scene::ViewId;

/// Result type alias for host operations.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors that can occur when manipulating a host view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The view handle is stale or was never part of this host.
    #[error("unknown view {0:?}")]
    UnknownView(ViewId),

    /// The view cannot hold children.
    #[error("view {0:?} is not a container")]
    NotAContainer(ViewId),

    /// The child is not held by the given parent.
    #[error("view {child:?} is not a child of {parent:?}")]
    NotAChild { parent: ViewId, child: ViewId },
}
