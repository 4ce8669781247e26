//! Error types for badge attachment.

use badgekit_host::{HostError, ViewId};

/// Result type alias for attachment operations.
pub type AttachResult<T> = std::result::Result<T, AttachError>;

/// Errors that can occur while attaching a badge to a host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// The badge already wraps a target; detach before re-attaching.
    #[error("badge is already attached to a target view")]
    AlreadyAttached,

    /// The target view has no parent to insert the wrapper into.
    #[error("target view {0:?} has no parent")]
    NoParent(ViewId),

    /// The target's parent cannot hold children, so the wrapper cannot
    /// take the target's place.
    #[error("parent view {0:?} cannot hold children")]
    ParentNotContainer(ViewId),

    /// The requested tab child does not exist.
    #[error("tab index {index} out of range for {len} tabs")]
    TabIndexOutOfRange { index: usize, len: usize },

    /// A host view-tree operation failed.
    #[error(transparent)]
    Host(#[from] HostError),
}
