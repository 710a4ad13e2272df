//! Error types for runweave operations.
//!
//! Style parsing never fails: unresolved values are dropped. Errors only
//! describe misuse of the markup arena.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors raised when building a markup tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),

    #[error("node {0:?} cannot have children")]
    NotAContainer(NodeId),

    #[error("node {0:?} is already attached to a parent")]
    AlreadyAttached(NodeId),

    #[error("appending {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
