//! Error types

use crate::node::NodeId;

/// Errors raised by tree mutation, markup parsing and selector parsing.
///
/// Queries never fail: a lookup that finds nothing returns `None` or an
/// empty `Vec`. Errors are reserved for stale handles and malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The handle does not belong to this document.
    #[error("node {0} does not exist in this document")]
    UnknownNode(NodeId),

    /// Text nodes cannot hold children.
    #[error("node {0} cannot hold children")]
    NotAContainer(NodeId),

    /// The document root cannot be moved or removed.
    #[error("the document root cannot be moved or removed")]
    RootNode,

    /// Inserting the child would make a node its own ancestor.
    #[error("inserting {child} under {parent} would create a cycle")]
    HierarchyCycle { parent: NodeId, child: NodeId },

    /// The markup could not be parsed.
    #[error("invalid markup at byte {pos}: {message}")]
    Markup { pos: usize, message: String },

    /// The selector could not be parsed.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

impl DomError {
    pub(crate) fn markup(pos: usize, message: impl Into<String>) -> Self {
        Self::Markup {
            pos,
            message: message.into(),
        }
    }

    pub(crate) fn selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomError>;
