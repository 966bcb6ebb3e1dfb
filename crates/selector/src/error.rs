//! Selector construction error types

use thiserror::Error;

use crate::builder::Category;

/// Selector construction result type
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Usage errors raised while building a selector.
///
/// Both ordering and uniqueness violations are raised at the offending call,
/// never deferred to rendering; a validly-built selector always renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton part (element, id or pseudo-element) was set twice
    #[error("{category} may occur at most once in a selector")]
    Duplicate {
        category: Category,
    },

    /// A part was added after a part of a strictly later category
    #[error("{category} must come before {seen} in a selector")]
    OutOfOrder {
        category: Category,
        seen: Category,
    },

    /// A fragment operation was invoked on an already-combined selector
    #[error("a combined selector cannot take a further {category} part")]
    AlreadyCombined {
        category: Category,
    },
}

impl SelectorError {
    /// Get the category of the offending operation
    pub fn category(&self) -> Category {
        match self {
            Self::Duplicate { category } => *category,
            Self::OutOfOrder { category, .. } => *category,
            Self::AlreadyCombined { category } => *category,
        }
    }
}
