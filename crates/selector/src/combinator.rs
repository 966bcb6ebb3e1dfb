//! Selector combinators
//!
//! Joins two built selectors into a new renderable selector. The operands may
//! themselves be combined selectors, so combinations nest arbitrarily.

use std::fmt;

use crate::builder::Selector;

/// The four CSS combinator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (space)
    Descendant,
    /// Child combinator (>)
    Child,
    /// Next sibling combinator (+)
    NextSibling,
    /// Subsequent sibling combinator (~)
    SubsequentSibling,
}

impl Combinator {
    /// The literal token for this combinator
    pub fn token(&self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.token().to_string()
    }
}

/// Join two selectors with a combinator symbol.
///
/// The symbol is not validated: any string renders between the operands,
/// wrapped in single spaces. The descendant token is itself a space, so its
/// operands render with three spaces between them. That spacing is a
/// compatibility requirement, not an oversight.
pub fn combine(left: Selector, symbol: impl Into<String>, right: Selector) -> Selector {
    Selector::combined(left, symbol.into(), right)
}
