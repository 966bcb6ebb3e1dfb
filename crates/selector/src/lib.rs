//! Lahmu CSS Selector Builder
//!
//! Fluent construction of CSS selector strings. A selector accumulates parts
//! (element, id, classes, attributes, pseudo-classes, pseudo-element) in a
//! fixed category order, rejects out-of-order and duplicate-singleton usage
//! at the offending call, and renders a canonical string. Built selectors
//! can be joined with combinator tokens, nesting arbitrarily.
//!
//! ```
//! use lahmu_selector::{combine, element, id};
//!
//! let sel = id("main").class("container")?.class("editable")?;
//! assert_eq!(sel.stringify(), "#main.container.editable");
//!
//! let sel = combine(element("div").id("main")?, "+", element("table").id("data")?);
//! assert_eq!(sel.stringify(), "div#main + table#data");
//! # Ok::<(), lahmu_selector::SelectorError>(())
//! ```

pub mod builder;
pub mod combinator;
pub mod error;

pub use builder::{Category, Selector};
pub use combinator::{combine, Combinator};
pub use error::{SelectorError, SelectorResult};

/// Start a fresh selector with a fragment of the given category.
///
/// Entry point behind the named facade functions, for callers that only know
/// the category at runtime. Infallible: no rule can fail on a fresh selector.
pub fn part(category: Category, value: &str) -> Selector {
    Selector::seeded(category, value)
}

/// Start a selector with an element (tag) part
pub fn element(value: &str) -> Selector {
    part(Category::Element, value)
}

/// Start a selector with an id part
pub fn id(value: &str) -> Selector {
    part(Category::Id, value)
}

/// Start a selector with a class part
pub fn class(value: &str) -> Selector {
    part(Category::Class, value)
}

/// Start a selector with an attribute part
pub fn attr(value: &str) -> Selector {
    part(Category::Attribute, value)
}

/// Start a selector with a pseudo-class part
pub fn pseudo_class(value: &str) -> Selector {
    part(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element part
pub fn pseudo_element(value: &str) -> Selector {
    part(Category::PseudoElement, value)
}
