//! CSS Selector Builder
//!
//! Fluent construction of CSS selector strings. Parts are validated against
//! the fixed category order (element, id, class, attribute, pseudo-class,
//! pseudo-element) and the at-most-once rules at the moment they are added;
//! rendering is a plain concatenation of already-formatted fragments.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{SelectorError, SelectorResult};

/// The six selector-part kinds, in their fixed output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Type selector (e.g., div, p, span)
    Element,
    /// ID selector (e.g., #main)
    Id,
    /// Class selector (e.g., .container)
    Class,
    /// Attribute selector (e.g., [type="text"])
    Attribute,
    /// Pseudo-class (e.g., :hover, :nth-child(2n))
    PseudoClass,
    /// Pseudo-element (e.g., ::before, ::after)
    PseudoElement,
}

impl Category {
    /// Whether this category admits at most one fragment per selector
    pub fn is_singleton(&self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human-readable category name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fragment storage for a simple (leaf) selector
#[derive(Debug, Clone, Default)]
struct Compound {
    element: Option<String>,
    id: Option<String>,
    classes: SmallVec<[String; 2]>,
    attributes: SmallVec<[String; 2]>,
    pseudo_classes: SmallVec<[String; 2]>,
    pseudo_element: Option<String>,
    /// Highest category populated so far
    reached: Option<Category>,
}

impl Compound {
    /// Check the uniqueness and ordering rules for a fragment of `category`
    fn check(&self, category: Category) -> SelectorResult<()> {
        if category.is_singleton() && self.has(category) {
            return Err(SelectorError::Duplicate { category });
        }
        if let Some(seen) = self.reached {
            if category < seen {
                return Err(SelectorError::OutOfOrder { category, seen });
            }
        }
        Ok(())
    }

    fn has(&self, category: Category) -> bool {
        match category {
            Category::Element => self.element.is_some(),
            Category::Id => self.id.is_some(),
            Category::Class => !self.classes.is_empty(),
            Category::Attribute => !self.attributes.is_empty(),
            Category::PseudoClass => !self.pseudo_classes.is_empty(),
            Category::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// Store an already-checked fragment, applying its punctuation now
    fn push(&mut self, category: Category, value: &str) {
        match category {
            Category::Element => self.element = Some(value.to_string()),
            Category::Id => self.id = Some(format!("#{}", value)),
            Category::Class => self.classes.push(format!(".{}", value)),
            Category::Attribute => self.attributes.push(format!("[{}]", value)),
            Category::PseudoClass => self.pseudo_classes.push(format!(":{}", value)),
            Category::PseudoElement => self.pseudo_element = Some(format!("::{}", value)),
        }
        self.reached = Some(self.reached.map_or(category, |r| r.max(category)));
    }

    /// Concatenate all fragments in category order, insertion order within
    /// each category, no separators
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(element) = &self.element {
            out.push_str(element);
        }
        if let Some(id) = &self.id {
            out.push_str(id);
        }
        for class in &self.classes {
            out.push_str(class);
        }
        for attribute in &self.attributes {
            out.push_str(attribute);
        }
        for pseudo_class in &self.pseudo_classes {
            out.push_str(pseudo_class);
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            out.push_str(pseudo_element);
        }
        out
    }
}

/// One CSS selector under construction, simple or combined
#[derive(Debug, Clone)]
pub struct Selector {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    /// A leaf selector accumulating its own fragments
    Simple(Compound),
    /// Two selectors joined by a combinator symbol; the children and the
    /// symbol wholly determine rendering
    Combined {
        left: Box<Selector>,
        symbol: String,
        right: Box<Selector>,
    },
}

impl Selector {
    /// Create a fresh selector seeded with a single fragment.
    ///
    /// On an empty selector no precondition can fail, so this is infallible.
    pub(crate) fn seeded(category: Category, value: &str) -> Self {
        let mut compound = Compound::default();
        compound.push(category, value);
        Self {
            repr: Repr::Simple(compound),
        }
    }

    pub(crate) fn combined(left: Selector, symbol: String, right: Selector) -> Self {
        Self {
            repr: Repr::Combined {
                left: Box::new(left),
                symbol,
                right: Box::new(right),
            },
        }
    }

    /// Add a fragment of the given category.
    ///
    /// This is the dynamic entry point behind the named builder methods, for
    /// callers that only know the category at runtime.
    pub fn push(mut self, category: Category, value: &str) -> SelectorResult<Self> {
        match &mut self.repr {
            Repr::Simple(compound) => {
                compound.check(category)?;
                compound.push(category, value);
                Ok(self)
            }
            Repr::Combined { .. } => Err(SelectorError::AlreadyCombined { category }),
        }
    }

    /// Set the element (tag) part. At most one per selector.
    pub fn element(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::Element, value)
    }

    /// Set the id part. At most one per selector.
    pub fn id(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::Id, value)
    }

    /// Append a class part
    pub fn class(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::Class, value)
    }

    /// Append an attribute part. `value` is the bracket contents,
    /// e.g. `href$=".png"`.
    pub fn attr(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::Attribute, value)
    }

    /// Append a pseudo-class part
    pub fn pseudo_class(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::PseudoClass, value)
    }

    /// Set the pseudo-element part. At most one per selector.
    pub fn pseudo_element(self, value: &str) -> SelectorResult<Self> {
        self.push(Category::PseudoElement, value)
    }

    /// Render the selector string.
    ///
    /// Idempotent and non-mutating; a validly-built selector always renders.
    /// A combined selector renders `left symbol right` with single spaces
    /// around the symbol whatever the symbol is; the descendant token is
    /// itself a space, so its operands come out separated by three spaces.
    pub fn stringify(&self) -> String {
        match &self.repr {
            Repr::Simple(compound) => compound.render(),
            Repr::Combined {
                left,
                symbol,
                right,
            } => format!("{} {} {}", left.stringify(), symbol, right.stringify()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
