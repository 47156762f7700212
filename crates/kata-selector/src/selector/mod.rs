//! Compound selector construction
//!
//! A compound selector is built one fragment at a time. Each add returns a
//! new [`CompoundSelector`]; the receiver is never modified, so a partial
//! selector can be shared and extended along several branches.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

mod combined;

pub use combined::{Combinator, CombinedSelector, Selector, combine};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// The kind of a single fragment. Variants are declared in the order they
/// must appear inside a compound selector, and `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The expression between the brackets is kept verbatim.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:first-child`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Element, id and pseudo-element may appear at most once.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Example: `div#main.container.editable[data-x]:hover::after`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl CompoundSelector {
    /// An empty selector, the root every chain starts from.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
        }
    }

    /// Add the type selector.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateFragment`] if an element is already present,
    /// [`SelectorError::OrderViolation`] if any other fragment is.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Element, name.into())
    }

    /// Add the ID selector.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateFragment`] if an id is already present,
    /// [`SelectorError::OrderViolation`] if a class or later fragment is.
    pub fn id(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Id, name.into())
    }

    /// Append a class selector.
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if an attribute or later fragment is
    /// already present.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Class, name.into())
    }

    /// Append an attribute selector. `expr` is the text between the brackets.
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// is already present.
    pub fn attr(&self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Attribute, expr.into())
    }

    /// Append a pseudo-class.
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if a pseudo-element is already
    /// present.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::PseudoClass, name.into())
    }

    /// Add the pseudo-element.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element is already
    /// present.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::PseudoElement, name.into())
    }

    /// Whether at least one fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The latest kind in fragment order that is present, if any.
    #[must_use]
    pub fn highest_kind(&self) -> Option<FragmentKind> {
        FragmentKind::iter().rev().find(|&kind| self.contains(kind))
    }

    /// True for the empty root selector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest_kind().is_none()
    }

    /// All fragments in canonical order.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        let element = self.element.as_deref().map(|v| (FragmentKind::Element, v));
        let id = self.id.as_deref().map(|v| (FragmentKind::Id, v));
        let classes = self.classes.iter().map(|v| (FragmentKind::Class, v.as_str()));
        let attributes = self.attributes.iter().map(|v| (FragmentKind::Attribute, v.as_str()));
        let pseudo_classes = self
            .pseudo_classes
            .iter()
            .map(|v| (FragmentKind::PseudoClass, v.as_str()));
        let pseudo_element = self
            .pseudo_element
            .as_deref()
            .map(|v| (FragmentKind::PseudoElement, v));

        element
            .into_iter()
            .chain(id)
            .chain(classes)
            .chain(attributes)
            .chain(pseudo_classes)
            .chain(pseudo_element)
    }

    /// Canonical selector text, e.g. `#main.container.editable`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Validate `kind` against what is already present, then return a copy
    /// with `value` added.
    fn with_fragment(&self, kind: FragmentKind, value: String) -> Result<Self, SelectorError> {
        if kind.is_singleton() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        if let Some(after) = self.highest_kind().filter(|&after| after > kind) {
            return Err(SelectorError::OrderViolation { kind, after });
        }

        let mut next = self.clone();
        match kind {
            FragmentKind::Element => next.element = Some(value),
            FragmentKind::Id => next.id = Some(value),
            FragmentKind::Class => next.classes.push(value),
            FragmentKind::Attribute => next.attributes.push(value),
            FragmentKind::PseudoClass => next.pseudo_classes.push(value),
            FragmentKind::PseudoElement => next.pseudo_element = Some(value),
        }
        Ok(next)
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        Ok(())
    }
}

/// Start a selector with a type selector.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn element(name: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().element(name)
}

/// Start a selector with an ID selector.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn id(name: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().id(name)
}

/// Start a selector with a class selector.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn class(name: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().class(name)
}

/// Start a selector with an attribute selector.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn attr(expr: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().attr(expr)
}

/// Start a selector with a pseudo-class.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn pseudo_class(name: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().pseudo_class(name)
}

/// Start a selector with a pseudo-element.
///
/// # Errors
/// Never fails on the empty root; the signature matches the chained form.
pub fn pseudo_element(name: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    CompoundSelector::new().pseudo_element(name)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_fragment_kind_order() {
        let kinds: Vec<_> = FragmentKind::iter().collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&FragmentKind::Element));
        assert_eq!(kinds.last(), Some(&FragmentKind::PseudoElement));
    }

    #[test]
    fn test_fragment_kind_display() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
    }

    #[test]
    fn test_highest_kind_tracks_latest_fragment() {
        let base = CompoundSelector::new();
        assert_eq!(base.highest_kind(), None);
        assert!(base.is_empty());

        let with_class = base.element("a").unwrap().class("x").unwrap();
        assert_eq!(with_class.highest_kind(), Some(FragmentKind::Class));
        assert!(with_class.contains(FragmentKind::Element));
        assert!(!with_class.contains(FragmentKind::Id));
    }
}
