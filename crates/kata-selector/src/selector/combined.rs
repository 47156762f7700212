//! Combined selectors
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//! "A complex selector is a chain of one or more compound selectors separated
//! by combinators."
//!
//! Here the chain is a binary tree: each node joins two already-built
//! selectors, either of which may itself be combined.

use std::fmt;

use kata_common::warning::warn_once;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::CompoundSelector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `combine` takes any string; this enum names the four standard symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

/// Any selector value the builder produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single fragment sequence.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator.
    Combined(Box<CombinedSelector>),
}

impl Selector {
    /// Canonical selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundSelector> for Selector {
    fn from(compound: &CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

/// Two selectors and the combinator between them.
///
/// Owns copies of both sides; combining never alters the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    /// Left-hand selector.
    pub left: Selector,
    /// Combinator text, embedded verbatim.
    pub combinator: String,
    /// Right-hand selector (the subject).
    pub right: Selector,
}

impl CombinedSelector {
    /// The combinator as one of the standard symbols, if it is one.
    #[must_use]
    pub fn standard_combinator(&self) -> Option<Combinator> {
        self.combinator.parse().ok()
    }

    /// Canonical selector text: `left + " " + combinator + " " + right`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Join two selectors with a combinator.
///
/// Any combinator string is accepted and kept as-is; one outside
/// `' '`, `'+'`, `'~'`, `'>'` is reported once through the warning channel.
///
/// # Example
/// ```
/// use kata_selector::{Combinator, combine, element};
///
/// let div = element("div")?;
/// let p = element("p")?;
/// assert_eq!(combine(&div, Combinator::Child, &p).stringify(), "div > p");
/// assert_eq!(combine(&div, "+", &p).stringify(), "div + p");
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl AsRef<str>,
    right: impl Into<Selector>,
) -> Selector {
    let combinator = combinator.as_ref();
    if combinator.parse::<Combinator>().is_err() {
        warn_once(
            "Selector",
            &format!("non-standard combinator '{combinator}' embedded verbatim"),
        );
    }

    Selector::from(CombinedSelector {
        left: left.into(),
        combinator: combinator.to_owned(),
        right: right.into(),
    })
}
