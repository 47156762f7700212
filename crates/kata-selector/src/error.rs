//! Builder errors.

use thiserror::Error;

use crate::selector::FragmentKind;

/// A fragment that cannot be added to the selector it was offered to.
///
/// The selector the failing call was made on is left untouched and stays
/// usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton kind (element, id, pseudo-element) was added a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicateFragment {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A fragment was added after a kind that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind that was being added.
        kind: FragmentKind,
        /// The highest kind already present.
        after: FragmentKind,
    },
}
