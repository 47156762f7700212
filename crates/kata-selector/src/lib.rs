//! An immutable CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fixed fragment order with duplicate and ordering checks
//!   - Persistent values: every add returns a new selector
//!
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Binary combination of any two selectors with a combinator string
//!
//! - **Serialization** to canonical selector text
//!
//! # Not Implemented
//!
//! - Parsing selector text back into a builder
//! - Matching against a document tree

/// Errors raised by builder operations.
pub mod error;
/// Fragment kinds, compound and combined selectors.
pub mod selector;

pub use error::SelectorError;
pub use selector::{
    Combinator, CombinedSelector, CompoundSelector, FragmentKind, Selector, attr, class, combine,
    element, id, pseudo_class, pseudo_element,
};
