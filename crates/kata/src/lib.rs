//! The kata set.
//!
//! # Scope
//!
//! This crate re-exports:
//! - **Selector Builder** ([`selector`]) - immutable, order-checked CSS selectors
//! - **Objects** ([`objects`]) - `Rectangle` and positional JSON reconstruction
//! - **Conditions & Loops** ([`loops`]) - the pure-function catalogue
//!
//! The modules share nothing; each can be used on its own.

pub use kata_common as common;
pub use kata_loops as loops;
pub use kata_objects as objects;
pub use kata_selector as selector;

pub use kata_common::InvalidArgument;
pub use kata_objects::{ObjectError, Rectangle, from_json, get_json};
pub use kata_selector::{Selector, SelectorError, combine};
