//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by all kata modules:
//! - **Warning System** - deduplicated, colored diagnostics on stderr
//! - **Argument Errors** - the [`InvalidArgument`] error returned for inputs
//!   outside a function's domain

pub mod error;
pub mod warning;

pub use error::InvalidArgument;
