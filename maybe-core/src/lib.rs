//!
//! This crate contains the `Maybe` container: an immutable value that is either `Just` a value or
//! `Nothing`, along with the combinators shared by both variants.
//!

/// The error produced when unwrapping an empty container.
pub mod error;
/// Typed construction: deciding which variant an input maps to.
pub mod into_maybe;
/// The container type and its combinators.
pub mod maybe;

pub use crate::error::EmptyError;
pub use crate::into_maybe::{from, IntoMaybe};
pub use crate::maybe::{just, nothing, Maybe};
