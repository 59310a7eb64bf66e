//!
//! This crate contains the dynamic `Value` type and the functions that classify arbitrary values
//! into `Maybe` containers.
//!

/// Construction of containers from dynamic values.
pub mod coerce;
/// To classify values as strings, numbers or objects.
pub mod convert;
/// Unique symbol values.
pub mod symbol;
/// The dynamic value representation.
pub mod value;

pub use crate::coerce::{from, from_unless, from_with, is_instance, just, number, object, string, NOTHING};
pub use crate::symbol::Symbol;
pub use crate::value::{DynMaybe, Function, Object, Value};
pub use maybe_core::{EmptyError, IntoMaybe, Maybe};
