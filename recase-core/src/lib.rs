//! Case conversion for identifiers and deep key recasing for JSON values.
//!
//! - [`to_expected_case`] rewrites a single string into a [`KeyCase`],
//!   optionally consulting an [`Overrides`] table first.
//! - [`object_to_expected_case`] rewrites every mapping key of a nested
//!   [`serde_json::Value`], refusing to overwrite sibling keys.
//! - [`is_plain_object`] and [`shape_of`] classify any serializable value.
//! - [`map_values`] transforms the values of a map, keeping its keys.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod case;
mod error;
mod map;
mod recase;
mod shape;

pub use case::{KeyCase, Overrides, to_expected_case};
pub use error::{Error, Result};
pub use map::{map_values, try_map_values};
pub use recase::{object_to_expected_case, recase_serialize};
pub use shape::{Shape, is_plain_object, shape_of};
