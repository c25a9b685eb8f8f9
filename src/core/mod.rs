//! Core order types, builders, and validation.
//!
//! This module provides the purchase-order model rendered by the `edifact`
//! module, together with the pre-flight checks every order must pass before
//! assembly starts.

mod builder;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use types::*;
pub use validation::*;
