//! Shared limits and validation helpers.

pub mod validation;
