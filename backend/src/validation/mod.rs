//! Request validation for scheme and step payloads.
//!
//! [`rules`] holds the field-level checks; [`guards`] combines them with the
//! store lookups each endpoint needs.

pub mod guards;
pub mod rules;

pub use guards::{check_scheme_id, validate_scheme, validate_step};
