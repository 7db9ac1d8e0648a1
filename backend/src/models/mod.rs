//! Rows read from the scheme store.

pub mod scheme;
pub mod step;
