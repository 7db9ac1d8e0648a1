//! Request guards for the schemes API.
//!
//! Each guard checks one precondition against the scheme store and either
//! lets the request through or answers with a `{"message": ...}` error.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod types;
pub mod validation;
