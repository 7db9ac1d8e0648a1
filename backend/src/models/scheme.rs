use crate::types::SchemeId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named top-level entity owning an ordered set of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Scheme {
    pub scheme_id: SchemeId,
    pub scheme_name: String,
}

impl Scheme {
    pub fn new(scheme_id: SchemeId, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_id,
            scheme_name: scheme_name.into(),
        }
    }
}
