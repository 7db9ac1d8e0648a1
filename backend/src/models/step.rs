use crate::types::{SchemeId, StepId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An instruction unit identified by its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Step {
    pub step_id: StepId,
    pub step_number: i32,
    pub instructions: String,
    pub scheme_id: SchemeId,
}
