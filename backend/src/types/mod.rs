mod id;

pub use id::{SchemeId, StepId};
