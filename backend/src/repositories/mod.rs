pub mod scheme;

pub use scheme::{SchemeRepository, SchemeRepositoryTrait};
