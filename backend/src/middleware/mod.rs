pub mod schemes;

pub use schemes::*;
