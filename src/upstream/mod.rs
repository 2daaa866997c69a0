pub mod types;
pub mod openai_compatible;

pub use types::*;
pub use openai_compatible::*;
