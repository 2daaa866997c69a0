pub mod interface;
pub mod prompt;
pub mod cleanup;
pub mod languages;
pub mod bridge;

pub use interface::*;
pub use languages::{Language, LANGUAGES};
pub use bridge::*;
