pub mod artifact;
pub mod definition;

pub use definition::*;
