//! The 169 canonical starting hands swept against the opponent.
pub mod catalog;
pub use catalog::*;

pub mod category;
pub use category::*;
