//! Command line entry point.
pub mod args;
pub use args::*;

pub mod driver;
pub use driver::*;
