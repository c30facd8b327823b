//! Classifying a complete table as a win, loss or tie for the player.
pub mod oracle;
pub use oracle::*;

pub mod outcome;
pub use outcome::*;

pub mod seat;
pub use seat::*;

pub mod table;
pub use table::*;
