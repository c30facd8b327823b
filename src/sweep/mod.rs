//! The exhaustive enumeration engine.
//!
//! - [`Positions`] / [`BoardIterator`] walk every board of a residual deck
//! - [`Matchup`] seats one catalog hand against the opponent
//! - [`Sweep`] runs every matchup, sequentially or across rayon workers
//! - [`Buffer`] optionally stores every [`Record`] at a fixed offset
pub mod boards;
pub use boards::*;

pub mod buffer;
pub use buffer::*;

pub mod engine;
pub use engine::*;

pub mod matchup;
pub use matchup::*;

pub mod progress;
pub use progress::*;

pub mod record;
pub use record::*;

pub mod summary;
pub use summary::*;

pub mod tally;
pub use tally::*;
