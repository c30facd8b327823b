//! ACPC game definitions.
//!
//! The sweep only needs the deck geometry and round structure, but the
//! whole definition is read and validated so that a file describing some
//! other game fails loudly before any enumeration starts.
pub mod betting;
pub use betting::*;

pub mod game;
pub use game::*;

pub mod key;
pub use key::*;
