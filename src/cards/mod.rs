//! Card representation and hand evaluation.
//!
//! - [`Card`] is one card as `rank * 4 + suit` in a single byte
//! - [`Hand`] is an unordered set of cards as a 52-bit mask
//! - [`Hole`] is a seat's two private cards
//! - [`Board`] is five community cards, ascending
//! - [`Deck`] is the residual deck after hole cards are dealt
//! - [`Evaluator`] / [`Strength`] rank the best five cards, with kickers
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
