//! Card piles.
//!
//! ## Key Types
//!
//! - `Piles`: draw, hand, discard and exhaust for one combat
//! - `Pile`: names one of the four
//! - `DrawOutcome`: how many cards a draw produced
//!
//! Draws reshuffle the discard pile when the draw pile runs dry.

pub mod piles;

pub use piles::{DrawOutcome, Pile, Piles};
