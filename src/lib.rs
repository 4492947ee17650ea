//! A playing-card deck building and transformation library with optional
//! `no_std` support.
//!
//! The crate builds the canonical 52-card deck and pipes it through a chain
//! of composable [`Transform`]s: sorting, shuffling, adding jokers,
//! filtering, and multiplying the deck into several copies.
//!
//! # Example
//!
//! ```
//! use deckrs::{card, deck};
//!
//! // Three decks shuffled together, two jokers added, twos removed.
//! let cards = deck::new([
//!     deck::decks(3),
//!     deck::jokers(2),
//!     deck::filter(|c| c.rank == card::TWO && !c.is_joker()),
//!     deck::shuffle_seeded(42),
//! ]);
//! assert_eq!(cards.len(), 3 * 52 + 2 - 12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, STANDARD_SUITS, Suit};
pub use deck::{Deck, LessFn, Transform};
pub use error::ParseCardError;
