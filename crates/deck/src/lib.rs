// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardfile deck of cards.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use cardfile_deck::{Card, Suit, Value};
//! let card = Card::new(Value::Ace, Suit::Spades);
//! assert_eq!(card.label(), "Ace of Spades");
//! ```
//!
//! and a [Deck] type for dealing hands and saving the deck to a flat file:
//!
//! ```
//! # use cardfile_deck::Deck;
//! let deck = Deck::new();
//! assert_eq!(deck.len(), Deck::SIZE);
//!
//! let (hand, rest) = deck.deal(4).unwrap();
//! assert_eq!(hand.to_string(), "Ace of Spades,Two of Spades,Three of Spades,Four of Spades");
//! assert_eq!(rest.len(), 12);
//! ```
//!
//! A deck is saved as a single line of comma separated card labels, see
//! [Deck::save_file] and [Deck::read_file].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Suit, Value};

mod deck;
pub use deck::{DELIMITER, Deck};

mod error;
pub use error::{DeckError, Result};
