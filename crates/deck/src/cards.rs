// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards definitions.
use std::fmt;

/// A playing card.
///
/// A card is identified only by its label, cards built with [Card::new] have
/// labels of the form `"<Value> of <Suit>"`, cards loaded from a file keep
/// whatever label was stored.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Card(String);

impl Card {
    /// Create a card given a value and suit.
    pub fn new(value: Value, suit: Suit) -> Card {
        Self(format!("{value} of {suit}"))
    }

    /// Returns the card label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Card {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Card {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// Ace
    Ace,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
}

impl Value {
    /// Returns all values.
    pub fn values() -> impl DoubleEndedIterator<Item = Value> {
        use Value::*;
        [Ace, Two, Three, Four].into_iter()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Value::Ace => "Ace",
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
        };

        f.write_str(value)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
        };

        f.write_str(suit)
    }
}
