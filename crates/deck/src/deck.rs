// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck of cards and its flat file format.
use std::{
    convert::Infallible,
    fmt,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use crate::{Card, DeckError, Result, Suit, Value};

/// The separator between card labels in a serialized deck.
pub const DELIMITER: char = ',';

/// A cards deck.
///
/// The cards order is the order used for display, dealing, and serialization.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a new deck.
    pub const SIZE: usize = 16;

    /// Creates a new deck with all the values of a suit before the next suit.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Value::values().map(move |v| Card::new(v, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Parses a deck serialized with [Deck::to_string].
    ///
    /// An empty string is an empty deck, any other string is split on every
    /// [DELIMITER] and each field, empty ones included, becomes a card.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::default();
        }

        s.split(DELIMITER).map(Card::from).collect()
    }

    /// The number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The deck cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the deck cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Deals `size` cards from the top of the deck.
    ///
    /// Returns the hand and the remaining deck, concatenating the two gives
    /// back the original deck.
    pub fn deal(mut self, size: usize) -> Result<(Deck, Deck)> {
        let len = self.cards.len();
        if size > len {
            return Err(DeckError::OutOfRange { size, len });
        }

        let rest = self.cards.split_off(size);
        Ok((self, Deck { cards: rest }))
    }

    /// Writes one line per card with the card index and label.
    pub fn write_cards<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(w, "{i} {card}")?;
        }

        Ok(())
    }

    /// Prints the deck cards with their index to stdout.
    pub fn show_cards(&self) {
        for (i, card) in self.cards.iter().enumerate() {
            println!("{i} {card}");
        }
    }

    /// Saves the deck to a file, the file is created or truncated.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o666);
        }

        let mut file = opts.open(path).map_err(|e| DeckError::io(path, e))?;
        file.write_all(self.to_string().as_bytes())
            .map_err(|e| DeckError::io(path, e))
    }

    /// Reads a deck saved with [Deck::save_file].
    ///
    /// Card labels are not validated. Use `unwrap_or_default` to get an empty
    /// deck when the file cannot be read.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Deck> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?;
        Ok(Self::parse(&content))
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl FromStr for Deck {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
