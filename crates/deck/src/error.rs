// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck errors.
use std::{io, path::PathBuf};
use thiserror::Error;

/// Deck operations result.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors returned by deck operations.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Reading or writing a deck file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
    /// Dealing more cards than there are in the deck.
    #[error("cannot deal {size} cards from a deck of {len}")]
    OutOfRange {
        /// The requested hand size.
        size: usize,
        /// The number of cards in the deck.
        len: usize,
    },
}

impl DeckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DeckError::Io {
            path: path.into(),
            source,
        }
    }
}
