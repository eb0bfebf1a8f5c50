// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardfile CLI, builds a deck, deals a hand, and saves the deck to a file.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use cardfile_deck::Deck;

#[derive(Debug, Parser)]
struct Cli {
    /// The file the deck is saved to.
    #[clap(long, short, default_value = "cardfile")]
    file: PathBuf,
    /// Number of cards to deal.
    #[clap(long = "hand", short = 'n', default_value_t = 4)]
    hand_size: usize,
    /// Load the deck from this file instead of creating a new one.
    #[clap(long, short)]
    load: Option<PathBuf>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cards = match &cli.load {
        Some(path) => {
            let deck = Deck::read_file(path).context("Failed to load deck")?;
            info!("Loaded {} cards from {}", deck.len(), path.display());
            deck
        }
        None => Deck::new(),
    };

    cards.show_cards();

    let (hand, rest) = cards.clone().deal(cli.hand_size)?;
    println!("hand:");
    hand.show_cards();
    println!("remainder:");
    rest.show_cards();

    // Save the original deck, not the remainder.
    cards
        .save_file(&cli.file)
        .with_context(|| format!("Failed to save deck with {} cards", cards.len()))?;
    info!("Saved {} cards to {}", cards.len(), cli.file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["cardfile"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("cardfile"));
        assert_eq!(cli.hand_size, 4);
        assert!(cli.load.is_none());

        let cli = Cli::try_parse_from(["cardfile", "-f", "deck.txt", "-n", "16"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("deck.txt"));
        assert_eq!(cli.hand_size, 16);

        assert!(Cli::try_parse_from(["cardfile", "--hand", "-1"]).is_err());
    }

    #[test]
    fn run_saves_original_deck() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            file: dir.path().join("cardfile"),
            hand_size: 4,
            load: None,
        };

        run(&cli).unwrap();
        assert_eq!(Deck::read_file(&cli.file).unwrap(), Deck::new());
    }

    #[test]
    fn run_loads_deck() {
        let dir = TempDir::new().unwrap();
        let load = dir.path().join("hand");
        let (hand, _) = Deck::new().deal(4).unwrap();
        hand.save_file(&load).unwrap();

        let cli = Cli {
            file: dir.path().join("cardfile"),
            hand_size: 2,
            load: Some(load),
        };

        run(&cli).unwrap();
        assert_eq!(Deck::read_file(&cli.file).unwrap(), hand);
    }

    #[test]
    fn run_errors() {
        let dir = TempDir::new().unwrap();

        let cli = Cli {
            file: dir.path().join("cardfile"),
            hand_size: Deck::SIZE + 1,
            load: None,
        };
        assert!(run(&cli).is_err());
        assert!(!cli.file.exists());

        let cli = Cli {
            file: dir.path().join("no-such-dir").join("cardfile"),
            hand_size: 4,
            load: None,
        };
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to save deck"));

        let cli = Cli {
            file: dir.path().join("cardfile"),
            hand_size: 4,
            load: Some(dir.path().join("missing")),
        };
        assert!(run(&cli).is_err());
    }
}
