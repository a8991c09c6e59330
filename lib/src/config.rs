//! Game configuration.

use crate::{
    error::Error,
    game::{Game, TurnHook},
    size::Size,
    source::{Board, Source},
};
use educe::Educe;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the first generation is filled.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seed {
    /// An unbiased coin flip for every cell.
    #[educe(Default)]
    Random,
    /// Every `m`-th cell in construction order is alive.
    Stripes(usize),
    /// A plaintext board file; its contents define the board size.
    File(PathBuf),
}

/// Game configuration.
///
/// The game will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Extent of the x axis.
    #[educe(Default = 16)]
    pub width: i32,

    /// Extent of the y axis.
    #[educe(Default = 16)]
    pub height: i32,

    /// How the first generation is filled.
    ///
    /// For [`Seed::File`], the board file defines the size and the
    /// `width` / `height` fields are ignored.
    pub seed: Seed,
}

impl Config {
    /// Sets up a new configuration with a given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the seed.
    pub fn set_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Creates a game from the configuration.
    pub fn game(&self) -> Result<Game, Error> {
        self.build(None)
    }

    /// Creates a game that invokes `hook` once per completed turn.
    pub fn game_with_hook(&self, hook: TurnHook) -> Result<Game, Error> {
        self.build(Some(hook))
    }

    fn build(&self, hook: Option<TurnHook>) -> Result<Game, Error> {
        let game = match &self.seed {
            Seed::Random => Self::assemble(Source::Random(self.size()?), hook),
            Seed::Stripes(0) => return Err(Error::ZeroStripesError),
            Seed::Stripes(m) => Self::assemble(Source::Stripes(self.size()?, *m), hook),
            Seed::File(path) => {
                let board = Board::from_path(path)?;
                Self::assemble(Source::Board(&board), hook)
            }
        };
        Ok(game)
    }

    fn assemble(source: Source<'_>, hook: Option<TurnHook>) -> Game {
        match hook {
            Some(hook) => Game::with_hook(source, hook),
            None => Game::new(source),
        }
    }

    fn size(&self) -> Result<Size, Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Size::new(self.width, self.height))
    }
}
