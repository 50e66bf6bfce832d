#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use ledger::*;
pub use line::*;
pub use player::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod engine;
mod error;
mod generator;
mod ledger;
mod line;
mod player;
mod taunt;
mod tile;
mod types;
mod view;

/// Cells in the 3×3 block around the first click that never hold a mine.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub players: u8,
}

impl GameConfig {
    /// 16×16 board, 20 mines, two players.
    pub const CLASSIC: GameConfig = GameConfig::new_unchecked((16, 16), 20, 2);

    pub const fn new_unchecked(size: Coord2, mines: CellCount, players: u8) -> Self {
        Self {
            size,
            mines,
            players,
        }
    }

    pub fn new(size: Coord2, mines: CellCount, players: u8) -> Result<Self, ConfigError> {
        let config = Self::new_unchecked(size, mines, players);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.mines == 0 {
            return Err(ConfigError::NoMines);
        }
        if self.mines > self.max_mines() {
            return Err(ConfigError::TooManyMines {
                requested: self.mines,
                max: self.max_mines(),
            });
        }
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Largest mine count that always leaves room outside the first click's safe zone.
    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(SAFE_ZONE_CELLS + 1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Where the mines are, independent of any play state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        // at most 255×255 cells, always fits
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.mine_mask.dim();
        (x as Coord, y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // a cell has at most eight neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .positions()
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|(_, is_mine)| **is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mine_mask[(x as usize, y as usize)]
    }
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// `winner` completed a line of flags.
    Won {
        winner: PlayerId,
        loser: PlayerId,
        line: Line,
    },
    /// `loser` uncovered the mine at `mine`.
    Lost {
        loser: PlayerId,
        winner: PlayerId,
        mine: Coord2,
    },
}

impl GameResult {
    pub const fn winner(self) -> PlayerId {
        match self {
            Self::Won { winner, .. } | Self::Lost { winner, .. } => winner,
        }
    }

    pub const fn loser(self) -> PlayerId {
        match self {
            Self::Won { loser, .. } | Self::Lost { loser, .. } => loser,
        }
    }
}

/// Outcome of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cells were uncovered, `cells` counts the clicked cell plus any cascade.
    Uncovered { cells: CellCount },
    Flagged,
    Unflagged,
    GameOver(GameResult),
}

impl MoveOutcome {
    /// Whether the move handed the turn to the next player.
    pub const fn passes_turn(self) -> bool {
        !self.is_game_over()
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}
