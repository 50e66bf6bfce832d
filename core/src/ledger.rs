use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flags each player still has in hand. Every player starts with one flag per mine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagLedger {
    budget: CellCount,
    remaining: Vec<CellCount>,
}

impl FlagLedger {
    pub fn new(players: u8, budget: CellCount) -> Self {
        Self {
            budget,
            remaining: vec![budget; usize::from(players)],
        }
    }

    pub fn budget(&self) -> CellCount {
        self.budget
    }

    pub fn players(&self) -> u8 {
        // built from a `u8` player count
        self.remaining.len() as u8
    }

    /// Flags left for `player`, zero for a seat that does not exist.
    pub fn remaining(&self, player: PlayerId) -> CellCount {
        self.remaining.get(player.index()).copied().unwrap_or(0)
    }

    pub fn remaining_all(&self) -> &[CellCount] {
        &self.remaining
    }

    /// Spends one flag.
    pub fn take(&mut self, player: PlayerId) -> Result<()> {
        match self.remaining.get_mut(player.index()) {
            Some(left) if *left > 0 => {
                *left -= 1;
                Ok(())
            }
            _ => Err(GameError::NoFlagsLeft),
        }
    }

    /// Returns one flag, never exceeding the budget. Returns whether the count changed.
    pub fn give_back(&mut self, player: PlayerId) -> bool {
        match self.remaining.get_mut(player.index()) {
            Some(left) if *left < self.budget => {
                *left += 1;
                true
            }
            _ => false,
        }
    }
}
