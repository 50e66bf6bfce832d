use serde::{Deserialize, Serialize};

use crate::*;

/// What lies under a cell once the board is populated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// Number of mines among the Moore neighbors, `0..=8`.
    Count(u8),
    Mine,
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Revealed numbers that carry information, i.e. a positive count.
    pub const fn is_positive_count(self) -> bool {
        matches!(self, Self::Count(count) if count > 0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Mines have not been placed yet; still hidden from everyone.
    Unpopulated,
    Covered(CellValue),
    Uncovered(CellValue),
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unpopulated
    }
}

/// One board position. A flag can only sit on a covered cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
    flag_owner: Option<PlayerId>,
}

impl Cell {
    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_covered(&self) -> bool {
        matches!(self.state, CellState::Unpopulated | CellState::Covered(_))
    }

    pub const fn is_populated(&self) -> bool {
        !matches!(self.state, CellState::Unpopulated)
    }

    pub const fn flag_owner(&self) -> Option<PlayerId> {
        self.flag_owner
    }

    pub const fn is_flagged(&self) -> bool {
        self.flag_owner.is_some()
    }

    pub fn is_flagged_by(&self, player: PlayerId) -> bool {
        self.flag_owner == Some(player)
    }

    pub fn flag_symbol(&self) -> Option<Symbol> {
        self.flag_owner.map(PlayerId::symbol)
    }

    /// Value of an uncovered cell, `None` while it is still covered.
    pub const fn revealed(&self) -> Option<CellValue> {
        match self.state {
            CellState::Uncovered(value) => Some(value),
            _ => None,
        }
    }

    /// Value regardless of coverage, `None` before population.
    pub const fn value(&self) -> Option<CellValue> {
        match self.state {
            CellState::Unpopulated => None,
            CellState::Covered(value) | CellState::Uncovered(value) => Some(value),
        }
    }

    /// Assigns the hidden value; only the first call on a cell has any effect.
    pub(crate) fn populate(&mut self, value: CellValue) -> bool {
        if self.is_populated() {
            return false;
        }
        self.state = CellState::Covered(value);
        true
    }

    pub fn can_uncover(&self) -> Result<()> {
        match self.state {
            CellState::Uncovered(_) => Err(GameError::NotCovered),
            _ if self.is_flagged() => Err(GameError::Flagged),
            CellState::Unpopulated => Err(GameError::NotPopulated),
            CellState::Covered(_) => Ok(()),
        }
    }

    pub(crate) fn uncover(&mut self) -> Result<CellValue> {
        self.can_uncover()?;
        let CellState::Covered(value) = self.state else {
            return Err(GameError::NotPopulated);
        };
        self.state = CellState::Uncovered(value);
        self.flag_owner = None;
        Ok(value)
    }

    pub fn can_flag(&self) -> Result<()> {
        if !self.is_covered() {
            Err(GameError::NotCovered)
        } else if self.is_flagged() {
            Err(GameError::Flagged)
        } else {
            Ok(())
        }
    }

    pub(crate) fn flag(&mut self, player: PlayerId) -> Result<()> {
        self.can_flag()?;
        self.flag_owner = Some(player);
        Ok(())
    }

    /// Checks an unflag, optionally restricted to flags placed by `player`.
    pub fn can_unflag(&self, player: Option<PlayerId>) -> Result<PlayerId> {
        if !self.is_covered() {
            return Err(GameError::NotCovered);
        }
        let owner = self.flag_owner.ok_or(GameError::NotFlagged)?;
        match player {
            Some(player) if player != owner => Err(GameError::NotFlagOwner { owner }),
            _ => Ok(owner),
        }
    }

    pub(crate) fn unflag(&mut self, player: Option<PlayerId>) -> Result<PlayerId> {
        let owner = self.can_unflag(player)?;
        self.flag_owner = None;
        Ok(owner)
    }
}
