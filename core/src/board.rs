use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells changed by a single uncover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Value of the clicked cell.
    pub value: CellValue,
    /// The clicked cell first, then every cell the zero cascade opened.
    pub opened: Vec<Coord2>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    populated: bool,
}

impl Board {
    pub fn new(size: Coord2, mine_count: CellCount) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count,
            populated: false,
        }
    }

    /// Builds an already populated board, used for synthetic setups.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let mut board = Self::new(layout.size(), layout.mine_count());
        board.fill(layout);
        board
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Places mines with `generator` keeping `avoid` clear. Returns `false` if the board was
    /// already populated, in which case nothing changes.
    pub fn populate_with<G: MineGenerator + ?Sized>(
        &mut self,
        generator: &mut G,
        avoid: Coord2,
    ) -> Result<bool> {
        if self.populated {
            return Ok(false);
        }
        let avoid = self.validate_coords(avoid)?;
        let layout = generator.generate(self.size(), self.mine_count, avoid);
        self.populate(&layout)
    }

    pub fn populate(&mut self, layout: &MineLayout) -> Result<bool> {
        if self.populated {
            return Ok(false);
        }
        if layout.size() != self.size() {
            return Err(GameError::InvalidCoords);
        }
        self.fill(layout);
        Ok(true)
    }

    fn fill(&mut self, layout: &MineLayout) {
        for ((x, y), cell) in self.cells.indexed_iter_mut() {
            let coords = (x as Coord, y as Coord);
            let value = if layout.contains_mine(coords) {
                CellValue::Mine
            } else {
                CellValue::Count(layout.adjacent_mine_count(coords))
            };
            cell.populate(value);
        }
        self.mine_count = layout.mine_count();
        self.populated = true;
        log::debug!(
            "Populated {:?} board with {} mines",
            self.size(),
            self.mine_count
        );
    }

    /// Uncovers `coords`; a zero opens its whole connected zero region plus the numbered border.
    pub fn uncover(&mut self, coords: Coord2) -> Result<Reveal> {
        let coords = self.validate_coords(coords)?;
        let value = self.cells[coords.to_nd_index()].uncover()?;
        let mut opened = vec![coords];
        log::debug!("Uncovered cell at {:?}, value: {:?}", coords, value);

        if value == CellValue::Count(0) {
            let mut visited = BTreeSet::from([coords]);
            let mut to_visit: VecDeque<_> = self
                .iter_neighbors(coords)
                .positions()
                .filter(|&pos| self[pos].can_uncover().is_ok())
                .collect();
            log::trace!(
                "Starting cascade from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                let Ok(visit_value) = self.cells[visit_coords.to_nd_index()].uncover() else {
                    log::trace!("Skipping cell at {:?}", visit_coords);
                    continue;
                };
                opened.push(visit_coords);
                log::trace!(
                    "Cascade opened cell at {:?}, value: {:?}",
                    visit_coords,
                    visit_value
                );

                if visit_value == CellValue::Count(0) {
                    to_visit.extend(
                        self.iter_neighbors(visit_coords)
                            .positions()
                            .filter(|&pos| self[pos].can_uncover().is_ok())
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        Ok(Reveal { value, opened })
    }

    pub fn flag(&mut self, coords: Coord2, player: PlayerId) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()].flag(player)
    }

    /// Removes a flag, restricted to flags placed by `player` when given. Returns the owner.
    pub fn unflag(&mut self, coords: Coord2, player: Option<PlayerId>) -> Result<PlayerId> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()].unflag(player)
    }

    /// A flag by `player` on `coords` must touch a revealed positive number or one of the
    /// player's own flags.
    pub fn has_flag_support(&self, coords: Coord2, player: PlayerId) -> bool {
        self.iter_neighbors(coords).positions().any(|pos| {
            let cell = self[pos];
            cell.revealed().is_some_and(CellValue::is_positive_count) || cell.is_flagged_by(player)
        })
    }

    pub fn flags_of(&self, player: PlayerId) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_flagged_by(player))
            .count() as CellCount
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.value().is_some_and(CellValue::is_mine))
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .positions()
            .filter(|&pos| self[pos].value().is_some_and(CellValue::is_mine))
            .count() as u8
    }

    pub fn covered_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_covered()).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
