use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Lays out `mines` mines on a board of `size`, keeping the 3×3 block around `avoid` clear
    /// when the strategy supports it.
    fn generate(&mut self, size: Coord2, mines: CellCount, avoid: Coord2) -> MineLayout;
}

/// A fixed layout generates itself, ignoring the requested count and safe zone.
impl MineGenerator for MineLayout {
    fn generate(&mut self, size: Coord2, mines: CellCount, _avoid: Coord2) -> MineLayout {
        if self.size() != size || self.mine_count() != mines {
            log::warn!(
                "Fixed layout is {:?} with {} mines, requested {:?} with {}",
                self.size(),
                self.mine_count(),
                size,
                mines
            );
        }
        self.clone()
    }
}
