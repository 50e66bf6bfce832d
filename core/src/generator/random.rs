use ndarray::Array2;
use rand::Rng;

use super::*;

/// Purely random placement by rejection sampling: draw uniform positions until one lands outside the
/// first click's 3×3 block and off every existing mine.
#[derive(Debug)]
pub struct RejectionSampler<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RejectionSampler<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

/// Number of positions outside the Chebyshev-1 block around `avoid`.
fn placeable_cells(size: Coord2, avoid: Coord2) -> CellCount {
    let blocked = NeighborIter::new(avoid, size).count() as CellCount + 1;
    mult(size.0, size.1).saturating_sub(blocked)
}

impl<R: Rng + ?Sized> MineGenerator for RejectionSampler<'_, R> {
    fn generate(&mut self, size: Coord2, mines: CellCount, avoid: Coord2) -> MineLayout {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        let placeable = placeable_cells(size, avoid);
        let target = if mines > placeable {
            log::warn!(
                "Minefield cannot fit {} mines around {:?}, placing {} instead",
                mines,
                avoid,
                placeable
            );
            placeable
        } else {
            mines
        };

        let mut placed = 0;
        while placed < target {
            let coords = (
                self.rng.random_range(0..size.0),
                self.rng.random_range(0..size.1),
            );
            if chebyshev(coords, avoid) <= 1 || mine_mask[coords.to_nd_index()] {
                continue;
            }
            mine_mask[coords.to_nd_index()] = true;
            placed += 1;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Placed {} mines on {:?} avoiding {:?}",
            layout.mine_count(),
            size,
            avoid
        );
        layout
    }
}
