use core::ops::ControlFlow;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag budgets, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chebyshev distance between two positions.
pub const fn chebyshev((ax, ay): Coord2, (bx, by): Coord2) -> Coord {
    let dx = ax.abs_diff(bx);
    let dy = ay.abs_diff(by);
    if dx > dy { dx } else { dy }
}

/// Unit offset towards one of the eight Moore neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// All eight directions, row-major: `dy` outer, `dx` inner.
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(0, -1),
        Direction::new(1, -1),
        Direction::new(-1, 0),
        Direction::new(1, 0),
        Direction::new(-1, 1),
        Direction::new(0, 1),
        Direction::new(1, 1),
    ];

    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// Moves `coords` one unit along this direction, returning a value only when it remains in bounds.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (x, y) = coords;
        let (max_x, max_y) = bounds;

        let next_x = x.checked_add_signed(self.dx)?;
        if next_x >= max_x {
            return None;
        }

        let next_y = y.checked_add_signed(self.dy)?;
        if next_y >= max_y {
            return None;
        }

        Some((next_x, next_y))
    }
}

/// In-bounds neighbor position together with the direction it lies in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub coords: Coord2,
    pub direction: Direction,
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (x, y) = self.dim();
        // boards are built from `Coord` sizes, so both axes fit
        let size = (x as Coord, y as Coord);
        NeighborIter::new(index, size)
    }
}

/// Deterministic Moore-neighborhood enumeration, skipping out-of-bounds positions.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }

    /// Drops the directions and yields only positions.
    pub fn positions(self) -> impl Iterator<Item = Coord2> {
        self.map(|neighbor| neighbor.coords)
    }
}

impl Iterator for NeighborIter {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(coords) = direction.step(self.center, self.bounds) {
                return Some(Neighbor { coords, direction });
            }
        }
    }
}

/// Visits every in-bounds neighbor of `center` in row-major order, halting as soon as `visit`
/// breaks and handing back the break value.
pub fn for_each_neighbor<B>(
    bounds: Coord2,
    center: Coord2,
    visit: impl FnMut(Neighbor) -> ControlFlow<B>,
) -> Option<B> {
    match NeighborIter::new(center, bounds).try_for_each(visit) {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    }
}
