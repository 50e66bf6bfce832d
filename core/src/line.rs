use core::ops::ControlFlow;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flags in a row needed to win.
pub const LINE_LENGTH: usize = 3;

/// A completed run of same-symbol flags, starting at the flag that completed it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Coord2,
    pub direction: Direction,
    pub symbol: Symbol,
}

impl Line {
    pub fn cells(&self) -> [Coord2; LINE_LENGTH] {
        let (x, y) = self.origin;
        // the run was found in bounds, so every step stays in `Coord` range
        core::array::from_fn(|step| {
            let step = step as i16;
            (
                (i16::from(x) + step * i16::from(self.direction.dx)) as Coord,
                (i16::from(y) + step * i16::from(self.direction.dy)) as Coord,
            )
        })
    }
}

/// Whether `coords` starts a run of `remaining` flags carrying `symbol`.
///
/// Without a `direction` every neighbor is tried and the run commits to whichever direction it first
/// steps in; with one, only the next cell along it counts.
pub fn check_line(
    board: &Board,
    coords: Coord2,
    remaining: usize,
    direction: Option<Direction>,
    symbol: Symbol,
) -> bool {
    if board[coords].flag_symbol() != Some(symbol) {
        return false;
    }
    if remaining <= 1 {
        return true;
    }
    match direction {
        Some(direction) => direction
            .step(coords, board.size())
            .is_some_and(|next| check_line(board, next, remaining - 1, Some(direction), symbol)),
        None => scan_directions(board, coords, remaining, symbol).is_some(),
    }
}

/// First direction, in neighbor order, along which `coords` continues a run of `remaining` flags.
fn scan_directions(
    board: &Board,
    coords: Coord2,
    remaining: usize,
    symbol: Symbol,
) -> Option<Direction> {
    for_each_neighbor(board.size(), coords, |neighbor| {
        if check_line(
            board,
            neighbor.coords,
            remaining - 1,
            Some(neighbor.direction),
            symbol,
        ) {
            ControlFlow::Break(neighbor.direction)
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// Looks for a line starting at the flag on `origin`.
///
/// Only runs with `origin` at one end are found: a flag that fills the middle of three does not win.
pub fn find_line(board: &Board, origin: Coord2) -> Option<Line> {
    let symbol = board[origin].flag_symbol()?;
    let direction = scan_directions(board, origin, LINE_LENGTH, symbol)?;
    log::trace!(
        "Line of {} from {:?} towards {:?}",
        symbol,
        origin,
        direction
    );
    Some(Line {
        origin,
        direction,
        symbol,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: PlayerId = PlayerId(0);
    const O: PlayerId = PlayerId(1);

    fn flagged(size: Coord2, flags: &[(Coord2, PlayerId)]) -> Board {
        let mut board = Board::from_layout(&MineLayout::from_mine_coords(size, &[]).unwrap());
        for &(coords, player) in flags {
            board.flag(coords, player).unwrap();
        }
        board
    }

    #[test]
    fn horizontal_run_from_endpoint_wins_to_the_east() {
        let board = flagged((16, 16), &[((6, 5), X), ((7, 5), X), ((5, 5), X)]);

        let line = find_line(&board, (5, 5)).unwrap();

        assert_eq!(line.direction, Direction::new(1, 0));
        assert_eq!(line.symbol, Symbol::Cross);
        assert_eq!(line.cells(), [(5, 5), (6, 5), (7, 5)]);
        assert!(check_line(&board, (5, 5), LINE_LENGTH, None, Symbol::Cross));
    }

    #[test]
    fn diagonal_runs_are_found() {
        let board = flagged((8, 8), &[((2, 2), O), ((3, 3), O), ((4, 4), O)]);

        let line = find_line(&board, (4, 4)).unwrap();

        assert_eq!(line.direction, Direction::new(-1, -1));
        assert_eq!(line.cells(), [(4, 4), (3, 3), (2, 2)]);
    }

    #[test]
    fn middle_flag_does_not_complete_a_line() {
        let board = flagged((16, 16), &[((5, 5), X), ((7, 5), X), ((6, 5), X)]);

        assert_eq!(find_line(&board, (6, 5)), None);
        assert!(find_line(&board, (5, 5)).is_some());
    }

    #[test]
    fn bent_runs_do_not_count() {
        let board = flagged((8, 8), &[((1, 1), X), ((2, 1), X), ((3, 2), X)]);

        assert_eq!(find_line(&board, (1, 1)), None);
        assert!(!check_line(&board, (1, 1), LINE_LENGTH, None, Symbol::Cross));
    }

    #[test]
    fn mixed_symbols_do_not_count() {
        let board = flagged((8, 8), &[((1, 1), X), ((2, 1), O), ((3, 1), X)]);

        assert_eq!(find_line(&board, (1, 1)), None);
        assert_eq!(find_line(&board, (3, 1)), None);
    }

    #[test]
    fn players_sharing_a_symbol_share_lines() {
        let board = flagged((8, 8), &[((1, 1), X), ((1, 2), PlayerId(2)), ((1, 3), X)]);

        let line = find_line(&board, (1, 3)).unwrap();

        assert_eq!(line.direction, Direction::new(0, -1));
    }

    #[test]
    fn runs_do_not_wrap_around_edges() {
        let board = flagged((4, 4), &[((2, 0), X), ((3, 0), X), ((0, 1), X)]);

        assert_eq!(find_line(&board, (2, 0)), None);
    }

    #[test]
    fn unflagged_origin_has_no_line() {
        let board = flagged((8, 8), &[((2, 1), X), ((3, 1), X)]);

        assert_eq!(find_line(&board, (1, 1)), None);
    }

    #[test]
    fn short_runs_succeed_on_a_single_matching_cell() {
        let board = flagged((4, 4), &[((1, 1), O)]);

        assert!(check_line(&board, (1, 1), 1, None, Symbol::Nought));
        assert!(!check_line(&board, (1, 1), 1, None, Symbol::Cross));
    }
}
