use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player may see of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub covered: bool,
    pub revealed: Option<CellValue>,
    pub flag_owner: Option<PlayerId>,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        Self {
            covered: cell.is_covered(),
            revealed: cell.revealed(),
            flag_owner: cell.flag_owner(),
        }
    }
}

/// Snapshot of everything a presentation layer draws, with hidden values stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub cells: Array2<CellView>,
    pub remaining_flags: Vec<CellCount>,
    pub current_player: PlayerId,
    pub state: EngineState,
}

impl BoardView {
    pub fn from_controller(game: &GameController) -> Self {
        let board = game.board();
        Self {
            size: board.size(),
            cells: board.cells().map(|&cell| CellView::from(cell)),
            remaining_flags: game.ledger().remaining_all().to_vec(),
            current_player: game.current_player(),
            state: game.state(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidCoords);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_game() -> GameController {
        let layout = MineLayout::from_mine_coords((4, 4), &[(3, 3)]).unwrap();
        let mut game = GameController::with_layout(&layout, 2, 0).unwrap();
        game.left_click((2, 2)).unwrap();
        game.right_click((3, 3)).unwrap();
        game
    }

    #[test]
    fn view_hides_covered_values() {
        let view = started_game().view();

        assert_eq!(
            view.cell_at((2, 2)),
            CellView {
                covered: false,
                revealed: Some(CellValue::Count(1)),
                flag_owner: None,
            }
        );
        assert_eq!(
            view.cell_at((3, 3)),
            CellView {
                covered: true,
                revealed: None,
                flag_owner: Some(PlayerId(1)),
            }
        );
        assert_eq!(view.cell_at((0, 0)).revealed, None);
        assert!(view.cell_at((0, 0)).covered);
    }

    #[test]
    fn view_tracks_turn_and_flags() {
        let view = started_game().view();

        assert_eq!(view.current_player, PlayerId(0));
        assert_eq!(view.remaining_flags, [1, 0]);
        assert_eq!(view.state, EngineState::Active);
        assert_eq!(view.validate(), Ok(()));
    }

    #[test]
    fn view_serializes_for_the_presentation_layer() {
        let view = started_game().view();

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["current_player"], 0);
        assert_eq!(json["remaining_flags"], serde_json::json!([1, 0]));
        let back: BoardView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let mut view = started_game().view();
        view.size = (5, 4);

        assert_eq!(view.validate(), Err(GameError::InvalidCoords));
    }
}
