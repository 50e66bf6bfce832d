use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No cell uncovered yet, mines not placed.
    Ready,
    Active,
    Over(GameResult),
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Over(_))
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// State changes reported to observers, in the order they happen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CellChanged(Coord2),
    TurnChanged(PlayerId),
    GameOver(GameResult),
    Restarted,
}

pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// One game session: owns the board and flag ledger and arbitrates turns.
pub struct GameController {
    config: GameConfig,
    board: Board,
    ledger: FlagLedger,
    current_player: PlayerId,
    state: EngineState,
    taunt: Option<String>,
    rng: SmallRng,
    observers: Vec<Box<dyn GameObserver>>,
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("ledger", &self.ledger)
            .field("current_player", &self.current_player)
            .field("state", &self.state)
            .field("taunt", &self.taunt)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Starts a session; mines are placed on the first uncover. `seed` drives every random choice.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.size, config.mines),
            ledger: FlagLedger::new(config.players, config.mines),
            current_player: PlayerId::FIRST,
            state: EngineState::Ready,
            taunt: None,
            rng: SmallRng::seed_from_u64(seed),
            observers: Vec::new(),
        })
    }

    /// Starts a session on a fixed layout. Later restarts go back to random placement.
    pub fn with_layout(layout: &MineLayout, players: u8, seed: u64) -> Result<Self, ConfigError> {
        let config = GameConfig::new(layout.size(), layout.mine_count(), players)?;
        let mut game = Self::new(config, seed)?;
        game.board = Board::from_layout(layout);
        game.state = EngineState::Active;
        Ok(game)
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &FlagLedger {
        &self.ledger
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn has_started(&self) -> bool {
        self.board.is_populated()
    }

    pub fn outcome(&self) -> Option<GameResult> {
        match self.state {
            EngineState::Over(result) => Some(result),
            _ => None,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn remaining_flags(&self, player: PlayerId) -> CellCount {
        self.ledger.remaining(player)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords].into())
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_controller(self)
    }

    /// Game-over message aimed at the loser, once the game has ended.
    pub fn taunt(&self) -> Option<&str> {
        self.taunt.as_deref()
    }

    /// Primary click: uncover.
    pub fn left_click(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.uncover(coords)
    }

    /// Secondary click: take back a flag if the cell has one, otherwise plant one.
    pub fn right_click(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.board[coords].is_flagged() {
            self.unflag(coords)
        } else {
            self.flag(coords)
        }
    }

    pub fn uncover(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords];
        if !cell.is_covered() {
            return Err(GameError::NotCovered);
        }
        if cell.is_flagged() {
            return Err(GameError::Flagged);
        }

        if !self.board.is_populated() {
            let mut generator = RejectionSampler::new(&mut self.rng);
            self.board.populate_with(&mut generator, coords)?;
        }
        self.mark_started();

        let acting = self.current_player;
        let reveal = self.board.uncover(coords)?;
        for &opened in &reveal.opened {
            self.emit(GameEvent::CellChanged(opened));
        }

        if reveal.value.is_mine() {
            let winner = self.random_opponent(acting);
            let result = GameResult::Lost {
                loser: acting,
                winner,
                mine: coords,
            };
            self.end_game(result);
            return Ok(MoveOutcome::GameOver(result));
        }

        self.pass_turn();
        Ok(MoveOutcome::Uncovered {
            cells: reveal.opened.len() as CellCount,
        })
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let acting = self.current_player;
        self.board[coords].can_flag()?;
        if self.ledger.remaining(acting) == 0 {
            return Err(GameError::NoFlagsLeft);
        }
        if !self.board.has_flag_support(coords, acting) {
            return Err(GameError::UnsupportedFlag);
        }

        self.ledger.take(acting)?;
        self.board.flag(coords, acting)?;
        log::debug!("{} flagged {:?}", acting, coords);
        self.emit(GameEvent::CellChanged(coords));

        if let Some(line) = find_line(&self.board, coords) {
            let loser = self.random_opponent(acting);
            let result = GameResult::Won {
                winner: acting,
                loser,
                line,
            };
            self.end_game(result);
            return Ok(MoveOutcome::GameOver(result));
        }

        self.pass_turn();
        Ok(MoveOutcome::Flagged)
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let acting = self.current_player;
        self.board.unflag(coords, Some(acting))?;
        if !self.ledger.give_back(acting) {
            log::warn!("{} unflagged {:?} with a full flag budget", acting, coords);
        }
        log::debug!("{} unflagged {:?}", acting, coords);
        self.emit(GameEvent::CellChanged(coords));

        self.pass_turn();
        Ok(MoveOutcome::Unflagged)
    }

    /// Throws away the board and ledger and starts over with the same configuration.
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.size, self.config.mines);
        self.ledger = FlagLedger::new(self.config.players, self.config.mines);
        self.current_player = PlayerId::FIRST;
        self.state = EngineState::Ready;
        self.taunt = None;
        log::debug!("Restarted {:?}", self.config);
        self.emit(GameEvent::Restarted);
    }

    /// Uniformly random player other than `player`.
    fn random_opponent(&mut self, player: PlayerId) -> PlayerId {
        let pick = self.rng.random_range(0..self.config.players - 1);
        PlayerId(if pick >= player.0 { pick + 1 } else { pick })
    }

    fn pass_turn(&mut self) {
        self.current_player = self.current_player.next(self.config.players);
        log::debug!("Turn passes to {}", self.current_player);
        self.emit(GameEvent::TurnChanged(self.current_player));
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, result: GameResult) {
        if self.state.is_finished() {
            return;
        }
        self.state = EngineState::Over(result);
        self.taunt = Some(crate::taunt::pick(&result, &mut self.rng));
        log::debug!(
            "Game over, {} wins against {}: {:?}",
            result.winner(),
            result.loser(),
            result
        );
        self.emit(GameEvent::GameOver(result));
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
