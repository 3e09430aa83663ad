use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of clicking a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl ClickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// A single-player session: the board, the player's overlay, and where the game stands.
///
/// Valid transitions:
/// - Ready -> Active
/// - Ready | Active -> Won
/// - Ready | Active -> Lost
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    overlay: DisplayOverlay,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let overlay = DisplayOverlay::for_board(&board);
        Self {
            board,
            overlay,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(config: BoardConfig, seed: u64) -> Result<Self> {
        let board = BernoulliGenerator::new(seed).generate(config)?;
        Ok(Self::new(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn overlay(&self) -> &DisplayOverlay {
        &self.overlay
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Clicks `coords`. Clicks outside the board or on an uncovered slot change nothing.
    ///
    /// Hitting a mine ends the game without touching the overlay.
    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        self.check_not_finished()?;

        if self.overlay.slot(coords) != Some(Slot::Covered) {
            return Ok(ClickOutcome::NoChange);
        }

        let revealed = reveal(&self.board, coords);
        if revealed.hit_mine() {
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(ClickOutcome::HitMine);
        }

        self.overlay.merge(&revealed);
        if self.overlay.is_won(&self.board) {
            self.end_game(true);
            Ok(ClickOutcome::Won)
        } else {
            self.mark_started();
            Ok(ClickOutcome::Revealed)
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = GameState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::info!("Game ended: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(width: Coord, height: Coord, mines: &[Coord2]) -> Game {
        let config = BoardConfig::new_unchecked(width, height, 0.0);
        Game::new(Board::from_mine_coords(config, mines).unwrap())
    }

    #[test]
    fn corner_mine_click_loses_and_leaves_overlay_alone() {
        let mut game = game(4, 4, &[(3, 0), (0, 3)]);
        assert_eq!(game.click((2, 0)).unwrap(), ClickOutcome::Revealed);
        let before = game.overlay().clone();

        let outcome = game.click((0, 3)).unwrap();

        assert_eq!(outcome, ClickOutcome::HitMine);
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 3)));
        assert_eq!(game.overlay(), &before);
        assert_eq!(game.overlay().slot((0, 3)), Some(Slot::Covered));
    }

    #[test]
    fn corner_mines_session_is_won_by_clicking_the_clear_corner() {
        let mut game = game(4, 4, &[(3, 0), (0, 3)]);

        let outcome = game.click((3, 3)).unwrap();

        assert_eq!(outcome, ClickOutcome::Won);
        assert_eq!(game.overlay().uncovered_count(), 14);
        assert_eq!(
            game.overlay().slot((3, 1)),
            Some(Slot::Uncovered {
                count: 1,
                mine: false
            })
        );
        assert_eq!(game.overlay().slot((3, 0)), Some(Slot::Covered));
        assert_eq!(game.triggered_mine(), None);
    }

    #[test]
    fn numbered_click_activates_game() {
        let mut game = game(3, 1, &[(0, 0)]);

        assert!(game.state().is_ready());
        assert_eq!(game.click((1, 0)).unwrap(), ClickOutcome::Revealed);
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.click((2, 0)).unwrap(), ClickOutcome::Won);
        assert!(game.is_finished());
    }

    #[test]
    fn uncovered_or_outside_clicks_change_nothing() {
        let mut game = game(3, 1, &[(0, 0)]);
        game.click((1, 0)).unwrap();

        assert_eq!(game.click((1, 0)).unwrap(), ClickOutcome::NoChange);
        assert_eq!(game.click((-1, 0)).unwrap(), ClickOutcome::NoChange);
        assert_eq!(game.click((3, 0)).unwrap(), ClickOutcome::NoChange);
        assert!(!ClickOutcome::NoChange.has_update());
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn finished_game_rejects_clicks() {
        let mut game = game(2, 1, &[(0, 0)]);

        assert_eq!(game.click((1, 0)).unwrap(), ClickOutcome::Won);
        assert_eq!(game.click((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn generated_game_is_reproducible() {
        let config = BoardConfig::default();

        let first = Game::generate(config, 1234).unwrap();
        let second = Game::generate(config, 1234).unwrap();

        assert_eq!(first.board(), second.board());
        assert_eq!(first.overlay().size(), (8, 8));
    }
}
