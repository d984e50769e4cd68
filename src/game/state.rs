use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::constants::PATH_FLASH_MS;
use crate::game::board::{Grid, Pos};
use crate::game::collection::Collection;
use crate::game::hint::find_pair;
use crate::game::level::{LevelManager, LevelOutcome};
use crate::game::path::{can_connect, Path};
use crate::game::save::{SaveData, Saver};
use crate::game::timer::GameTimer;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Home,
    Playing,
    LevelComplete,
    GameOver,
    GameComplete,
    Collection,
}

/// One game session: the board, the pending selection, and the managers for
/// levels, time, and collectibles. Created once at startup and driven by the
/// input handler and the update loop.
pub struct Game {
    pub grid: Grid,
    pub cursor: Pos,
    pub selected: Option<Pos>,
    pub hint: Option<(Pos, Pos)>,
    pub levels: LevelManager,
    pub timer: GameTimer,
    pub collection: Collection,
    pub game_state: GameState,
    pub last_award: Option<u8>,
    saver: Saver,
    last_path: Option<(Path, Instant)>,
}

impl Game {
    pub fn new(saver: Saver, save: Option<SaveData>) -> Self {
        let (levels, collection) = match save {
            Some(data) => (
                LevelManager::from_save(data.level, data.completed),
                Collection::from_pieces(data.pieces),
            ),
            None => (LevelManager::new(), Collection::new()),
        };
        let timer = GameTimer::new(levels.time_limit());

        Self {
            grid: Grid::empty(),
            cursor: Pos::new(1, 1),
            selected: None,
            hint: None,
            levels,
            timer,
            collection,
            game_state: GameState::Home,
            last_award: None,
            saver,
            last_path: None,
        }
    }

    /// Enter the adventure from the home screen: the collection gallery if
    /// everything is already done, otherwise the current level.
    pub fn start_adventure(&mut self) {
        if self.levels.is_completed() {
            self.game_state = GameState::Collection;
        } else {
            self.start_level();
        }
    }

    /// Deal a fresh board for the current level and start its countdown.
    pub fn start_level(&mut self) {
        info!("starting level {}", self.levels.current());
        self.grid = Grid::generate();
        self.cursor = Pos::new(1, 1);
        self.selected = None;
        self.hint = None;
        self.last_path = None;
        self.last_award = None;
        self.timer.reset();
        self.timer.start();
        self.game_state = GameState::Playing;
    }

    /// Select the cell under the cursor. First selection is remembered;
    /// selecting it again drops it; a second cell attempts the match. The
    /// grid only changes when both kinds are equal and a connection exists.
    pub fn select(&mut self) {
        if self.game_state != GameState::Playing {
            return;
        }
        self.hint = None;

        let pos = self.cursor;
        if self.grid.is_empty(pos) {
            return;
        }

        match self.selected.take() {
            None => self.selected = Some(pos),
            Some(first) if first == pos => {}
            Some(first) => {
                if self.grid.kind_at(first) != self.grid.kind_at(pos) {
                    debug!("kinds differ at {first:?} and {pos:?}");
                    return;
                }
                if let Some(path) = can_connect(&self.grid, first, pos) {
                    self.grid.clear(first);
                    self.grid.clear(pos);
                    self.last_path = Some((path, Instant::now()));
                    debug!("cleared pair {first:?} / {pos:?}, {} tiles left", self.grid.remaining());
                    if self.grid.is_cleared() {
                        self.complete_level();
                    }
                } else {
                    debug!("no path between {first:?} and {pos:?}");
                }
            }
        }
    }

    fn complete_level(&mut self) {
        self.timer.stop();
        self.last_award = self.collection.award_random();
        match self.levels.complete_level() {
            LevelOutcome::GameCompleted => {
                self.collection.unlock_all();
                self.game_state = GameState::GameComplete;
            }
            LevelOutcome::Advanced => self.game_state = GameState::LevelComplete,
        }
        self.persist();
    }

    /// Move on from the level-complete popup.
    pub fn next_level(&mut self) {
        if self.game_state == GameState::LevelComplete {
            self.start_level();
        }
    }

    /// Restart after a game over (progress was already reset to level 1).
    pub fn retry(&mut self) {
        if self.game_state == GameState::GameOver {
            self.start_level();
        }
    }

    fn time_over(&mut self) {
        info!("time over on level {}", self.levels.current());
        self.timer.stop();
        self.levels.reset();
        self.collection.reset();
        self.persist();
        self.selected = None;
        self.hint = None;
        self.game_state = GameState::GameOver;
    }

    /// Back to the title screen; progress is kept.
    pub fn go_home(&mut self) {
        self.game_state = GameState::Home;
    }

    pub fn open_collection(&mut self) {
        self.game_state = GameState::Collection;
    }

    /// Highlight some connectable pair, if any remains.
    pub fn request_hint(&mut self) {
        if self.game_state == GameState::Playing {
            self.hint = find_pair(&self.grid);
            if self.hint.is_none() {
                debug!("no connectable pair left");
            }
        }
    }

    /// Redistribute the remaining tiles (the way out of a stuck board).
    pub fn shuffle(&mut self) {
        if self.game_state == GameState::Playing {
            self.selected = None;
            self.hint = None;
            self.grid.reshuffle();
        }
    }

    pub fn move_cursor(&mut self, drow: isize, dcol: isize) {
        if self.game_state != GameState::Playing {
            return;
        }
        let row = (self.cursor.row as isize + drow).clamp(1, (self.grid.rows() - 2) as isize);
        let col = (self.cursor.col as isize + dcol).clamp(1, (self.grid.cols() - 2) as isize);
        self.cursor = Pos::new(row as usize, col as usize);
    }

    /// The connection line to draw, while it is still fresh.
    pub fn active_path(&self) -> Option<&Path> {
        match &self.last_path {
            Some((path, shown_at)) if shown_at.elapsed() < Duration::from_millis(PATH_FLASH_MS) => {
                Some(path)
            }
            _ => None,
        }
    }

    pub fn update(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.game_state == GameState::Playing && self.timer.is_time_over() {
            self.time_over();
        }

        if let Some((_, shown_at)) = &self.last_path {
            if shown_at.elapsed() >= Duration::from_millis(PATH_FLASH_MS) {
                self.last_path = None;
            }
        }

        Ok(())
    }

    fn persist(&self) {
        let data = SaveData {
            level: self.levels.current(),
            completed: self.levels.is_completed(),
            pieces: self.collection.pieces().collect(),
        };
        if let Err(error) = self.saver.save(&data) {
            warn!("could not save progress: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::constants::{MAX_LEVEL, PIECE_COUNT};

    fn test_game(tag: &str) -> Game {
        let dir = std::env::temp_dir().join(format!("linkup-state-{}-{}", tag, std::process::id()));
        let saver = Saver::new(dir);
        saver.delete();
        Game::new(saver, None)
    }

    /// Board holding only the given same-kind tiles.
    fn sparse_grid(tiles: &[Pos]) -> Grid {
        let mut grid = Grid::empty();
        for &pos in tiles {
            grid.set(pos, Cell::Tile(0));
        }
        grid
    }

    fn select_at(game: &mut Game, pos: Pos) {
        game.cursor = pos;
        game.select();
    }

    #[test]
    fn selecting_an_empty_cell_is_ignored() {
        let mut game = test_game("empty-cell");
        game.start_level();
        game.grid = sparse_grid(&[Pos::new(1, 1)]);
        select_at(&mut game, Pos::new(4, 4));
        assert_eq!(game.selected, None);
    }

    #[test]
    fn reselecting_the_first_cell_deselects_it() {
        let mut game = test_game("deselect");
        game.start_level();
        game.grid = sparse_grid(&[Pos::new(2, 2), Pos::new(5, 3)]);
        select_at(&mut game, Pos::new(2, 2));
        assert_eq!(game.selected, Some(Pos::new(2, 2)));
        select_at(&mut game, Pos::new(2, 2));
        assert_eq!(game.selected, None);
        assert!(!game.grid.is_empty(Pos::new(2, 2)));
    }

    #[test]
    fn matching_pair_is_cleared_and_path_flashed() {
        let mut game = test_game("match");
        game.start_level();
        game.grid = sparse_grid(&[Pos::new(2, 2), Pos::new(5, 3), Pos::new(8, 1), Pos::new(8, 2)]);
        select_at(&mut game, Pos::new(2, 2));
        select_at(&mut game, Pos::new(5, 3));
        assert!(game.grid.is_empty(Pos::new(2, 2)));
        assert!(game.grid.is_empty(Pos::new(5, 3)));
        assert_eq!(game.selected, None);
        assert!(game.active_path().is_some());
        assert_eq!(game.game_state, GameState::Playing);
    }

    #[test]
    fn mismatched_kinds_leave_the_grid_untouched() {
        let mut game = test_game("mismatch");
        game.start_level();
        let mut grid = Grid::empty();
        grid.set(Pos::new(2, 2), Cell::Tile(1));
        grid.set(Pos::new(2, 3), Cell::Tile(2));
        game.grid = grid;
        select_at(&mut game, Pos::new(2, 2));
        select_at(&mut game, Pos::new(2, 3));
        assert!(!game.grid.is_empty(Pos::new(2, 2)));
        assert!(!game.grid.is_empty(Pos::new(2, 3)));
        assert_eq!(game.selected, None);
    }

    #[test]
    fn unconnectable_pair_is_not_cleared() {
        let mut game = test_game("blocked");
        game.start_level();
        let mut grid = Grid::empty();
        for pos in grid.interior_positions().collect::<Vec<_>>() {
            grid.set(pos, Cell::Tile(1));
        }
        grid.set(Pos::new(1, 1), Cell::Tile(0));
        grid.set(Pos::new(8, 5), Cell::Tile(0));
        game.grid = grid;
        select_at(&mut game, Pos::new(1, 1));
        select_at(&mut game, Pos::new(8, 5));
        assert!(!game.grid.is_empty(Pos::new(1, 1)));
        assert!(!game.grid.is_empty(Pos::new(8, 5)));
    }

    #[test]
    fn clearing_the_last_pair_completes_the_level() {
        let mut game = test_game("level-complete");
        game.start_level();
        game.grid = sparse_grid(&[Pos::new(3, 3), Pos::new(3, 4)]);
        select_at(&mut game, Pos::new(3, 3));
        select_at(&mut game, Pos::new(3, 4));
        assert_eq!(game.game_state, GameState::LevelComplete);
        assert_eq!(game.levels.current(), 2);
        assert!(game.last_award.is_some());
        assert_eq!(game.collection.count(), 1);
    }

    #[test]
    fn clearing_the_last_level_completes_the_game() {
        let mut game = test_game("game-complete");
        game.levels.set_current(MAX_LEVEL);
        game.start_level();
        game.grid = sparse_grid(&[Pos::new(3, 3), Pos::new(3, 4)]);
        select_at(&mut game, Pos::new(3, 3));
        select_at(&mut game, Pos::new(3, 4));
        assert_eq!(game.game_state, GameState::GameComplete);
        assert!(game.levels.is_completed());
        assert_eq!(game.collection.count(), PIECE_COUNT as usize);
    }

    #[test]
    fn time_over_resets_progress_and_collection() {
        let mut game = test_game("time-over");
        game.levels.set_current(5);
        game.collection.award_random();
        game.start_level();
        game.timer = GameTimer::new(Duration::ZERO);
        game.timer.start();
        game.update().unwrap();
        assert_eq!(game.game_state, GameState::GameOver);
        assert_eq!(game.levels.current(), 1);
        assert_eq!(game.collection.count(), 0);
    }

    #[test]
    fn retry_after_game_over_restarts_at_level_one() {
        let mut game = test_game("retry");
        game.levels.set_current(9);
        game.start_level();
        game.timer = GameTimer::new(Duration::ZERO);
        game.timer.start();
        game.update().unwrap();
        game.retry();
        assert_eq!(game.game_state, GameState::Playing);
        assert_eq!(game.levels.current(), 1);
    }

    #[test]
    fn restores_progress_from_save() {
        let dir = std::env::temp_dir().join(format!("linkup-state-restore-{}", std::process::id()));
        let saver = Saver::new(dir);
        let save = SaveData {
            level: 7,
            completed: false,
            pieces: vec![2, 9],
        };
        let game = Game::new(saver, Some(save));
        assert_eq!(game.levels.current(), 7);
        assert_eq!(game.collection.count(), 2);
        assert_eq!(game.game_state, GameState::Home);
    }

    #[test]
    fn cursor_stays_inside_the_playable_area() {
        let mut game = test_game("cursor");
        game.start_level();
        game.cursor = Pos::new(1, 1);
        game.move_cursor(-1, -1);
        assert_eq!(game.cursor, Pos::new(1, 1));
        game.move_cursor(100, 100);
        assert_eq!(
            game.cursor,
            Pos::new(game.grid.rows() - 2, game.grid.cols() - 2)
        );
    }

    #[test]
    fn shuffle_drops_selection_and_hint() {
        let mut game = test_game("shuffle");
        game.start_level();
        let pos = game.cursor;
        select_at(&mut game, pos);
        game.request_hint();
        game.shuffle();
        assert_eq!(game.selected, None);
        assert_eq!(game.hint, None);
    }
}
