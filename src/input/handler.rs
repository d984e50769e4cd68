use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::{Game, GameState};

/// Route a key press to the action it triggers on the current screen.
/// Quitting is handled by the main loop, not here.
pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) {
    if kind == KeyEventKind::Release {
        return;
    }

    match game.game_state {
        GameState::Home => match key_code {
            KeyCode::Enter | KeyCode::Char(' ') => game.start_adventure(),
            KeyCode::Char('c') | KeyCode::Char('C') => game.open_collection(),
            _ => {}
        },
        GameState::Playing => match key_code {
            KeyCode::Left => game.move_cursor(0, -1),
            KeyCode::Right => game.move_cursor(0, 1),
            KeyCode::Up => game.move_cursor(-1, 0),
            KeyCode::Down => game.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => game.select(),
            KeyCode::Char('h') | KeyCode::Char('H') => game.request_hint(),
            KeyCode::Char('s') | KeyCode::Char('S') => game.shuffle(),
            KeyCode::Esc => game.go_home(),
            _ => {}
        },
        GameState::LevelComplete => match key_code {
            KeyCode::Enter | KeyCode::Char(' ') => game.next_level(),
            KeyCode::Esc => game.go_home(),
            _ => {}
        },
        GameState::GameOver => match key_code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => game.retry(),
            KeyCode::Esc => game.go_home(),
            _ => {}
        },
        GameState::GameComplete => match key_code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') => {
                game.open_collection()
            }
            KeyCode::Esc => game.go_home(),
            _ => {}
        },
        GameState::Collection => match key_code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => game.go_home(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::save::Saver;

    fn test_game(tag: &str) -> Game {
        let dir = std::env::temp_dir().join(format!("linkup-input-{}-{}", tag, std::process::id()));
        Game::new(Saver::new(dir), None)
    }

    #[test]
    fn enter_on_home_starts_a_level() {
        let mut game = test_game("start");
        handle_input(&mut game, KeyCode::Enter, KeyEventKind::Press);
        assert_eq!(game.game_state, GameState::Playing);
    }

    #[test]
    fn escape_returns_to_home() {
        let mut game = test_game("escape");
        handle_input(&mut game, KeyCode::Enter, KeyEventKind::Press);
        handle_input(&mut game, KeyCode::Esc, KeyEventKind::Press);
        assert_eq!(game.game_state, GameState::Home);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut game = test_game("release");
        handle_input(&mut game, KeyCode::Enter, KeyEventKind::Release);
        assert_eq!(game.game_state, GameState::Home);
    }

    #[test]
    fn arrows_move_the_cursor() {
        let mut game = test_game("arrows");
        handle_input(&mut game, KeyCode::Enter, KeyEventKind::Press);
        let before = game.cursor;
        handle_input(&mut game, KeyCode::Right, KeyEventKind::Press);
        handle_input(&mut game, KeyCode::Down, KeyEventKind::Press);
        assert_eq!(game.cursor.row, before.row + 1);
        assert_eq!(game.cursor.col, before.col + 1);
    }
}
