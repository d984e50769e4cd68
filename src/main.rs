use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, path::PathBuf, time::Duration};

mod constants;
mod game;
mod input;
mod ui;

use game::save::Saver;
use game::Game;
use input::handle_input;
use ui::ui;

/// Terminal link-up tile-matching game.
#[derive(Parser)]
#[command(about, version)]
struct Args {
    /// Delete the saved progress before starting
    #[arg(long, default_value_t = false)]
    reset_progress: bool,

    /// Start at the given level (development aid)
    #[arg(short, long)]
    level: Option<u32>,

    /// Directory holding the save file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.debug {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let saver = Saver::new(Saver::resolve_data_dir(args.data_dir));
    if args.reset_progress {
        saver.delete();
    }
    let save = saver.load()?;
    let mut game = Game::new(saver, save);
    if let Some(level) = args.level {
        game.levels.set_current(level);
    }

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    // Game loop
    loop {
        terminal.draw(|f| ui(f, &game))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    _ => handle_input(&mut game, code, kind),
                }
            }
        }

        game.update()?;
    }

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
