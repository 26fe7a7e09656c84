//! Terminal gridfall runner (default binary).
//!
//! Owns the clock and the event loop; the engine itself is synchronous and
//! only moves when fed commands or timestamps.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Game;
use gridfall::input::{map_key, should_quit};
use gridfall::term::{GameView, TerminalSession};

const POLL_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalSession::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalSession) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(seed);

    let view = GameView::default();
    let clock = Instant::now();

    loop {
        term.draw(&view, &game.snapshot())?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ignore terminal auto-repeat and release events.
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key.code) {
                        game.apply(action);
                    }
                }
            }
        }

        game.tick(clock.elapsed().as_millis() as u64);
    }
}
