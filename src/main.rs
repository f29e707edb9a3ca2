use anyhow::Result;
use rand::Rng;
use tracing_subscriber::EnvFilter;

use nihongo_drop::{Event, GameConfig, GameMode, GameSession, JlptLevel};

/// Headless demo: plays a randomly steered session and logs what the engine
/// reports, so the core loop can be watched without any renderer attached.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GameConfig::from_env()?;
    let width = config.grid_width;
    let mut session = GameSession::with_builtin_words(config, GameMode::Hiragana, JlptLevel::N5);
    let mut rng = rand::rng();

    session.start();
    tracing::info!("session started");

    let mut ticks = 0u32;
    while session.is_running() && ticks < 2000 {
        // Random steering stands in for player input.
        if rng.random_bool(0.3) {
            session.move_to(rng.random_range(0..width));
        }
        if rng.random_bool(0.05) {
            session.hard_drop();
        }
        session.tick(250);
        ticks += 1;

        for event in session.take_events() {
            match event {
                Event::WordsMatched { matches } => {
                    for m in &matches {
                        tracing::info!(word = %m.kanji, level = ?m.level, cells = m.cells.len(), "match");
                    }
                    print_grid(&session);
                }
                Event::GameOver => {
                    tracing::info!(ticks, "game over");
                    print_grid(&session);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn print_grid(session: &GameSession) {
    let grid = session.grid();
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).unwrap_or("・"))
            .collect();
        println!("{}", row);
    }
    println!();
}
