//! Recycle Sorter entry point
//!
//! Loads settings and the high score, then runs the fixed-rate game loop in
//! the terminal: input, update, render, wait for the next tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::Event;

use recycle_sorter::audio::AudioManager;
use recycle_sorter::consts::FPS;
use recycle_sorter::platform::JsonFileStore;
use recycle_sorter::platform::terminal::{BellAudio, CellCanvas, Terminal, map_event};
use recycle_sorter::{Game, HighScore, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Recycle Sorter starting...");

    let settings = Settings::from_env();
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let high_score = HighScore::load(Box::new(JsonFileStore::new(&settings.high_score_path)));
    let mut audio = if settings.audio {
        AudioManager::new(Box::new(BellAudio))
    } else {
        log::info!("Audio disabled by settings");
        AudioManager::disabled()
    };
    audio.set_muted(settings.muted);

    let mut game = Game::new(seed, high_score, audio);

    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("Bye (high score {})", game.high_score());
    result
}

fn run(term: &mut Terminal, game: &mut Game) -> Result<()> {
    let tick = Duration::from_secs(1) / FPS;
    let (cols, rows) = Terminal::size();
    let mut canvas = CellCanvas::new(cols, rows);
    let mut last = Instant::now();

    while game.is_running() {
        let events = term.events_until(last + tick)?;

        let mut inputs = Vec::with_capacity(events.len());
        for event in &events {
            if let Event::Resize(cols, rows) = event {
                canvas.resize(*cols, *rows);
            } else if let Some(input) = map_event(event, &canvas) {
                inputs.push(input);
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        game.frame(inputs, dt);

        canvas.clear();
        game.render(&mut canvas);
        term.present(&canvas)?;
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
