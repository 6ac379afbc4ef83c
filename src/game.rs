//! Top-level game controller
//!
//! Owns the round, the receptacles, the high score and audio, and moves
//! between menu, play, pause and game over. Each frame: dispatch input,
//! update if playing, render.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, Cue};
use crate::consts::MAX_FRAME_DT;
use crate::highscores::HighScore;
use crate::platform::{InputEvent, KeyAction};
use crate::renderer::{Canvas, scene};
use crate::sim::{self, Category, EndReason, GameEvent, Receptacle, RoundState};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Round ended
    GameOver,
}

/// The whole game: round state plus everything around it
pub struct Game {
    phase: GamePhase,
    round: RoundState,
    receptacles: [Receptacle; Category::COUNT],
    high_score: HighScore,
    audio: AudioManager,
    last_end: Option<EndReason>,
    running: bool,
}

impl Game {
    pub fn new(seed: u64, high_score: HighScore, audio: AudioManager) -> Self {
        Self {
            phase: GamePhase::Menu,
            round: RoundState::new(seed),
            receptacles: sim::layout_receptacles(),
            high_score,
            audio,
            last_end: None,
            running: true,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Mutable access for harnesses that need to stage a situation
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub fn receptacles(&self) -> &[Receptacle] {
        &self.receptacles
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn muted(&self) -> bool {
        self.audio.muted()
    }

    pub fn last_end(&self) -> Option<EndReason> {
        self.last_end
    }

    /// False once quit was requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One full frame minus rendering: all pending input, then the update step
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>, dt: f32) {
        for event in events {
            if !self.running {
                return;
            }
            self.handle(event);
        }
        self.update(dt);
    }

    /// Dispatch a single input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(action) => self.handle_key(action),
            InputEvent::PointerDown(pos) if self.phase == GamePhase::Playing => {
                sim::grab(&mut self.round, pos);
            }
            InputEvent::PointerMove(pos) if self.phase == GamePhase::Playing => {
                sim::drag(&mut self.round, pos);
            }
            InputEvent::PointerUp(pos) if self.phase == GamePhase::Playing => {
                sim::drag(&mut self.round, pos);
                sim::release(&mut self.round, &self.receptacles);
                self.process_events();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, action: KeyAction) {
        match (action, self.phase) {
            (KeyAction::Quit, _) => {
                log::info!("Quit requested");
                self.running = false;
            }
            (KeyAction::MuteToggle, _) => {
                let muted = self.audio.toggle_mute();
                log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
            }
            (KeyAction::Start, GamePhase::Menu) => {
                log::info!("Round started");
                self.phase = GamePhase::Playing;
            }
            (KeyAction::PauseToggle, GamePhase::Playing) => self.phase = GamePhase::Paused,
            (KeyAction::PauseToggle, GamePhase::Paused) => self.phase = GamePhase::Playing,
            (KeyAction::Restart, GamePhase::GameOver) => {
                self.round.reset();
                self.last_end = None;
                self.phase = GamePhase::Playing;
                log::info!("Round restarted");
            }
            _ => {}
        }
    }

    /// Run one simulation tick if playing; other phases are frozen
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        sim::tick(&mut self.round, dt.clamp(0.0, MAX_FRAME_DT));
        self.process_events();
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        scene::draw(self, canvas);
    }

    /// React to what the round reported
    fn process_events(&mut self) {
        let events: Vec<GameEvent> = self.round.drain_events().collect();
        for event in events {
            match event {
                GameEvent::Placed { correct: true, name, points, .. } => {
                    log::debug!("{} placed correctly (+{})", name, points);
                    self.audio.play(Cue::Correct);
                }
                GameEvent::Placed { correct: false, name, receptacle, .. } => {
                    log::debug!("{} dropped in {} bin", name, receptacle);
                    self.audio.play(Cue::Wrong);
                }
                GameEvent::Missed { name, .. } => {
                    log::debug!("{} missed", name);
                    self.audio.play(Cue::Wrong);
                }
                GameEvent::LevelUp { level } => {
                    log::info!("Level up: {}", level + 1);
                    self.audio.play(Cue::LevelUp);
                }
                GameEvent::RoundOver { reason } => self.enter_game_over(reason),
            }
        }
    }

    fn enter_game_over(&mut self, reason: EndReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.last_end = Some(reason);
        let score = self.round.score;
        let new_best = self.high_score.submit(score);
        log::info!(
            "Game over ({:?}): score {}, level {}{}",
            reason,
            score,
            self.round.level_index + 1,
            if new_best { " - new high score!" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::highscores::MemoryStore;
    use crate::sim::{FallingObject, find_item};
    use glam::Vec2;

    const DT: f32 = 1.0 / FPS as f32;

    fn game_with_best(best: Option<u64>) -> Game {
        let hs = HighScore::load(Box::new(MemoryStore { value: best }));
        Game::new(5, hs, AudioManager::disabled())
    }

    fn playing() -> Game {
        let mut game = game_with_best(None);
        game.handle(InputEvent::Key(KeyAction::Start));
        game
    }

    fn put(game: &mut Game, name: &str, pos: Vec2) {
        let item = find_item(name).unwrap();
        let round = game.round_mut();
        let id = round.next_object_id();
        round.objects.push(FallingObject::new(id, item, pos, Vec2::ZERO, 0.0));
    }

    /// Grab at the object's origin and let go over `cat`'s bin
    fn drop_into(game: &mut Game, at: Vec2, cat: Category) {
        let target = game.receptacles()[cat.index()].bounds.center();
        game.handle(InputEvent::PointerDown(at));
        game.handle(InputEvent::PointerMove(target));
        game.handle(InputEvent::PointerUp(target));
    }

    #[test]
    fn test_menu_to_playing() {
        let mut game = game_with_best(None);
        assert_eq!(game.phase(), GamePhase::Menu);
        game.update(DT * 200.0);
        assert_eq!(game.round().ticks_since_spawn, 0);

        game.handle(InputEvent::Key(KeyAction::Restart));
        assert_eq!(game.phase(), GamePhase::Menu);
        game.handle(InputEvent::Key(KeyAction::Start));
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut game = playing();
        game.update(DT);
        game.handle(InputEvent::Key(KeyAction::PauseToggle));
        assert_eq!(game.phase(), GamePhase::Paused);

        let before = (game.round().ticks_since_spawn, game.round().level_time_left);
        for _ in 0..100 {
            game.update(DT);
        }
        assert_eq!(
            (game.round().ticks_since_spawn, game.round().level_time_left),
            before
        );

        game.handle(InputEvent::Key(KeyAction::PauseToggle));
        assert_eq!(game.phase(), GamePhase::Playing);
        game.update(DT);
        assert_eq!(game.round().ticks_since_spawn, before.0 + 1);
    }

    #[test]
    fn test_pointer_ignored_outside_play() {
        let mut game = game_with_best(None);
        put(&mut game, "Battery", Vec2::new(100.0, 100.0));
        game.handle(InputEvent::PointerDown(Vec2::new(110.0, 110.0)));
        assert!(game.round().dragged_index().is_none());
    }

    #[test]
    fn test_battery_scenario() {
        let mut game = playing();
        put(&mut game, "Battery", Vec2::new(100.0, 100.0));
        drop_into(&mut game, Vec2::new(100.0, 100.0), Category::EWaste);
        assert_eq!(game.round().score, 55);
        assert_eq!(game.round().streak, 1);
        assert!(game.round().objects.is_empty());
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_wrong_drop_on_last_life_is_game_over() {
        let mut game = playing();
        game.round_mut().lives = 1;
        put(&mut game, "Banana Peel", Vec2::new(100.0, 100.0));
        drop_into(&mut game, Vec2::new(100.0, 100.0), Category::Metal);
        assert_eq!(game.round().lives, 0);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.last_end(), Some(EndReason::OutOfLives));
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut game = playing();
        for _ in 0..3 {
            put(&mut game, "Foil", Vec2::new(100.0, 100.0));
            drop_into(&mut game, Vec2::new(100.0, 100.0), Category::Metal);
        }
        assert_eq!(game.round().score, 180);
        game.round_mut().level_time_left = DT;
        game.update(DT);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.last_end(), Some(EndReason::TargetMissed));
        assert_eq!(game.high_score(), 180);
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut game = game_with_best(Some(1000));
        game.handle(InputEvent::Key(KeyAction::Start));
        game.round_mut().score = 300;
        game.round_mut().level_time_left = DT;
        game.update(DT);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.round().level_index, 1);

        game.round_mut().level_time_left = DT;
        game.update(DT);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_score(), 1000);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut game = playing();
        put(&mut game, "Foil", Vec2::new(100.0, 100.0));
        drop_into(&mut game, Vec2::new(100.0, 100.0), Category::Metal);
        game.round_mut().lives = 1;
        put(&mut game, "Foil", Vec2::new(100.0, 100.0));
        put(&mut game, "Can", Vec2::new(600.0, 100.0));
        drop_into(&mut game, Vec2::new(100.0, 100.0), Category::Paper);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_score(), 55);

        game.handle(InputEvent::Key(KeyAction::Restart));
        assert_eq!(game.phase(), GamePhase::Playing);
        let round = game.round();
        assert_eq!(
            (round.score, round.lives, round.streak, round.level_index),
            (0, LIVES_START, 0, 0)
        );
        assert!(round.objects.is_empty());
        assert_eq!(game.high_score(), 55);
        assert_eq!(game.last_end(), None);
    }

    #[test]
    fn test_quit_from_any_phase() {
        for setup in [KeyAction::MuteToggle, KeyAction::Start] {
            let mut game = game_with_best(None);
            game.handle(InputEvent::Key(setup));
            game.frame(
                [
                    InputEvent::Key(KeyAction::Quit),
                    InputEvent::Key(KeyAction::Start),
                ],
                DT,
            );
            assert!(!game.is_running());
        }
    }

    #[test]
    fn test_mute_toggles_everywhere() {
        let mut game = game_with_best(None);
        game.handle(InputEvent::Key(KeyAction::MuteToggle));
        assert!(game.muted());
        game.handle(InputEvent::Key(KeyAction::Start));
        game.handle(InputEvent::Key(KeyAction::PauseToggle));
        game.handle(InputEvent::Key(KeyAction::MuteToggle));
        assert!(!game.muted());
    }

    #[test]
    fn test_drag_survives_pause() {
        let mut game = playing();
        put(&mut game, "Can", Vec2::new(100.0, 100.0));
        game.handle(InputEvent::PointerDown(Vec2::new(105.0, 105.0)));
        game.handle(InputEvent::Key(KeyAction::PauseToggle));
        game.handle(InputEvent::PointerUp(Vec2::new(500.0, 300.0)));
        assert!(game.round().dragged_index().is_some());

        game.handle(InputEvent::Key(KeyAction::PauseToggle));
        let target = game.receptacles()[Category::Metal.index()].bounds.center();
        game.handle(InputEvent::PointerUp(target));
        assert_eq!(game.round().score, 55);
    }
}
