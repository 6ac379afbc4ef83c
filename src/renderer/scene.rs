//! Frame composition: bins, falling tags, HUD, tips and phase overlays

use glam::Vec2;

use super::{Align, Canvas, TextSize};
use crate::Rgb;
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::game::{Game, GamePhase};
use crate::sim::{EndReason, FallingObject, Receptacle, Rect, RoundState};

const HUD_H: f32 = 72.0;
const TIP_Y: f32 = 120.0;
const TIP_PAD: f32 = 12.0;

const BG_TOP: Rgb = Rgb(18, 28, 38);
const BG_BOTTOM: Rgb = Rgb(6, 12, 22);
const SUBTLE: Rgb = Rgb(215, 215, 215);

const MENU_BLURB: [&str; 4] = [
    "Tips:",
    "- Keep recyclables clean & dry. Contamination sends whole batches to landfill.",
    "- Organic waste can be composted to cut methane emissions.",
    "- E-waste contains valuable metals. Recycle at certified centers.",
];

fn screen() -> Rect {
    Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H)
}

/// Draw one complete frame
pub fn draw(game: &Game, canvas: &mut impl Canvas) {
    canvas.fill_gradient(screen(), BG_TOP, BG_BOTTOM);

    for bin in game.receptacles() {
        draw_receptacle(bin, canvas);
    }
    for obj in &game.round().objects {
        draw_object(obj, canvas);
    }
    draw_hud(game, canvas);
    draw_tip(game.round(), canvas);

    match game.phase() {
        GamePhase::Menu => draw_menu(game, canvas),
        GamePhase::Paused => draw_pause(canvas),
        GamePhase::GameOver => draw_game_over(game, canvas),
        GamePhase::Playing => {}
    }
}

fn draw_receptacle(bin: &Receptacle, canvas: &mut impl Canvas) {
    let color = bin.label.color();
    canvas.fill_rect(bin.bounds, color, 16.0);

    // Lip across the top
    let b = bin.bounds;
    let lip = Rect::new(b.left() - 6.0, b.top() - 14.0, b.size.x + 12.0, 20.0);
    canvas.fill_rect(lip, color.scaled(0.85), 12.0);

    canvas.draw_text(
        b.center(),
        bin.label.label(),
        TextSize::Normal,
        Rgb::WHITE,
        Align::Center,
    );
}

fn draw_object(obj: &FallingObject, canvas: &mut impl Canvas) {
    let rect = obj.rect();
    let shadow = Rect::from_pos_size(rect.pos + Vec2::new(3.0, 4.0), rect.size);
    canvas.shade(shadow, 60);
    canvas.draw_tag(rect, obj.display_rotation(), obj.category.color(), obj.name);
}

fn hud_text(canvas: &mut impl Canvas, x: f32, y: f32, text: &str, size: TextSize, color: Rgb) {
    canvas.draw_text(Vec2::new(x, y), text, size, color, Align::TopLeft);
}

fn draw_hud(game: &Game, canvas: &mut impl Canvas) {
    let round = game.round();
    canvas.fill_rect(Rect::new(0.0, 0.0, SCREEN_W, HUD_H), Rgb::DIM, 0.0);

    let score = format!("Score: {}", round.score);
    hud_text(canvas, 20.0, 18.0, &score, TextSize::Big, Rgb::WHITE);
    let high = format!("High: {}", game.high_score());
    hud_text(canvas, 20.0, 50.0, &high, TextSize::Normal, Rgb::WHITE);
    hud_text(canvas, 220.0, 24.0, &lives_label(round.lives), TextSize::Normal, Rgb::HEART);
    if round.streak >= 2 {
        let streak = format!("Streak x{}", round.streak);
        hud_text(canvas, 220.0, 50.0, &streak, TextSize::Normal, Rgb::GOLD);
    }

    let right = SCREEN_W - 300.0;
    let level = format!("Level {}", round.level_index + 1);
    hud_text(canvas, right, 12.0, &level, TextSize::Big, Rgb::WHITE);
    let time = format!("Time Left: {}s", round.level_time_left.max(0.0) as u32);
    hud_text(canvas, right, 50.0, &time, TextSize::Normal, Rgb::WHITE);
    let target = format!("Target: {}", round.score_target());
    hud_text(canvas, SCREEN_W - 120.0, 50.0, &target, TextSize::Normal, Rgb::WHITE);
    if game.muted() {
        hud_text(canvas, SCREEN_W - 120.0, 18.0, "Muted", TextSize::Small, SUBTLE);
    }
}

fn lives_label(lives: u8) -> String {
    format!("Lives: {}", "♥".repeat(lives as usize))
}

fn draw_tip(round: &RoundState, canvas: &mut impl Canvas) {
    if round.tip_message.is_empty() {
        return;
    }
    let size = canvas.measure_text(&round.tip_message, TextSize::Small);
    let center = Vec2::new(SCREEN_W / 2.0, TIP_Y);
    let box_size = size + Vec2::splat(TIP_PAD * 2.0);
    canvas.shade(Rect::from_pos_size(center - box_size / 2.0, box_size), 140);
    canvas.draw_text(center, &round.tip_message, TextSize::Small, Rgb::WHITE, Align::Center);
}

fn centered(canvas: &mut impl Canvas, y: f32, text: &str, size: TextSize, color: Rgb) {
    canvas.draw_text(Vec2::new(SCREEN_W / 2.0, y), text, size, color, Align::Center);
}

fn draw_menu(game: &Game, canvas: &mut impl Canvas) {
    centered(canvas, 160.0, "Recycling Sorter", TextSize::Huge, Rgb::WHITE);
    centered(canvas, 220.0, "Drag items into the correct bin!", TextSize::Big, SUBTLE);
    centered(
        canvas,
        270.0,
        "Press SPACE to start - P to pause - M to mute",
        TextSize::Normal,
        SUBTLE,
    );

    let mut y = 340.0;
    for line in MENU_BLURB {
        centered(canvas, y, line, TextSize::Normal, Rgb::WHITE);
        y += 30.0;
    }

    // Bins on top so the menu previews them
    for bin in game.receptacles() {
        draw_receptacle(bin, canvas);
    }
}

fn draw_pause(canvas: &mut impl Canvas) {
    canvas.shade(screen(), 160);
    centered(canvas, SCREEN_H / 2.0 - 20.0, "Paused", TextSize::Huge, Rgb::WHITE);
    centered(
        canvas,
        SCREEN_H / 2.0 + 30.0,
        "Press P to resume - M to mute/unmute",
        TextSize::Normal,
        Rgb::WHITE,
    );
}

fn end_reason_label(reason: EndReason) -> &'static str {
    match reason {
        EndReason::OutOfLives => "Out of lives!",
        EndReason::TargetMissed => "Time's up - target not reached.",
        EndReason::AllLevelsCleared => "All levels complete!",
    }
}

fn draw_game_over(game: &Game, canvas: &mut impl Canvas) {
    canvas.shade(screen(), 180);
    let mid = SCREEN_H / 2.0;
    centered(canvas, mid - 60.0, "Game Over", TextSize::Huge, Rgb::WHITE);
    let score_line = format!("Score: {}   High: {}", game.round().score, game.high_score());
    centered(canvas, mid, &score_line, TextSize::Big, Rgb::WHITE);
    if let Some(reason) = game.last_end() {
        centered(canvas, mid + 38.0, end_reason_label(reason), TextSize::Normal, SUBTLE);
    }
    centered(
        canvas,
        mid + 70.0,
        "Press R to restart - ESC to quit",
        TextSize::Normal,
        Rgb::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::highscores::HighScore;
    use crate::platform::{InputEvent, KeyAction};

    /// Records text and tag draws
    #[derive(Default)]
    struct Recorder {
        texts: Vec<String>,
        tags: Vec<(String, f32)>,
        rects: usize,
        shades: Vec<u8>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, _rect: Rect, _color: Rgb, _corner_radius: f32) {
            self.rects += 1;
        }

        fn shade(&mut self, _rect: Rect, alpha: u8) {
            self.shades.push(alpha);
        }

        fn draw_text(&mut self, _pos: Vec2, text: &str, _size: TextSize, _color: Rgb, _align: Align) {
            self.texts.push(text.to_string());
        }

        fn draw_tag(&mut self, _rect: Rect, rotation: f32, _color: Rgb, label: &str) {
            self.tags.push((label.to_string(), rotation));
        }
    }

    impl Recorder {
        fn has(&self, text: &str) -> bool {
            self.texts.iter().any(|t| t == text)
        }
    }

    fn game() -> Game {
        Game::new(11, HighScore::in_memory(), AudioManager::disabled())
    }

    fn render(game: &Game) -> Recorder {
        let mut canvas = Recorder::default();
        game.render(&mut canvas);
        canvas
    }

    #[test]
    fn test_menu_frame() {
        let frame = render(&game());
        assert!(frame.has("Recycling Sorter"));
        // Menu draws the bins a second time on top
        assert!(frame.rects >= 16 + 1 + 20);
        assert!(frame.has("E-Waste"));
        assert!(frame.has("Score: 0"));
        assert!(frame.has("Lives: ♥♥♥"));
        assert!(!frame.texts.iter().any(|t| t.starts_with("Streak")));
    }

    #[test]
    fn test_playing_frame_shows_objects_and_tip() {
        let mut g = game();
        g.handle(InputEvent::Key(KeyAction::Start));
        g.round_mut().spawn_object();
        g.round_mut().streak = 3;
        g.round_mut().show_tip("Battery: Never bin batteries!", 3.5);
        let frame = render(&g);
        assert_eq!(frame.tags.len(), 1);
        assert!(frame.has("Streak x3"));
        assert!(frame.has("Battery: Never bin batteries!"));
        assert!(frame.has("Target: 200"));
        assert!(frame.has("Time Left: 50s"));
        assert!(!frame.has("Paused"));
    }

    #[test]
    fn test_held_tag_is_upright() {
        let mut g = game();
        g.handle(InputEvent::Key(KeyAction::Start));
        let obj = g.round_mut().spawn_object();
        let grab_at = obj.pos + Vec2::splat(1.0);
        g.round_mut().objects[0].rotation = 33.0;
        g.handle(InputEvent::PointerDown(grab_at));
        let frame = render(&g);
        assert_eq!(frame.tags[0].1, 0.0);
    }

    #[test]
    fn test_pause_and_game_over_overlays() {
        let mut g = game();
        g.handle(InputEvent::Key(KeyAction::Start));
        g.handle(InputEvent::Key(KeyAction::PauseToggle));
        let frame = render(&g);
        assert!(frame.has("Paused"));
        assert!(frame.shades.contains(&160));

        g.handle(InputEvent::Key(KeyAction::PauseToggle));
        g.round_mut().level_time_left = 0.01;
        g.update(0.02);
        assert_eq!(g.phase(), GamePhase::GameOver);
        let frame = render(&g);
        assert!(frame.has("Game Over"));
        assert!(frame.has("Score: 0   High: 0"));
        assert!(frame.has("Time's up - target not reached."));
    }
}
