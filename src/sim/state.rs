//! Round state and core simulation types
//!
//! `RoundState` is the single mutable aggregate for a round: score, lives,
//! streak, level progress and the active objects. It never talks to audio,
//! storage or rendering; outcomes are queued as `GameEvent`s instead.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::catalog::{Category, ITEMS};
use super::levels::{LevelDef, has_next_level, level_def};
use super::object::FallingObject;
use super::scoring::placement_points;
use crate::consts::*;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// Lives reached zero
    OutOfLives,
    /// Level timer expired below the score target
    TargetMissed,
    /// Level timer expired on the final level
    AllLevelsCleared,
}

/// Something the state machine should react to (audio, logging, transitions)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Placed {
        name: &'static str,
        category: Category,
        receptacle: Category,
        correct: bool,
        points: u64,
    },
    Missed {
        name: &'static str,
        category: Category,
    },
    LevelUp {
        /// 0-based index of the new level
        level: usize,
    },
    RoundOver {
        reason: EndReason,
    },
}

/// Result of dropping an object onto a receptacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    pub correct: bool,
    pub receptacle: Category,
    /// Points awarded (0 when incorrect)
    pub points: u64,
}

/// Mutable state for one round of play
#[derive(Debug, Clone)]
pub struct RoundState {
    pub score: u64,
    pub lives: u8,
    pub streak: u32,
    pub level_index: usize,
    /// Seconds left on the current level
    pub level_time_left: f32,
    pub ticks_since_spawn: u32,
    /// Active objects, oldest first
    pub objects: Vec<FallingObject>,
    pub tip_message: String,
    /// Seconds until `tip_message` clears
    pub tip_timer: f32,
    /// Set once the round is over; no further scoring happens after that
    pub ended: Option<EndReason>,
    events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl RoundState {
    /// Fresh round with its own seeded RNG
    pub fn new(seed: u64) -> Self {
        let first = level_def(0);
        Self {
            score: 0,
            lives: LIVES_START,
            streak: 0,
            level_index: 0,
            level_time_left: first.duration,
            ticks_since_spawn: 0,
            objects: Vec::new(),
            tip_message: String::new(),
            tip_timer: 0.0,
            ended: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Back to a fresh round; the RNG stream continues so rounds differ
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self {
            rng,
            ..Self::new(0)
        };
    }

    pub fn level(&self) -> &'static LevelDef {
        level_def(self.level_index)
    }

    pub fn score_target(&self) -> u64 {
        self.level().score_target
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.objects.iter().position(|o| o.is_dragging())
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Allocate a new object ID
    pub fn next_object_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a uniformly random catalog item above the play area
    pub fn spawn_object(&mut self) -> &FallingObject {
        let item = &ITEMS[self.rng.random_range(0..ITEMS.len())];
        let id = self.next_object_id();
        let obj = FallingObject::spawn(id, item, &mut self.rng);
        log::trace!("spawn #{} {} at x={:.0}", obj.id, obj.name, obj.pos.x);
        self.objects.push(obj);
        &self.objects[self.objects.len() - 1]
    }

    pub fn show_tip(&mut self, message: impl Into<String>, secs: f32) {
        self.tip_message = message.into();
        self.tip_timer = secs;
    }

    /// Count down the tip display, clearing it once expired
    pub fn tick_tip(&mut self, dt: f32) {
        if self.tip_timer > 0.0 {
            self.tip_timer -= dt;
            if self.tip_timer <= 0.0 {
                self.tip_timer = 0.0;
                self.tip_message.clear();
            }
        }
    }

    /// Score a removed object dropped onto `receptacle`
    pub fn register_drop(&mut self, obj: &FallingObject, receptacle: Category) -> DropOutcome {
        let correct = obj.category == receptacle;
        let mut points = 0;
        if correct {
            points = placement_points(self.streak);
            self.streak += 1;
            self.score += points;
            self.show_tip(format!("{}: {}", obj.name, obj.tip), PLACEMENT_TIP_SECS);
        } else {
            self.lose_life();
            self.show_tip(
                format!("{} goes in the {} bin.", obj.name, obj.category),
                PLACEMENT_TIP_SECS,
            );
        }
        self.push_event(GameEvent::Placed {
            name: obj.name,
            category: obj.category,
            receptacle,
            correct,
            points,
        });
        if self.lives == 0 {
            self.end(EndReason::OutOfLives);
        }
        DropOutcome {
            correct,
            receptacle,
            points,
        }
    }

    /// An object left the play area without being placed
    pub fn register_miss(&mut self, obj: &FallingObject) {
        self.lose_life();
        self.show_tip(
            format!("{} fell off! It goes in the {} bin.", obj.name, obj.category),
            PLACEMENT_TIP_SECS,
        );
        self.push_event(GameEvent::Missed {
            name: obj.name,
            category: obj.category,
        });
        if self.lives == 0 {
            self.end(EndReason::OutOfLives);
        }
    }

    fn lose_life(&mut self) {
        self.streak = 0;
        self.lives = self.lives.saturating_sub(1);
    }

    /// Level timer ran out: advance if the target is met and a next level exists
    pub fn complete_level(&mut self) {
        let target_met = self.score >= self.score_target();
        if target_met && has_next_level(self.level_index) {
            self.level_index += 1;
            let next = self.level();
            self.level_time_left = next.duration;
            self.show_tip(
                format!("Level up! Level {}", self.level_index + 1),
                LEVEL_UP_TIP_SECS,
            );
            self.push_event(GameEvent::LevelUp {
                level: self.level_index,
            });
        } else if target_met {
            self.end(EndReason::AllLevelsCleared);
        } else {
            self.end(EndReason::TargetMissed);
        }
    }

    fn end(&mut self, reason: EndReason) {
        if self.ended.is_none() {
            self.ended = Some(reason);
            self.push_event(GameEvent::RoundOver { reason });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::find_item;
    use glam::Vec2;
    use proptest::prelude::*;

    fn object(name: &str) -> FallingObject {
        let item = find_item(name).unwrap();
        FallingObject::new(1, item, Vec2::ZERO, Vec2::ZERO, 0.0)
    }

    #[test]
    fn test_new_round_defaults() {
        let round = RoundState::new(1);
        assert_eq!(round.score, 0);
        assert_eq!(round.lives, LIVES_START);
        assert_eq!(round.streak, 0);
        assert_eq!(round.level_index, 0);
        assert_eq!(round.level_time_left, 50.0);
        assert!(round.objects.is_empty());
        assert!(!round.is_over());
    }

    #[test]
    fn test_battery_into_ewaste() {
        let mut round = RoundState::new(1);
        let outcome = round.register_drop(&object("Battery"), Category::EWaste);
        assert!(outcome.correct);
        assert_eq!(outcome.points, 55);
        assert_eq!(round.score, 55);
        assert_eq!(round.streak, 1);
        assert_eq!(round.tip_message, "Battery: Never bin batteries!");
    }

    #[test]
    fn test_three_correct_in_a_row() {
        let mut round = RoundState::new(1);
        let mut scores = Vec::new();
        for _ in 0..3 {
            round.register_drop(&object("Can"), Category::Metal);
            scores.push(round.score);
        }
        assert_eq!(scores, vec![55, 115, 180]);
        assert_eq!(round.streak, 3);
    }

    #[test]
    fn test_wrong_bin_costs_life_and_streak() {
        let mut round = RoundState::new(1);
        round.register_drop(&object("Can"), Category::Metal);
        let outcome = round.register_drop(&object("Leaves"), Category::Paper);
        assert!(!outcome.correct);
        assert_eq!(outcome.points, 0);
        assert_eq!(round.score, 55);
        assert_eq!(round.streak, 0);
        assert_eq!(round.lives, LIVES_START - 1);
        assert_eq!(round.tip_message, "Leaves goes in the Organic bin.");
    }

    #[test]
    fn test_last_life_ends_round_immediately() {
        let mut round = RoundState::new(1);
        round.lives = 1;
        round.register_drop(&object("Phone"), Category::Metal);
        assert_eq!(round.lives, 0);
        assert_eq!(round.ended, Some(EndReason::OutOfLives));
        let events: Vec<_> = round.drain_events().collect();
        assert!(matches!(events.last(), Some(GameEvent::RoundOver { reason: EndReason::OutOfLives })));
    }

    #[test]
    fn test_level_advance_on_exact_target() {
        let mut round = RoundState::new(1);
        round.score = 200;
        round.level_time_left = 0.0;
        round.complete_level();
        assert_eq!(round.level_index, 1);
        assert_eq!(round.level_time_left, 55.0);
        assert_eq!(round.score_target(), 450);
        assert_eq!(round.tip_message, "Level up! Level 2");
        assert!(!round.is_over());
    }

    #[test]
    fn test_target_missed_ends_round() {
        let mut round = RoundState::new(1);
        round.score = 199;
        round.complete_level();
        assert_eq!(round.level_index, 0);
        assert_eq!(round.ended, Some(EndReason::TargetMissed));
    }

    #[test]
    fn test_final_level_ends_round() {
        let mut round = RoundState::new(1);
        round.level_index = 4;
        round.score = 5000;
        round.complete_level();
        assert_eq!(round.level_index, 4);
        assert_eq!(round.ended, Some(EndReason::AllLevelsCleared));
    }

    #[test]
    fn test_tip_expires() {
        let mut round = RoundState::new(1);
        round.show_tip("hello", 1.0);
        round.tick_tip(0.6);
        assert_eq!(round.tip_message, "hello");
        round.tick_tip(0.6);
        assert!(round.tip_message.is_empty());
    }

    #[test]
    fn test_reset_clears_round() {
        let mut round = RoundState::new(3);
        round.spawn_object();
        round.register_drop(&object("Can"), Category::Metal);
        round.register_drop(&object("Can"), Category::Paper);
        round.level_index = 2;
        round.reset();
        assert_eq!(round.score, 0);
        assert_eq!(round.lives, LIVES_START);
        assert_eq!(round.streak, 0);
        assert_eq!(round.level_index, 0);
        assert!(round.objects.is_empty());
        assert_eq!(round.drain_events().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_score_and_lives_invariants(drops in proptest::collection::vec((0usize..25, 0usize..5), 1..60)) {
            let mut round = RoundState::new(9);
            for (item_idx, bin_idx) in drops {
                if round.is_over() {
                    break;
                }
                let before = (round.score, round.lives, round.streak);
                let obj = FallingObject::new(0, &ITEMS[item_idx], Vec2::ZERO, Vec2::ZERO, 0.0);
                let outcome = round.register_drop(&obj, Category::ALL[bin_idx]);

                prop_assert!(round.score >= before.0);
                prop_assert!(round.lives <= before.1);
                if outcome.correct {
                    prop_assert_eq!(round.score - before.0, 50 + (5 * (before.2 as u64 + 1)).min(150));
                    prop_assert_eq!(round.streak, before.2 + 1);
                    prop_assert_eq!(round.lives, before.1);
                } else {
                    prop_assert_eq!(round.streak, 0);
                    prop_assert_eq!(round.lives, before.1 - 1);
                }
                prop_assert_eq!(round.is_over(), round.lives == 0);
            }
        }
    }
}
