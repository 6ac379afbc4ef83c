//! Fixed-rate simulation tick
//!
//! One call advances a playing round by a single tick: spawn scheduling,
//! object motion, miss detection, the tip timer and the level timer.

use super::state::RoundState;

/// Advance the round by one tick. `dt` is the real time (seconds) the tick covers.
///
/// Does nothing once the round has ended. A miss that ends the round stops
/// the tick right there, so nothing else is scored that tick.
pub fn tick(round: &mut RoundState, dt: f32) {
    if round.is_over() {
        return;
    }
    let level = *round.level();

    round.ticks_since_spawn += 1;
    if round.ticks_since_spawn >= level.spawn_interval {
        round.ticks_since_spawn = 0;
        round.spawn_object();
    }

    for obj in &mut round.objects {
        obj.advance(level.fall_accel);
    }

    // Compact first, then score, so removal never races the scan
    let mut missed = Vec::new();
    round.objects.retain(|obj| {
        if obj.is_missed() {
            missed.push(obj.clone());
            false
        } else {
            true
        }
    });
    for obj in &missed {
        round.register_miss(obj);
        if round.is_over() {
            return;
        }
    }

    round.tick_tip(dt);

    round.level_time_left -= dt;
    if round.level_time_left <= 0.0 {
        round.complete_level();
    }
}
