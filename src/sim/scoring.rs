//! Placement scoring
//!
//! A correct placement is worth `BASE_POINTS` plus a streak bonus of
//! `STREAK_BONUS_STEP` per consecutive correct placement (the one being scored
//! included), capped at `STREAK_BONUS_CAP`.

use crate::consts::{BASE_POINTS, STREAK_BONUS_CAP, STREAK_BONUS_STEP};

/// Streak bonus for a streak that already includes the current placement
pub fn streak_bonus(streak: u32) -> u64 {
    (STREAK_BONUS_STEP * streak as u64).min(STREAK_BONUS_CAP)
}

/// Points for a correct placement, given the streak *before* it
pub fn placement_points(prior_streak: u32) -> u64 {
    BASE_POINTS + streak_bonus(prior_streak.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_placement() {
        assert_eq!(placement_points(0), 55);
    }

    #[test]
    fn test_bonus_caps() {
        assert_eq!(streak_bonus(29), 145);
        assert_eq!(streak_bonus(30), 150);
        assert_eq!(streak_bonus(31), 150);
        assert_eq!(placement_points(1000), 200);
    }
}
