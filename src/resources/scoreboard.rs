//! Run counters: score, coins, lives, and the countdown clock.

use bevy_ecs::prelude::Resource;

use crate::consts::{COIN_REWARD, START_LIVES, START_TIME, TICKS_PER_SECOND};

/// Score/coins/lives/time state of the current run.
///
/// Everything resets on entry to Playing. That entry is only reachable by a
/// confirm from the menu or game-over screen (a fresh start), so lives reset
/// there too; in-level respawns after a fall decrement lives without passing
/// through a reset.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub coins: u32,
    pub lives: u32,
    /// Countdown in seconds.
    pub time: i32,
    /// Fixed-rate tick accumulator driving the countdown.
    pub ticks: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            coins: 0,
            lives: START_LIVES,
            time: START_TIME,
            ticks: 0,
        }
    }

    /// Fresh-run reset.
    pub fn reset_run(&mut self) {
        *self = Self::new();
    }

    /// Credit one collected coin.
    pub fn award_coin(&mut self) {
        self.coins += 1;
        self.score += COIN_REWARD;
    }

    /// Advance the clock by one tick; the countdown loses one second every
    /// 60 ticks. Returns true on the tick the countdown expires.
    pub fn advance_clock(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks % TICKS_PER_SECOND == 0 {
            self.time -= 1;
            if self.time <= 0 {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scoreboard() {
        let sb = Scoreboard::new();
        assert_eq!(sb.score, 0);
        assert_eq!(sb.coins, 0);
        assert_eq!(sb.lives, START_LIVES);
        assert_eq!(sb.time, START_TIME);
        assert_eq!(sb.ticks, 0);
    }

    #[test]
    fn test_award_coin() {
        let mut sb = Scoreboard::new();
        sb.award_coin();
        sb.award_coin();
        assert_eq!(sb.coins, 2);
        assert_eq!(sb.score, 2 * COIN_REWARD);
    }

    #[test]
    fn test_clock_loses_a_second_every_sixty_ticks() {
        let mut sb = Scoreboard::new();
        for _ in 0..59 {
            assert!(!sb.advance_clock());
        }
        assert_eq!(sb.time, START_TIME);
        assert!(!sb.advance_clock());
        assert_eq!(sb.time, START_TIME - 1);
    }

    #[test]
    fn test_countdown_expires_after_exactly_24000_ticks() {
        // 400 seconds at 60 ticks per second
        let mut sb = Scoreboard::new();
        for tick in 1..=(START_TIME as u32 * TICKS_PER_SECOND) {
            let expired = sb.advance_clock();
            if tick < START_TIME as u32 * TICKS_PER_SECOND {
                assert!(!expired, "expired early at tick {tick}");
            } else {
                assert!(expired, "did not expire at tick {tick}");
            }
        }
        assert_eq!(sb.time, 0);
    }

    #[test]
    fn test_reset_run_restores_everything() {
        let mut sb = Scoreboard::new();
        sb.award_coin();
        sb.lives = 1;
        for _ in 0..600 {
            sb.advance_clock();
        }
        sb.reset_run();
        assert_eq!(sb, Scoreboard::new());
    }
}
