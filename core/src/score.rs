use serde::{Deserialize, Serialize};

/// Running totals across rounds, fed with each round's result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub games_played: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Scoreboard {
    pub fn record(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
        } else {
            self.current_streak = 0;
        }
        self.best_streak = self.best_streak.max(self.current_streak);
        log::debug!("recorded {} -> {:?}", if won { "win" } else { "loss" }, self);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub const fn has_played(&self) -> bool {
        self.games_played > 0
    }

    pub const fn losses(&self) -> u32 {
        self.games_played.saturating_sub(self.wins)
    }

    /// Win percentage rounded half up, `0` before the first game.
    pub const fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let wins = self.wins as u64;
        let played = self.games_played as u64;
        ((wins * 200 + played) / (played * 2)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaks_reset_on_loss_and_best_is_kept() {
        let mut score = Scoreboard::default();

        for won in [true, true, true, false, true] {
            score.record(won);
        }

        assert_eq!(score.wins, 4);
        assert_eq!(score.games_played, 5);
        assert_eq!(score.losses(), 1);
        assert_eq!(score.current_streak, 1);
        assert_eq!(score.best_streak, 3);
    }

    #[test]
    fn losses_never_underflow() {
        let score = Scoreboard {
            wins: 2,
            games_played: 1,
            ..Default::default()
        };

        assert_eq!(score.losses(), 0);
    }

    #[test]
    fn win_rate_rounds_to_nearest_percent() {
        let mut score = Scoreboard::default();
        assert_eq!(score.win_rate_percent(), 0);

        score.record(true);
        score.record(false);
        score.record(false);
        assert_eq!(score.win_rate_percent(), 33);

        score.record(true);
        score.record(true);
        score.record(true);
        assert_eq!(score.win_rate_percent(), 67);

        score.record(false);
        score.record(true);
        assert_eq!(score.win_rate_percent(), 63);
    }

    #[test]
    fn reset_clears_everything() {
        let mut score = Scoreboard::default();
        score.record(true);

        score.reset();

        assert_eq!(score, Scoreboard::default());
        assert!(!score.has_played());
    }
}
