//! Combo streak and its damage multiplier curve.

use serde::{Deserialize, Serialize};

/// Consecutive correct answers, reset to 0 by any miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboState {
    streak: u32,
    battle_max: u32,
    run_max: u32,
}

impl ComboState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak this battle.
    #[must_use]
    pub fn battle_max(&self) -> u32 {
        self.battle_max
    }

    /// Longest streak this run.
    #[must_use]
    pub fn run_max(&self) -> u32 {
        self.run_max
    }

    /// Count a correct answer. Returns the new streak.
    pub fn increment(&mut self) -> u32 {
        self.streak += 1;
        self.battle_max = self.battle_max.max(self.streak);
        self.run_max = self.run_max.max(self.streak);
        self.streak
    }

    pub fn reset(&mut self) {
        self.streak = 0;
    }

    /// Clear the streak and the per-battle record; the run record stays.
    pub fn start_battle(&mut self) {
        self.streak = 0;
        self.battle_max = 0;
    }
}

/// Combo multiplier in percent.
///
/// `bonus` is the combo relic bonus in percent points, added once per tier
/// above the first.
///
/// ```
/// use quiz_battle::scaling::combo_multiplier_percent;
///
/// assert_eq!(combo_multiplier_percent(1, 0), 100);
/// assert_eq!(combo_multiplier_percent(2, 0), 140);
/// assert_eq!(combo_multiplier_percent(4, 10), 180);
/// assert_eq!(combo_multiplier_percent(8, 10), 280);
/// ```
#[must_use]
pub fn combo_multiplier_percent(streak: u32, bonus: i64) -> i64 {
    match streak {
        0..=1 => 100,
        2..=3 => 140 + bonus,
        4..=5 => 160 + bonus * 2,
        6..=7 => 200 + bonus * 3,
        _ => 240 + bonus * 4,
    }
}

/// Display text for a streak, e.g. "GREAT! x1.6". Empty below 2.
#[must_use]
pub fn combo_label(streak: u32, bonus: i64) -> String {
    let tier = match streak {
        0..=1 => return String::new(),
        2..=3 => "GOOD!",
        4..=5 => "GREAT!",
        6..=7 => "EXCELLENT!",
        _ => "AMAZING!",
    };
    let percent = combo_multiplier_percent(streak, bonus);
    format!("{tier} x{}.{}", percent / 100, (percent % 100) / 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let table = [
            (0, 100),
            (1, 100),
            (2, 140),
            (3, 140),
            (4, 160),
            (5, 160),
            (6, 200),
            (7, 200),
            (8, 240),
            (20, 240),
        ];
        for (streak, expected) in table {
            assert_eq!(combo_multiplier_percent(streak, 0), expected, "streak {streak}");
        }
    }

    #[test]
    fn test_relic_bonus_per_tier() {
        assert_eq!(combo_multiplier_percent(1, 10), 100);
        assert_eq!(combo_multiplier_percent(2, 10), 150);
        assert_eq!(combo_multiplier_percent(4, 10), 180);
        assert_eq!(combo_multiplier_percent(6, 10), 230);
        assert_eq!(combo_multiplier_percent(8, 10), 280);
    }

    #[test]
    fn test_streak_and_records() {
        let mut combo = ComboState::new();
        combo.increment();
        combo.increment();
        combo.increment();
        combo.reset();
        combo.increment();

        assert_eq!(combo.streak(), 1);
        assert_eq!(combo.battle_max(), 3);
        assert_eq!(combo.run_max(), 3);

        combo.start_battle();
        assert_eq!(combo.streak(), 0);
        assert_eq!(combo.battle_max(), 0);
        assert_eq!(combo.run_max(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(combo_label(1, 0), "");
        assert_eq!(combo_label(2, 0), "GOOD! x1.4");
        assert_eq!(combo_label(5, 0), "GREAT! x1.6");
        assert_eq!(combo_label(9, 10), "AMAZING! x2.8");
    }
}
