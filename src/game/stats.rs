//! Win/loss statistics across rounds of a session

use super::RoundStatus;

/// Rounds won, bucketed by guesses taken, plus rounds lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    wins: Vec<u32>,
    losses: u32,
}

impl Stats {
    /// Empty stats for rounds of at most `max_guesses` guesses
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            wins: vec![0; max_guesses],
            losses: 0,
        }
    }

    /// Record a finished round; rounds still in progress are ignored
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won { guesses } => {
                if let Some(bucket) = guesses.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
                    *bucket += 1;
                }
            }
            RoundStatus::Lost => self.losses += 1,
            RoundStatus::InProgress => {}
        }
    }

    /// Rounds won in exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> u32 {
        guesses
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// `(guesses, rounds)` for every bucket, starting at one guess
    pub fn distribution(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.wins.iter().enumerate().map(|(i, &n)| (i + 1, n))
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.wins.iter().sum()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.total_wins() + self.losses
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(super::MAX_GUESSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Stats::default();
        stats.record(RoundStatus::Won { guesses: 3 });
        stats.record(RoundStatus::Won { guesses: 3 });
        stats.record(RoundStatus::Won { guesses: 6 });
        stats.record(RoundStatus::Lost);
        stats.record(RoundStatus::InProgress);

        assert_eq!(stats.wins_in(3), 2);
        assert_eq!(stats.wins_in(6), 1);
        assert_eq!(stats.wins_in(1), 0);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.total_wins(), 3);
        assert_eq!(stats.rounds_played(), 4);
    }

    #[test]
    fn out_of_range_buckets_are_ignored() {
        let mut stats = Stats::new(2);
        stats.record(RoundStatus::Won { guesses: 0 });
        stats.record(RoundStatus::Won { guesses: 5 });

        assert_eq!(stats.rounds_played(), 0);
        assert_eq!(stats.wins_in(0), 0);
        assert_eq!(stats.wins_in(5), 0);
    }

    #[test]
    fn distribution_starts_at_one() {
        let mut stats = Stats::default();
        stats.record(RoundStatus::Won { guesses: 1 });

        let distribution: Vec<(usize, u32)> = stats.distribution().collect();
        assert_eq!(distribution.len(), 6);
        assert_eq!(distribution[0], (1, 1));
        assert_eq!(distribution[5], (6, 0));
    }
}
