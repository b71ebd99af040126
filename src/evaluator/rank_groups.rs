use crate::cards::Rank;

/// Ranks present in a hand with their occurrence counts, sorted by (count desc, rank desc).
///
/// Example: 9-9-9-K-2 groups as [(Nine, 3), (King, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from an occurrence table indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    /// Rank occurring exactly four times.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank occurring exactly three times.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Ranks occurring exactly twice, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Ranks occurring exactly once, highest first.
    #[cfg(test)]
    pub fn singles(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn trips_count(&self) -> usize {
        self.with_count(3).count()
    }

    pub fn pair_count(&self) -> usize {
        self.with_count(2).count()
    }

    /// Number of distinct ranks in the hand.
    #[cfg(test)]
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Exactly one three-of-a-kind rank and exactly one pair rank.
    pub fn has_full_house(&self) -> bool {
        self.trips_count() == 1 && self.pair_count() == 1
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
