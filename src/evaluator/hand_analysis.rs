use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::hand::Hand;

/// Pre-computed facts about a 5-card hand.
/// Built once per hand and shared by the classifier and the tie-breakers.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub cards: [Card; 5],
    /// Occurrence table indexed by rank value (2..=14).
    pub occurrence_counts: [u8; 15],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let cards = *hand.cards();
        let ranks = cards.map(Card::rank);

        let mut occurrence_counts = [0u8; 15];
        for rank in ranks {
            occurrence_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&occurrence_counts);
        let suit_info = SuitInfo::detect(&cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { cards, occurrence_counts, rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }

    /// Rank set is exactly {A, 2, 3, 4, 5}.
    pub fn is_ace_low_straight(&self) -> bool {
        self.straight_info.is_ace_low
    }

    /// Every rank from Ten through Ace is present.
    pub fn has_royal_ranks(&self) -> bool {
        [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .iter()
            .all(|r| self.count_of(*r) > 0)
    }

    pub fn count_of(&self, rank: Rank) -> u8 {
        self.occurrence_counts[rank.value() as usize]
    }

    pub fn triplet_rank(&self) -> Option<Rank> {
        self.rank_groups.trips()
    }

    pub fn quad_rank(&self) -> Option<Rank> {
        self.rank_groups.quad()
    }

    /// Ranks occurring exactly twice, highest first.
    pub fn pair_ranks(&self) -> Vec<Rank> {
        self.rank_groups.pairs()
    }

    /// The card with the highest effective rank. With `ace_low` every Ace counts as 1;
    /// the returned card is always one of the hand's own cards, unmodified.
    pub fn highest_card(&self, ace_low: bool) -> Card {
        let effective = |c: &Card| if ace_low { c.rank().low_value() } else { c.rank().value() };
        // five cards, never empty
        let mut best = self.cards[0];
        for card in &self.cards[1..] {
            if effective(card) > effective(&best) {
                best = *card;
            }
        }
        best
    }

    /// Highest card whose rank does not occur exactly twice.
    pub fn highest_non_pair_card(&self) -> Option<Card> {
        self.highest_where(|count| count != 2)
    }

    /// Highest card whose rank occurs exactly once.
    pub fn kicker(&self) -> Option<Card> {
        self.highest_where(|count| count == 1)
    }

    fn highest_where(&self, keep: impl Fn(u8) -> bool) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| keep(self.count_of(c.rank())))
            .max_by_key(|c| c.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn royal_flush_facts() {
        let a = analyze("AS KS QS JS 10S");
        assert!(a.is_flush());
        assert!(a.is_straight());
        assert!(!a.is_ace_low_straight());
        assert!(a.has_royal_ranks());
        assert_eq!(a.quad_rank(), None);
        assert_eq!(a.triplet_rank(), None);
        assert!(a.pair_ranks().is_empty());
    }

    #[test]
    fn occurrence_counts_cover_every_card() {
        let a = analyze("9C 9D 9H KS 2C");
        assert_eq!(a.count_of(Rank::Nine), 3);
        assert_eq!(a.count_of(Rank::King), 1);
        assert_eq!(a.count_of(Rank::Ace), 0);
        assert_eq!(a.occurrence_counts.iter().map(|&c| c as usize).sum::<usize>(), 5);
        assert_eq!(a.triplet_rank(), Some(Rank::Nine));
    }

    #[test]
    fn quad_and_kicker() {
        let a = analyze("AS AH AD AC KS");
        assert_eq!(a.quad_rank(), Some(Rank::Ace));
        assert_eq!(a.kicker(), Some(Card::new(Rank::King, Suit::Spades)));
        assert!(!a.is_flush());
        assert!(!a.is_straight());
    }

    #[test]
    fn two_pair_ranks_and_kicker() {
        let a = analyze("4S 4H KD KC QS");
        assert_eq!(a.pair_ranks(), vec![Rank::King, Rank::Four]);
        assert_eq!(a.kicker(), Some(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!(a.highest_non_pair_card(), Some(Card::new(Rank::Queen, Suit::Spades)));
    }

    #[test]
    fn full_house_has_no_kicker_but_a_non_pair_card() {
        let a = analyze("2D 2C 2H 5S 5D");
        assert_eq!(a.kicker(), None);
        assert_eq!(a.highest_non_pair_card().map(Card::rank), Some(Rank::Two));
    }

    #[test]
    fn highest_non_pair_card_skips_pairs() {
        let a = analyze("AS AH 10D 7C 3S");
        assert_eq!(a.highest_non_pair_card(), Some(Card::new(Rank::Ten, Suit::Diamonds)));
    }

    #[test]
    fn highest_card_with_and_without_ace_low() {
        let a = analyze("AC 2D 3H 4S 5C");
        assert!(a.is_ace_low_straight());
        assert_eq!(a.highest_card(false), Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(a.highest_card(true), Card::new(Rank::Five, Suit::Clubs));
        // the hand itself is untouched
        assert_eq!(a.cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(a.highest_card(false).rank(), Rank::Ace);
    }
}
