use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("not enough cards to deal {hands} hands: {remaining} left")]
    NotEnoughCards { hands: usize, remaining: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A standard 52-card deck. The top of the deck is the front of the list.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use stud_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        log::debug!("shuffling with seed {seed}");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        log::debug!("shuffling with thread rng");
        self.shuffle_with(&mut rand::rng());
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Deal `hands` hands round-robin: five rounds, one card to each hand per round.
    ///
    /// ```
    /// use stud_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let hands = deck.deal_hands(6).unwrap();
    /// assert_eq!(hands.len(), 6);
    /// assert_eq!(deck.len(), 22);
    /// ```
    pub fn deal_hands(&mut self, hands: usize) -> Result<Vec<Hand>, DealError> {
        let remaining = self.cards.len();
        let needed = match hands.checked_mul(HAND_SIZE) {
            Some(needed) if needed <= remaining => needed,
            _ => return Err(DealError::NotEnoughCards { hands, remaining }),
        };

        let dealt = self.draw_n(needed);
        let out = (0..hands)
            .map(|h| {
                let cards: Vec<Card> =
                    (0..HAND_SIZE).map(|round| dealt[round * hands + h]).collect();
                Hand::from_slice(&cards)
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("dealt {} hands, {} cards left", hands, self.cards.len());
        Ok(out)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let unique: HashSet<Card> = d.cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(d.cards()[0], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(d.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_ne!(d1.cards, Deck::standard().cards);
    }

    #[test]
    fn draw_takes_from_the_top() {
        let mut d = Deck::standard();
        let top: Vec<Card> = d.cards()[..5].to_vec();
        assert_eq!(d.draw_n(5), top);
        assert_eq!(d.len(), 47);
        assert_eq!(d.draw_n(100).len(), 47);
        assert!(d.is_empty());
    }

    #[test]
    fn deal_is_round_robin() {
        let mut d = Deck::standard();
        let order = d.cards().to_vec();
        let hands = d.deal_hands(6).unwrap();
        assert_eq!(hands[0].cards()[0], order[0]);
        assert_eq!(hands[1].cards()[0], order[1]);
        assert_eq!(hands[0].cards()[1], order[6]);
        assert_eq!(hands[5].cards()[4], order[29]);
        assert_eq!(d.cards()[0], order[30]);
    }

    #[test]
    fn deal_fails_when_deck_runs_short() {
        let mut d = Deck::standard();
        let err = d.deal_hands(11).unwrap_err();
        assert_eq!(err, DealError::NotEnoughCards { hands: 11, remaining: 52 });
        assert_eq!(d.len(), 52);
    }

    #[test]
    fn huge_hand_count_is_not_enough_cards() {
        let mut d = Deck::standard();
        let hands = usize::MAX / 2;
        let err = d.deal_hands(hands).unwrap_err();
        assert_eq!(err, DealError::NotEnoughCards { hands, remaining: 52 });
        assert_eq!(d.len(), 52);
    }
}
