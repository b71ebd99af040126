use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::Category;
use core::cmp::Ordering;

/// Order two hands already known to share `category`. `Greater` means `a` is stronger.
///
/// Suit precedence is only ever the last step, so hands dealt from one deck never
/// compare `Equal`.
pub fn break_tie(category: Category, a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    match category {
        Category::RoyalFlush | Category::StraightFlush | Category::Flush => {
            rank_then_suit(a.highest_card(false), b.highest_card(false))
        }
        Category::Straight => rank_then_suit(
            a.highest_card(a.is_ace_low_straight()),
            b.highest_card(b.is_ace_low_straight()),
        ),
        Category::FourOfAKind => a.quad_rank().cmp(&b.quad_rank()),
        Category::FullHouse => a
            .triplet_rank()
            .cmp(&b.triplet_rank())
            .then_with(|| a.pair_ranks().cmp(&b.pair_ranks())),
        Category::ThreeOfAKind => a.triplet_rank().cmp(&b.triplet_rank()),
        Category::TwoPair => {
            // Pair ranks come highest first, so this is high pair then low pair.
            // The kicker is judged by suit before rank.
            a.pair_ranks().cmp(&b.pair_ranks()).then_with(|| {
                let (ka, kb) = (a.kicker(), b.kicker());
                ka.map(suit_precedence)
                    .cmp(&kb.map(suit_precedence))
                    .then_with(|| ka.map(Card::rank).cmp(&kb.map(Card::rank)))
            })
        }
        Category::Pair => a.pair_ranks().cmp(&b.pair_ranks()).then_with(|| {
            match (a.highest_non_pair_card(), b.highest_non_pair_card()) {
                (Some(x), Some(y)) => rank_then_suit(x, y),
                (x, y) => x.cmp(&y),
            }
        }),
        Category::HighCard => rank_then_suit(a.highest_card(false), b.highest_card(false)),
    }
}

fn suit_precedence(card: Card) -> u8 {
    card.suit().precedence()
}

fn rank_then_suit(a: Card, b: Card) -> Ordering {
    a.rank().cmp(&b.rank()).then(suit_precedence(a).cmp(&suit_precedence(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&s.parse::<Hand>().expect("valid hand"))
    }

    fn tie(category: Category, a: &str, b: &str) -> Ordering {
        break_tie(category, &analyze(a), &analyze(b))
    }

    #[test]
    fn flush_compares_top_card_then_suit() {
        assert_eq!(tie(Category::Flush, "AH 9H 7H 4H 2H", "KS QS JS 9S 7S"), Ordering::Greater);
        assert_eq!(tie(Category::Flush, "AD 9D 7D 4D 2D", "AC 3C 5C 8C 10C"), Ordering::Less);
    }

    #[test]
    fn straight_flush_ignores_ace_low() {
        // the top card of a suited wheel is read as the Ace
        assert_eq!(
            tie(Category::StraightFlush, "AD 2D 3D 4D 5D", "9H 10H JH QH KH"),
            Ordering::Greater
        );
    }

    #[test]
    fn straight_wheel_plays_low() {
        assert_eq!(tie(Category::Straight, "AC 2D 3H 4S 5C", "2H 3S 4D 5C 6H"), Ordering::Less);
        assert_eq!(tie(Category::Straight, "10C JD QH KS AC", "9H 10S JC QD KH"), Ordering::Greater);
    }

    #[test]
    fn straight_same_top_rank_uses_suit() {
        assert_eq!(tie(Category::Straight, "5H 6S 7D 8C 9H", "5S 6C 7H 8D 9D"), Ordering::Greater);
    }

    #[test]
    fn two_pair_high_then_low_then_kicker_suit() {
        assert_eq!(tie(Category::TwoPair, "KS KH 2D 2C 3S", "QS QH JD JC AS"), Ordering::Greater);
        assert_eq!(tie(Category::TwoPair, "KS KH 5D 5C 3S", "KD KC 6H 6S 2D"), Ordering::Less);
        // same pairs: a lower kicker in a higher suit still wins
        assert_eq!(tie(Category::TwoPair, "KS KH 5D 5C 3S", "KD KC 5H 5S AD"), Ordering::Greater);
    }

    #[test]
    fn two_pair_kicker_rank_settles_same_suit() {
        assert_eq!(tie(Category::TwoPair, "KS KH 5D 5C 3S", "KD KC 5H 5S 9S"), Ordering::Less);
    }

    #[test]
    fn pair_rank_then_non_pair_card() {
        assert_eq!(tie(Category::Pair, "AS AH 2D 3C 4S", "KS KH QD JC 10S"), Ordering::Greater);
        assert_eq!(tie(Category::Pair, "QS QH 9D 3C 4S", "QD QC 10D 2C 4H"), Ordering::Less);
        assert_eq!(tie(Category::Pair, "QS QH 9D 3C 4S", "QD QC 9C 2C 4H"), Ordering::Less);
    }

    #[test]
    fn high_card_rank_then_suit() {
        assert_eq!(tie(Category::HighCard, "KD 9C 7H 4S 2D", "KC 9D 7S 4H 2C"), Ordering::Less);
        assert_eq!(tie(Category::HighCard, "AD 3C 5H 7S 9D", "KS QS JS 9S 7D"), Ordering::Greater);
    }

    #[test]
    fn grouped_categories_use_group_rank_only() {
        assert_eq!(tie(Category::FourOfAKind, "9S 9H 9D 9C 2S", "8S 8H 8D 8C AS"), Ordering::Greater);
        assert_eq!(tie(Category::ThreeOfAKind, "4S 4H 4D AC KS", "5S 5H 5D 2C 3S"), Ordering::Less);
        assert_eq!(tie(Category::FullHouse, "2D 2C 2H 5S 5D", "3D 3C 3H 4S 4D"), Ordering::Less);
        assert_eq!(tie(Category::FullHouse, "3D 3C 3H 5S 5D", "3S 3C 3H 4S 4D"), Ordering::Greater);
    }
}
