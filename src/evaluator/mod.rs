pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod tiebreak;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use hand_analysis::HandAnalysis;
use std::fmt;

/// Five-card stud hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three Of A Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four Of A Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand tagged with its category. Produced by [`rank_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RankedHand {
    pub hand: Hand,
    pub category: Category,
}

/// Classify a five-card hand.
///
/// ```
/// use stud_rs::evaluator::{classify, Category};
/// use stud_rs::hand::Hand;
///
/// let hand: Hand = "9H 10H JH QH KH".parse().unwrap();
/// assert_eq!(classify(&hand), Category::StraightFlush);
/// ```
pub fn classify(hand: &Hand) -> Category {
    detector::detect_category(&HandAnalysis::new(hand))
}

/// Validate a raw card slice as a hand, then classify it.
pub fn classify_cards(cards: &[Card]) -> Result<Category, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(classify(&hand))
}

/// Order two hands by strength. `Greater` means `a` beats `b`.
///
/// Categories decide first; equal categories fall through to the category's
/// tie-break rules, ending at suit precedence.
///
/// ```
/// use stud_rs::evaluator::compare;
/// use stud_rs::hand::Hand;
/// use std::cmp::Ordering;
///
/// let a: Hand = "KD 9C 7H 4S 2D".parse().unwrap();
/// let b: Hand = "KC 9D 7S 4H 2C".parse().unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Less);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    let (aa, ab) = (HandAnalysis::new(a), HandAnalysis::new(b));
    let (ca, cb) = (detector::detect_category(&aa), detector::detect_category(&ab));
    ca.cmp(&cb).then_with(|| tiebreak::break_tie(ca, &aa, &ab))
}

/// Sort hands strongest first and tag each with its category.
///
/// Each hand is analyzed once; the input hands are moved, never modified.
pub fn rank_all<I>(hands: I) -> Vec<RankedHand>
where
    I: IntoIterator<Item = Hand>,
{
    let mut analyzed: Vec<(Hand, HandAnalysis, Category)> = hands
        .into_iter()
        .map(|hand| {
            let analysis = HandAnalysis::new(&hand);
            let category = detector::detect_category(&analysis);
            (hand, analysis, category)
        })
        .collect();

    analyzed.sort_by(|(_, xa, xc), (_, ya, yc)| {
        yc.cmp(xc).then_with(|| tiebreak::break_tie(*xc, ya, xa))
    });

    log::debug!("ranked {} hands", analyzed.len());
    analyzed
        .into_iter()
        .map(|(hand, _, category)| {
            log::trace!("{hand} - {category}");
            RankedHand { hand, category }
        })
        .collect()
}
