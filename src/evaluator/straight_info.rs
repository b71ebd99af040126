use crate::cards::Rank;

/// Whether five ranks form a straight, and whether it is the wheel (A-2-3-4-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub is_ace_low: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, is_ace_low: false };

    /// Detect a straight from five ranks in any order.
    /// A repeated rank never makes a straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let is_consecutive = sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if is_consecutive {
            return StraightInfo { is_straight: true, is_ace_low: false };
        }

        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { is_straight: true, is_ace_low: true };
        }

        Self::NONE
    }
}
