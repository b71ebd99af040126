use crate::cards::Card;
use crate::evaluator::RankedHand;
use crate::hand::Hand;
use std::fmt::Write;

/// Cards per row when a deck is listed on multiple lines.
pub const DECK_ROW: usize = 13;

/// List cards separated by spaces, wrapping every [`DECK_ROW`] cards unless `single_line`.
pub fn format_deck(cards: &[Card], single_line: bool) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        let _ = write!(out, "{card} ");
        if !single_line && (i + 1) % DECK_ROW == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Heading printed above the dealt or loaded hands, e.g. `*** Here are the six hands...`.
pub fn hands_heading(count: usize) -> String {
    const WORDS: [&str; 11] =
        ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    match WORDS.get(count) {
        Some(word) => format!("*** Here are the {word} hands..."),
        None => format!("*** Here are the {count} hands..."),
    }
}

/// Banner shown when a layout repeats a card.
pub fn duplicate_banner(card: Card) -> String {
    format!("\n*** ERROR - DUPLICATED CARD FOUND IN DECK ***\n\n\n*** DUPLICATE: {card} ***")
}

/// One hand per line.
pub fn format_hands(hands: &[Hand]) -> String {
    let mut out = String::new();
    for hand in hands {
        let _ = writeln!(out, "{hand}");
    }
    out
}

/// One ranked hand per line, strongest first: `<cards> - <category>`.
///
/// ```
/// use stud_rs::evaluator::rank_all;
/// use stud_rs::hand::Hand;
/// use stud_rs::report::format_ranking;
///
/// let hands: Vec<Hand> = vec!["2D 2C 2H 5S 5D".parse().unwrap()];
/// assert_eq!(format_ranking(&rank_all(hands)), "2D 2C 2H 5S 5D - Full House\n");
/// ```
pub fn format_ranking(ranked: &[RankedHand]) -> String {
    let mut out = String::new();
    for r in ranked {
        let _ = writeln!(out, "{} - {}", r.hand, r.category);
    }
    out
}
