//! stud-rs: five-card stud hand analysis
//!
//! Goals:
//! - Classify five-card hands into the ten standard categories
//! - Order any set of hands strongest to weakest, breaking exact ties by suit
//! - Pure, deterministic evaluation; malformed hands are rejected with `Result`
//!
//! ## Quick start: rank some hands
//! ```
//! use stud_rs::evaluator::{rank_all, Category};
//! use stud_rs::hand::Hand;
//!
//! let hands: Vec<Hand> = [
//!     "2D, 2C, 2H, 5S, 5D",
//!     "10D, JD, QD, KD, AD",
//!     "KS, 9C, 7H, 4S, 3D",
//! ]
//! .iter()
//! .map(|s| s.parse().unwrap())
//! .collect();
//!
//! let ranked = rank_all(hands);
//! assert_eq!(ranked[0].category, Category::RoyalFlush);
//! assert_eq!(ranked[2].category, Category::HighCard);
//! ```
//!
//! ## CLI
//! Deal six random hands, or rank a fixed layout file:
//! ```sh
//! cargo run --bin five-card-stud
//! cargo run --bin five-card-stud -- hands.txt
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod layout;
pub mod report;
