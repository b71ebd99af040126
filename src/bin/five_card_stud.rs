use anyhow::Context;
use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stud_rs::deck::Deck;
use stud_rs::evaluator::rank_all;
use stud_rs::hand::Hand;
use stud_rs::layout::{parse_layout, read_text, LayoutError};
use stud_rs::report::{duplicate_banner, format_deck, format_hands, format_ranking, hands_heading};

#[derive(Debug, Parser)]
#[clap(version, about = "Five-card stud hand analyzer.")]
struct Cli {
    /// Hand layout file, one comma-separated hand per line. Deals a shuffled deck when absent.
    file: Option<PathBuf>,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of hands to deal or read.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
    hands: u8,
}

fn deal(cli: &Cli) -> anyhow::Result<Vec<Hand>> {
    println!("*** USING RANDOMIZED DECK OF CARDS ***\n");
    let mut deck = Deck::standard();
    match cli.seed {
        Some(seed) => deck.shuffle_seeded(seed),
        None => deck.shuffle(),
    }
    println!("*** Shuffled 52 card deck");
    print!("{}", format_deck(deck.cards(), false));

    let hands = deck.deal_hands(cli.hands as usize).context("dealing hands")?;
    println!("{}", hands_heading(hands.len()));
    println!("{}", format_hands(&hands));

    println!("*** Here is what remains in the deck...");
    println!("{}", format_deck(deck.cards(), true));
    Ok(hands)
}

fn load(cli: &Cli, path: &Path) -> anyhow::Result<Vec<Hand>> {
    println!("*** USING TEST DECK ***\n");
    println!("*** File: {}", path.display());
    let text = read_text(path)?;
    for line in text.lines() {
        println!("{line}");
    }
    let layout = parse_layout(&text, cli.hands as usize)
        .map_err(|e| {
            if let LayoutError::DuplicateCard(card) = e {
                println!("{}", duplicate_banner(card));
            }
            e
        })
        .with_context(|| format!("loading layout {}", path.display()))?;
    println!();
    println!("{}", hands_heading(layout.hands.len()));
    println!("{}", format_hands(&layout.hands));
    Ok(layout.hands)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    println!("*** P O K E R    H A N D    A N A L Y Z E R ***\n\n");
    let hands = match &cli.file {
        Some(path) => load(cli, path)?,
        None => deal(cli)?,
    };

    println!("--- WINNING HAND ORDER ---");
    println!("{}", format_ranking(&rank_all(hands)));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
