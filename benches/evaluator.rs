use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stud_rs::deck::Deck;
use stud_rs::evaluator::{classify, compare, rank_all};
use stud_rs::hand::Hand;

fn bench_classify(c: &mut Criterion) {
    let hi: Hand = "KD 9C 7H 4S 2D".parse().expect("valid hand");
    let royal: Hand = "10D JD QD KD AD".parse().expect("valid hand");

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("high_card", "K,9,7,4,2"), &hi, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "10-A"), &royal, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();
}

fn bench_compare(c: &mut Criterion) {
    let a: Hand = "KS KH 5D 5C 3S".parse().expect("valid hand");
    let b: Hand = "KD KC 5H 5S AD".parse().expect("valid hand");
    c.bench_function("compare_two_pair", |bench| {
        bench.iter(|| compare(black_box(&a), black_box(&b)))
    });
}

fn bench_rank_all(c: &mut Criterion) {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(42);
    let hands = deck.deal_hands(10).expect("enough cards");
    c.bench_function("rank_all_10", |b| b.iter(|| rank_all(black_box(hands.clone()))));
}

criterion_group!(benches, bench_classify, bench_compare, bench_rank_all);
criterion_main!(benches);
