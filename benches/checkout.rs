use rust_darts::checkout::{generator, CheckoutAdvisor, CheckoutTable, MAX_CHECKOUT, MIN_CHECKOUT};
use rust_darts::core::{CheckoutMode, Multiplier, Segment};
use rust_darts::session::Controller;
use rust_darts::GameConfig;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        looking_up_curated_range,
        generating_three_dart_finishes,
        suggesting_with_fallback,
        snapshotting_session,
}

fn looking_up_curated_range(c: &mut criterion::Criterion) {
    let table = CheckoutTable::curated();
    c.bench_function("look up every curated score", |b| {
        b.iter(|| {
            (MIN_CHECKOUT..=MAX_CHECKOUT)
                .map(|score| table.lookup(score).len())
                .sum::<usize>()
        })
    });
}

fn generating_three_dart_finishes(c: &mut criterion::Criterion) {
    c.bench_function("generate 10 finishes for 121", |b| {
        b.iter(|| generator::finishes(criterion::black_box(121), 3, 10))
    });
}

fn suggesting_with_fallback(c: &mut criterion::Criterion) {
    let advisor = CheckoutAdvisor::new(CheckoutMode::CuratedWithFallback { limit: 5 });
    c.bench_function("suggest across 2-170 with fallback", |b| {
        b.iter(|| {
            (MIN_CHECKOUT..=MAX_CHECKOUT)
                .map(|score| advisor.suggest(score, 3).len())
                .sum::<usize>()
        })
    });
}

fn snapshotting_session(c: &mut criterion::Criterion) {
    let mut controller = Controller::new(GameConfig::default()).expect("default config is valid");
    let twenty = Segment::number(20).expect("20 is on the board");
    for _ in 0..6 {
        controller.throw(twenty, Multiplier::Triple);
    }
    c.bench_function("snapshot a session mid-leg", |b| b.iter(|| controller.snapshot()));
}
