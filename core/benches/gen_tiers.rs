use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minetac_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn tiers() -> [(&'static str, GameConfig); 3] {
    [
        ("classic", GameConfig::CLASSIC),
        ("dense", GameConfig::new_unchecked((16, 16), 200, 2)),
        ("large", GameConfig::new_unchecked((64, 64), 600, 2)),
    ]
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in tiers() {
        let avoid = (config.size.0 / 2, config.size.1 / 2);
        group.bench_function(name, |b| {
            let mut rng = SmallRng::seed_from_u64(0x5eed);
            b.iter(|| {
                RejectionSampler::new(&mut rng).generate(
                    black_box(config.size),
                    black_box(config.mines),
                    avoid,
                )
            })
        });
    }
    group.finish();
}

fn bench_first_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_click");
    for (name, config) in tiers() {
        let center = (config.size.0 / 2, config.size.1 / 2);
        let mut seed = 0;
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    seed += 1;
                    GameController::new(config, seed).expect("bench configs are valid")
                },
                |mut game| black_box(game.left_click(center)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_first_click);
criterion_main!(benches);
