use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knightga::{
    evolution::{EvolutionOptions, NullSink, PopulationEngine},
    fitness::KnightChallenge,
    operators::random_board,
    rng::RandomNumberGenerator,
    strategy::ElitePairingStrategy,
};

fn bench_fitness(c: &mut Criterion) {
    let challenge = KnightChallenge::default();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let boards: Vec<_> = (0..100).map(|_| random_board(&mut rng)).collect();

    c.bench_function("score_100_boards", |b| {
        b.iter(|| {
            boards
                .iter()
                .map(|board| challenge.score_grid(black_box(board.grid())))
                .sum::<i32>()
        })
    });
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    for population in [100, 1000, 4000].iter() {
        group.bench_with_input(
            BenchmarkId::new("ten_generations", population),
            population,
            |b, &population| {
                b.iter(|| {
                    let options = EvolutionOptions::builder()
                        .num_generations(10)
                        .population_size(population)
                        .build();
                    let mut engine = PopulationEngine::new(
                        ElitePairingStrategy::new(),
                        KnightChallenge::default(),
                        options,
                    )
                    .unwrap();
                    let result = engine
                        .run(&mut RandomNumberGenerator::from_seed(42), &mut NullSink)
                        .unwrap();
                    black_box(result.fitness)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_evolution);
criterion_main!(benches);
