use knightga::{
    board::{Board, FitnessState, SIZE},
    fitness::KnightChallenge,
    operators::{crossover, random_board, row_origins, RowOrigin},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

#[test]
fn test_zero_rate_mutation_keeps_grid() {
    let challenge = KnightChallenge::default();
    let mut rng = RandomNumberGenerator::from_seed(21);

    for _ in 0..10 {
        let mut board = random_board(&mut rng);
        let before = board.snapshot();
        let fitness_before = board.evaluate(&challenge);

        board.mutate(0.0, &mut rng);

        assert_eq!(board.grid(), &before);
        // The cache is reset even though nothing changed; recomputing agrees.
        assert_eq!(board.fitness_state(), FitnessState::Unknown);
        assert_eq!(board.evaluate(&challenge), fitness_before);
        assert_eq!(board.evaluate(&challenge), fitness_before);
    }
}

#[test]
fn test_full_rate_mutation_inverts_every_cell() {
    let mut rng = RandomNumberGenerator::from_seed(4);
    let mut board = random_board(&mut rng);
    let before = board.snapshot();

    board.mutate(1.0, &mut rng);

    for row in 0..SIZE {
        for col in 0..SIZE {
            assert_ne!(board.is_occupied(row, col), before[row][col]);
        }
    }

    board.mutate(1.0, &mut rng);
    assert_eq!(board.grid(), &before);
}

#[test]
fn test_mutation_rate_is_respected_on_average() {
    let mut rng = RandomNumberGenerator::from_seed(77);
    let mut flipped = 0;
    for _ in 0..200 {
        let mut board = Board::empty();
        board.mutate(0.1, &mut rng);
        flipped += board.knight_count();
    }
    // 200 boards * 64 cells * 0.1
    assert!((1000..1560).contains(&flipped), "flipped {}", flipped);
}

#[test]
fn test_crossover_rows_come_from_one_parent() {
    let mut rng = RandomNumberGenerator::from_seed(12);

    for _ in 0..50 {
        let a = random_board(&mut rng);
        let b = random_board(&mut rng);
        let child = crossover(&a, &b, &mut rng);

        for (idx, origin) in row_origins(&child, &a, &b).iter().enumerate() {
            let origin = origin.expect("row blended from both parents");
            match origin {
                RowOrigin::First => assert_eq!(child.grid()[idx], a.grid()[idx]),
                RowOrigin::Second => assert_eq!(child.grid()[idx], b.grid()[idx]),
                RowOrigin::Both => assert_eq!(a.grid()[idx], b.grid()[idx]),
            }
        }
    }
}

#[test]
fn test_crossover_with_itself_is_a_copy() {
    let mut rng = RandomNumberGenerator::from_seed(30);
    let parent = random_board(&mut rng);
    let child = crossover(&parent, &parent, &mut rng);
    assert_eq!(child, parent);
}

#[test]
fn test_seeded_operators_are_reproducible() {
    let run = |seed| {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let a = random_board(&mut rng);
        let b = random_board(&mut rng);
        let mut child = crossover(&a, &b, &mut rng);
        child.mutate(0.1, &mut rng);
        child
    };

    assert_eq!(run(5), run(5));
}
