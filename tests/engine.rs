//! End-to-end behavior of the tour GA through the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::ga::{tour_length, EngineState};
use u_tsp::{solve, City, TspConfig, TspEngine, TspError};

fn square() -> Vec<City> {
    [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
        .into_iter()
        .map(City::from)
        .collect()
}

fn scattered(n: usize) -> Vec<City> {
    // Deterministic pseudo-random layout without touching the engine's RNG.
    (0..n)
        .map(|i| {
            let x = ((i * 73 + 19) % 101) as f64;
            let y = ((i * 37 + 61) % 89) as f64;
            City::new(x, y)
        })
        .collect()
}

/// Same multiset of cities, compared by position in the input list.
fn assert_reordering(tour: &[City], cities: &[City]) {
    assert_eq!(tour.len(), cities.len());
    let mut used = vec![false; cities.len()];
    for city in tour {
        let idx = cities
            .iter()
            .enumerate()
            .position(|(i, c)| !used[i] && c == city)
            .unwrap_or_else(|| panic!("{city:?} is not an unused input city"));
        used[idx] = true;
    }
}

#[test]
fn square_reaches_perimeter() {
    let config = TspConfig::default()
        .with_chromosomes(50)
        .with_generations(50)
        .with_elite(5)
        .with_contestants(5)
        .with_crossover_rate(0.7)
        .with_mutation_rate(0.1)
        .with_cycle(true)
        .with_seed(2024);

    let result = TspEngine::new(square(), config).unwrap().run().unwrap();

    assert!((result.distance - 40.0).abs() < 1e-9, "got {}", result.distance);
    assert_reordering(&result.tour, &square());

    // Any rotation or reflection of the square: every leg has length 10.
    let tour = &result.tour;
    for i in 0..tour.len() {
        let leg = tour[i].distance(&tour[(i + 1) % tour.len()]);
        assert!((leg - 10.0).abs() < 1e-9, "leg {i} has length {leg}");
    }
}

#[test]
fn open_path_on_a_line_is_sorted() {
    let cities: Vec<City> = [3.0, 0.0, 4.0, 1.0, 2.0]
        .into_iter()
        .map(|x| City::new(x, 0.0))
        .collect();
    let config = TspConfig::default()
        .with_chromosomes(200)
        .with_generations(100)
        .with_elite(10)
        .with_cycle(false)
        .with_seed(5);

    let result = TspEngine::new(cities.clone(), config).unwrap().run().unwrap();

    assert!((result.distance - 4.0).abs() < 1e-9, "got {}", result.distance);
    assert!((tour_length(&cities, &result.order, false) - 4.0).abs() < 1e-9);
}

#[test]
fn fixed_seed_is_deterministic() {
    let cities = scattered(20);
    let config = TspConfig::default()
        .with_chromosomes(40)
        .with_generations(30)
        .with_elite(4)
        .with_mutation_rate(0.05)
        .with_seed(99);

    let a = TspEngine::new(cities.clone(), config.clone()).unwrap().run().unwrap();
    let b = TspEngine::new(cities.clone(), config.clone()).unwrap().run().unwrap();
    assert_eq!(a.tour, b.tour);
    assert_eq!(a.fitness_history, b.fitness_history);

    let c = TspEngine::with_rng(cities, config, StdRng::seed_from_u64(99))
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(a.tour, c.tour);
}

#[test]
fn elitism_keeps_best_fitness_monotone() {
    let config = TspConfig::default()
        .with_chromosomes(60)
        .with_generations(80)
        .with_elite(1)
        .with_mutation_rate(0.2)
        .with_seed(3);

    let result = TspEngine::new(scattered(25), config).unwrap().run().unwrap();

    assert_eq!(result.generations, 80);
    assert_eq!(result.fitness_history.len(), 81);
    for w in result.fitness_history.windows(2) {
        assert!(w[1] >= w[0], "best fitness dropped: {} -> {}", w[0], w[1]);
    }
    let last = *result.fitness_history.last().unwrap();
    assert!((result.best_fitness - last).abs() < 1e-15);
}

#[test]
fn evolution_improves_on_first_generation() {
    let config = TspConfig::default()
        .with_chromosomes(100)
        .with_generations(150)
        .with_mutation_rate(0.05)
        .with_seed(17);

    let result = TspEngine::new(scattered(20), config).unwrap().run().unwrap();
    let first = result.fitness_history[0];
    assert!(
        result.best_fitness > first,
        "final {} did not improve on initial {}",
        result.best_fitness,
        first
    );
}

#[test]
fn duplicate_coordinates_are_distinct_positions() {
    let mut cities = square();
    cities.push(City::new(0.0, 0.0));
    cities.push(City::new(10.0, 10.0));

    let tour = solve(
        cities.clone(),
        TspConfig::default()
            .with_chromosomes(20)
            .with_generations(10)
            .with_elite(2)
            .with_seed(1),
    )
    .unwrap();

    assert_reordering(&tour, &cities);
}

#[test]
fn stepping_reports_each_generation() {
    let config = TspConfig::default()
        .with_chromosomes(10)
        .with_generations(4)
        .with_elite(1)
        .with_contestants(3)
        .with_seed(8);
    let mut engine = TspEngine::new(scattered(6), config).unwrap();

    let mut states = Vec::new();
    loop {
        let state = engine.step().unwrap();
        states.push(state);
        if state == EngineState::Done {
            break;
        }
    }
    assert_eq!(
        states,
        vec![
            EngineState::Running { generation: 1 },
            EngineState::Running { generation: 2 },
            EngineState::Running { generation: 3 },
            EngineState::Done,
        ]
    );
}

#[test]
fn contestants_above_population_fails_fast() {
    let config = TspConfig::default().with_chromosomes(4).with_elite(1).with_contestants(5);
    let err = TspEngine::new(square(), config).unwrap_err();
    assert!(matches!(err, TspError::InvalidConfiguration(_)));
}

#[test]
fn configuration_errors_are_reported() {
    let cases = [
        TspConfig::default().with_crossover_rate(1.2),
        TspConfig::default().with_mutation_rate(-0.01),
        TspConfig::default().with_chromosomes(0),
        TspConfig::default().with_generations(0),
        TspConfig::default().with_elite(101),
    ];
    for config in cases {
        assert!(
            matches!(
                TspEngine::new(square(), config.clone()),
                Err(TspError::InvalidConfiguration(_))
            ),
            "expected rejection for {config:?}"
        );
    }

    assert!(matches!(
        solve(Vec::new(), TspConfig::default()),
        Err(TspError::InvalidConfiguration(_))
    ));
}

#[test]
fn coincident_cities_are_degenerate() {
    let cities = vec![City::new(5.0, 5.0); 4];
    let err = solve(cities, TspConfig::default().with_seed(1)).unwrap_err();
    assert!(matches!(err, TspError::DegenerateInput(_)));
}

#[test]
fn cycle_flag_changes_reported_distance() {
    let cities = square();
    let base = TspConfig::default()
        .with_chromosomes(30)
        .with_generations(20)
        .with_elite(3)
        .with_seed(12);

    let closed = TspEngine::new(cities.clone(), base.clone()).unwrap().run().unwrap();
    let open = TspEngine::new(cities.clone(), base.with_cycle(false)).unwrap().run().unwrap();

    assert!((closed.distance - 40.0).abs() < 1e-9);
    assert!((open.distance - 30.0).abs() < 1e-9);
    assert!(
        (tour_length(&cities, &open.order, true)
            - (tour_length(&cities, &open.order, false)
                + open.tour.last().unwrap().distance(&open.tour[0])))
        .abs()
            < 1e-9
    );
}

#[test]
fn subnormal_tour_length_is_degenerate() {
    let cities = vec![City::new(0.0, 0.0), City::new(5e-324, 0.0)];
    let config = TspConfig::default()
        .with_chromosomes(4)
        .with_contestants(2)
        .with_elite(1)
        .with_generations(1)
        .with_seed(1);

    let err = TspEngine::new(cities, config).unwrap().run().unwrap_err();
    assert!(matches!(err, TspError::DegenerateInput(_)));
}
