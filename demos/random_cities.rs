//! Evolves a tour over 15 random cities and prints it.
//!
//! Run with `RUST_LOG=info cargo run --example random_cities` to see each
//! improvement of the best fitness as it happens.

use rand::Rng;
use u_tsp::{City, TspConfig, TspEngine};

const CITY_COUNT: usize = 15;
const MAX_COORD: u32 = 255;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = rand::rng();
    let cities: Vec<City> = (0..CITY_COUNT)
        .map(|_| {
            City::new(
                rng.random_range(0..=MAX_COORD) as f64,
                rng.random_range(0..=MAX_COORD) as f64,
            )
        })
        .collect();

    let config = TspConfig::default()
        .with_chromosomes(250)
        .with_generations(100)
        .with_elite(25)
        .with_contestants(5)
        .with_mutation_rate(0.15)
        .with_cycle(true);

    let result = TspEngine::new(cities.clone(), config)?.run()?;

    println!("cities:");
    for city in &cities {
        println!("  ({:>3}, {:>3})", city.x, city.y);
    }

    // Closed loop: the first city is visited again at the end.
    println!("tour:");
    for city in result.tour.iter().chain(result.tour.first()) {
        println!("  ({:>3}, {:>3})", city.x, city.y);
    }
    println!("distance: {:.3}", result.distance);

    Ok(())
}
