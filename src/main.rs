//! Toroidal Life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use serde::Serialize;
use toroidal_life::{
    compute::GenerationStats,
    schema::{Seed, SimulationConfig},
};

/// Progress interval for unbounded runs without a frame rate.
const UNBOUNDED_REPORT_EVERY: u64 = 1000;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a toroidal Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: config value, 0 = forever)");
        eprintln!();
        eprintln!("The seed is read from <config>.seed.json when present.");
        eprintln!("Example configuration is generated with --example flag.");
        process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        process::exit(1);
    });

    let generations: u64 = match args.get(2) {
        Some(arg) => arg.parse().unwrap_or_else(|e| {
            eprintln!("Invalid generation count '{}': {}", arg, e);
            process::exit(1);
        }),
        None => config.generations,
    };

    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            process::exit(1);
        })
    } else {
        log::info!("No seed at {}, using a random fill", seed_path.display());
        Seed::default()
    };

    let mut automaton = seed.build(&config).unwrap_or_else(|e| {
        eprintln!("Error seeding simulation: {}", e);
        process::exit(1);
    });

    println!("Toroidal Life Simulation");
    println!("========================");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Neighborhood: {:?}", config.neighborhood);
    println!("Rules: {}", automaton.rules());
    match generations {
        0 => println!("Generations: unbounded"),
        n => println!("Generations: {}", n),
    }
    match config.frame_interval() {
        Some(_) => println!("Refresh rate: {} generations/s", config.refresh_rate),
        None => println!("Refresh rate: uncapped"),
    }
    println!();

    print_stats("Initial state", &GenerationStats::from_automaton(&automaton));

    println!("Running simulation...");
    let report_every = match generations {
        0 => match config.refresh_rate {
            0 => UNBOUNDED_REPORT_EVERY,
            fps => fps as u64,
        },
        n => (n / 10).max(1),
    };
    let interval = config.frame_interval();
    let start = Instant::now();

    loop {
        let frame_start = Instant::now();
        automaton.evolve();
        let generation = automaton.generation();

        if generation % report_every == 0 {
            let stats = GenerationStats::from_automaton(&automaton);
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}: population={}, density={:.4}, {:.1} gen/s",
                generation,
                stats.population,
                stats.density,
                generation as f32 / elapsed
            );
        }

        if generations != 0 && generation >= generations {
            break;
        }

        if let Some(interval) = interval {
            if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GenerationStats::from_automaton(&automaton);
    println!();
    print_stats("Final state", &final_stats);
    println!("Final stats (JSON):");
    println!("{}", to_json(&final_stats));
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_stats(label: &str, stats: &GenerationStats) {
    println!("{}:", label);
    println!("  Generation: {}", stats.generation);
    println!("  Population: {} / {}", stats.population, stats.cells);
    println!("  Density: {:.4}", stats.density);
    println!();
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", to_json(&config));
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", to_json(&seed));
}
