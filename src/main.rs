use std::time::Duration;
use std::{env, fs, process, thread};

use life_volume::{Simulation, SimulationConfig, extract_live_cells};

/// Headless scheduling harness: drives one tick per `frame_delay` and
/// dumps the resulting history volume as per-layer live-cell counts.
/// Pass a JSON config path as the only argument to override the defaults.
fn main() {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {path}: {err}");
                process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    let mut rng = rand::rng();
    let mut sim = match Simulation::new(config.clone(), &mut rng) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(1);
        }
    };

    // Run past the layer cap so the history window has to slide
    let steps = config.max_generations * 2;
    let tick = Duration::from_millis(config.frame_delay);
    for _ in 0..steps {
        sim = sim.step();
        thread::sleep(tick);
    }

    println!(
        "rule {} on a {size}x{size} grid, {} generations:",
        sim.rules(),
        sim.generation(),
        size = config.grid_size,
    );
    for (generation, grid) in sim.history().iter() {
        let live = extract_live_cells(grid);
        println!("  layer {generation:>4}: {:>6} live cells", live.len());
    }
}

fn load_config(path: &str) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
