use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::error::Error;
use std::path::Path;
use std::sync::atomic::AtomicBool;

use tsp_aco::experiment::TspExperiment;
use tsp_aco::experiment_config::{Algorithm, ExperimentConfig};

fn main() {
    let patterns: Vec<String> = env::args().skip(1).collect();
    if patterns.is_empty() {
        eprintln!("usage: tsp_aco <config glob>...");
        std::process::exit(2);
    }

    if let Err(err) = run(&patterns) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(patterns: &[String]) -> Result<(), Box<dyn Error>> {
    for pattern in patterns {
        for entry in glob(pattern)? {
            run_file(&entry?)?;
        }
    }

    Ok(())
}

fn run_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let config = ExperimentConfig::from_path(path)?;
    if config.finished() {
        println!("Skipping finished experiment {}", path.display());
        return Ok(());
    }

    let prefix = path.with_extension("").display().to_string();
    let iterations = config.algorithm.aco().iterations;
    let bar = ProgressBar::new(iterations as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{prefix} [{bar:40}] {pos}/{len} epochs | {msg}")
            .progress_chars("=> "),
    );
    bar.set_prefix(&prefix);

    let outcome = TspExperiment::run_config(
        &config,
        &prefix,
        &AtomicBool::new(false),
        |_, best| {
            bar.inc(1);
            bar.set_message(&format!("Minimum Total Distance: {:.3}", best));
        },
    )?;
    bar.finish();

    println!("Number of cities in the tour: {}", outcome.instance.order());
    if let Some(best) = &outcome.result.best {
        println!("Best Tour:");
        // the closing move back to the start is implied
        for (i, &id) in best.path.iter_cities().take(best.path.len()).enumerate() {
            let city = outcome.instance.city(id);
            println!(
                "{}. {} | Coordinates = ({}, {})",
                i + 1,
                city.name,
                city.x,
                city.y
            );
        }
        println!("Total distance: {}", best.distance());
    }
    println!("Seed: {}", outcome.config.algorithm.aco().seed);

    Ok(())
}
