pub mod svg;

pub use svg::SVG;

use crate::experiment_config::ExperimentConfig;
use crate::metaheuristic::aco::SearchResult;
use crate::metaheuristic::Path;
use crate::tsp::TspInstance;

use csv::Writer;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TraceRecord {
    generation: usize,
    best_distance: f64,
}

#[derive(Serialize)]
struct TourRecord<'a> {
    position: usize,
    city: usize,
    name: &'a str,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct ResultSnapshot<'a> {
    seed: u64,
    city_seed: Option<u64>,
    distance: f64,
    cancelled: bool,
    tour: Vec<&'a str>,
    cities: Vec<usize>,
    trace: &'a [f64],
}

/// One row per generation with the best distance known after it.
pub fn write_trace<W: Write>(writer: &mut Writer<W>, trace: &[f64]) -> Result<(), csv::Error> {
    for (i, best_distance) in trace.iter().enumerate() {
        writer.serialize(TraceRecord {
            generation: i + 1,
            best_distance: *best_distance,
        })?;
    }
    writer.flush()?;

    Ok(())
}

/// One row per visited city, the start city repeated at the end.
pub fn write_tour<W: Write>(
    writer: &mut Writer<W>,
    instance: &TspInstance,
    path: &Path,
) -> Result<(), csv::Error> {
    for (position, &id) in path.iter_cities().enumerate() {
        let city = instance.city(id);
        writer.serialize(TourRecord {
            position: position + 1,
            city: id,
            name: &city.name,
            x: city.x,
            y: city.y,
        })?;
    }
    writer.flush()?;

    Ok(())
}

/// Serializes the outcome of a search in ron notation, together with the
/// seeds of the fixed `config` it ran with.
pub fn result_ron(
    instance: &TspInstance,
    config: &ExperimentConfig,
    result: &SearchResult,
) -> Result<String, ron::Error> {
    let (tour, cities): (Vec<&str>, Vec<usize>) = match &result.best {
        Some(best) => (instance.city_names(&best.path).collect(), best.path.cities()),
        None => (Vec::new(), Vec::new()),
    };

    to_string_pretty(
        &ResultSnapshot {
            seed: config.algorithm.aco().seed,
            city_seed: config.cities.seed(),
            distance: result.distance(),
            cancelled: result.cancelled,
            tour,
            cities,
            trace: &result.trace,
        },
        PrettyConfig::new(),
    )
}
