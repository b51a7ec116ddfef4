use crate::rng::uniform_index;

use oorandom::Rand64;

/// Stand-in for zero distances between coincident cities.
pub const MIN_DISTANCE: f64 = 1e-10;

pub fn clamped_distance(distance: f64) -> f64 {
    if distance > MIN_DISTANCE {
        distance
    } else {
        MIN_DISTANCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub city: usize,
    /// Number of candidate weights that were computed.
    pub evaluations: usize,
    /// True if the weights were degenerate and the city was drawn uniformly.
    pub fallback: bool,
}

/// Draws the next city among the unvisited ones with probability
/// proportional to pheromone / distance. Returns `None` once every city was
/// visited.
///
/// If the weights do not form a usable distribution (all zero, or not finite)
/// the city is drawn uniformly among the unvisited ones instead.
pub fn pick_move(
    pheromone: &[f64],
    distances: &[f64],
    visited: &[bool],
    rng: &mut Rand64,
) -> Option<MoveChoice> {
    let candidates: Vec<(usize, f64)> = visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(id, _)| (id, pheromone[id] / clamped_distance(distances[id])))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let evaluations = candidates.len();
    let total: f64 = candidates.iter().map(|(_, weight)| weight).sum();
    if !(total > 0.0 && total.is_finite()) {
        let (city, _) = candidates[uniform_index(rng, candidates.len())];
        return Some(MoveChoice {
            city,
            evaluations,
            fallback: true,
        });
    }

    // as soon as the running sum passes the random value we have hit the city
    // with the correct probability
    let rand = rng.rand_float() * total;
    let mut sum = 0.0;
    let mut city = None;
    for &(id, weight) in candidates.iter() {
        sum += weight;
        if weight > 0.0 && sum > rand {
            city = Some(id);
            break;
        }
    }

    // rounding may leave the sum just below rand
    let city = city.or_else(|| {
        candidates
            .iter()
            .rev()
            .find(|(_, weight)| *weight > 0.0)
            .map(|(id, _)| *id)
    })?;

    Some(MoveChoice {
        city,
        evaluations,
        fallback: false,
    })
}
