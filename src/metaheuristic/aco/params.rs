use crate::rng::os_random_seed;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Where the ants of a generation begin their tours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Every ant starts at the given city.
    Fixed(usize),
    /// Every ant draws its own start uniformly.
    Random,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub ant_count: usize,
    pub iterations: usize,
    pub decay: f64,
    pub start_policy: StartPolicy,
    pub seed: u128,
}

impl Params {
    /// `decay` is the factor all pheromone levels are multiplied with after
    /// every generation and has to lie in (0, 1]. 1.0 disables decay, values
    /// close to 0 forget almost everything after a single generation.
    /// Without a seed one is drawn from the operating system.
    pub fn new(
        ant_count: usize,
        iterations: usize,
        decay: f64,
        start_policy: StartPolicy,
        seed: Option<u128>,
    ) -> Result<Self, ParamsError> {
        if ant_count == 0 {
            return Err(ParamsError::NoAnts);
        }
        if iterations == 0 {
            return Err(ParamsError::NoIterations);
        }
        if !(decay > 0.0 && decay <= 1.0) {
            return Err(ParamsError::InvalidDecay(decay));
        }

        Ok(Params {
            ant_count,
            iterations,
            decay,
            start_policy,
            seed: seed.unwrap_or_else(os_random_seed),
        })
    }

    /// Checks the start policy against the number of cities of an instance.
    pub fn check_start(&self, cities: usize) -> Result<(), ParamsError> {
        match self.start_policy {
            StartPolicy::Fixed(start) if start >= cities => {
                Err(ParamsError::StartCityOutOfRange { start, cities })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ParamsError {
    NoAnts,
    NoIterations,
    InvalidDecay(f64),
    StartCityOutOfRange { start: usize, cities: usize },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnts => write!(f, "At least one ant is needed."),
            Self::NoIterations => write!(f, "At least one iteration is needed."),
            Self::InvalidDecay(decay) => {
                write!(f, "Decay factor {} is not in the interval (0, 1].", decay)
            }
            Self::StartCityOutOfRange { start, cities } => write!(
                f,
                "Start city {} does not exist in an instance with {} cities.",
                start, cities
            ),
        }
    }
}

impl Error for ParamsError {}
