use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::MessageInfo;

use serde::Serialize;
use std::time::Duration;

/// Report of a single ant, or of the colony itself when `ant_id` is 0.
#[derive(Debug, Clone)]
pub struct Message {
    pub ant_id: usize,
    pub iteration: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub cpu_time: Duration,
    pub distance: f64,
    pub best_distance: f64,
    pub max_pheromone: f64,
}

impl Message {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ant_id: usize,
        iteration: usize,
        evaluations: usize,
        fallbacks: usize,
        cpu_time: Duration,
        distance: f64,
        best_distance: f64,
        max_pheromone: f64,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            evaluations,
            fallbacks,
            cpu_time,
            distance,
            best_distance,
            max_pheromone,
        }
    }

    /// An ant only knows its own tour.
    pub fn from_ant(
        ant_id: usize,
        iteration: usize,
        evaluations: usize,
        fallbacks: usize,
        cpu_time: Duration,
        distance: f64,
    ) -> Self {
        Self::new(
            ant_id,
            iteration,
            evaluations,
            fallbacks,
            cpu_time,
            distance,
            f64::INFINITY,
            0.0,
        )
    }

    pub fn id(&self) -> usize {
        self.ant_id
    }
}

impl supervisor::Message for Message {
    fn get_info(&self) -> MessageInfo {
        MessageInfo::new(
            self.evaluations,
            self.fallbacks,
            self.cpu_time,
            self.distance,
            self.best_distance,
            self.max_pheromone,
        )
    }
}

/// One csv row of aggregated statistics.
#[derive(Debug, Serialize)]
pub struct Record {
    pub iteration: usize,
    pub evaluations: usize,
    pub fallbacks: usize,
    pub cpu_time_micros: u64,
    pub iteration_best: f64,
    pub best_so_far: f64,
    pub max_pheromone: f64,
}

impl Record {
    pub fn from_info(iteration: usize, info: &MessageInfo) -> Self {
        Record {
            iteration,
            evaluations: info.evaluations,
            fallbacks: info.fallbacks,
            cpu_time_micros: info.cpu_time.as_micros() as u64,
            iteration_best: info.distance,
            best_so_far: info.best_distance,
            max_pheromone: info.max_pheromone,
        }
    }
}
