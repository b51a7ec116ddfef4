use crate::metaheuristic::aco::{pick_move, Message, PheromoneMatrix};
use crate::metaheuristic::{Path, ScoredPath};
use crate::rng::rng64;
use crate::tsp::DistanceMatrix;

use oorandom::Rand64;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Builds one closed tour on a read-only view of the pheromone levels.
pub struct Ant<'a> {
    distances: &'a DistanceMatrix,
    pheromone_matrix: &'a PheromoneMatrix,
    start: usize,
    rng_seed: u128,
    sender: Sender<Message>,
    id: usize,
    iteration: usize,
}

impl<'a> Ant<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromone_matrix: &'a PheromoneMatrix,
        start: usize,
        rng_seed: u128,
        sender: Sender<Message>,
        id: usize,
        iteration: usize,
    ) -> Self {
        Ant {
            distances,
            pheromone_matrix,
            start,
            rng_seed,
            sender,
            id,
            iteration,
        }
    }

    /// Visits every city once, starting and ending at the start city.
    pub fn build_path(&self, rng: &mut Rand64) -> Construction {
        let n = self.distances.order();
        let mut path = Path::with_capacity(n);
        let mut visited = vec![false; n];
        let mut evaluations = 0;
        let mut fallbacks = 0;

        path.push_city(self.start);
        visited[self.start] = true;
        let mut prev = self.start;
        while let Some(choice) = pick_move(
            self.pheromone_matrix.row(prev),
            self.distances.row(prev),
            &visited,
            rng,
        ) {
            evaluations += choice.evaluations;
            if choice.fallback {
                fallbacks += 1;
            }

            path.push_city(choice.city);
            visited[choice.city] = true;
            prev = choice.city;
        }
        path.push_city(self.start);

        Construction {
            path,
            evaluations,
            fallbacks,
        }
    }

    pub fn get_solution(&self) -> AntSolution {
        let start_time = Instant::now();
        let mut rng = rng64(self.rng_seed);
        let construction = self.build_path(&mut rng);
        let length = self.distances.path_length(&construction.path);

        let _res = self.sender.send(Message::from_ant(
            self.id,
            self.iteration,
            construction.evaluations,
            construction.fallbacks,
            start_time.elapsed(),
            length,
        ));

        AntSolution {
            scored: ScoredPath::new(construction.path, length),
            evaluations: construction.evaluations,
            fallbacks: construction.fallbacks,
        }
    }
}

pub struct Construction {
    pub path: Path,
    pub evaluations: usize,
    pub fallbacks: usize,
}

pub struct AntSolution {
    pub scored: ScoredPath,
    pub evaluations: usize,
    pub fallbacks: usize,
}
