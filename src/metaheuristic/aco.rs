mod ant;
mod message;
mod params;
mod pheromone;
mod selector;
mod supervisor;

pub use ant::{Ant, AntSolution, Construction};
pub use message::{Message, Record};
pub use params::{Params, ParamsError, StartPolicy};
pub use pheromone::PheromoneMatrix;
pub use selector::{clamped_distance, pick_move, MoveChoice, MIN_DISTANCE};
pub use supervisor::Supervisor;

use crate::metaheuristic::supervisor::Supervisor as _;
use crate::metaheuristic::{BestSoFar, Metaheuristic, ScoredPath};
use crate::rng::{derive_seed, rng64, uniform_index};
use crate::tsp::TspInstance;

use oorandom::Rand64;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Elitist ant system for the symmetric TSP. Each generation every ant builds
/// a tour on the same pheromone snapshot, only the shortest tour of the
/// generation is reinforced, and afterwards all levels decay.
pub struct Aco<'a, W: Write> {
    problem: &'a TspInstance,
    pheromone_matrix: PheromoneMatrix,
    ant_count: usize,
    iterations: usize,
    decay: f64,
    start_policy: StartPolicy,
    best: BestSoFar,
    iteration: usize,
    pub supervisor: Supervisor<W>,
    rng: Rand64,
}

/// Outcome of a search: the best tour and the best distance after every
/// generation that ran.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best: Option<ScoredPath>,
    pub trace: Vec<f64>,
    pub cancelled: bool,
}

impl SearchResult {
    pub fn distance(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::INFINITY, |scored| scored.distance())
    }

    /// Visited city indices, the start repeated at the end.
    pub fn tour(&self) -> Option<Vec<usize>> {
        self.best.as_ref().map(|scored| scored.path.cities())
    }
}

impl<'a, W: Write> Aco<'a, W> {
    fn start_city(&mut self) -> usize {
        match self.start_policy {
            StartPolicy::Fixed(start) => start,
            StartPolicy::Random => uniform_index(&mut self.rng, self.problem.order()),
        }
    }

    /// Builds the tours of all ants, reinforces the shortest one and lets all
    /// pheromone decay. Returns the shortest tour of this generation.
    pub fn run_generation(&mut self) -> Option<ScoredPath> {
        let mut seeds = Vec::with_capacity(self.ant_count);
        for _ in 0..self.ant_count {
            let start = self.start_city();
            seeds.push((start, derive_seed(&mut self.rng)));
        }

        // all ants read the same snapshot, the update below can only happen
        // once every tour is finished
        let iteration = self.iteration;
        let iteration_best = {
            let distances = self.problem.distances();
            let pheromone_matrix = &self.pheromone_matrix;
            let sender = self.supervisor.sender();
            seeds
                .into_iter()
                .enumerate()
                .map(|(i, (start, seed))| {
                    Ant::new(
                        distances,
                        pheromone_matrix,
                        start,
                        seed,
                        sender.clone(),
                        i + 1,
                        iteration,
                    )
                    .get_solution()
                    .scored
                })
                .min_by_key(|scored| scored.distance)
        }?;

        self.pheromone_matrix
            .reinforce(&iteration_best.path, self.problem.distances());
        self.pheromone_matrix.decay(self.decay);

        Some(iteration_best)
    }

    /// Runs all configured generations.
    pub fn search(&mut self) -> SearchResult {
        self.search_until(&AtomicBool::new(false), |_, _| {})
    }

    /// Runs the configured generations, stopping early once `cancel` is set.
    /// The flag is checked between generations. `observer` is called after
    /// every generation with its number (starting at 1) and the best distance
    /// so far.
    pub fn search_until<F>(&mut self, cancel: &AtomicBool, mut observer: F) -> SearchResult
    where
        F: FnMut(usize, f64),
    {
        let mut trace = Vec::with_capacity(self.iterations);
        let mut cancelled = false;
        for generation in 1..=self.iterations {
            if cancel.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }

            self.single_iteration();
            trace.push(self.best.distance());
            observer(generation, self.best.distance());
        }
        self.supervisor.aggregate_receive();

        SearchResult {
            best: self.best.get().cloned(),
            trace,
            cancelled,
        }
    }

    pub fn best(&self) -> &BestSoFar {
        &self.best
    }

    pub fn pheromone_matrix(&self) -> &PheromoneMatrix {
        &self.pheromone_matrix
    }

    /// Number of generations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

impl<'a, W: Write> Metaheuristic<'a> for Aco<'a, W> {
    type Params = Params;
    type SupervisorType = Supervisor<W>;
    type Error = ParamsError;

    fn new(
        problem: &'a TspInstance,
        params: Self::Params,
        supervisor: Self::SupervisorType,
    ) -> Result<Self, ParamsError> {
        params.check_start(problem.order())?;

        Ok(Aco {
            problem,
            pheromone_matrix: PheromoneMatrix::initialize(problem.order()),
            ant_count: params.ant_count,
            iterations: params.iterations,
            decay: params.decay,
            start_policy: params.start_policy,
            best: BestSoFar::new(),
            iteration: 0,
            supervisor,
            rng: rng64(params.seed),
        })
    }

    fn single_iteration(&mut self) -> Option<&ScoredPath> {
        let start_time = Instant::now();
        let iteration_best = self.run_generation()?;
        let improved = self.best.offer(&iteration_best);

        // Ant 0 is always the colony
        let _res = self.supervisor.sender.send(Message::new(
            0,
            self.iteration,
            0,
            0,
            start_time.elapsed(),
            iteration_best.distance(),
            self.best.distance(),
            self.pheromone_matrix.max(),
        ));
        self.iteration += 1;

        if improved {
            return self.best.get();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::City;
    use float_cmp::approx_eq;
    use std::io::Sink;

    fn square() -> TspInstance {
        TspInstance::new(vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 1.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 1.0, 0.0),
        ])
        .unwrap()
    }

    fn circle(n: usize) -> TspInstance {
        TspInstance::new(
            (0..n)
                .map(|i| {
                    let angle = i as f64 * 2.0 * std::f64::consts::PI / n as f64;
                    City::new(&format!("c{}", i), angle.cos() * 50.0, angle.sin() * 50.0)
                })
                .collect(),
        )
        .unwrap()
    }

    fn aco(
        problem: &TspInstance,
        ants: usize,
        iterations: usize,
        decay: f64,
        start_policy: StartPolicy,
        seed: u128,
    ) -> Aco<'_, Sink> {
        let params = Params::new(ants, iterations, decay, start_policy, Some(seed)).unwrap();
        Aco::new(problem, params, Supervisor::default()).unwrap()
    }

    fn assert_non_increasing(trace: &[f64]) {
        for pair in trace.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn new_rejects_start_outside_instance() {
        let problem = square();
        let params = Params::new(1, 1, 0.5, StartPolicy::Fixed(4), Some(1)).unwrap();
        let result = Aco::new(&problem, params, Supervisor::default());

        assert_eq!(
            result.err(),
            Some(ParamsError::StartCityOutOfRange {
                start: 4,
                cities: 4
            })
        );
    }

    #[test]
    fn two_cities_need_one_generation() {
        let problem = TspInstance::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 10.0, 0.0),
        ])
        .unwrap();

        for &ants in [1, 3, 17].iter() {
            let result = aco(&problem, ants, 1, 0.5, StartPolicy::Random, 9).search();

            assert_eq!(result.trace.len(), 1);
            assert!(approx_eq!(f64, result.distance(), 20.0));
            assert!(approx_eq!(f64, result.trace[0], 20.0));
        }
    }

    #[test]
    fn far_apart_cities_are_searched() {
        let problem = TspInstance::new(vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 1e150, 0.0),
            City::new("c", 0.0, 1e150),
        ])
        .unwrap();
        let expected = (2.0 + 2f64.sqrt()) * 1e150;
        let result = aco(&problem, 5, 10, 0.9, StartPolicy::Random, 3).search();

        assert!(((result.distance() - expected) / expected).abs() < 1e-12);
        assert!(result.best.unwrap().path.is_closed_tour(3));
    }

    #[test]
    fn square_converges_to_optimum() {
        let problem = square();
        for &policy in [StartPolicy::Fixed(0), StartPolicy::Random].iter() {
            let result = aco(&problem, 10, 50, 0.9, policy, 1234).search();

            assert!(approx_eq!(f64, result.distance(), 4.0, epsilon = 1e-9));
            assert!(result.best.unwrap().path.is_closed_tour(4));
        }
    }

    #[test]
    fn trace_is_non_increasing() {
        let problem = circle(15);
        let result = aco(&problem, 8, 60, 0.95, StartPolicy::Random, 77).search();

        assert_eq!(result.trace.len(), 60);
        assert!(!result.cancelled);
        assert_non_increasing(&result.trace);
        assert_eq!(*result.trace.last().unwrap(), result.distance());
    }

    #[test]
    fn no_decay_with_single_ant_stays_monotonic() {
        let problem = circle(10);
        let mut aco = aco(&problem, 1, 80, 1.0, StartPolicy::Fixed(0), 5);
        let before = aco.pheromone_matrix().min();
        let result = aco.search();

        assert_non_increasing(&result.trace);
        // reinforcement only ever adds
        assert!(aco.pheromone_matrix().min() >= before);
    }

    #[test]
    fn strong_decay_keeps_pheromone_non_negative() {
        let problem = circle(12);
        let mut aco = aco(&problem, 5, 300, 0.01, StartPolicy::Random, 21);
        let result = aco.search();

        assert!(aco.pheromone_matrix().min() >= 0.0);
        assert!(result.best.unwrap().path.is_closed_tour(12));
    }

    #[test]
    fn same_seed_same_result() {
        let problem = circle(14);
        let first = aco(&problem, 6, 40, 0.9, StartPolicy::Random, 31337).search();
        let second = aco(&problem, 6, 40, 0.9, StartPolicy::Random, 31337).search();

        assert_eq!(first, second);
    }

    #[test]
    fn finds_circle_tour() {
        let problem = circle(8);
        let result = aco(&problem, 20, 100, 0.9, StartPolicy::Random, 8).search();
        let optimum = 8.0 * 2.0 * 50.0 * (std::f64::consts::PI / 8.0).sin();

        assert!(approx_eq!(f64, result.distance(), optimum, epsilon = 1e-6));
    }

    #[test]
    fn fixed_start_tours_begin_at_start() {
        let problem = circle(7);
        let result = aco(&problem, 4, 10, 0.8, StartPolicy::Fixed(3), 2).search();
        let tour = result.tour().unwrap();

        assert_eq!(tour.first(), Some(&3));
        assert_eq!(tour.last(), Some(&3));
    }

    #[test]
    fn single_iteration_reports_only_improvements() {
        let problem = TspInstance::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 3.0, 4.0),
        ])
        .unwrap();
        let mut aco = aco(&problem, 2, 5, 0.5, StartPolicy::Random, 4);

        assert!(aco.single_iteration().is_some());
        // every tour over two cities has the same length
        assert!(aco.single_iteration().is_none());
        assert_eq!(aco.iteration(), 2);
    }

    #[test]
    fn run_generation_reinforces_then_decays() {
        let problem = square();
        let mut aco = aco(&problem, 3, 1, 0.5, StartPolicy::Fixed(0), 6);
        let best = aco.run_generation().unwrap();

        let base = 0.25 * 0.5;
        for (from, to) in best.path.iter_moves() {
            let expected = (0.25 + 1.0 / problem.distances().distance(*from, *to)) * 0.5;
            assert!(approx_eq!(
                f64,
                aco.pheromone_matrix().level(*from, *to),
                expected
            ));
        }
        assert!(approx_eq!(f64, aco.pheromone_matrix().level(0, 0), base));
    }

    #[test]
    fn cancelled_search_stops_between_generations() {
        let problem = circle(6);
        let cancel = AtomicBool::new(false);
        let mut seen = 0;
        let result = aco(&problem, 3, 100, 0.9, StartPolicy::Random, 3).search_until(
            &cancel,
            |generation, _| {
                seen = generation;
                if generation == 5 {
                    cancel.store(true, Ordering::Relaxed);
                }
            },
        );

        assert!(result.cancelled);
        assert_eq!(seen, 5);
        assert_eq!(result.trace.len(), 5);
        assert!(result.best.is_some());
    }

    #[test]
    fn supervisor_receives_every_generation() {
        let problem = circle(5);
        let params = Params::new(4, 6, 0.9, StartPolicy::Random, Some(10)).unwrap();
        let supervisor = Supervisor::new(1, csv::Writer::from_writer(vec![]));
        let mut aco = Aco::new(&problem, params, supervisor).unwrap();
        let result = aco.search();

        let messages = aco.supervisor.messages();
        assert_eq!(messages.len(), 6);
        for (info, best) in messages.iter().zip(result.trace.iter()) {
            assert_eq!(info.best_distance, *best);
            // 4 ants with 4 + 3 + 2 + 1 candidates each
            assert_eq!(info.evaluations, 40);
            assert_eq!(info.fallbacks, 0);
        }
    }
}
