pub mod experiment;
pub mod experiment_config;
pub mod export;
pub mod matrix;
pub mod metaheuristic;
pub mod rng;
pub mod tsp;
pub mod util;
