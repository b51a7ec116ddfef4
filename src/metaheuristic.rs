pub mod aco;
mod solution;
mod supervisor;

use crate::tsp::TspInstance;
pub use aco::Aco;
pub use solution::{BestSoFar, Move, Path, ScoredPath};
pub use supervisor::{Message, MessageInfo, Supervisor};

pub trait Metaheuristic<'a>: Sized {
    type Params;
    type SupervisorType;
    type Error;

    fn new(
        problem: &'a TspInstance,
        params: Self::Params,
        supervisor: Self::SupervisorType,
    ) -> Result<Self, Self::Error>;

    /// Runs one generation. Returns the new best path if it improved.
    fn single_iteration(&mut self) -> Option<&ScoredPath>;
}
