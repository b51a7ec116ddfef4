use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::aco::{Params, ParamsError, StartPolicy};
use crate::rng::os_random_seed64;

#[derive(Copy, Clone, Deserialize, Serialize, Debug)]
pub struct AcoExperiment {
    pub ant_count: usize,
    pub iterations: usize,
    pub decay: f64,
    /// Missing means every ant picks a random start.
    pub start_city: Option<usize>,
    pub seed: u64,
}

impl AcoExperiment {
    pub fn start_policy(&self) -> StartPolicy {
        self.start_city.map_or(StartPolicy::Random, StartPolicy::Fixed)
    }

    pub fn to_params(&self) -> Result<Params, ParamsError> {
        Params::new(
            self.ant_count,
            self.iterations,
            self.decay,
            self.start_policy(),
            Some(self.seed as u128),
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UnseededAcoExperiment {
    pub ant_count: usize,
    pub iterations: usize,
    pub decay: f64,
    pub start_city: Option<usize>,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            ant_count: self.ant_count,
            iterations: self.iterations,
            decay: self.decay,
            start_city: self.start_city,
            seed: os_random_seed64(),
        }
    }
}
