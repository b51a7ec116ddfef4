mod aco_experiment;

use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
pub use aco_experiment::{AcoExperiment, UnseededAcoExperiment};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum AlgoConfig {
    Aco(AcoExperiment),
    UnseededAco(UnseededAcoExperiment),
}

impl AlgoConfig {
    pub fn aco(&self) -> AcoExperiment {
        match self {
            AlgoConfig::Aco(aco) => *aco,
            AlgoConfig::UnseededAco(usaco) => usaco.to_fixed(),
        }
    }
}

impl Fix<AlgoConfig> for AlgoConfig {
    fn to_fixed(&self) -> AlgoConfig {
        AlgoConfig::Aco(self.aco())
    }
}
