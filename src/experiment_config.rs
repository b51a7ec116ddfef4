mod algo_config;
mod city_config;
mod general_experiment_config;

pub use algo_config::{AcoExperiment, AlgoConfig, UnseededAcoExperiment};
pub use city_config::{CityConfig, CityFile, InlineCities, RandomCities};
pub use general_experiment_config::{GeneralExperimentConfig, SvgConfig};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::Path;

pub trait Algorithm {
    fn finished(&self) -> bool;
}

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ExperimentConfig {
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub cities: CityConfig,
}

impl ExperimentConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ExperimentConfigError> {
        serde_yaml::from_str(yaml).map_err(|err| ExperimentConfigError::Parse(err.to_string()))
    }

    /// Loads a yaml experiment file.
    pub fn from_path(path: &Path) -> Result<Self, ExperimentConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => (),
            _ => {
                return Err(ExperimentConfigError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        }

        let file = File::open(path)
            .map_err(|err| ExperimentConfigError::Io(format!("{}: {}", path.display(), err)))?;
        serde_yaml::from_reader(file).map_err(|err| ExperimentConfigError::Parse(err.to_string()))
    }
}

/// Draws every seed the config leaves open, so that the fixed config
/// reproduces its run.
impl Fix<ExperimentConfig> for ExperimentConfig {
    fn to_fixed(&self) -> ExperimentConfig {
        ExperimentConfig {
            experiment: self.experiment.clone(),
            algorithm: self.algorithm.to_fixed(),
            cities: self.cities.to_fixed(),
        }
    }
}

impl Algorithm for ExperimentConfig {
    fn finished(&self) -> bool {
        self.experiment.finished
    }
}

#[derive(Debug, PartialEq)]
pub enum ExperimentConfigError {
    UnsupportedFormat(String),
    Parse(String),
    Io(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(file) => {
                write!(f, "Config {} is not a yaml file.", file)
            }
            Self::Parse(msg) => write!(f, "Could not parse config: {}", msg),
            Self::Io(msg) => write!(f, "Could not read config: {}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}
