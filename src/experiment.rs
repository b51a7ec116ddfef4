use csv::Writer;
use std::error::Error;
use std::fmt;
use std::fs;
use std::fs::File;
use std::sync::atomic::AtomicBool;

use crate::experiment_config::{ExperimentConfig, ExperimentConfigError, Fix};
use crate::export::{result_ron, write_tour, write_trace, SVG};
use crate::metaheuristic::aco::{ParamsError, SearchResult, Supervisor};
use crate::metaheuristic::{Aco, Metaheuristic};
use crate::tsp::import::ImportError;
use crate::tsp::{InstanceError, TspInstance};

#[derive(Debug)]
pub enum ExperimentError {
    Config(ExperimentConfigError),
    Import(ImportError),
    Instance(InstanceError),
    Params(ParamsError),
    Output(String),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::Import(err) => write!(f, "{}", err),
            Self::Instance(err) => write!(f, "{}", err),
            Self::Params(err) => write!(f, "{}", err),
            Self::Output(msg) => write!(f, "Could not write results: {}", msg),
        }
    }
}

impl Error for ExperimentError {}

impl From<ExperimentConfigError> for ExperimentError {
    fn from(err: ExperimentConfigError) -> Self {
        ExperimentError::Config(err)
    }
}

impl From<ImportError> for ExperimentError {
    fn from(err: ImportError) -> Self {
        ExperimentError::Import(err)
    }
}

impl From<InstanceError> for ExperimentError {
    fn from(err: InstanceError) -> Self {
        ExperimentError::Instance(err)
    }
}

impl From<ParamsError> for ExperimentError {
    fn from(err: ParamsError) -> Self {
        ExperimentError::Params(err)
    }
}

fn output_error(err: impl fmt::Display) -> ExperimentError {
    ExperimentError::Output(err.to_string())
}

pub struct ExperimentOutcome {
    /// The config with all seeds drawn, rerunning it reproduces the result.
    pub config: ExperimentConfig,
    pub instance: TspInstance,
    pub result: SearchResult,
}

pub struct TspExperiment {}

impl TspExperiment {
    /// Builds the validated instance a config describes.
    pub fn instance(config: &ExperimentConfig) -> Result<TspInstance, ExperimentError> {
        let cities = config.cities.cities()?;
        let instance = if config.experiment.unique_names {
            TspInstance::with_unique_names(cities)?
        } else {
            TspInstance::new(cities)?
        };

        Ok(instance)
    }

    /// Runs the search without writing anything. Statistics go nowhere.
    pub fn run_in_memory(config: &ExperimentConfig) -> Result<ExperimentOutcome, ExperimentError> {
        let config = config.to_fixed();
        let instance = Self::instance(&config)?;
        let params = config.algorithm.aco().to_params()?;
        let result = Aco::new(&instance, params, Supervisor::default())?.search();

        Ok(ExperimentOutcome {
            config,
            instance,
            result,
        })
    }

    /// Runs the search and writes all outputs next to `prefix`:
    /// statistics, trace and tour as csv, tour and trace as svg and the
    /// result as ron. Seeds missing from `config` are drawn once and
    /// recorded in the ron result.
    pub fn run_config<F>(
        config: &ExperimentConfig,
        prefix: &str,
        cancel: &AtomicBool,
        observer: F,
    ) -> Result<ExperimentOutcome, ExperimentError>
    where
        F: FnMut(usize, f64),
    {
        let config = config.to_fixed();
        let instance = Self::instance(&config)?;
        let params = config.algorithm.aco().to_params()?;

        let stats = File::create(format!("{}_stats.csv", prefix)).map_err(output_error)?;
        let supervisor = Supervisor::new(
            config.experiment.aggregation_rate,
            Writer::from_writer(stats),
        );
        let result = Aco::new(&instance, params, supervisor)?.search_until(cancel, observer);

        let mut trace_writer =
            Writer::from_path(format!("{}_trace.csv", prefix)).map_err(output_error)?;
        write_trace(&mut trace_writer, &result.trace).map_err(output_error)?;

        if let Some(best) = &result.best {
            let mut tour_writer =
                Writer::from_path(format!("{}_tour.csv", prefix)).map_err(output_error)?;
            write_tour(&mut tour_writer, &instance, &best.path).map_err(output_error)?;
        }

        if let Some(svg_config) = config.experiment.svg {
            let svg = SVG::from(svg_config);
            if let Some(best) = &result.best {
                let tour = svg
                    .export_tour(&instance, &best.path, best.distance(), prefix)
                    .map_err(output_error)?;
                fs::write(format!("{}_tour.svg", prefix), tour).map_err(output_error)?;
            }
            let convergence = svg
                .export_convergence(&result.trace, prefix)
                .map_err(output_error)?;
            fs::write(format!("{}_convergence.svg", prefix), convergence)
                .map_err(output_error)?;
        }

        let ron = result_ron(&instance, &config, &result).map_err(output_error)?;
        fs::write(format!("{}_result.ron", prefix), ron).map_err(output_error)?;

        Ok(ExperimentOutcome {
            config,
            instance,
            result,
        })
    }
}
