use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::rng::{os_random_seed, os_random_seed64, rng64};
use crate::tsp::generate::random_cities;
use crate::tsp::import::{import_csv, ImportError};
use crate::tsp::City;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InlineCities {
    pub cities: Vec<City>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CityFile {
    pub filename: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RandomCities {
    pub count: usize,
    pub seed: Option<u64>,
    #[serde(default = "default_range")]
    pub x_range: (f64, f64),
    #[serde(default = "default_range")]
    pub y_range: (f64, f64),
}

fn default_range() -> (f64, f64) {
    (-200.0, 200.0)
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum CityConfig {
    Inline(InlineCities),
    File(CityFile),
    Random(RandomCities),
}

impl CityConfig {
    /// Seed of randomly generated cities, if there is one.
    pub fn seed(&self) -> Option<u64> {
        match self {
            CityConfig::Random(random) => random.seed,
            _ => None,
        }
    }

    /// Produces the city list this config describes.
    pub fn cities(&self) -> Result<Vec<City>, ImportError> {
        match self {
            CityConfig::Inline(inline) => Ok(inline.cities.clone()),
            CityConfig::File(file) => import_csv(&file.filename),
            CityConfig::Random(random) => {
                let seed = random
                    .seed
                    .map_or_else(os_random_seed, |seed| seed as u128);
                Ok(random_cities(
                    random.count,
                    random.x_range,
                    random.y_range,
                    &mut rng64(seed),
                ))
            }
        }
    }
}

impl Fix<CityConfig> for CityConfig {
    fn to_fixed(&self) -> CityConfig {
        match self {
            CityConfig::Random(random) if random.seed.is_none() => {
                CityConfig::Random(RandomCities {
                    seed: Some(os_random_seed64()),
                    ..random.clone()
                })
            }
            other => other.clone(),
        }
    }
}
