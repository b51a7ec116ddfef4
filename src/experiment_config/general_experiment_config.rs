use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SvgConfig {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        SvgConfig {
            width: 1000,
            height: 1000,
            padding: 50,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeneralExperimentConfig {
    #[serde(default)]
    pub finished: bool,
    pub aggregation_rate: usize,
    #[serde(default = "unique_names_default")]
    pub unique_names: bool,
    #[serde(default)]
    pub svg: Option<SvgConfig>,
}

fn unique_names_default() -> bool {
    true
}
