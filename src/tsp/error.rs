use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum InstanceError {
    TooFewCities(usize),
    DuplicateCity(String),
    NonFiniteCoordinate(String),
    UnboundedTourLength,
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCities(n) => write!(f, "At least 2 cities are needed, got {}.", n),
            Self::DuplicateCity(name) => write!(f, "City name {} is used more than once.", name),
            Self::NonFiniteCoordinate(name) => {
                write!(f, "City {} has a non finite coordinate.", name)
            }
            Self::UnboundedTourLength => {
                write!(f, "Cities are too far apart, tour lengths overflow.")
            }
        }
    }
}

impl Error for InstanceError {}
