use crate::util::Point;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(name: &str, x: f64, y: f64) -> Self {
        City {
            name: name.to_string(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
