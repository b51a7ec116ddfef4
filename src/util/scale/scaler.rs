/// Maps values of the interval [min, max] linearly onto [0, 1].
pub struct Scaler {
    pub min: f64,
    pub max: f64,
    diff: f64,
}

impl Scaler {
    pub fn new(min: f64, max: f64) -> Self {
        Scaler {
            min,
            max,
            diff: max - min,
        }
    }

    /// A degenerate interval maps every value onto the center.
    pub fn scale(&self, val: f64) -> f64 {
        if self.diff == 0.0 {
            return 0.5;
        }

        (val - self.min) / self.diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_works() {
        let scaler = Scaler::new(-200.0, 200.0);

        assert_eq!(scaler.scale(-200.0), 0.0);
        assert_eq!(scaler.scale(0.0), 0.5);
        assert_eq!(scaler.scale(200.0), 1.0);
    }

    #[test]
    fn degenerate_interval_maps_to_center() {
        let scaler = Scaler::new(3.0, 3.0);

        assert_eq!(scaler.scale(3.0), 0.5);
    }
}
