use crate::util::{scale::Scaler, Point};

pub struct PointScaler {
    pub x_scaler: Scaler,
    pub y_scaler: Scaler,
}

impl PointScaler {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        PointScaler {
            x_scaler: Scaler::new(min_x, max_x),
            y_scaler: Scaler::new(min_y, max_y),
        }
    }

    /// Builds a scaler spanning the bounding box of the given points.
    pub fn from_point_iterator(points: impl Iterator<Item = Point>) -> Self {
        let (min_x, min_y, max_x, max_y) = points.fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |acc, point| {
                (
                    f64::min(acc.0, point.x),
                    f64::min(acc.1, point.y),
                    f64::max(acc.2, point.x),
                    f64::max(acc.3, point.y),
                )
            },
        );

        PointScaler::new(min_x, min_y, max_x, max_y)
    }

    pub fn scale_point(&self, point: &Point) -> Point {
        Point {
            x: self.x_scaler.scale(point.x),
            y: self.y_scaler.scale(point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_maps_to_unit_square() {
        let points = vec![
            Point { x: -10.0, y: 5.0 },
            Point { x: 30.0, y: 25.0 },
            Point { x: 10.0, y: 15.0 },
        ];
        let scaler = PointScaler::from_point_iterator(points.iter().copied());

        assert_eq!(scaler.scale_point(&points[0]), Point { x: 0.0, y: 0.0 });
        assert_eq!(scaler.scale_point(&points[1]), Point { x: 1.0, y: 1.0 });
        assert_eq!(scaler.scale_point(&points[2]), Point { x: 0.5, y: 0.5 });
    }
}
