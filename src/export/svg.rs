use crate::experiment_config::SvgConfig;
use crate::metaheuristic::Path;
use crate::tsp::TspInstance;
use crate::util::{scale::PointScaler, Point};

use serde::Serialize;
use tera::Context;
use tera::Tera;

const TOUR_TEMPLATE: &str = include_str!("../templates/tour.svg");
const CONVERGENCE_TEMPLATE: &str = include_str!("../templates/convergence.svg");

#[derive(Serialize)]
struct SvgCity<'a> {
    x: f64,
    y: f64,
    name: &'a str,
}

pub struct SVG {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
}

impl From<SvgConfig> for SVG {
    fn from(config: SvgConfig) -> Self {
        SVG {
            width: config.width,
            height: config.height,
            padding: config.padding,
        }
    }
}

impl SVG {
    fn scaled_point(&self, point: &Point, scaler: &PointScaler) -> Point {
        let scaled_point = scaler.scale_point(point);

        // The scaled point needs to be adjusted to our SVG canvas size and padding.
        Point {
            x: (scaled_point.x * self.width as f64) + self.padding as f64,
            y: (scaled_point.y * (self.height as f64 * -1.0)) + (self.padding + self.height) as f64,
        }
    }

    fn context(&self, name: &str) -> Context {
        let mut context = Context::new();
        context.insert("name", &name);
        context.insert("padding", &self.padding);
        context.insert("total_width", &(self.width + 2 * self.padding));
        context.insert("total_height", &(self.height + 2 * self.padding));
        context
    }

    fn polyline(points: impl Iterator<Item = Point>) -> String {
        points
            .map(|point| format!("{:.2},{:.2}", point.x, point.y))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Draws all cities and the closed tour through them.
    pub fn export_tour(
        &self,
        instance: &TspInstance,
        path: &Path,
        distance: f64,
        name: &str,
    ) -> Result<String, tera::Error> {
        let scaler =
            PointScaler::from_point_iterator(instance.cities().iter().map(|city| city.position()));

        let cities: Vec<SvgCity> = instance
            .cities()
            .iter()
            .map(|city| {
                let point = self.scaled_point(&city.position(), &scaler);
                SvgCity {
                    x: point.x,
                    y: point.y,
                    name: &city.name,
                }
            })
            .collect();
        let tour = Self::polyline(
            path.iter_cities()
                .map(|&id| self.scaled_point(&instance.city(id).position(), &scaler)),
        );

        let mut context = self.context(name);
        context.insert("cities", &cities);
        context.insert("tour", &tour);
        context.insert("distance", &format!("{:.3}", distance));

        Tera::one_off(TOUR_TEMPLATE, &context, true)
    }

    /// Draws the best distance over the generations.
    pub fn export_convergence(&self, trace: &[f64], name: &str) -> Result<String, tera::Error> {
        let points: Vec<Point> = trace
            .iter()
            .enumerate()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(i, distance)| Point {
                x: (i + 1) as f64,
                y: *distance,
            })
            .collect();
        let scaler = PointScaler::from_point_iterator(points.iter().copied());
        let line = Self::polyline(points.iter().map(|point| self.scaled_point(point, &scaler)));

        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (first.y, last.y),
            _ => (f64::INFINITY, f64::INFINITY),
        };

        let mut context = self.context(name);
        context.insert("line", &line);
        context.insert("generations", &points.len());
        context.insert("first", &format!("{:.3}", first));
        context.insert("last", &format!("{:.3}", last));

        Tera::one_off(CONVERGENCE_TEMPLATE, &context, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::City;

    fn svg() -> SVG {
        SVG {
            width: 100,
            height: 100,
            padding: 10,
        }
    }

    #[test]
    fn export_tour_draws_every_city() {
        let instance = TspInstance::new(vec![
            City::new("Braavos", 0.0, 0.0),
            City::new("Lys", 10.0, 0.0),
            City::new("Qohor", 10.0, 10.0),
        ])
        .unwrap();
        let path = Path::from_cities(vec![0, 1, 2, 0]);
        let out = svg().export_tour(&instance, &path, 34.142, "tour").unwrap();

        assert!(out.starts_with("<svg"));
        assert_eq!(out.matches("<circle").count(), 3);
        assert!(out.contains("Qohor"));
        assert!(out.contains("10.00,110.00 110.00,110.00 110.00,10.00 10.00,110.00"));
        assert!(out.contains("34.142"));
    }

    #[test]
    fn export_convergence_draws_trace() {
        let out = svg()
            .export_convergence(&[30.0, 20.0, 20.0, 10.0], "trace")
            .unwrap();

        assert!(out.contains("10.00,10.00"));
        assert!(out.contains("110.00,110.00"));
        assert!(out.contains("30.000"));
    }

    #[test]
    fn export_convergence_handles_empty_trace() {
        assert!(svg().export_convergence(&[], "empty").is_ok());
    }
}
