mod city;
mod distance_matrix;
mod error;
pub mod generate;
pub mod import;

pub use city::City;
pub use distance_matrix::DistanceMatrix;
pub use error::InstanceError;

use crate::metaheuristic::Path;

use std::collections::HashSet;

/// A validated list of cities together with their pairwise distances.
/// Cities are referenced by their position in the list everywhere else.
#[derive(Debug, Clone)]
pub struct TspInstance {
    cities: Vec<City>,
    distances: DistanceMatrix,
}

impl TspInstance {
    /// Needs at least two cities with finite coordinates whose tour lengths
    /// stay finite.
    pub fn new(cities: Vec<City>) -> Result<Self, InstanceError> {
        if cities.len() < 2 {
            return Err(InstanceError::TooFewCities(cities.len()));
        }

        if let Some(city) = cities.iter().find(|city| !city.position().is_finite()) {
            return Err(InstanceError::NonFiniteCoordinate(city.name.clone()));
        }

        let distances = DistanceMatrix::build(&cities);
        if !distances.tour_bound().is_finite() {
            return Err(InstanceError::UnboundedTourLength);
        }

        Ok(TspInstance { cities, distances })
    }

    /// Like `new`, but additionally rejects lists where two cities share a name.
    pub fn with_unique_names(cities: Vec<City>) -> Result<Self, InstanceError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in cities.iter() {
            if !seen.insert(city.name.as_str()) {
                return Err(InstanceError::DuplicateCity(city.name.clone()));
            }
        }

        TspInstance::new(cities)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: usize) -> &City {
        &self.cities[id]
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of cities.
    pub fn order(&self) -> usize {
        self.cities.len()
    }

    /// Names of the cities along the path, the start city repeated at the end.
    pub fn city_names<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a str> + 'a {
        path.iter_cities()
            .map(move |&id| self.cities[id].name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<City> {
        vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 10.0, 0.0),
            City::new("C", 10.0, 10.0),
        ]
    }

    #[test]
    fn new_works() {
        let instance = TspInstance::new(cities()).unwrap();

        assert_eq!(instance.order(), 3);
        assert_eq!(instance.distances().order(), 3);
        assert_eq!(instance.city(2).name, "C");
    }

    #[test]
    fn new_errors_on_single_city() {
        let result = TspInstance::new(vec![City::new("A", 1.0, 1.0)]);

        assert_eq!(result.unwrap_err(), InstanceError::TooFewCities(1));
    }

    #[test]
    fn new_errors_on_empty_list() {
        assert_eq!(
            TspInstance::new(Vec::new()).unwrap_err(),
            InstanceError::TooFewCities(0)
        );
    }

    #[test]
    fn new_errors_on_nan_coordinate() {
        let mut list = cities();
        list.push(City::new("D", f64::NAN, 0.0));

        assert_eq!(
            TspInstance::new(list).unwrap_err(),
            InstanceError::NonFiniteCoordinate("D".to_string())
        );
    }

    #[test]
    fn new_errors_on_overflowing_distance() {
        let list = vec![
            City::new("A", -1e308, 0.0),
            City::new("B", 1e308, 0.0),
            City::new("C", 0.0, 1e308),
        ];

        assert_eq!(
            TspInstance::new(list).unwrap_err(),
            InstanceError::UnboundedTourLength
        );
    }

    #[test]
    fn new_errors_on_overflowing_tour_length() {
        // every single distance is finite, the round trip is not
        let list = vec![City::new("A", -8e307, 0.0), City::new("B", 8e307, 0.0)];

        assert_eq!(
            TspInstance::new(list).unwrap_err(),
            InstanceError::UnboundedTourLength
        );
    }

    #[test]
    fn new_accepts_large_bounded_coordinates() {
        let list = vec![City::new("A", -1e150, 0.0), City::new("B", 1e150, 0.0)];

        assert!(TspInstance::new(list).is_ok());
    }

    #[test]
    fn duplicate_names_are_allowed_by_default() {
        let mut list = cities();
        list.push(City::new("A", 5.0, 5.0));

        assert!(TspInstance::new(list).is_ok());
    }

    #[test]
    fn with_unique_names_errors_on_duplicate() {
        let mut list = cities();
        list.push(City::new("B", 5.0, 5.0));

        assert_eq!(
            TspInstance::with_unique_names(list).unwrap_err(),
            InstanceError::DuplicateCity("B".to_string())
        );
    }

    #[test]
    fn city_names_follow_path() {
        let instance = TspInstance::new(cities()).unwrap();
        let path = Path::from_cities(vec![1, 2, 0, 1]);
        let names: Vec<&str> = instance.city_names(&path).collect();

        assert_eq!(names, vec!["B", "C", "A", "B"]);
    }
}
