use crate::tsp::City;

use oorandom::Rand64;

/// Scatters `count` cities uniformly over the given rectangle.
/// Cities are named `C0`, `C1`, ... in generation order.
pub fn random_cities(
    count: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    rng: &mut Rand64,
) -> Vec<City> {
    let x_delta = x_range.1 - x_range.0;
    let y_delta = y_range.1 - y_range.0;

    (0..count)
        .map(|i| {
            let x = rng.rand_float() * x_delta + x_range.0;
            let y = rng.rand_float() * y_delta + y_range.0;
            City::new(&format!("C{}", i), x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng64;

    #[test]
    fn random_cities_stay_in_bounds() {
        let mut rng = rng64(99);
        let cities = random_cities(50, (-200.0, 200.0), (0.0, 10.0), &mut rng);

        assert_eq!(cities.len(), 50);
        for city in cities.iter() {
            assert!(city.x >= -200.0 && city.x < 200.0);
            assert!(city.y >= 0.0 && city.y < 10.0);
        }
    }

    #[test]
    fn random_cities_are_reproducible() {
        let first = random_cities(10, (0.0, 1.0), (0.0, 1.0), &mut rng64(5));
        let second = random_cities(10, (0.0, 1.0), (0.0, 1.0), &mut rng64(5));

        assert_eq!(first, second);
        assert_eq!(first[3].name, "C3");
    }
}
