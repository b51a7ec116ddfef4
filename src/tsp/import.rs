mod error;

pub use error::ImportError;

use crate::tsp::City;

use csv::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads cities from a csv file with the header `name,x,y`.
pub fn import_csv(filename: &str) -> Result<Vec<City>, ImportError> {
    if !Path::new(filename).exists() {
        return Err(ImportError::MissingFile(filename.to_string()));
    }

    let file = File::open(filename).map_err(|err| ImportError::MissingFile(err.to_string()))?;
    read_cities(file)
}

pub fn read_cities<R: Read>(reader: R) -> Result<Vec<City>, ImportError> {
    let mut reader = Reader::from_reader(reader);
    let mut cities = Vec::new();
    for record in reader.deserialize() {
        let city: City = record.map_err(|err| ImportError::InvalidFormat(err.to_string()))?;
        cities.push(city);
    }

    Ok(cities)
}
