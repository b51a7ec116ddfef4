mod distance;
mod point;
pub mod scale;

pub use distance::Distance;
pub use point::Point;
