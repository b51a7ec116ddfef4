use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::time::Duration;

pub trait Supervisor<MessageType: Message> {
    /// Drains all pending messages and writes out their aggregation.
    fn aggregate_receive(&mut self);
}

pub trait Message {
    fn get_info(&self) -> MessageInfo;
}

/// Statistics of one aggregation window. Counters and cpu time add up,
/// distances keep the minimum and the pheromone level keeps the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub evaluations: usize,
    pub fallbacks: usize,
    pub cpu_time: Duration,
    pub distance: f64,
    pub best_distance: f64,
    pub max_pheromone: f64,
}

impl Default for MessageInfo {
    fn default() -> Self {
        MessageInfo {
            evaluations: 0,
            fallbacks: 0,
            cpu_time: Duration::default(),
            distance: f64::INFINITY,
            best_distance: f64::INFINITY,
            max_pheromone: 0.0,
        }
    }
}

impl MessageInfo {
    pub fn new(
        evaluations: usize,
        fallbacks: usize,
        cpu_time: Duration,
        distance: f64,
        best_distance: f64,
        max_pheromone: f64,
    ) -> Self {
        Self {
            evaluations,
            fallbacks,
            cpu_time,
            distance,
            best_distance,
            max_pheromone,
        }
    }
}

impl Add for MessageInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            evaluations: self.evaluations + other.evaluations,
            fallbacks: self.fallbacks + other.fallbacks,
            cpu_time: self.cpu_time + other.cpu_time,
            distance: self.distance.min(other.distance),
            best_distance: self.best_distance.min(other.best_distance),
            max_pheromone: self.max_pheromone.max(other.max_pheromone),
        }
    }
}

impl AddAssign for MessageInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        let info = MessageInfo::new(3, 1, Duration::from_millis(2), 12.0, 10.0, 0.5);

        assert_eq!(MessageInfo::default() + info, info);
    }

    #[test]
    fn add_assign_aggregates() {
        let mut info = MessageInfo::new(3, 1, Duration::from_millis(2), 12.0, 10.0, 0.5);
        info += MessageInfo::new(4, 0, Duration::from_millis(3), 9.0, 11.0, 0.25);

        assert_eq!(info.evaluations, 7);
        assert_eq!(info.fallbacks, 1);
        assert_eq!(info.cpu_time, Duration::from_millis(5));
        assert_eq!(info.distance, 9.0);
        assert_eq!(info.best_distance, 10.0);
        assert_eq!(info.max_pheromone, 0.5);
    }
}
