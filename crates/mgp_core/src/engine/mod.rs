pub mod points;
pub mod race_sim;

pub use points::{points_for, race_points, POINTS_TABLE};
pub use race_sim::RaceSimulator;
