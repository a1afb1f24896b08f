pub mod bike;
pub mod circuit;
pub mod race_result;
pub mod rider;
pub mod team;

pub use bike::{Bike, BikeStats, Manufacturer};
pub use circuit::{circuit_pool, pool_circuit_by_name, Circuit};
pub use race_result::RaceResult;
pub use rider::{Nationality, Rider, RiderSkills, SkillKind, SkillTier};
pub use team::Team;
