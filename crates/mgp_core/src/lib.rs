//! # mgp_core - Turn-Based MotoGP Career Simulation Engine
//!
//! This library tracks a roster of riders and teams across a season of
//! races: it computes per-race outcomes from rider attributes and circuit
//! characteristics, accumulates championship standings, and persists progress
//! as a reduced JSON snapshot.
//!
//! ## Features
//! - Seedable simulation (same seed = same season)
//! - Championship points table and rider/team standings
//! - Season state machine with explicit error conditions
//! - Pluggable save storage (file-based or in-memory)

pub mod career;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;

pub use career::{CareerManager, PlayerStatus, SeasonState, SeasonSummary};
pub use engine::{points_for, race_points, RaceSimulator};
pub use error::{CareerError, SimError};
pub use models::{
    circuit_pool, Bike, BikeStats, Circuit, Manufacturer, Nationality, RaceResult, Rider,
    RiderSkills, SkillKind, SkillTier, Team,
};
pub use save::{FileStorage, MemoryStorage, SaveError, SaveStorage, SeasonSnapshot, SAVE_SUFFIX};
