use super::Bike;
use crate::error::CareerError;
use serde::{Deserialize, Serialize};

/// A racing team: one bike, at most [`Team::MAX_RIDERS`] riders.
///
/// The roster stores rider names; the riders themselves live in the career
/// manager's registry and point back here by team name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub bike: Bike,
    riders: Vec<String>,
}

impl Team {
    pub const MAX_RIDERS: usize = 2;

    pub fn new(name: impl Into<String>, bike: Bike) -> Result<Self, CareerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CareerError::EmptyName);
        }
        Ok(Team {
            name,
            bike,
            riders: Vec::new(),
        })
    }

    /// Riders in signing order.
    pub fn riders(&self) -> &[String] {
        &self.riders
    }

    pub fn is_full(&self) -> bool {
        self.riders.len() >= Self::MAX_RIDERS
    }

    pub fn lead_rider(&self) -> Option<&str> {
        self.riders.first().map(String::as_str)
    }

    /// Adds a rider to the roster. Fails when the roster is already full.
    pub fn hire(&mut self, rider_name: impl Into<String>) -> Result<(), CareerError> {
        if self.is_full() {
            return Err(CareerError::TeamFull {
                team: self.name.clone(),
            });
        }
        self.riders.push(rider_name.into());
        Ok(())
    }

    /// Removes a rider by name. Returns whether the rider was on the roster.
    pub fn release(&mut self, rider_name: &str) -> bool {
        let before = self.riders.len();
        self.riders.retain(|r| r != rider_name);
        self.riders.len() < before
    }

    pub fn has_rider(&self, rider_name: &str) -> bool {
        self.riders.iter().any(|r| r == rider_name)
    }
}
