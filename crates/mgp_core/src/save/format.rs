use super::error::SaveError;
use crate::career::SeasonState;
use crate::models::Nationality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suffix appended to snapshot file names when absent.
pub const SAVE_SUFFIX: &str = ".mgpseason.json";

/// Reduced persisted representation of a season.
///
/// Riders and teams are stored by name only; attributes are regenerated on
/// load, so a restored season is behaviorally equivalent for standings and
/// point totals, not bit-exact. Unknown JSON fields are ignored on load for
/// forward compatibility.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeasonSnapshot {
    pub player_name: String,
    pub player_nationality: Nationality,
    pub player_age: u32,
    pub current_race: u32,
    pub total_races: u32,
    pub rider_points: BTreeMap<String, u32>,
    pub team_points: BTreeMap<String, u32>,
    pub circuit_names: Vec<String>,
    pub difficulty: u8,
    /// History length only; past race results are not persisted.
    #[serde(default)]
    pub races_completed: u32,
}

impl SeasonSnapshot {
    pub fn from_state(state: &SeasonState) -> Self {
        SeasonSnapshot {
            player_name: state.player.name.clone(),
            player_nationality: state.player.nationality,
            player_age: state.player.age,
            current_race: state.current_race,
            total_races: state.total_races,
            rider_points: state.rider_points.clone(),
            team_points: state.team_points.clone(),
            circuit_names: state.calendar.iter().map(|c| c.name.clone()).collect(),
            difficulty: state.difficulty,
            races_completed: state.history.len() as u32,
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Structural checks beyond what serde enforces.
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.current_race == 0 {
            return Err(SaveError::InvalidSnapshot(
                "current_race must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.difficulty) {
            return Err(SaveError::InvalidSnapshot(format!(
                "difficulty must be in 1..=100, got {}",
                self.difficulty
            )));
        }
        if self.circuit_names.len() as u32 != self.total_races {
            return Err(SaveError::InvalidSnapshot(format!(
                "calendar holds {} circuits but total_races is {}",
                self.circuit_names.len(),
                self.total_races
            )));
        }
        Ok(())
    }
}

/// Appends [`SAVE_SUFFIX`] to `name` unless it already carries it.
pub fn snapshot_file_name(name: &str) -> String {
    if name.ends_with(SAVE_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{SAVE_SUFFIX}")
    }
}
