use crate::models::{Circuit, RaceResult, Rider};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The authoritative in-memory record of an in-progress season.
///
/// Invariants: `current_race >= 1`; the season is finished exactly when
/// `current_race > total_races`; the calendar always holds `total_races`
/// circuits. Cumulative tables are keyed by rider/team name so standings
/// survive snapshot reloads (reloaded riders are new objects).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonState {
    pub player: Rider,
    /// 1-based index of the next race to run.
    pub current_race: u32,
    pub total_races: u32,
    pub rider_points: BTreeMap<String, u32>,
    pub team_points: BTreeMap<String, u32>,
    pub calendar: Vec<Circuit>,
    pub difficulty: u8,
    pub history: Vec<RaceResult>,
}

impl SeasonState {
    pub fn finished(&self) -> bool {
        self.current_race > self.total_races
    }

    /// Races already run (or skipped), capped at the season length.
    pub fn races_completed(&self) -> u32 {
        (self.current_race - 1).min(self.total_races)
    }

    /// 1-based rank of the player in the descending points ordering.
    /// Ties order alphabetically (stable sort over the name-keyed table).
    pub fn player_position(&self) -> usize {
        standings(&self.rider_points)
            .iter()
            .position(|(name, _)| *name == self.player.name)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Circuit scheduled for the next race, if the season is not finished.
    pub fn next_circuit(&self) -> Option<&Circuit> {
        self.calendar.get(self.current_race as usize - 1)
    }
}

/// Descending standings view over a cumulative points table. Stable on ties:
/// equal totals keep the map's alphabetical key order.
pub fn standings(points: &BTreeMap<String, u32>) -> Vec<(String, u32)> {
    let mut rows: Vec<(String, u32)> = points
        .iter()
        .map(|(name, pts)| (name.clone(), *pts))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// End-of-season summary returned by `finalize_season`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub champion: Option<String>,
    pub champion_points: u32,
    pub champion_team: Option<String>,
    pub champion_team_points: u32,
    pub player_position: usize,
    pub player_points: u32,
    pub races_completed: usize,
}

/// Snapshot of the player's current championship situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub name: String,
    pub team: Option<String>,
    pub points: u32,
    pub position: usize,
    pub current_race: u32,
    pub total_races: u32,
    pub difficulty: u8,
}
