//! Championship points.
//!
//! Fixed MotoGP-style table for the top 15 finishers; everyone else scores
//! nothing. Retired riders keep their finishing-order slot but score zero.

use crate::models::RaceResult;
use std::collections::BTreeMap;

/// Points for positions 1..=15, winner first.
pub const POINTS_TABLE: [u32; 15] = [25, 20, 16, 13, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Points for a 1-based finishing position. Positions outside 1..=15
/// (including 0 and negative sentinels) score 0.
pub fn points_for(position: i32) -> u32 {
    if (1..=POINTS_TABLE.len() as i32).contains(&position) {
        POINTS_TABLE[(position - 1) as usize]
    } else {
        0
    }
}

/// Points earned by every rider in a race result, keyed by rider name.
/// Riders in the retirement set score 0 regardless of their rank.
pub fn race_points(result: &RaceResult) -> BTreeMap<String, u32> {
    result
        .finishing_order
        .iter()
        .enumerate()
        .map(|(index, rider)| {
            let points = if result.retired(rider) {
                0
            } else {
                points_for(index as i32 + 1)
            };
            (rider.clone(), points)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap as Map, BTreeSet};

    #[test]
    fn test_points_table_values() {
        assert_eq!(points_for(1), 25);
        assert_eq!(points_for(2), 20);
        assert_eq!(points_for(3), 16);
        assert_eq!(points_for(10), 6);
        assert_eq!(points_for(15), 1);
    }

    #[test]
    fn test_points_outside_table_are_zero() {
        assert_eq!(points_for(0), 0);
        assert_eq!(points_for(-1), 0);
        assert_eq!(points_for(-100), 0);
        assert_eq!(points_for(16), 0);
        assert_eq!(points_for(i32::MAX), 0);
    }

    #[test]
    fn test_race_points_skip_retired_riders() {
        let result = RaceResult {
            circuit: "Circuito de Jerez".to_string(),
            finishing_order: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            fastest_laps: Map::new(),
            retirements: BTreeSet::from(["B".to_string()]),
        };
        let points = race_points(&result);
        assert_eq!(points["A"], 25);
        assert_eq!(points["B"], 0); // retired at rank 2, still occupies the slot
        assert_eq!(points["C"], 16);
        assert_eq!(points["D"], 13);
    }

    #[test]
    fn test_race_points_cover_every_participant() {
        let order: Vec<String> = (0..18).map(|i| format!("R{i:02}")).collect();
        let result = RaceResult {
            circuit: "Mugello Circuit".to_string(),
            finishing_order: order.clone(),
            fastest_laps: Map::new(),
            retirements: BTreeSet::new(),
        };
        let points = race_points(&result);
        assert_eq!(points.len(), order.len());
        assert_eq!(points["R15"], 0); // position 16
        assert_eq!(points["R14"], 1); // position 15
    }
}
