use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of one simulated race.
///
/// The finishing order is a permutation of the participants, winner first,
/// keyed by rider name. Retired riders stay at the rank the score sort gave
/// them; they are only marked in `retirements` (and score no points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub circuit: String,
    pub finishing_order: Vec<String>,
    /// Fastest-lap times in seconds for a 1-3 rider subset.
    pub fastest_laps: BTreeMap<String, f64>,
    pub retirements: BTreeSet<String>,
}

impl RaceResult {
    /// The rider who crossed the line first.
    pub fn winner(&self) -> Option<&str> {
        self.finishing_order.first().map(String::as_str)
    }

    /// 1-based finishing position of a rider, if they took part.
    pub fn position_of(&self, rider_name: &str) -> Option<usize> {
        self.finishing_order
            .iter()
            .position(|r| r == rider_name)
            .map(|i| i + 1)
    }

    pub fn field_size(&self) -> usize {
        self.finishing_order.len()
    }

    pub fn retired(&self, rider_name: &str) -> bool {
        self.retirements.contains(rider_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RaceResult {
        RaceResult {
            circuit: "Mugello Circuit".to_string(),
            finishing_order: vec!["A".into(), "B".into(), "C".into()],
            fastest_laps: BTreeMap::from([("B".to_string(), 88.5)]),
            retirements: BTreeSet::from(["C".to_string()]),
        }
    }

    #[test]
    fn test_winner_is_first() {
        assert_eq!(sample().winner(), Some("A"));
    }

    #[test]
    fn test_position_lookup() {
        let result = sample();
        assert_eq!(result.position_of("B"), Some(2));
        assert_eq!(result.position_of("Z"), None);
    }

    #[test]
    fn test_retired_rider_keeps_rank() {
        let result = sample();
        assert!(result.retired("C"));
        assert_eq!(result.position_of("C"), Some(3));
    }
}
