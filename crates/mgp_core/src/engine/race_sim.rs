//! Race outcome engine.
//!
//! Converts rider attributes, bike performance and circuit characteristics
//! into a ranked finishing order plus fastest-lap and retirement data. The
//! simulator owns its RNG; seed it for reproducible seasons.

use crate::error::SimError;
use crate::models::{Circuit, RaceResult, Rider, Team};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Default weight of the rider-skill component in the performance score.
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.6;
/// Default weight of the bike component in the performance score.
pub const DEFAULT_BIKE_WEIGHT: f64 = 0.4;

/// Bike score assigned to riders without a team.
const TEAMLESS_BIKE_SCORE: f64 = 5000.0;

pub struct RaceSimulator {
    rng: ChaCha8Rng,
}

impl Default for RaceSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl RaceSimulator {
    /// Entropy-seeded simulator.
    pub fn new() -> Self {
        RaceSimulator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic simulator: same seed and inputs, same season.
    pub fn from_seed(seed: u64) -> Self {
        RaceSimulator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Simulates one race with the default 0.6/0.4 skill/bike split.
    pub fn simulate(
        &mut self,
        riders: &[Rider],
        teams: &[Team],
        circuit: &Circuit,
    ) -> Result<RaceResult, SimError> {
        self.simulate_weighted(riders, teams, circuit, DEFAULT_SKILL_WEIGHT, DEFAULT_BIKE_WEIGHT)
    }

    /// Simulates one race with explicit skill/bike weights.
    ///
    /// The weights must sum to a value in [0.9, 1.1]. The returned finishing
    /// order always contains every input rider exactly once; retired riders
    /// keep the rank their score earned them.
    pub fn simulate_weighted(
        &mut self,
        riders: &[Rider],
        teams: &[Team],
        circuit: &Circuit,
        skill_weight: f64,
        bike_weight: f64,
    ) -> Result<RaceResult, SimError> {
        if riders.len() < 2 {
            return Err(SimError::NotEnoughRiders(riders.len()));
        }
        let weight_sum = skill_weight + bike_weight;
        if !(0.9..=1.1).contains(&weight_sum) {
            return Err(SimError::InvalidWeights(weight_sum));
        }

        let scores: Vec<f64> = riders
            .iter()
            .map(|rider| self.performance_score(rider, teams, circuit, skill_weight, bike_weight))
            .collect();

        // Stable sort, descending: equal scores keep input order.
        let mut ranked: Vec<usize> = (0..riders.len()).collect();
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let finishing_order: Vec<String> =
            ranked.iter().map(|&i| riders[i].name.clone()).collect();
        let fastest_laps = self.draw_fastest_laps(riders, &scores);
        let retirements = self.draw_retirements(riders);

        Ok(RaceResult {
            circuit: circuit.name.clone(),
            finishing_order,
            fastest_laps,
            retirements,
        })
    }

    fn performance_score(
        &mut self,
        rider: &Rider,
        teams: &[Team],
        circuit: &Circuit,
        skill_weight: f64,
        bike_weight: f64,
    ) -> f64 {
        let skill = rider.skills.average_effective(&mut self.rng) * rider.tier().race_bonus();
        let bike = self.bike_score(rider, teams);
        let track = self.circuit_factor(rider, circuit);
        let luck = self.rng.gen_range(0.8..1.2);
        (skill * skill_weight + bike * bike_weight) * track * luck
    }

    /// Bike performance scaled into the same range as the skill component.
    fn bike_score(&self, rider: &Rider, teams: &[Team]) -> f64 {
        rider
            .team
            .as_deref()
            .and_then(|name| teams.iter().find(|t| t.name == name))
            .map(|team| team.bike.stats.average() * 100.0)
            .unwrap_or(TEAMLESS_BIKE_SCORE)
    }

    /// Long straights reward raw speed, twisty layouts reward cornering, and
    /// every circuit adds a difficulty markup.
    fn circuit_factor(&mut self, rider: &Rider, circuit: &Circuit) -> f64 {
        let straight_factor = if circuit.main_straight > 800.0 {
            rider.skills.effective_speed(&mut self.rng) / 15000.0
        } else {
            1.0
        };
        let corner_factor = if circuit.corners > 12 {
            rider.skills.effective_cornering(&mut self.rng) / 15000.0
        } else {
            1.0
        };
        let difficulty_factor = 1.0 + f64::from(circuit.difficulty) / 200.0;
        (straight_factor * 0.4 + corner_factor * 0.6) * difficulty_factor
    }

    /// 1-3 random riders post a fastest-lap time, better scores trending
    /// toward better times, clamped to [85, 95] seconds.
    fn draw_fastest_laps(&mut self, riders: &[Rider], scores: &[f64]) -> BTreeMap<String, f64> {
        let count = self.rng.gen_range(1..=3).min(riders.len());
        let mut indices: Vec<usize> = (0..riders.len()).collect();
        indices.shuffle(&mut self.rng);

        indices
            .into_iter()
            .take(count)
            .map(|i| {
                let base = 90.0 + self.rng.gen_range(-5.0..5.0);
                let score_adjust = (15000.0 - scores[i]) / 1000.0;
                (riders[i].name.clone(), (base + score_adjust).clamp(85.0, 95.0))
            })
            .collect()
    }

    /// Independent per-rider retirement draw against the tier probability.
    fn draw_retirements(&mut self, riders: &[Rider]) -> BTreeSet<String> {
        riders
            .iter()
            .filter(|rider| {
                self.rng.gen_range(0.0..1.0) < rider.tier().retirement_probability()
            })
            .map(|rider| rider.name.clone())
            .collect()
    }
}
