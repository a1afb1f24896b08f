use crate::error::CareerError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rider nationalities. Serialized by variant name, which doubles as the
/// nationality code in season snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    Spain,
    Italy,
    France,
    Germany,
    Portugal,
    UnitedStates,
    Argentina,
    Netherlands,
    Japan,
    Australia,
    UnitedKingdom,
    Brazil,
}

impl Nationality {
    pub fn name(&self) -> &'static str {
        match self {
            Nationality::Spain => "Spain",
            Nationality::Italy => "Italy",
            Nationality::France => "France",
            Nationality::Germany => "Germany",
            Nationality::Portugal => "Portugal",
            Nationality::UnitedStates => "United States",
            Nationality::Argentina => "Argentina",
            Nationality::Netherlands => "Netherlands",
            Nationality::Japan => "Japan",
            Nationality::Australia => "Australia",
            Nationality::UnitedKingdom => "United Kingdom",
            Nationality::Brazil => "Brazil",
        }
    }
}

/// Skill classification, ordered best to worst. The tier controls the
/// attribute multiplier range, the race bonus and the retirement probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillTier {
    Elite,
    Excellent,
    Good,
    Average,
    Novice,
}

impl SkillTier {
    pub fn all() -> &'static [SkillTier] {
        &[
            SkillTier::Elite,
            SkillTier::Excellent,
            SkillTier::Good,
            SkillTier::Average,
            SkillTier::Novice,
        ]
    }

    /// (min, max) multiplier applied to a base attribute on every read.
    pub fn multiplier_range(&self) -> (f64, f64) {
        match self {
            SkillTier::Elite => (3.0, 300.0),
            SkillTier::Excellent => (2.0, 200.0),
            SkillTier::Good => (1.5, 150.0),
            SkillTier::Average => (1.25, 125.0),
            SkillTier::Novice => (1.1, 110.0),
        }
    }

    /// Flat coefficient applied to the averaged skills in the race formula.
    pub fn race_bonus(&self) -> f64 {
        match self {
            SkillTier::Elite => 1.3,
            SkillTier::Excellent => 1.15,
            SkillTier::Good => 1.0,
            SkillTier::Average => 0.9,
            SkillTier::Novice => 0.8,
        }
    }

    /// Per-race probability of not finishing, drawn independently per rider.
    pub fn retirement_probability(&self) -> f64 {
        match self {
            SkillTier::Elite => 0.05,
            SkillTier::Excellent => 0.10,
            SkillTier::Good => 0.15,
            SkillTier::Average => 0.20,
            SkillTier::Novice => 0.25,
        }
    }
}

/// The three trainable attributes of a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    Speed,
    Braking,
    Cornering,
}

/// Base rider attributes plus tier.
///
/// Effective values are `base * uniform(multiplier_min, multiplier_max)`,
/// rerolled on EVERY read. Attribute reads are therefore not stable across
/// repeated evaluations; the race formula depends on this, so the RNG is an
/// explicit parameter rather than a hidden global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderSkills {
    pub speed: u8,
    pub braking: u8,
    pub cornering: u8,
    pub tier: SkillTier,
}

impl RiderSkills {
    pub fn new(speed: u8, braking: u8, cornering: u8, tier: SkillTier) -> Result<Self, CareerError> {
        check_attribute("speed", speed)?;
        check_attribute("braking", braking)?;
        check_attribute("cornering", cornering)?;
        Ok(RiderSkills {
            speed,
            braking,
            cornering,
            tier,
        })
    }

    pub fn effective_speed(&self, rng: &mut impl Rng) -> f64 {
        self.roll(self.speed, rng)
    }

    pub fn effective_braking(&self, rng: &mut impl Rng) -> f64 {
        self.roll(self.braking, rng)
    }

    pub fn effective_cornering(&self, rng: &mut impl Rng) -> f64 {
        self.roll(self.cornering, rng)
    }

    /// Mean of the three effective attributes (each independently rerolled).
    pub fn average_effective(&self, rng: &mut impl Rng) -> f64 {
        (self.effective_speed(rng) + self.effective_braking(rng) + self.effective_cornering(rng))
            / 3.0
    }

    fn roll(&self, base: u8, rng: &mut impl Rng) -> f64 {
        let (min, max) = self.tier.multiplier_range();
        f64::from(base) * rng.gen_range(min..max)
    }
}

fn check_attribute(attribute: &'static str, value: u8) -> Result<(), CareerError> {
    if (1..=100).contains(&value) {
        Ok(())
    } else {
        Err(CareerError::AttributeOutOfRange {
            attribute,
            value: i64::from(value),
        })
    }
}

/// A rider. The team association is a team *name* resolved through the
/// career manager's team list, never an owning back-pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    pub nationality: Nationality,
    pub age: u32,
    pub skills: RiderSkills,
    pub team: Option<String>,
}

impl Rider {
    pub fn new(
        name: impl Into<String>,
        nationality: Nationality,
        age: u32,
        skills: RiderSkills,
    ) -> Result<Self, CareerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CareerError::EmptyName);
        }
        if age < 18 {
            return Err(CareerError::UnderAge(age));
        }
        Ok(Rider {
            name,
            nationality,
            age,
            skills,
            team: None,
        })
    }

    /// Elite-tier rider with randomized top-end base attributes.
    pub fn elite(
        name: impl Into<String>,
        nationality: Nationality,
        age: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, CareerError> {
        let skills = RiderSkills::new(
            rng.gen_range(90..=100),
            rng.gen_range(85..=95),
            rng.gen_range(95..=100),
            SkillTier::Elite,
        )?;
        Rider::new(name, nationality, age, skills)
    }

    /// Excellent-tier rider with randomized base attributes.
    pub fn excellent(
        name: impl Into<String>,
        nationality: Nationality,
        age: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, CareerError> {
        let skills = RiderSkills::new(
            rng.gen_range(80..=90),
            rng.gen_range(75..=85),
            rng.gen_range(85..=95),
            SkillTier::Excellent,
        )?;
        Rider::new(name, nationality, age, skills)
    }

    /// Good-tier rider with randomized base attributes.
    pub fn good(
        name: impl Into<String>,
        nationality: Nationality,
        age: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, CareerError> {
        let skills = RiderSkills::new(
            rng.gen_range(70..=84),
            rng.gen_range(60..=75),
            rng.gen_range(60..=74),
            SkillTier::Good,
        )?;
        Rider::new(name, nationality, age, skills)
    }

    pub fn tier(&self) -> SkillTier {
        self.skills.tier
    }

    /// Raises one base attribute by `points`, clamped to 1..=100.
    pub fn train(&mut self, kind: SkillKind, points: u8) {
        let attr = match kind {
            SkillKind::Speed => &mut self.skills.speed,
            SkillKind::Braking => &mut self.skills.braking,
            SkillKind::Cornering => &mut self.skills.cornering,
        };
        *attr = attr.saturating_add(points).clamp(1, 100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rider_rejects_under_age() {
        let skills = RiderSkills::new(80, 75, 70, SkillTier::Excellent).unwrap();
        let result = Rider::new("Young Rider", Nationality::Spain, 17, skills);
        assert_eq!(result.unwrap_err(), CareerError::UnderAge(17));
    }

    #[test]
    fn test_rider_rejects_empty_name() {
        let skills = RiderSkills::new(80, 75, 70, SkillTier::Excellent).unwrap();
        let result = Rider::new("   ", Nationality::Spain, 25, skills);
        assert_eq!(result.unwrap_err(), CareerError::EmptyName);
    }

    #[test]
    fn test_skills_reject_out_of_range_attribute() {
        let result = RiderSkills::new(0, 75, 70, SkillTier::Good);
        assert_eq!(
            result.unwrap_err(),
            CareerError::AttributeOutOfRange {
                attribute: "speed",
                value: 0,
            }
        );
    }

    #[test]
    fn test_effective_values_stay_in_multiplier_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let skills = RiderSkills::new(50, 50, 50, SkillTier::Novice).unwrap();
        let (min, max) = SkillTier::Novice.multiplier_range();
        for _ in 0..200 {
            let v = skills.effective_speed(&mut rng);
            assert!(v >= 50.0 * min && v < 50.0 * max);
        }
    }

    #[test]
    fn test_effective_values_reroll_on_every_read() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let skills = RiderSkills::new(90, 90, 90, SkillTier::Elite).unwrap();
        let first = skills.effective_speed(&mut rng);
        let second = skills.effective_speed(&mut rng);
        // The multiplier span is huge; two identical consecutive rolls would
        // mean the value was cached.
        assert_ne!(first, second);
    }

    #[test]
    fn test_race_bonus_ordering_matches_tiers() {
        let bonuses: Vec<f64> = SkillTier::all().iter().map(|t| t.race_bonus()).collect();
        let mut sorted = bonuses.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(bonuses, sorted);
        assert_eq!(bonuses, vec![1.3, 1.15, 1.0, 0.9, 0.8]);
    }

    #[test]
    fn test_retirement_probabilities() {
        assert_eq!(SkillTier::Elite.retirement_probability(), 0.05);
        assert_eq!(SkillTier::Novice.retirement_probability(), 0.25);
    }

    #[test]
    fn test_training_clamps_at_100() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut rider = Rider::elite("Test Rider", Nationality::Spain, 27, &mut rng).unwrap();
        rider.train(SkillKind::Speed, 50);
        assert_eq!(rider.skills.speed, 100);
    }

    #[test]
    fn test_factory_tiers() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let elite = Rider::elite("A", Nationality::Italy, 26, &mut rng).unwrap();
        let excellent = Rider::excellent("B", Nationality::France, 24, &mut rng).unwrap();
        let good = Rider::good("C", Nationality::Japan, 22, &mut rng).unwrap();
        assert_eq!(elite.tier(), SkillTier::Elite);
        assert_eq!(excellent.tier(), SkillTier::Excellent);
        assert_eq!(good.tier(), SkillTier::Good);
        assert!(elite.skills.speed >= 90);
        assert!(good.skills.speed <= 84);
    }
}
