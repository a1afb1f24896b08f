//! Career mode: the season state machine.
//!
//! A `CareerManager` owns at most one season at a time. It starts a season
//! for a player rider, advances it one race at a time through the outcome
//! engine, folds race points into rider and team standings, and finalizes
//! the season into a summary. Randomness and save storage are injected so
//! embedding hosts and tests control both.

pub mod state;

pub use state::{PlayerStatus, SeasonState, SeasonSummary};

use crate::engine::{race_points, RaceSimulator};
use crate::error::CareerError;
use crate::models::{
    circuit_pool, pool_circuit_by_name, Bike, BikeStats, Circuit, Manufacturer, Nationality,
    RaceResult, Rider, SkillKind, Team,
};
use crate::save::{
    snapshot_file_name, FileStorage, SaveError, SaveStorage, SeasonSnapshot, SAVE_SUFFIX,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use state::standings;

/// Number of races in a season when none was configured.
const DEFAULT_SEASON_LENGTH: u32 = 5;

pub struct CareerManager {
    simulator: RaceSimulator,
    rng: ChaCha8Rng,
    storage: Box<dyn SaveStorage>,
    season: Option<SeasonState>,
    teams: Vec<Team>,
    cpu_riders: Vec<Rider>,
    /// Calendar configured before `start_season`, consumed by it.
    pending_calendar: Vec<Circuit>,
}

impl Default for CareerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CareerManager {
    /// Entropy-seeded manager writing saves to the current directory.
    pub fn new() -> Self {
        Self::with_storage(Box::new(FileStorage::current_dir()))
    }

    /// Deterministic manager: same seed, same season.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_seed_with_storage(seed, Box::new(FileStorage::current_dir()))
    }

    pub fn with_storage(storage: Box<dyn SaveStorage>) -> Self {
        CareerManager {
            simulator: RaceSimulator::new(),
            rng: ChaCha8Rng::from_entropy(),
            storage,
            season: None,
            teams: Vec::new(),
            cpu_riders: Vec::new(),
            pending_calendar: Vec::new(),
        }
    }

    pub fn from_seed_with_storage(seed: u64, storage: Box<dyn SaveStorage>) -> Self {
        CareerManager {
            simulator: RaceSimulator::from_seed(seed),
            // Offset keeps the manager's draws off the engine's stream.
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            storage,
            season: None,
            teams: Vec::new(),
            cpu_riders: Vec::new(),
            pending_calendar: Vec::new(),
        }
    }

    // --- state machine transitions ---

    /// Starts a new season for `player`. Fails while an unfinished season is
    /// in progress. Builds the default CPU roster and teams, takes the
    /// pre-configured calendar (or draws a default one from the circuit
    /// pool) and zeroes every cumulative table, the player included.
    pub fn start_season(&mut self, player: Rider, difficulty: u8) -> Result<(), CareerError> {
        if !(1..=100).contains(&difficulty) {
            return Err(CareerError::InvalidDifficulty(difficulty));
        }
        if let Some(season) = &self.season {
            if !season.finished() {
                return Err(CareerError::SeasonAlreadyActive);
            }
        }

        self.teams = default_teams()?;
        self.cpu_riders = default_cpu_riders(&mut self.rng, &mut self.teams)?;

        let calendar = if self.pending_calendar.is_empty() {
            self.draw_calendar(DEFAULT_SEASON_LENGTH)
        } else {
            std::mem::take(&mut self.pending_calendar)
        };

        let mut rider_points = std::collections::BTreeMap::new();
        rider_points.insert(player.name.clone(), 0);
        for rider in &self.cpu_riders {
            rider_points.insert(rider.name.clone(), 0);
        }
        let team_points = self
            .teams
            .iter()
            .map(|team| (team.name.clone(), 0))
            .collect();

        log::info!(
            "season started: {} races, player {}, difficulty {}",
            calendar.len(),
            player.name,
            difficulty
        );

        self.season = Some(SeasonState {
            player,
            current_race: 1,
            total_races: calendar.len() as u32,
            rider_points,
            team_points,
            calendar,
            difficulty,
            history: Vec::new(),
        });
        Ok(())
    }

    /// Replaces the schedule with `races` circuits drawn with replacement
    /// from the fixed pool. Before a season starts this pre-seeds the
    /// calendar `start_season` will use; during a season it swaps the active
    /// calendar. Team selection is not applied; only the schedule changes.
    pub fn configure_season(
        &mut self,
        races: u32,
        _participating_teams: &[String],
    ) -> Result<(), CareerError> {
        if races == 0 {
            return Err(CareerError::InvalidRaceCount(races));
        }
        let calendar = self.draw_calendar(races);
        match &mut self.season {
            Some(season) => {
                season.calendar = calendar;
                season.total_races = races;
            }
            None => self.pending_calendar = calendar,
        }
        log::info!("season configured with {races} races");
        Ok(())
    }

    /// Runs the next scheduled race: player plus the whole CPU field, points
    /// folded into rider and team standings, result appended to history,
    /// race index advanced.
    pub fn simulate_next_race(&mut self) -> Result<RaceResult, CareerError> {
        let season = self.season.as_mut().ok_or(CareerError::NoActiveSeason)?;
        if season.finished() {
            return Err(CareerError::SeasonFinished);
        }
        let circuit = season
            .next_circuit()
            .cloned()
            .ok_or(CareerError::SeasonFinished)?;

        let mut riders = Vec::with_capacity(1 + self.cpu_riders.len());
        riders.push(season.player.clone());
        riders.extend(self.cpu_riders.iter().cloned());

        let result = self.simulator.simulate(&riders, &self.teams, &circuit)?;
        let points = race_points(&result);

        for (rider, pts) in &points {
            *season.rider_points.entry(rider.clone()).or_insert(0) += pts;
        }
        for team in &self.teams {
            let team_total: u32 = team
                .riders()
                .iter()
                .map(|rider| points.get(rider).copied().unwrap_or(0))
                .sum();
            *season.team_points.entry(team.name.clone()).or_insert(0) += team_total;
        }

        log::info!(
            "race {}/{} at {} - winner: {}",
            season.current_race,
            season.total_races,
            circuit.name,
            result.winner().unwrap_or("-")
        );

        season.history.push(result.clone());
        season.current_race += 1;
        Ok(result)
    }

    /// Advances past the next race without simulating it. No points are
    /// awarded and nothing is appended to history.
    pub fn skip_next_race(&mut self) -> Result<(), CareerError> {
        let season = self.season.as_mut().ok_or(CareerError::NoActiveSeason)?;
        if season.finished() {
            return Err(CareerError::SeasonFinished);
        }
        season.current_race += 1;
        log::info!(
            "race skipped, now at {}/{}",
            season.current_race,
            season.total_races
        );
        Ok(())
    }

    /// One-off race outside the championship. Season state is not touched.
    pub fn simulate_custom_race(
        &mut self,
        circuit: &Circuit,
        riders: &[Rider],
    ) -> Result<RaceResult, CareerError> {
        Ok(self.simulator.simulate(riders, &self.teams, circuit)?)
    }

    /// Closes the season: crowns the rider and team champions, then resets
    /// the manager so a new season can start immediately.
    pub fn finalize_season(&mut self) -> Result<SeasonSummary, CareerError> {
        let season = self.season.take().ok_or(CareerError::NoActiveSeason)?;

        let rider_rows = standings(&season.rider_points);
        let team_rows = standings(&season.team_points);
        let player_position = season.player_position();
        let player_points = season
            .rider_points
            .get(&season.player.name)
            .copied()
            .unwrap_or(0);

        let summary = SeasonSummary {
            champion: rider_rows.first().map(|(name, _)| name.clone()),
            champion_points: rider_rows.first().map(|(_, pts)| *pts).unwrap_or(0),
            champion_team: team_rows.first().map(|(name, _)| name.clone()),
            champion_team_points: team_rows.first().map(|(_, pts)| *pts).unwrap_or(0),
            player_position,
            player_points,
            races_completed: season.history.len(),
        };

        self.teams.clear();
        self.cpu_riders.clear();
        self.pending_calendar.clear();

        log::info!(
            "season finalized - champion: {}",
            summary.champion.as_deref().unwrap_or("-")
        );
        Ok(summary)
    }

    /// Tries to move the player to `team_name`. Returns false (never an
    /// error) when no season is active, the team is unknown, the roster is
    /// already full, or the probability draw fails. A full roster wins over
    /// the draw: no partial move ever happens.
    pub fn attempt_transfer(&mut self, team_name: &str) -> bool {
        let Some(season) = self.season.as_mut() else {
            return false;
        };
        let Some(target) = self.teams.iter().position(|t| t.name == team_name) else {
            return false;
        };
        if self.teams[target].is_full() {
            return false;
        }

        let chance = 0.3 + f64::from(season.difficulty) / 200.0;
        if self.rng.gen_range(0.0..1.0) >= chance {
            log::debug!("transfer to {team_name} rejected");
            return false;
        }

        let player_name = season.player.name.clone();
        for team in &mut self.teams {
            team.release(&player_name);
        }
        if self.teams[target].hire(player_name.clone()).is_err() {
            return false;
        }
        season.player.team = Some(team_name.to_string());
        log::info!("{player_name} transferred to {team_name}");
        true
    }

    /// Raises one of the player's base attributes, clamped to 1..=100.
    pub fn train_skill(&mut self, kind: SkillKind, points: u8) -> Result<(), CareerError> {
        let season = self.season.as_mut().ok_or(CareerError::NoActiveSeason)?;
        season.player.train(kind, points);
        Ok(())
    }

    // --- queries ---

    /// Rider standings, descending by points, alphabetical on ties.
    pub fn rider_standings(&self) -> Vec<(String, u32)> {
        self.season
            .as_ref()
            .map(|s| standings(&s.rider_points))
            .unwrap_or_default()
    }

    /// Team standings, descending by points, alphabetical on ties.
    pub fn team_standings(&self) -> Vec<(String, u32)> {
        self.season
            .as_ref()
            .map(|s| standings(&s.team_points))
            .unwrap_or_default()
    }

    /// 1-based championship position of the player.
    pub fn player_position(&self) -> Option<usize> {
        self.season.as_ref().map(|s| s.player_position())
    }

    pub fn player_status(&self) -> Option<PlayerStatus> {
        self.season.as_ref().map(|season| PlayerStatus {
            name: season.player.name.clone(),
            team: season.player.team.clone(),
            points: season
                .rider_points
                .get(&season.player.name)
                .copied()
                .unwrap_or(0),
            position: season.player_position(),
            current_race: season.current_race.min(season.total_races),
            total_races: season.total_races,
            difficulty: season.difficulty,
        })
    }

    /// The active calendar, or the pre-configured one before a season starts.
    pub fn calendar(&self) -> &[Circuit] {
        match &self.season {
            Some(season) => &season.calendar,
            None => &self.pending_calendar,
        }
    }

    pub fn next_circuit(&self) -> Option<&Circuit> {
        self.season.as_ref().and_then(|s| s.next_circuit())
    }

    /// (races completed, total races); (0, 0) without a season.
    pub fn progress(&self) -> (u32, u32) {
        self.season
            .as_ref()
            .map(|s| (s.races_completed(), s.total_races))
            .unwrap_or((0, 0))
    }

    pub fn season_active(&self) -> bool {
        self.season.as_ref().is_some_and(|s| !s.finished())
    }

    pub fn season_finished(&self) -> bool {
        self.season.as_ref().is_some_and(|s| s.finished())
    }

    pub fn available_teams(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    pub fn history(&self) -> &[RaceResult] {
        self.season.as_ref().map(|s| s.history.as_slice()).unwrap_or(&[])
    }

    // --- persistence ---

    /// Serializes the season into a reduced snapshot and hands it to the
    /// injected storage. The suffix is appended to `name` when absent.
    pub fn save_game(&self, name: &str) -> Result<(), SaveError> {
        let season = self.season.as_ref().ok_or(SaveError::NothingToSave)?;
        let snapshot = SeasonSnapshot::from_state(season);
        let json = snapshot.to_json()?;
        let file_name = snapshot_file_name(name);
        if self.storage.save(&json, &file_name) {
            log::info!("season saved to {file_name}");
            Ok(())
        } else {
            Err(SaveError::Storage(format!("failed to write {file_name}")))
        }
    }

    /// Restores a season from a snapshot. CPU riders and teams are rebuilt
    /// with default attribute generation, so only the player's standing and
    /// the point totals are behaviorally preserved. Live state is replaced
    /// only after the whole snapshot parses; a failed load never partially
    /// mutates a running season.
    pub fn load_game(&mut self, name: &str) -> Result<(), SaveError> {
        let file_name = snapshot_file_name(name);
        let content = self
            .storage
            .load(&file_name)
            .ok_or_else(|| SaveError::NotFound {
                name: file_name.clone(),
            })?;
        let snapshot = SeasonSnapshot::from_json(&content)?;
        snapshot.validate()?;

        let player = Rider::elite(
            snapshot.player_name.clone(),
            snapshot.player_nationality,
            snapshot.player_age,
            &mut self.rng,
        )
        .map_err(|e| SaveError::InvalidSnapshot(e.to_string()))?;

        // Unknown circuit names fall back to the first pool entry.
        let calendar: Vec<Circuit> = snapshot
            .circuit_names
            .iter()
            .map(|name| {
                pool_circuit_by_name(name)
                    .cloned()
                    .unwrap_or_else(|| circuit_pool()[0].clone())
            })
            .collect();

        let mut teams = default_teams().map_err(|e| SaveError::InvalidSnapshot(e.to_string()))?;
        let mut cpu_riders = default_cpu_riders(&mut self.rng, &mut teams)
            .map_err(|e| SaveError::InvalidSnapshot(e.to_string()))?;

        let mut rider_points = snapshot.rider_points.clone();
        rider_points.entry(player.name.clone()).or_insert(0);
        for rider in &cpu_riders {
            rider_points.entry(rider.name.clone()).or_insert(0);
        }
        // Snapshot riders with no default-roster counterpart come back as
        // good-tier teamless riders.
        for name in snapshot.rider_points.keys() {
            let known = name == &player.name || cpu_riders.iter().any(|r| &r.name == name);
            if !known {
                let rider = Rider::good(name.clone(), Nationality::Italy, 25, &mut self.rng)
                    .map_err(|e| SaveError::InvalidSnapshot(e.to_string()))?;
                cpu_riders.push(rider);
            }
        }

        let mut team_points = snapshot.team_points.clone();
        for team in &teams {
            team_points.entry(team.name.clone()).or_insert(0);
        }

        self.teams = teams;
        self.cpu_riders = cpu_riders;
        self.pending_calendar.clear();
        self.season = Some(SeasonState {
            player,
            current_race: snapshot.current_race,
            total_races: snapshot.total_races,
            rider_points,
            team_points,
            calendar,
            difficulty: snapshot.difficulty,
            history: Vec::new(),
        });

        log::info!("season loaded from {file_name}");
        Ok(())
    }

    /// Names of the save files visible to the injected storage.
    pub fn list_saved_games(&self) -> Vec<String> {
        self.storage
            .list()
            .into_iter()
            .filter(|name| name.ends_with(SAVE_SUFFIX))
            .collect()
    }

    fn draw_calendar(&mut self, races: u32) -> Vec<Circuit> {
        let pool = circuit_pool();
        (0..races)
            .map(|_| {
                pool.choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_else(|| pool[0].clone())
            })
            .collect()
    }
}

/// The three default teams with their factory bikes.
fn default_teams() -> Result<Vec<Team>, CareerError> {
    Ok(vec![
        Team::new(
            "Ducati Lenovo Team",
            Bike::new(
                Manufacturer::Ducati,
                "Desmosedici GP24",
                BikeStats::new(98, 95, 90)?,
            )?,
        )?,
        Team::new(
            "Repsol Honda Team",
            Bike::new(Manufacturer::Honda, "RC213V", BikeStats::new(94, 88, 92)?)?,
        )?,
        Team::new(
            "Monster Energy Yamaha",
            Bike::new(Manufacturer::Yamaha, "YZR-M1", BikeStats::new(95, 92, 96)?)?,
        )?,
    ])
}

/// The default CPU field, hired into the default teams.
fn default_cpu_riders(
    rng: &mut impl Rng,
    teams: &mut [Team],
) -> Result<Vec<Rider>, CareerError> {
    let mut roster = vec![
        (Rider::elite("Francesco Bagnaia", Nationality::Italy, 26, rng)?, 0),
        (Rider::excellent("Enea Bastianini", Nationality::Italy, 25, rng)?, 0),
        (Rider::elite("Marc Marquez", Nationality::Spain, 30, rng)?, 1),
        (Rider::excellent("Fabio Quartararo", Nationality::France, 24, rng)?, 2),
    ];
    for (rider, team_index) in &mut roster {
        teams[*team_index].hire(rider.name.clone())?;
        rider.team = Some(teams[*team_index].name.clone());
    }
    Ok(roster.into_iter().map(|(rider, _)| rider).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::MemoryStorage;

    fn player(rng_seed: u64) -> Rider {
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        Rider::elite("Test Rider", Nationality::Spain, 27, &mut rng).unwrap()
    }

    fn manager(seed: u64) -> CareerManager {
        CareerManager::from_seed_with_storage(seed, Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_advance_without_season_fails() {
        let mut mgr = manager(1);
        assert_eq!(
            mgr.simulate_next_race().unwrap_err(),
            CareerError::NoActiveSeason
        );
        assert_eq!(mgr.skip_next_race().unwrap_err(), CareerError::NoActiveSeason);
        assert_eq!(
            mgr.finalize_season().unwrap_err(),
            CareerError::NoActiveSeason
        );
    }

    #[test]
    fn test_start_rejects_bad_difficulty() {
        let mut mgr = manager(2);
        assert_eq!(
            mgr.start_season(player(2), 0).unwrap_err(),
            CareerError::InvalidDifficulty(0)
        );
        assert_eq!(
            mgr.start_season(player(2), 101).unwrap_err(),
            CareerError::InvalidDifficulty(101)
        );
    }

    #[test]
    fn test_start_twice_fails_while_active() {
        let mut mgr = manager(3);
        mgr.start_season(player(3), 50).unwrap();
        assert_eq!(
            mgr.start_season(player(3), 50).unwrap_err(),
            CareerError::SeasonAlreadyActive
        );
    }

    #[test]
    fn test_exactly_n_races_then_season_finished() {
        let mut mgr = manager(4);
        mgr.configure_season(3, &[]).unwrap();
        mgr.start_season(player(4), 60).unwrap();
        assert!(mgr.season_active());

        for _ in 0..3 {
            mgr.simulate_next_race().unwrap();
        }
        assert!(mgr.season_finished());
        assert_eq!(
            mgr.simulate_next_race().unwrap_err(),
            CareerError::SeasonFinished
        );
        assert_eq!(mgr.progress(), (3, 3));
        assert_eq!(mgr.history().len(), 3);
    }

    #[test]
    fn test_configure_before_start_preseeds_calendar() {
        let mut mgr = manager(5);
        mgr.configure_season(7, &[]).unwrap();
        assert_eq!(mgr.calendar().len(), 7);
        mgr.start_season(player(5), 50).unwrap();
        assert_eq!(mgr.progress(), (0, 7));
    }

    #[test]
    fn test_configure_zero_races_fails() {
        let mut mgr = manager(6);
        assert_eq!(
            mgr.configure_season(0, &[]).unwrap_err(),
            CareerError::InvalidRaceCount(0)
        );
    }

    #[test]
    fn test_default_calendar_has_five_races() {
        let mut mgr = manager(7);
        mgr.start_season(player(7), 50).unwrap();
        assert_eq!(mgr.progress(), (0, 5));
        for circuit in mgr.calendar() {
            assert!(circuit_pool().iter().any(|c| c.name == circuit.name));
        }
    }

    #[test]
    fn test_points_accumulate_for_riders_and_teams() {
        let mut mgr = manager(8);
        mgr.configure_season(4, &[]).unwrap();
        mgr.start_season(player(8), 50).unwrap();
        for _ in 0..4 {
            mgr.simulate_next_race().unwrap();
        }

        let rider_rows = mgr.rider_standings();
        // Player + 4 CPU riders, all present in the table.
        assert_eq!(rider_rows.len(), 5);
        let total: u32 = rider_rows.iter().map(|(_, p)| p).sum();
        assert!(total > 0);
        // Descending order.
        for pair in rider_rows.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }

        let team_rows = mgr.team_standings();
        assert_eq!(team_rows.len(), 3);
        // Every team total is the sum of its riders' totals; the teamless
        // player's points never leak into a team.
        let team_total: u32 = team_rows.iter().map(|(_, p)| p).sum();
        let player_points = rider_rows
            .iter()
            .find(|(name, _)| name == "Test Rider")
            .map(|(_, p)| *p)
            .unwrap();
        assert_eq!(team_total + player_points, total);
    }

    #[test]
    fn test_skip_advances_without_points_or_history() {
        let mut mgr = manager(9);
        mgr.configure_season(2, &[]).unwrap();
        mgr.start_season(player(9), 50).unwrap();
        mgr.skip_next_race().unwrap();
        assert_eq!(mgr.progress(), (1, 2));
        assert!(mgr.history().is_empty());
        let total: u32 = mgr.rider_standings().iter().map(|(_, p)| p).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_custom_race_does_not_touch_season() {
        let mut mgr = manager(10);
        mgr.configure_season(2, &[]).unwrap();
        mgr.start_season(player(10), 50).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let riders: Vec<Rider> = (0..3)
            .map(|i| Rider::good(format!("Guest {i}"), Nationality::Japan, 21, &mut rng).unwrap())
            .collect();
        let result = mgr
            .simulate_custom_race(&circuit_pool()[1], &riders)
            .unwrap();
        assert_eq!(result.field_size(), 3);
        assert_eq!(mgr.progress(), (0, 2));
        assert!(mgr.history().is_empty());
    }

    #[test]
    fn test_finalize_crowns_leader_and_resets() {
        let mut mgr = manager(11);
        mgr.configure_season(3, &[]).unwrap();
        mgr.start_season(player(11), 50).unwrap();
        for _ in 0..3 {
            mgr.simulate_next_race().unwrap();
        }

        let expected_champion = mgr.rider_standings()[0].clone();
        let summary = mgr.finalize_season().unwrap();
        assert_eq!(summary.champion.as_deref(), Some(expected_champion.0.as_str()));
        assert_eq!(summary.champion_points, expected_champion.1);
        assert_eq!(summary.races_completed, 3);
        assert!(summary.player_position >= 1);

        // Manager is back to NoSeason: a new season starts immediately.
        assert!(!mgr.season_active());
        mgr.start_season(player(11), 50).unwrap();
        assert!(mgr.season_active());
    }

    #[test]
    fn test_transfer_to_full_team_always_fails() {
        let mut mgr = manager(12);
        mgr.start_season(player(12), 100).unwrap();
        // Ducati signs two CPU riders by default, so its roster is full even
        // though difficulty 100 gives the draw a 0.8 success chance.
        for _ in 0..50 {
            assert!(!mgr.attempt_transfer("Ducati Lenovo Team"));
        }
        assert!(mgr.player_status().unwrap().team.is_none());
    }

    #[test]
    fn test_transfer_to_unknown_team_fails() {
        let mut mgr = manager(13);
        mgr.start_season(player(13), 50).unwrap();
        assert!(!mgr.attempt_transfer("Garage 56"));
    }

    #[test]
    fn test_transfer_without_season_fails() {
        let mut mgr = manager(14);
        assert!(!mgr.attempt_transfer("Repsol Honda Team"));
    }

    #[test]
    fn test_transfer_eventually_succeeds_and_moves_player() {
        let mut mgr = manager(15);
        mgr.start_season(player(15), 100).unwrap();
        // Honda and Yamaha each have one default rider, so a seat is open.
        let mut moved = false;
        for _ in 0..100 {
            if mgr.attempt_transfer("Repsol Honda Team") {
                moved = true;
                break;
            }
        }
        assert!(moved);
        let status = mgr.player_status().unwrap();
        assert_eq!(status.team.as_deref(), Some("Repsol Honda Team"));
    }

    #[test]
    fn test_player_team_points_flow_after_transfer() {
        let mut mgr = manager(16);
        mgr.configure_season(2, &[]).unwrap();
        mgr.start_season(player(16), 100).unwrap();
        let mut joined = false;
        for _ in 0..100 {
            if mgr.attempt_transfer("Monster Energy Yamaha") {
                joined = true;
                break;
            }
        }
        assert!(joined);
        mgr.simulate_next_race().unwrap();

        let rider_total: u32 = mgr.rider_standings().iter().map(|(_, p)| p).sum();
        let team_total: u32 = mgr.team_standings().iter().map(|(_, p)| p).sum();
        // Every rider now belongs to a team, so the totals match.
        assert_eq!(rider_total, team_total);
    }

    #[test]
    fn test_train_skill_requires_season() {
        let mut mgr = manager(17);
        assert_eq!(
            mgr.train_skill(SkillKind::Speed, 5).unwrap_err(),
            CareerError::NoActiveSeason
        );
        mgr.start_season(player(17), 50).unwrap();
        mgr.train_skill(SkillKind::Speed, 5).unwrap();
    }

    #[test]
    fn test_scenario_three_race_season() {
        // Elite "Test Rider", 3 races, three advances, then the season
        // reports finished and a fourth advance fails.
        let mut mgr = manager(18);
        mgr.start_season(player(18), 50).unwrap();
        mgr.configure_season(3, &[]).unwrap();
        for _ in 0..3 {
            mgr.simulate_next_race().unwrap();
        }
        assert!(mgr.season_finished());
        assert_eq!(
            mgr.simulate_next_race().unwrap_err(),
            CareerError::SeasonFinished
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        let mut mgr = CareerManager::from_seed_with_storage(19, Box::new(storage.clone()));
        mgr.configure_season(4, &[]).unwrap();
        mgr.start_season(player(19), 73).unwrap();
        mgr.simulate_next_race().unwrap();
        mgr.simulate_next_race().unwrap();

        let before_points = mgr.rider_standings();
        let before_teams = mgr.team_standings();
        mgr.save_game("slot1").unwrap();

        let mut restored = CareerManager::from_seed_with_storage(77, Box::new(storage));
        restored.load_game("slot1").unwrap();

        let status = restored.player_status().unwrap();
        assert_eq!(status.name, "Test Rider");
        assert_eq!(status.difficulty, 73);
        assert_eq!(restored.progress(), (2, 4));
        assert_eq!(restored.rider_standings(), before_points);
        assert_eq!(restored.team_standings(), before_teams);
    }

    #[test]
    fn test_save_without_season_fails() {
        let mgr = manager(20);
        assert!(matches!(
            mgr.save_game("slot1").unwrap_err(),
            SaveError::NothingToSave
        ));
    }

    #[test]
    fn test_load_missing_file_fails_and_preserves_state() {
        let mut mgr = manager(21);
        mgr.start_season(player(21), 50).unwrap();
        mgr.simulate_next_race().unwrap();
        let before = mgr.progress();

        let err = mgr.load_game("nope").unwrap_err();
        assert!(matches!(err, SaveError::NotFound { .. }));
        assert_eq!(mgr.progress(), before);
    }

    #[test]
    fn test_load_malformed_snapshot_fails_and_preserves_state() {
        let storage = MemoryStorage::new();
        storage.save("{not json", &snapshot_file_name("bad"));
        let mut mgr = CareerManager::from_seed_with_storage(22, Box::new(storage));
        mgr.start_season(player(22), 50).unwrap();
        let before = mgr.progress();

        assert!(mgr.load_game("bad").is_err());
        assert_eq!(mgr.progress(), before);
        assert!(mgr.season_active());
    }

    #[test]
    fn test_list_saved_games_filters_suffix() {
        let storage = MemoryStorage::new();
        storage.save("x", "notes.txt");
        let mut mgr = CareerManager::from_seed_with_storage(23, Box::new(storage));
        mgr.start_season(player(23), 50).unwrap();
        mgr.save_game("career-a").unwrap();
        mgr.save_game("career-b").unwrap();

        let mut saves = mgr.list_saved_games();
        saves.sort();
        assert_eq!(
            saves,
            vec![
                format!("career-a{SAVE_SUFFIX}"),
                format!("career-b{SAVE_SUFFIX}")
            ]
        );
    }

    #[test]
    fn test_loaded_cpu_roster_uses_default_generation() {
        let storage = MemoryStorage::new();
        let mut mgr = CareerManager::from_seed_with_storage(24, Box::new(storage.clone()));
        mgr.start_season(player(24), 50).unwrap();
        mgr.simulate_next_race().unwrap();
        mgr.save_game("slot").unwrap();

        let mut restored = CareerManager::from_seed_with_storage(25, Box::new(storage));
        restored.load_game("slot").unwrap();
        // The reloaded season simulates on: CPU riders were rebuilt, not lost.
        restored.simulate_next_race().unwrap();
        assert_eq!(restored.rider_standings().len(), 5);
        // The reloaded player is rebuilt as an elite rider.
        let status = restored.player_status().unwrap();
        assert_eq!(status.name, "Test Rider");
        assert!(restored.season_active());
    }

    #[test]
    fn test_start_after_finished_unfinalized_season() {
        let mut mgr = manager(26);
        mgr.configure_season(1, &[]).unwrap();
        mgr.start_season(player(26), 50).unwrap();
        mgr.simulate_next_race().unwrap();
        assert!(mgr.season_finished());
        // Finished but not finalized: a new season may replace it.
        mgr.start_season(player(26), 50).unwrap();
        assert_eq!(mgr.progress(), (0, 5));
    }
}
