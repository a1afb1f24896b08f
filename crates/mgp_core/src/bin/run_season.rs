use mgp_core::{CareerManager, MemoryStorage, Nationality, Rider, SkillKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏍️  Running a demo career season...");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let player = Rider::elite("Test Rider", Nationality::Spain, 27, &mut rng)?;

    let mut career = CareerManager::from_seed_with_storage(2024, Box::new(MemoryStorage::new()));
    career.configure_season(5, &[])?;
    career.start_season(player, 60)?;

    println!("📅 Calendar:");
    for (i, circuit) in career.calendar().iter().enumerate() {
        println!("   {}. {}", i + 1, circuit.description());
    }

    // Try to land a factory seat before the first race.
    for team in career.available_teams() {
        if career.attempt_transfer(&team) {
            println!("🤝 Signed with {team}");
            break;
        }
    }

    while career.season_active() {
        let result = career.simulate_next_race()?;
        let (done, total) = career.progress();
        println!(
            "🏁 Race {done}/{total} at {} - winner: {}, retirements: {}",
            result.circuit,
            result.winner().unwrap_or("-"),
            result.retirements.len()
        );
        career.train_skill(SkillKind::Cornering, 1)?;
    }

    println!("\n📊 Final standings:");
    for (position, (rider, points)) in career.rider_standings().iter().enumerate() {
        println!("   {:2}. {rider:<20} {points:3} pts", position + 1);
    }
    println!("🏆 Team standings:");
    for (position, (team, points)) in career.team_standings().iter().enumerate() {
        println!("   {:2}. {team:<22} {points:3} pts", position + 1);
    }

    career.save_game("demo")?;
    println!("💾 Season saved: {:?}", career.list_saved_games());

    let summary = career.finalize_season()?;
    println!(
        "\n🥇 Champion: {} ({} pts) | Champion team: {} ({} pts)",
        summary.champion.as_deref().unwrap_or("-"),
        summary.champion_points,
        summary.champion_team.as_deref().unwrap_or("-"),
        summary.champion_team_points
    );
    println!(
        "🎯 Player finished P{} with {} pts over {} races",
        summary.player_position, summary.player_points, summary.races_completed
    );

    Ok(())
}
