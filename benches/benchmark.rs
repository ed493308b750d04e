use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridiron_core::aggregate::{aggregate, EfficiencyRecord};
use gridiron_core::curve::Category;
use gridiron_core::matchup::{project, project_slate, Matchup, Surface};
use gridiron_core::tables::{PlayRates, PlayerUsage, Position, SlateData};
use gridiron_core::weather::Weather;
use gridiron_core::ModelConfig;

const SEASONS: [&str; 4] = ["2024", "2023", "2022", "2021"];

fn seeded_slate(team_count: usize) -> (SlateData, Vec<Matchup>) {
    let mut data = SlateData::default();

    for i in 0..team_count {
        let team = format!("T{i:02}");
        let spread = (i as f64 - team_count as f64 / 2.0) / team_count as f64;

        let qb = format!("qb {i}");
        let wr = format!("wr {i}");
        let rb = format!("rb {i}");
        for season in SEASONS {
            data.insert_player_record(season, Category::Passing, &qb, 0.05 + spread, 450.0);
            data.insert_player_record(season, Category::Receiving, &wr, 0.02 + spread, 120.0);
            data.insert_player_record(season, Category::Rushing, &rb, spread, 220.0);
            data.insert_team_record(season, Category::OlPass, &team, 0.08 - spread / 20.0);
            data.insert_team_record(season, Category::OlRush, &team, 4.3 + spread);
            data.insert_team_record(season, Category::DefensePass, &team, 0.14 + spread / 4.0);
            data.insert_team_record(season, Category::DefenseRush, &team, -0.07 + spread / 4.0);
        }
        data.insert_passing_grade(&qb, 65.0 + spread * 30.0, 500.0);

        data.rosters.insert(
            team.clone(),
            vec![
                PlayerUsage::new(&qb, Position::Quarterback).with_pass_attempts(34.0),
                PlayerUsage::new(&wr, Position::WideReceiver).with_targets(9.0),
                PlayerUsage::new(&rb, Position::RunningBack)
                    .with_rush_attempts(18.0)
                    .with_targets(4.0),
            ],
        );
        data.play_rates.insert(
            team.clone(),
            PlayRates {
                offense_pass_rate: 55.0 + spread * 10.0,
                defense_pass_rate: 57.0,
            },
        );
        data.home_advantage.insert(team.clone(), 1.5);
        data.home_avg_temperature.insert(team.clone(), 60.0 + spread * 20.0);
    }

    let matchups: Vec<Matchup> = (0..team_count / 2)
        .map(|g| Matchup {
            home: format!("T{:02}", 2 * g),
            away: format!("T{:02}", 2 * g + 1),
            surface: if g % 2 == 0 { Surface::Grass } else { Surface::Turf },
            is_dome: g % 4 == 0,
            neutral: g % 8 == 7,
            weather: Weather::new(48.0, 8.0, 20.0),
            lines: None,
        })
        .collect();

    (data, matchups)
}

fn bench_aggregate(c: &mut Criterion) {
    let records: Vec<EfficiencyRecord> = SEASONS
        .iter()
        .enumerate()
        .map(|(i, &season)| EfficiencyRecord::new(season, 0.05 * i as f64, 300.0))
        .collect();
    let config = ModelConfig::standard(SEASONS).unwrap();

    c.bench_function("aggregate_four_seasons", |b| {
        b.iter(|| aggregate(black_box(&records), &config.recency))
    });
}

fn bench_project_single(c: &mut Criterion) {
    let (data, matchups) = seeded_slate(32);
    let config = ModelConfig::standard(SEASONS).unwrap();

    c.bench_function("project_single_matchup", |b| {
        b.iter(|| project(black_box(&matchups[0]), &data, &config))
    });
}

fn bench_project_slate(c: &mut Criterion) {
    let (data, matchups) = seeded_slate(32);
    let config = ModelConfig::standard(SEASONS).unwrap();

    c.bench_function("project_full_slate_16_games", |b| {
        b.iter(|| project_slate(black_box(&matchups), &data, &config))
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_project_single,
    bench_project_slate
);
criterion_main!(benches);
