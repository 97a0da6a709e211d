use crate::infra::{InMemoryRankingRepository, LogRewardNotifier};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use immogest::error::AppError;
use immogest::scoring::agency::AgencyMetrics;
use immogest::scoring::ranking::{AgencyEntry, AgencyId, RankingPeriod, RankingService};
use immogest::scoring::standing::{
    evaluate_standing, CeilingType, FloorType, JoineryMaterial, RoomRecord, StandingEvaluation,
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct StandingArgs {
    /// JSON file containing the room list to classify
    #[arg(long)]
    pub(crate) rooms: PathBuf,
    /// Print the per-room component breakdown
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Campaign period identifier (defaults to the current semester)
    #[arg(long)]
    pub(crate) period: Option<String>,
    /// Campaign date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub(crate) generated_on: Option<NaiveDate>,
}

pub(crate) fn run_standing_report(args: StandingArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.rooms)?;
    let rooms: Vec<RoomRecord> = serde_json::from_str(&raw)?;

    let evaluation = evaluate_standing(&rooms);
    render_standing(&evaluation, rooms.len(), args.breakdown);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let generated_on = args
        .generated_on
        .unwrap_or_else(|| Local::now().date_naive());
    let period = args
        .period
        .unwrap_or_else(|| default_period(generated_on));

    println!("=== Property standing ===");
    let rooms = sample_rooms();
    let evaluation = evaluate_standing(&rooms);
    render_standing(&evaluation, rooms.len(), true);

    println!();
    println!("=== Agency ranking ({period}) ===");
    let repository = Arc::new(InMemoryRankingRepository::default());
    let notifier = Arc::new(LogRewardNotifier::default());
    let service = RankingService::new(repository, notifier.clone());

    let record = service.run(RankingPeriod(period), generated_on, sample_agencies())?;

    for standing in &record.standings {
        println!(
            "#{} {:<20} {:>6.2} pts",
            standing.rank, standing.name, standing.score
        );
        for reward in &standing.rewards {
            println!(
                "     {} [{}] valid until {}",
                reward.title,
                reward.kind.label(),
                reward.valid_until(generated_on)
            );
        }
    }

    println!();
    println!(
        "{} reward notice(s) published",
        notifier.notices().len()
    );

    Ok(())
}

fn render_standing(evaluation: &StandingEvaluation, room_count: usize, breakdown: bool) {
    println!(
        "Standing: {} ({} room(s), average {:.2})",
        evaluation.tier.label(),
        room_count,
        evaluation.average_score
    );
    println!("{}", evaluation.tier.description());

    if breakdown {
        for (index, room) in evaluation.rooms.iter().enumerate() {
            println!("  Room {}: {:.2} point(s)", index + 1, room.total);
            for component in &room.components {
                println!("    {:>5.2}  {}", component.points, component.notes);
            }
        }
    }
}

/// First semester runs January through June.
fn default_period(date: NaiveDate) -> String {
    let semester = if date.month() <= 6 { 1 } else { 2 };
    format!("{}-S{}", date.year(), semester)
}

fn sample_rooms() -> Vec<RoomRecord> {
    vec![
        RoomRecord {
            ceiling_type: CeilingType::Staff,
            floor_type: FloorType::Parquet,
            joinery_material: JoineryMaterial::Aluminum,
            electrical_fixture_count: 18,
            paint_brand: "Dulux Valentine".to_string(),
        },
        RoomRecord {
            ceiling_type: CeilingType::WoodPaneling,
            floor_type: FloorType::Tile,
            joinery_material: JoineryMaterial::Aluminum,
            electrical_fixture_count: 9,
            paint_brand: "Seigneurie".to_string(),
        },
        RoomRecord {
            ceiling_type: CeilingType::PvcPaneling,
            floor_type: FloorType::Tile,
            joinery_material: JoineryMaterial::Wood,
            electrical_fixture_count: 6,
            paint_brand: "Astral".to_string(),
        },
    ]
}

fn sample_agencies() -> Vec<AgencyEntry> {
    vec![
        AgencyEntry {
            agency_id: AgencyId("ag-centrale".to_string()),
            name: "Agence Centrale".to_string(),
            metrics: AgencyMetrics {
                total_properties: 120,
                total_contracts: 48,
                rent_collection_rate: 97.5,
                tenant_satisfaction: 88.0,
                owner_satisfaction: 91.0,
            },
        },
        AgencyEntry {
            agency_id: AgencyId("ag-riviera".to_string()),
            name: "Agence Riviera".to_string(),
            metrics: AgencyMetrics {
                total_properties: 64,
                total_contracts: 33,
                rent_collection_rate: 92.0,
                tenant_satisfaction: 78.0,
                owner_satisfaction: 81.0,
            },
        },
        AgencyEntry {
            agency_id: AgencyId("ag-plateau".to_string()),
            name: "Agence du Plateau".to_string(),
            metrics: AgencyMetrics {
                total_properties: 35,
                total_contracts: 14,
                rent_collection_rate: 84.0,
                tenant_satisfaction: 66.0,
                owner_satisfaction: 72.0,
            },
        },
        AgencyEntry {
            agency_id: AgencyId("ag-lagune".to_string()),
            name: "Agence de la Lagune".to_string(),
            metrics: AgencyMetrics {
                total_properties: 12,
                total_contracts: 6,
                rent_collection_rate: 71.0,
                tenant_satisfaction: 54.0,
                owner_satisfaction: 49.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_defaults_to_the_current_semester() {
        let june = NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date");
        let july = NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date");

        assert_eq!(default_period(june), "2026-S1");
        assert_eq!(default_period(july), "2026-S2");
    }

    #[test]
    fn sample_campaign_produces_a_full_podium() {
        let repository = Arc::new(InMemoryRankingRepository::default());
        let notifier = Arc::new(LogRewardNotifier::default());
        let service = RankingService::new(repository, notifier.clone());
        let generated_on = NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date");

        let record = service
            .run(
                RankingPeriod("2026-S1".to_string()),
                generated_on,
                sample_agencies(),
            )
            .expect("demo campaign runs");

        assert_eq!(record.standings.len(), 4);
        assert_eq!(record.standings[0].agency_id.0, "ag-centrale");
        assert!(notifier.notices().len() >= 3);
    }
}
