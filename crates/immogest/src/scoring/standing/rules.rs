use super::domain::{CeilingType, FloorType, JoineryMaterial, RoomRecord, StandingFactor};
use super::ScoreComponent;

/// Brands whose presence in the paint name marks a high-end finish.
const PREMIUM_PAINT_BRANDS: [&str; 3] = ["dulux", "seigneurie", "zolpan"];
/// Brands marking a mid-range finish.
const MID_RANGE_PAINT_BRANDS: [&str; 2] = ["astral", "ripolin"];

/// Ten fixtures earn one point of electrical density.
const ELECTRICAL_DENSITY_DIVISOR: f64 = 10.0;
/// The density bonus cannot dominate the material scores.
const ELECTRICAL_BONUS_CAP: f64 = 2.0;

pub(crate) fn score_room(room: &RoomRecord) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::with_capacity(5);

    let ceiling = ceiling_points(room.ceiling_type);
    components.push(ScoreComponent {
        factor: StandingFactor::Ceiling,
        points: ceiling,
        notes: format!("{} ceiling", room.ceiling_type.label()),
    });

    let floor = floor_points(room.floor_type);
    components.push(ScoreComponent {
        factor: StandingFactor::Floor,
        points: floor,
        notes: format!("{} flooring", room.floor_type.label()),
    });

    let joinery = joinery_points(room.joinery_material);
    components.push(ScoreComponent {
        factor: StandingFactor::Joinery,
        points: joinery,
        notes: format!("{} joinery", room.joinery_material.label()),
    });

    let electrical = electrical_points(room.electrical_fixture_count);
    components.push(ScoreComponent {
        factor: StandingFactor::ElectricalDensity,
        points: electrical,
        notes: format!("{} electrical fixture(s)", room.electrical_fixture_count),
    });

    let (paint, paint_notes) = paint_points(&room.paint_brand);
    components.push(ScoreComponent {
        factor: StandingFactor::PaintBrand,
        points: paint,
        notes: paint_notes,
    });

    let total = ceiling + floor + joinery + electrical + paint;
    (components, total)
}

fn ceiling_points(ceiling: CeilingType) -> f64 {
    match ceiling {
        CeilingType::Staff => 3.0,
        CeilingType::WoodCeiling | CeilingType::WoodPaneling => 2.0,
        CeilingType::PvcPaneling => 1.0,
        CeilingType::SimpleSlab | CeilingType::Other => 0.0,
    }
}

fn floor_points(floor: FloorType) -> f64 {
    match floor {
        FloorType::Parquet => 3.0,
        FloorType::Tile => 2.0,
        FloorType::Other => 1.0,
    }
}

fn joinery_points(joinery: JoineryMaterial) -> f64 {
    match joinery {
        JoineryMaterial::Aluminum => 2.0,
        JoineryMaterial::Wood | JoineryMaterial::Other => 1.0,
    }
}

fn electrical_points(fixture_count: u32) -> f64 {
    (fixture_count as f64 / ELECTRICAL_DENSITY_DIVISOR).min(ELECTRICAL_BONUS_CAP)
}

/// Substring containment against the known brand sets, not exact equality.
fn paint_points(brand: &str) -> (f64, String) {
    let normalized = brand.to_lowercase();

    if PREMIUM_PAINT_BRANDS
        .iter()
        .any(|known| normalized.contains(known))
    {
        (2.0, format!("premium paint brand '{}'", brand.trim()))
    } else if MID_RANGE_PAINT_BRANDS
        .iter()
        .any(|known| normalized.contains(known))
    {
        (1.0, format!("mid-range paint brand '{}'", brand.trim()))
    } else {
        (0.0, "unrecognized paint brand".to_string())
    }
}
