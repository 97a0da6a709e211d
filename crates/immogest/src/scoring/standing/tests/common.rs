use crate::scoring::standing::domain::{CeilingType, FloorType, JoineryMaterial, RoomRecord};

/// Best possible finish: staff ceiling, parquet, aluminum joinery, rich
/// electrical installation, premium paint.
pub(super) fn premium_room() -> RoomRecord {
    RoomRecord {
        ceiling_type: CeilingType::Staff,
        floor_type: FloorType::Parquet,
        joinery_material: JoineryMaterial::Aluminum,
        electrical_fixture_count: 20,
        paint_brand: "Dulux".to_string(),
    }
}

/// Cheapest possible finish, worth exactly 2 points (0+1+1+0+0).
pub(super) fn basic_room() -> RoomRecord {
    RoomRecord {
        ceiling_type: CeilingType::SimpleSlab,
        floor_type: FloorType::Other,
        joinery_material: JoineryMaterial::Wood,
        electrical_fixture_count: 0,
        paint_brand: String::new(),
    }
}

/// Worth exactly 5 points (3+1+1+0+0), sitting on the `moyen` boundary.
pub(super) fn boundary_moyen_room() -> RoomRecord {
    RoomRecord {
        ceiling_type: CeilingType::Staff,
        floor_type: FloorType::Other,
        joinery_material: JoineryMaterial::Wood,
        electrical_fixture_count: 0,
        paint_brand: String::new(),
    }
}

/// Worth exactly 8 points (3+3+2+0+0), sitting on the `haut` boundary.
pub(super) fn boundary_haut_room() -> RoomRecord {
    RoomRecord {
        ceiling_type: CeilingType::Staff,
        floor_type: FloorType::Parquet,
        joinery_material: JoineryMaterial::Aluminum,
        electrical_fixture_count: 0,
        paint_brand: String::new(),
    }
}
