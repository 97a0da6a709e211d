use serde::{Deserialize, Serialize};

/// Ceiling finish observed in a room.
///
/// Unmapped wire values land on [`CeilingType::Other`], which scores like the
/// cheapest finish rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingType {
    Staff,
    WoodCeiling,
    PvcPaneling,
    WoodPaneling,
    SimpleSlab,
    #[serde(other)]
    Other,
}

impl CeilingType {
    pub const fn label(self) -> &'static str {
        match self {
            CeilingType::Staff => "staff",
            CeilingType::WoodCeiling => "wood_ceiling",
            CeilingType::PvcPaneling => "pvc_paneling",
            CeilingType::WoodPaneling => "wood_paneling",
            CeilingType::SimpleSlab => "simple_slab",
            CeilingType::Other => "other",
        }
    }
}

/// Floor covering observed in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorType {
    Tile,
    Parquet,
    #[serde(other)]
    Other,
}

impl FloorType {
    pub const fn label(self) -> &'static str {
        match self {
            FloorType::Tile => "tile",
            FloorType::Parquet => "parquet",
            FloorType::Other => "other",
        }
    }
}

/// Window and door frame material. Anything that is not aluminum scores like
/// wood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoineryMaterial {
    Wood,
    Aluminum,
    #[serde(other)]
    Other,
}

impl JoineryMaterial {
    pub const fn label(self) -> &'static str {
        match self {
            JoineryMaterial::Wood => "wood",
            JoineryMaterial::Aluminum => "aluminum",
            JoineryMaterial::Other => "other",
        }
    }
}

/// One room's finish attributes as captured in the property editor.
///
/// Rooms are immutable inputs; the classifier never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub ceiling_type: CeilingType,
    pub floor_type: FloorType,
    pub joinery_material: JoineryMaterial,
    /// Outlets, switches, and circuit breakers combined.
    pub electrical_fixture_count: u32,
    /// Free-text brand name, matched case-insensitively against known tiers.
    #[serde(default)]
    pub paint_brand: String,
}

/// Finish-quality tier assigned to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingTier {
    Economique,
    Moyen,
    Haut,
}

impl StandingTier {
    pub const fn label(self) -> &'static str {
        match self {
            StandingTier::Economique => "economique",
            StandingTier::Moyen => "moyen",
            StandingTier::Haut => "haut",
        }
    }

    /// Fixed description shown next to the tier in property listings.
    pub const fn description(self) -> &'static str {
        match self {
            StandingTier::Economique => {
                "Standing économique : matériaux de base et finitions simples."
            }
            StandingTier::Moyen => {
                "Standing moyen : matériaux de qualité intermédiaire et finitions soignées."
            }
            StandingTier::Haut => {
                "Standing haut : matériaux haut de gamme et finitions luxueuses."
            }
        }
    }
}

/// Factors contributing to a room's standing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingFactor {
    Ceiling,
    Floor,
    Joinery,
    ElectricalDensity,
    PaintBrand,
}
