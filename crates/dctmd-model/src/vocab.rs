use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Laterality of an anatomical structure. Path segments use the lowercase
/// keys `left` / `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// The path-segment key for this side.
    pub fn key(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(format!("Unknown side: {}", s)),
        }
    }
}

/// Anatomical muscle/joint grouping used to group pain questions, per the
/// DC/TMD examination protocol (palpation sites and movement interviews).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Temporalis,
    Masseter,
    TmjLateralPole,
    TmjAroundLateralPole,
    SubmandibularRegion,
    PosteriorMandibularRegion,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Temporalis,
        Region::Masseter,
        Region::TmjLateralPole,
        Region::TmjAroundLateralPole,
        Region::SubmandibularRegion,
        Region::PosteriorMandibularRegion,
    ];

    /// The path-segment key for this region.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Temporalis => "temporalis",
            Region::Masseter => "masseter",
            Region::TmjLateralPole => "tmj_lateral_pole",
            Region::TmjAroundLateralPole => "tmj_around_lateral_pole",
            Region::SubmandibularRegion => "submandibular_region",
            Region::PosteriorMandibularRegion => "posterior_mandibular_region",
        }
    }

    /// Whether the pain interview for this region includes the familiar
    /// headache follow-up question. Per DC/TMD Axis I this applies to the
    /// temporalis only.
    pub fn requires_headache_followup(&self) -> bool {
        matches!(self, Region::Temporalis)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "temporalis" => Ok(Region::Temporalis),
            "masseter" => Ok(Region::Masseter),
            "tmj_lateral_pole" => Ok(Region::TmjLateralPole),
            "tmj_around_lateral_pole" => Ok(Region::TmjAroundLateralPole),
            "submandibular_region" => Ok(Region::SubmandibularRegion),
            "posterior_mandibular_region" => Ok(Region::PosteriorMandibularRegion),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

/// Category of a pain-related interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainType {
    Pain,
    FamiliarPain,
    FamiliarHeadache,
    ReferredPain,
}

impl PainType {
    /// The path-segment key for this question category.
    pub fn key(&self) -> &'static str {
        match self {
            PainType::Pain => "pain",
            PainType::FamiliarPain => "familiar_pain",
            PainType::FamiliarHeadache => "familiar_headache",
            PainType::ReferredPain => "referred_pain",
        }
    }
}

impl fmt::Display for PainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "pain" => Ok(PainType::Pain),
            "familiar_pain" => Ok(PainType::FamiliarPain),
            "familiar_headache" => Ok(PainType::FamiliarHeadache),
            "referred_pain" => Ok(PainType::ReferredPain),
            _ => Err(format!("Unknown pain type: {}", s)),
        }
    }
}
