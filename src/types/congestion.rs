use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Unknown,
    Low,
    Moderate,
    Heavy,
    Severe,
}

impl CongestionLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unknown" => Some(CongestionLevel::Unknown),
            "low" => Some(CongestionLevel::Low),
            "moderate" => Some(CongestionLevel::Moderate),
            "heavy" => Some(CongestionLevel::Heavy),
            "severe" => Some(CongestionLevel::Severe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionLevel::Unknown => "unknown",
            CongestionLevel::Low => "low",
            CongestionLevel::Moderate => "moderate",
            CongestionLevel::Heavy => "heavy",
            CongestionLevel::Severe => "severe",
        }
    }
}

/// A contiguous sub-segment of the route tagged by the annotation source.
/// Segments partition the route geometry with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSegment {
    pub distance_meters: f64,
    pub congestion: CongestionLevel,
    pub restricted: bool,
}

impl AnnotatedSegment {
    pub fn new(distance_meters: f64, congestion: CongestionLevel, restricted: bool) -> Self {
        Self {
            distance_meters,
            congestion,
            restricted,
        }
    }
}
