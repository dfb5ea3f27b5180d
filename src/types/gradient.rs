use serde::{Deserialize, Serialize};

use crate::types::congestion::CongestionLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let value = hex.trim_start_matches('#');
        if value.len() != 6 && value.len() != 8 {
            return None;
        }
        let r = u8::from_str_radix(&value[0..2], 16).ok()?;
        let g = u8::from_str_radix(&value[2..4], 16).ok()?;
        let b = u8::from_str_radix(&value[4..6], 16).ok()?;
        let a = if value.len() == 8 {
            u8::from_str_radix(&value[6..8], 16).ok()?
        } else {
            255
        };
        Some(Self { r, g, b, a })
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientMode {
    /// Stepped transitions: one stop just past each color boundary.
    #[default]
    Hard,
    /// Crossfaded transitions bounded by per-segment stop gaps.
    Soft,
}

impl GradientMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hard" => Some(GradientMode::Hard),
            "soft" => Some(GradientMode::Soft),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientMode::Hard => "hard",
            GradientMode::Soft => "soft",
        }
    }
}

/// Colors for every role the styling engine paints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficPalette {
    pub traversed: Color,
    pub unknown: Color,
    pub low: Color,
    pub moderate: Color,
    pub heavy: Color,
    pub severe: Color,
    pub restricted: Color,
    /// Uniform color for layers rendered without congestion annotations,
    /// e.g. the casing line.
    pub route_base: Color,
}

impl Default for TrafficPalette {
    fn default() -> Self {
        Self {
            traversed: Color::rgb(0x8A, 0x8F, 0x99),
            unknown: Color::rgb(0x38, 0x87, 0xBE),
            low: Color::rgb(0x38, 0x87, 0xBE),
            moderate: Color::rgb(0xF7, 0x93, 0x2F),
            heavy: Color::rgb(0xE8, 0x4D, 0x3D),
            severe: Color::rgb(0x8E, 0x2A, 0x2A),
            restricted: Color::rgb(0x1A, 0x1A, 0x1A),
            route_base: Color::rgb(0x2D, 0x5F, 0x99),
        }
    }
}

impl TrafficPalette {
    pub fn color_for(&self, level: CongestionLevel) -> Color {
        match level {
            CongestionLevel::Unknown => self.unknown,
            CongestionLevel::Low => self.low,
            CongestionLevel::Moderate => self.moderate,
            CongestionLevel::Heavy => self.heavy,
            CongestionLevel::Severe => self.severe,
        }
    }

    pub fn restricted_color(&self, restricted: bool) -> Color {
        if restricted {
            self.restricted
        } else {
            Color::TRANSPARENT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub fraction: f64,
    pub color: Color,
}

/// Sparse fraction → color stops, kept sorted by fraction so inserts and
/// lookups stay logarithmic on long annotated routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradientStopMap {
    stops: Vec<GradientStop>,
}

impl GradientStopMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a stop, replacing any existing stop at the same fraction.
    pub fn set(&mut self, fraction: f64, color: Color) {
        match self
            .stops
            .binary_search_by(|stop| stop.fraction.total_cmp(&fraction))
        {
            Ok(position) => self.stops[position].color = color,
            Err(position) => self.stops.insert(position, GradientStop { fraction, color }),
        }
    }

    pub fn get(&self, fraction: f64) -> Option<Color> {
        self.stops
            .binary_search_by(|stop| stop.fraction.total_cmp(&fraction))
            .ok()
            .map(|position| self.stops[position].color)
    }

    pub fn sorted(&self) -> Vec<GradientStop> {
        self.stops.clone()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
