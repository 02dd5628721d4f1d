//! Shared types, error enum, and decoded record types for metar-core.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// All errors produced by metar-core.
#[derive(Debug, Error)]
pub enum MetarError {
    #[error("empty report")]
    Empty,
    #[error("missing mandatory field: {0}")]
    MissingField(&'static str),
    #[error("invalid observation time: {0}")]
    InvalidTime(String),
    #[error("bad wind unit: {0}")]
    InvalidWindUnit(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MetarError>;

// ---------------------------------------------------------------------------
// Report header
// ---------------------------------------------------------------------------

/// Report keyword. Reports without a keyword are routine METARs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReportType {
    #[default]
    #[serde(rename = "METAR")]
    Metar,
    #[serde(rename = "SPECI")]
    Speci,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Metar => write!(f, "METAR"),
            ReportType::Speci => write!(f, "SPECI"),
        }
    }
}

/// Marks a report that amends an earlier one.
///
/// `COR` carries no sequence letter; `CCA`, `CCB`, ... carry `A`, `B`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub sequence: Option<char>,
}

/// Day of month and UTC time of the observation. Month and year are not
/// encoded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservationTime {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

// ---------------------------------------------------------------------------
// Wind
// ---------------------------------------------------------------------------

/// Mean wind direction: a bearing in degrees, or `VRB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    Degrees(u16),
    Variable,
}

impl Serialize for WindDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            WindDirection::Degrees(d) => serializer.serialize_u16(*d),
            WindDirection::Variable => serializer.serialize_str("VRB"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindUnit {
    #[serde(rename = "KT")]
    Knots,
    #[serde(rename = "MPS")]
    MetersPerSecond,
    #[serde(rename = "KPH")]
    KilometersPerHour,
}

impl WindUnit {
    /// Unit suffixes in the order they are tried against a wind group.
    pub const ALL: [WindUnit; 3] = [
        WindUnit::Knots,
        WindUnit::MetersPerSecond,
        WindUnit::KilometersPerHour,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WindUnit::Knots => "KT",
            WindUnit::MetersPerSecond => "MPS",
            WindUnit::KilometersPerHour => "KPH",
        }
    }
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction variability.
///
/// `Unbounded` comes from a `VRB` direction with no reported sector and
/// serialises as `true`; `Range` is a reported `dddVddd` sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindVariation {
    Unbounded,
    Range { min: u16, max: u16 },
}

impl Serialize for WindVariation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        match self {
            WindVariation::Unbounded => serializer.serialize_bool(true),
            WindVariation::Range { min, max } => {
                let mut s = serializer.serialize_struct("WindVariation", 2)?;
                s.serialize_field("min", min)?;
                s.serialize_field("max", max)?;
                s.end()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wind {
    /// `None` when the station reports `///`.
    pub direction: Option<WindDirection>,
    pub speed: Option<u32>,
    pub gust: Option<u32>,
    pub unit: WindUnit,
    pub variation: Option<WindVariation>,
}

/// Re-encodes the main wind group, e.g. `24028G42KT`. The variation sector
/// is a separate token and is not included.
impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(WindDirection::Degrees(d)) => write!(f, "{d:03}")?,
            Some(WindDirection::Variable) => write!(f, "VRB")?,
            None => write!(f, "///")?,
        }
        match self.speed {
            Some(s) => write!(f, "{s:02}")?,
            None => write!(f, "//")?,
        }
        if let Some(g) = self.gust {
            write!(f, "G{g:02}")?;
        }
        write!(f, "{}", self.unit)
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "SM")]
    StatuteMiles,
}

/// Compass octant used by directional visibility groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "N" => CompassPoint::N,
            "NE" => CompassPoint::NE,
            "E" => CompassPoint::E,
            "SE" => CompassPoint::SE,
            "S" => CompassPoint::S,
            "SW" => CompassPoint::SW,
            "W" => CompassPoint::W,
            "NW" => CompassPoint::NW,
            _ => return None,
        })
    }
}

// ---------------------------------------------------------------------------
// Weather and clouds
// ---------------------------------------------------------------------------

/// One element of a present-weather group, e.g. `SH` / "showers".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherPhenomenon {
    pub abbreviation: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloudLayer {
    pub abbreviation: &'static str,
    pub meaning: &'static str,
    /// Layer base in feet; `None` when the group carries no height.
    pub altitude: Option<u32>,
    pub cumulonimbus: bool,
}

// ---------------------------------------------------------------------------
// Runway visual range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunwaySide {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "C")]
    Center,
}

/// `P` (above the highest measurable value) or `M` (below the lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RvrLimit {
    #[serde(rename = "P")]
    Above,
    #[serde(rename = "M")]
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RvrTrend {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "N")]
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RvrUnit {
    #[serde(rename = "FT")]
    Feet,
}

/// Decoded runway visual range group, e.g. `R34L/M0600V1000FT`.
///
/// Numeric values are kept as reported so leading zeros survive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RvrInfo {
    pub runway: Option<String>,
    pub direction: Option<RunwaySide>,
    pub separator: Option<char>,
    pub min_indicator: Option<RvrLimit>,
    pub min_value: Option<String>,
    pub variable: bool,
    pub max_indicator: Option<RvrLimit>,
    pub max_value: Option<String>,
    pub trend: Option<RvrTrend>,
    pub unit: Option<RvrUnit>,
}

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// A fully decoded METAR/SPECI report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub report_type: ReportType,
    pub correction: Option<Correction>,
    pub station: String,
    pub time: ObservationTime,
    pub auto: bool,
    pub wind: Wind,
    pub cavok: bool,
    pub visibility: Option<u32>,
    pub visibility_unit: Option<VisibilityUnit>,
    pub visibility_variation: Option<u32>,
    pub visibility_variation_direction: Option<CompassPoint>,
    pub runway_visual_range: Option<RvrInfo>,
    pub runway_visual_ranges: Vec<RvrInfo>,
    pub weather: Option<Vec<WeatherPhenomenon>>,
    pub clouds: Option<Vec<CloudLayer>>,
    pub temperature: Option<i32>,
    pub dewpoint: Option<i32>,
    pub altimeter_hpa: Option<u32>,
    pub altimeter_in_hg: Option<f64>,
    pub recent_weather: Option<String>,
    pub recent_weather_description: Option<&'static str>,
}

impl Observation {
    /// True when the report amends an earlier one (`COR` or `CCx`).
    pub fn is_correction(&self) -> bool {
        self.correction.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
