use std::collections::BTreeMap;

use serde::Serialize;

/// One (lap, driver) observation from the lap-times feed.
#[derive(Debug, Clone)]
pub struct LapPosition {
    pub lap: u32,
    pub driver: String,
    pub position: u32,
}

/// One row of a result or qualifying classification. Both feeds share this
/// shape; `time` holds the race time for result rows and the best qualifying
/// time (Q3 over Q2 over Q1) for qualifying rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    pub driver: String,
    /// Constructor ref, the key into `team_colors`. Empty when the feed
    /// omitted the constructor.
    pub team: String,
    /// None = unclassified (retired, disqualified, not yet in).
    pub position: Option<u32>,
    pub status: Option<String>,
    pub time: Option<String>,
}

/// One pit stop for one driver.
#[derive(Debug, Clone)]
pub struct PitStop {
    pub driver: String,
    pub stop: u32,
    pub lap: u32,
    pub duration_ms: f64,
}

/// Aggregated count of one result status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Circuit {
    pub circuit_id: String,
    pub name: String,
    pub location: Option<String>,
    pub country: String,
    pub total_races: u32,
    pub first_race: u32,
    pub last_race: u32,
}

/// One pivoted chart row: the lap number plus one field per selected driver.
/// A driver with no observation for this lap has no field at all, so the
/// chart sees a gap rather than a zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapRow {
    pub lap: u32,
    #[serde(flatten)]
    pub positions: BTreeMap<String, u32>,
}

/// One named, colored line of the position chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub key: String,
    pub color: String,
}

/// Chart-ready output: series in legend/draw order plus the pivoted rows.
#[derive(Debug, Clone, Serialize)]
pub struct PositionChart {
    pub series: Vec<ChartSeries>,
    pub rows: Vec<LapRow>,
}

/// Per-driver grouped average in caller-chosen units.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverAverage {
    pub driver: String,
    pub avg_duration: f64,
}

/// One row of the pit efficiency board.
#[derive(Debug, Clone, Serialize)]
pub struct PitEfficiency {
    pub driver: String,
    pub avg_ms: f64,
    pub avg_sec: f64,
}

/// Circuits of one country, in feed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryGroup {
    pub country: String,
    pub circuits: Vec<Circuit>,
}

/// One (race, position) pair for a single driver.
#[derive(Debug, Clone)]
pub struct RacePosition {
    pub race: String,
    pub position: Option<u32>,
}

/// Qualifying position vs race position for one race of one driver.
/// `delta` is quali minus race, so positive means places gained on Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualiRaceDelta {
    pub race: String,
    pub quali_pos: Option<u32>,
    pub race_pos: Option<u32>,
    pub delta: Option<i32>,
}

/// Display knobs for chart shaping. Constructed by the caller and passed in;
/// nothing in this crate reads global state.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// How many drivers the position chart shows.
    pub top_n: usize,
    /// Pit stop duration that fills the whole duration bar.
    pub pit_ceiling_ms: f64,
    pub dnf_display_limit: usize,
    pub pit_display_limit: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            pit_ceiling_ms: 25_000.0,
            dnf_display_limit: 15,
            pit_display_limit: 20,
        }
    }
}
