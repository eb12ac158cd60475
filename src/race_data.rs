//! Boundary parsing for the REST feeds. Each feed arrives as a JSON array of
//! nested rows; rows missing a required field are skipped so one bad record
//! never takes down a whole chart. Only an unparseable document is an error.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::model::{Circuit, GridEntry, LapPosition, PitStop, StatusCount};

/// Lap-times feed for one race: `[{id:{lap},driver:{surname},position}]`.
pub fn parse_lap_times_json(raw: &str) -> Result<Vec<LapPosition>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid lap times json")?;
    Ok(rows(&v, parse_lap_row))
}

/// Race results feed: `[{driver,constructor,position,status,time}]`.
pub fn parse_results_json(raw: &str) -> Result<Vec<GridEntry>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid results json")?;
    Ok(rows(&v, parse_result_row))
}

/// Qualifying feed: `[{driver,constructor,position,q1,q2,q3}]`.
pub fn parse_qualifying_json(raw: &str) -> Result<Vec<GridEntry>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid qualifying json")?;
    Ok(rows(&v, parse_qualifying_row))
}

/// Pit stops feed: `[{driver,stop,lap,milliseconds}]`.
pub fn parse_pit_stops_json(raw: &str) -> Result<Vec<PitStop>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid pit stops json")?;
    Ok(rows(&v, parse_pit_stop_row))
}

/// Pre-aggregated status counts: `[{status,count}]`.
pub fn parse_status_counts_json(raw: &str) -> Result<Vec<StatusCount>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid status counts json")?;
    Ok(rows(&v, parse_status_count_row))
}

/// Circuits feed with precomputed aggregates.
pub fn parse_circuits_json(raw: &str) -> Result<Vec<Circuit>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid circuits json")?;
    Ok(rows(&v, parse_circuit_row))
}

fn rows<T>(v: &Value, parse: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    let mut out = Vec::new();
    if let Some(arr) = v.as_array() {
        for item in arr {
            if let Some(row) = parse(item) {
                out.push(row);
            }
        }
    }
    out
}

fn parse_lap_row(v: &Value) -> Option<LapPosition> {
    let lap = v.get("id")?.get("lap")?.as_u64()? as u32;
    let driver = driver_surname(v)?;
    let position = v.get("position")?.as_u64()? as u32;
    Some(LapPosition {
        lap,
        driver,
        position,
    })
}

fn parse_result_row(v: &Value) -> Option<GridEntry> {
    let driver = driver_surname(v)?;
    Some(GridEntry {
        driver,
        team: constructor_ref(v).unwrap_or_default(),
        position: v.get("position").and_then(Value::as_u64).map(|p| p as u32),
        status: status_text(v),
        time: v.get("time").and_then(non_empty_str),
    })
}

fn parse_qualifying_row(v: &Value) -> Option<GridEntry> {
    let driver = driver_surname(v)?;
    Some(GridEntry {
        driver,
        team: constructor_ref(v).unwrap_or_default(),
        position: v.get("position").and_then(Value::as_u64).map(|p| p as u32),
        status: None,
        time: best_quali_time(v),
    })
}

fn parse_pit_stop_row(v: &Value) -> Option<PitStop> {
    let driver = driver_surname(v)?;
    let stop = v.get("stop")?.as_u64()? as u32;
    let lap = v.get("lap")?.as_u64()? as u32;
    let duration_ms = v.get("milliseconds")?.as_f64()?;
    Some(PitStop {
        driver,
        stop,
        lap,
        duration_ms,
    })
}

fn parse_status_count_row(v: &Value) -> Option<StatusCount> {
    let status = non_empty_str(v.get("status")?)?;
    let count = v.get("count")?.as_u64()? as u32;
    Some(StatusCount { status, count })
}

fn parse_circuit_row(v: &Value) -> Option<Circuit> {
    let circuit_id = id_text(v.get("circuit_id")?)?;
    let name = non_empty_str(v.get("name")?)?;
    let country = non_empty_str(v.get("country")?)?;
    Some(Circuit {
        circuit_id,
        name,
        location: v.get("location").and_then(non_empty_str),
        country,
        total_races: v.get("total_races").and_then(Value::as_u64).unwrap_or(0) as u32,
        first_race: v.get("first_race").and_then(Value::as_u64).unwrap_or(0) as u32,
        last_race: v.get("last_race").and_then(Value::as_u64).unwrap_or(0) as u32,
    })
}

fn driver_surname(v: &Value) -> Option<String> {
    non_empty_str(v.get("driver")?.get("surname")?)
}

fn constructor_ref(v: &Value) -> Option<String> {
    non_empty_str(v.get("constructor")?.get("constructorRef")?)
}

// The status arrives either as a joined entity `{status:{status:"Engine"}}`
// or already flattened to a string.
fn status_text(v: &Value) -> Option<String> {
    let s = v.get("status")?;
    match s {
        Value::String(_) => non_empty_str(s),
        _ => non_empty_str(s.get("status")?),
    }
}

/// Best qualifying time: Q3 when the driver ran it, else Q2, else Q1.
/// Empty strings count as not run.
fn best_quali_time(v: &Value) -> Option<String> {
    for key in ["q3", "q2", "q1"] {
        if let Some(t) = v.get(key).and_then(non_empty_str) {
            return Some(t);
        }
    }
    None
}

fn non_empty_str(v: &Value) -> Option<String> {
    let s = v.as_str()?.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

// Some feeds key circuits by numeric id, the static export by slug.
fn id_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
