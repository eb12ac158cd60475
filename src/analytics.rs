use std::collections::HashMap;

use crate::model::{
    Circuit, CountryGroup, DriverAverage, GridEntry, PitEfficiency, PitStop, QualiRaceDelta,
    RacePosition, StatusCount,
};

/// Group result rows by status and count them, in first-seen status order.
/// Rows without a status are skipped.
pub fn count_by_status(results: &[GridEntry]) -> Vec<StatusCount> {
    let mut out: Vec<StatusCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for entry in results {
        let Some(status) = entry.status.as_deref() else {
            continue;
        };
        match index.get(status) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(status.to_string(), out.len());
                out.push(StatusCount {
                    status: status.to_string(),
                    count: 1,
                });
            }
        }
    }
    out
}

/// DNF causes for display. "Finished" and lapped classifications ("+1 Lap"
/// and friends) are not DNFs; the rest rank count-descending, first-seen
/// order breaking ties, cut to `limit`.
pub fn dnf_cause_counts(results: &[GridEntry], limit: usize) -> Vec<StatusCount> {
    let mut counts = count_by_status(results);
    counts.retain(|c| c.status != "Finished" && !c.status.contains("Lap"));
    counts.sort_by_key(|c| std::cmp::Reverse(c.count));
    counts.truncate(limit);
    counts
}

/// Per-driver average stop duration in caller-chosen units, first-seen
/// driver order. A driver with a single stop averages to that stop — there
/// is no minimum sample size. Negative feed durations clamp to zero.
pub fn average_duration_by_driver(
    stops: &[PitStop],
    convert: impl Fn(f64) -> f64,
) -> Vec<DriverAverage> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
    for stop in stops {
        if stop.driver.is_empty() {
            continue;
        }
        let slot = sums.entry(stop.driver.clone()).or_insert_with(|| {
            order.push(stop.driver.clone());
            (0.0, 0)
        });
        slot.0 += stop.duration_ms.max(0.0);
        slot.1 += 1;
    }
    order
        .into_iter()
        .map(|driver| {
            let (sum, n) = sums[&driver];
            DriverAverage {
                avg_duration: convert(sum / f64::from(n)),
                driver,
            }
        })
        .collect()
}

/// Pit efficiency board: fastest average stop first, cut to `limit`.
pub fn pit_efficiency_ranking(stops: &[PitStop], limit: usize) -> Vec<PitEfficiency> {
    let mut rows: Vec<PitEfficiency> = average_duration_by_driver(stops, |ms| ms)
        .into_iter()
        .map(|row| PitEfficiency {
            driver: row.driver,
            avg_ms: row.avg_duration,
            avg_sec: row.avg_duration / 1000.0,
        })
        .collect();
    rows.sort_by(|a, b| a.avg_ms.total_cmp(&b.avg_ms));
    rows.truncate(limit);
    rows
}

/// Section circuits by country for display: first-seen country order, feed
/// order inside each group.
pub fn group_by_country(circuits: &[Circuit]) -> Vec<CountryGroup> {
    let mut out: Vec<CountryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for circuit in circuits {
        match index.get(&circuit.country) {
            Some(&i) => out[i].circuits.push(circuit.clone()),
            None => {
                index.insert(circuit.country.clone(), out.len());
                out.push(CountryGroup {
                    country: circuit.country.clone(),
                    circuits: vec![circuit.clone()],
                });
            }
        }
    }
    out
}

/// Join one driver's qualifying positions against their race results, race
/// by race. Races without a result row are dropped; a row missing either
/// position yields no delta. Output order follows the qualifying input.
pub fn quali_vs_race_deltas(quali: &[RacePosition], race: &[RacePosition]) -> Vec<QualiRaceDelta> {
    let race_index: HashMap<&str, &RacePosition> =
        race.iter().map(|r| (r.race.as_str(), r)).collect();
    let mut out = Vec::new();
    for q in quali {
        let Some(r) = race_index.get(q.race.as_str()) else {
            continue;
        };
        let delta = match (q.position, r.position) {
            (Some(qp), Some(rp)) => Some(qp as i32 - rp as i32),
            _ => None,
        };
        out.push(QualiRaceDelta {
            race: q.race.clone(),
            quali_pos: q.position,
            race_pos: r.position,
            delta,
        });
    }
    out
}
