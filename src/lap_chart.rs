use std::collections::{BTreeMap, HashSet};

use crate::grid_select::select_top_n;
use crate::model::{ChartConfig, ChartSeries, GridEntry, LapPosition, LapRow, PositionChart};
use crate::team_colors::team_color;

/// Reshape flat (lap, driver, position) rows into one row per distinct lap,
/// with one field per driver in `drivers`. Observations for other drivers
/// are dropped so the pivot stays bounded to the visualized subset; a
/// duplicate (lap, driver) observation keeps the later row. Rows come out
/// strictly ascending by lap.
pub fn pivot_lap_positions(observations: &[LapPosition], drivers: &HashSet<String>) -> Vec<LapRow> {
    let mut by_lap: BTreeMap<u32, BTreeMap<String, u32>> = BTreeMap::new();
    for obs in observations {
        let row = by_lap.entry(obs.lap).or_default();
        if drivers.contains(&obs.driver) {
            row.insert(obs.driver.clone(), obs.position);
        }
    }
    by_lap
        .into_iter()
        .map(|(lap, positions)| LapRow { lap, positions })
        .collect()
}

/// Attach one colored series per selected entry. Series order follows the
/// selection exactly; it is the chart's legend and z-order.
pub fn assemble_position_chart(selection: &[GridEntry], rows: Vec<LapRow>) -> PositionChart {
    let series = selection
        .iter()
        .map(|e| ChartSeries {
            key: e.driver.clone(),
            color: team_color(&e.team).to_string(),
        })
        .collect();
    PositionChart { series, rows }
}

/// The full position-chart pipeline: pick the top drivers from the result
/// (or qualifying while the result is not in), pivot their laps, and color
/// each series by team.
pub fn position_chart(
    laps: &[LapPosition],
    results: &[GridEntry],
    qualifying: &[GridEntry],
    cfg: &ChartConfig,
) -> PositionChart {
    let selection = select_top_n(results, qualifying, cfg.top_n);
    let keys: HashSet<String> = selection.iter().map(|e| e.driver.clone()).collect();
    let rows = pivot_lap_positions(laps, &keys);
    assemble_position_chart(&selection, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(lap: u32, driver: &str, position: u32) -> LapPosition {
        LapPosition {
            lap,
            driver: driver.to_string(),
            position,
        }
    }

    fn keys(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_observations_pivot_to_nothing() {
        assert!(pivot_lap_positions(&[], &keys(&["A", "B"])).is_empty());
    }

    #[test]
    fn pivots_one_row_per_lap_in_ascending_order() {
        let observations = vec![
            obs(2, "A", 2),
            obs(1, "A", 1),
            obs(1, "B", 2),
            obs(2, "B", 1),
        ];
        let rows = pivot_lap_positions(&observations, &keys(&["A", "B"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lap, 1);
        assert_eq!(rows[0].positions["A"], 1);
        assert_eq!(rows[0].positions["B"], 2);
        assert_eq!(rows[1].lap, 2);
        assert_eq!(rows[1].positions["A"], 2);
        assert_eq!(rows[1].positions["B"], 1);
    }

    #[test]
    fn drivers_outside_the_subset_never_appear() {
        let observations = vec![obs(1, "A", 1), obs(1, "backmarker", 19)];
        let rows = pivot_lap_positions(&observations, &keys(&["A"]));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].positions.contains_key("A"));
        assert!(!rows[0].positions.contains_key("backmarker"));
    }

    #[test]
    fn missing_lap_leaves_the_field_absent() {
        // A pitted on lap 2 and produced no timing row.
        let observations = vec![obs(1, "A", 1), obs(1, "B", 2), obs(2, "B", 1)];
        let rows = pivot_lap_positions(&observations, &keys(&["A", "B"]));
        assert_eq!(rows[1].lap, 2);
        assert!(rows[1].positions.get("A").is_none());
    }

    #[test]
    fn duplicate_observation_last_write_wins() {
        let observations = vec![obs(1, "A", 3), obs(1, "A", 5)];
        let rows = pivot_lap_positions(&observations, &keys(&["A"]));
        assert_eq!(rows[0].positions["A"], 5);
    }

    #[test]
    fn series_order_matches_selection_order() {
        let selection = vec![
            GridEntry {
                driver: "Leader".to_string(),
                team: "ferrari".to_string(),
                position: Some(1),
                status: None,
                time: None,
            },
            GridEntry {
                driver: "Chaser".to_string(),
                team: "unknown_team".to_string(),
                position: Some(2),
                status: None,
                time: None,
            },
        ];
        let chart = assemble_position_chart(&selection, Vec::new());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].key, "Leader");
        assert_eq!(chart.series[0].color, "#DC0000");
        assert_eq!(chart.series[1].key, "Chaser");
        assert_eq!(chart.series[1].color, "#FFFFFF");
    }
}
