use crate::model::GridEntry;

/// Pick the drivers to visualize for one event: the race classification when
/// it exists, otherwise qualifying, sorted by position and cut to `n`.
/// Unclassified entries sort after every classified one; ties and
/// unclassified entries keep their input order (stable sort, no invented
/// secondary key).
pub fn select_top_n(primary: &[GridEntry], fallback: &[GridEntry], n: usize) -> Vec<GridEntry> {
    let source = if !primary.is_empty() { primary } else { fallback };
    let mut entries = source.to_vec();
    entries.sort_by_key(|e| e.position.unwrap_or(u32::MAX));
    entries.truncate(n);
    entries
}

/// The entry classified first, if the race has one yet.
pub fn race_winner(results: &[GridEntry]) -> Option<&GridEntry> {
    results.iter().find(|e| e.position == Some(1))
}
