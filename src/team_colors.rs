use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Color used for any constructor the table does not know.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

// Keyed by constructor ref exactly as the results feed spells it.
const TEAM_COLORS: &[(&str, &str)] = &[
    ("alfa", "#900000"),
    ("alphatauri", "#2B4562"),
    ("alpine", "#0090FF"),
    ("aston_martin", "#006F62"),
    ("benetton", "#00A550"),
    ("brabham", "#00843D"),
    ("brawn", "#B8FD6E"),
    ("brm", "#6B8E23"),
    ("caterham", "#048646"),
    ("cooper", "#1B3C59"),
    ("ferrari", "#DC0000"),
    ("force_india", "#FF80C7"),
    ("haas", "#B6BABD"),
    ("honda", "#E8E8E8"),
    ("jaguar", "#0A5C2F"),
    ("jordan", "#FFA100"),
    ("ligier", "#1E6AD4"),
    ("lotus_f1", "#FFB800"),
    ("manor", "#323232"),
    ("march", "#B03060"),
    ("marussia", "#6E0000"),
    ("matra", "#2546FF"),
    ("mclaren", "#FF8700"),
    ("mercedes", "#00D2BE"),
    ("minardi", "#191919"),
    ("racing_point", "#F596C8"),
    ("red_bull", "#0600EF"),
    ("renault", "#FFF500"),
    ("sauber", "#9B0000"),
    ("shadow", "#111111"),
    ("toro_rosso", "#469BFF"),
    ("toyota", "#EB0A1E"),
    ("tyrrell", "#0000CC"),
    ("vanwall", "#004225"),
    ("williams", "#005AFF"),
    ("wolf", "#C9A227"),
];

static COLOR_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TEAM_COLORS.iter().copied().collect());

/// Display color for a constructor. Total and deterministic: unknown or
/// empty refs get [`FALLBACK_COLOR`], and the same ref always returns the
/// same `&'static str` (chart legends key off color equality).
pub fn team_color(team: &str) -> &'static str {
    COLOR_INDEX.get(team).copied().unwrap_or(FALLBACK_COLOR)
}

/// Black or white text over the given background color, picked by perceived
/// luminance. Colors that fail to parse get white text.
pub fn team_text_color(color: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex_rgb(color) else {
        return "#FFFFFF";
    };
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance > 150.0 { "#000000" } else { "#FFFFFF" }
}

fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let s = raw.trim().strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Categorical palette for charts that are not keyed by team (DNF pie,
/// status bars).
pub const CHART_PALETTE: &[&str] = &[
    "#E10600", "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DFE6E9", "#74B9FF",
    "#A29BFE", "#FD79A8", "#FDCB6E", "#6C5CE7", "#00B894", "#E17055", "#0984E3",
];

/// Palette color for the n-th slice; wraps past the end of the palette.
pub fn palette_color(idx: usize) -> &'static str {
    CHART_PALETTE[idx % CHART_PALETTE.len()]
}
