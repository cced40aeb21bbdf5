use serde::Serialize;
use std::fmt;

const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "ff0000"),
    ("green", "00ff00"),
    ("blue", "0000ff"),
    ("yellow", "ffff00"),
    ("orange", "ffa500"),
    ("purple", "800080"),
    ("pink", "ffc0cb"),
    ("cyan", "00ffff"),
    ("white", "ffffff"),
    ("black", "000000"),
    ("gray", "808080"),
    ("grey", "808080"),
];

/// A `#rrggbb` color. Only produced by [`normalize_color`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn a user-supplied color token into `#rrggbb`.
///
/// Accepts a name from a small fixed table, `rgb` shorthand, or `rrggbb`, each
/// with or without a leading `#`. Returns `None` for anything else.
pub fn normalize_color(token: &str) -> Option<HexColor> {
    let token = token.trim_start_matches('#');
    if token.is_empty() {
        return None;
    }

    let lower = token.to_lowercase();
    let mut hex = NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map_or_else(|| token.to_string(), |(_, hex)| hex.to_string());

    if hex.chars().count() == 3 {
        hex = hex.chars().flat_map(|c| [c, c]).collect();
    }

    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(HexColor(format!("#{}", hex)))
    } else {
        None
    }
}
