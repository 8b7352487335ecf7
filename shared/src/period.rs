use serde::{Deserialize, Serialize};

/// The two display periods of the viewer. A closed set: every period has an
/// inclusive year range, a region list and an image table in
/// [`crate::mappings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// 1770-1795.
    Revolutionary,
    /// 1796-1809.
    EarlyRepublic,
}

impl Period {
    /// Every period, in display order.
    pub const ALL: [Period; 2] = [Period::Revolutionary, Period::EarlyRepublic];

    /// Identifier used in data tables, image paths and the UI buttons.
    pub const fn id(self) -> &'static str {
        match self {
            Period::Revolutionary => "1770-1795",
            Period::EarlyRepublic => "1796-1809",
        }
    }

    pub fn from_id(id: &str) -> Option<Period> {
        Period::ALL.into_iter().find(|period| period.id() == id)
    }

    /// Inclusive year range covered by this period.
    pub const fn years(self) -> (i32, i32) {
        match self {
            Period::Revolutionary => (1770, 1795),
            Period::EarlyRepublic => (1796, 1809),
        }
    }

    pub fn contains_year(self, year: i32) -> bool {
        let (start, end) = self.years();
        year >= start && year <= end
    }
}

impl Default for Period {
    /// Period shown before any user interaction.
    fn default() -> Self {
        Period::Revolutionary
    }
}

/// Parse a `"start-end"` string into an inclusive year range. Decade
/// sub-filter values and period ids both use this shape.
pub fn parse_year_range(range: &str) -> Option<(i32, i32)> {
    let (start, end) = range.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok()?;
    Some((start, end))
}
