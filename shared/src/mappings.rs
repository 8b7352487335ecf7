//! Static per-period tables: selectable regions, map image keys and the
//! place-of-publication aliases behind each region. Slice-of-tuple lookups;
//! the tables are small enough that linear scans beat building maps.

use crate::period::Period;

/// Regions offered as buttons while the given period is active.
const REVOLUTIONARY_REGIONS: &[&str] = &[
    "Virginia",
    "Rhode Island",
    "Pennsylvania",
    "New Hampshire",
    "Massachusetts",
    "New York",
];

const EARLY_REPUBLIC_REGIONS: &[&str] = &[
    "Virginia",
    "Rhode Island",
    "Pennsylvania",
    "New Hampshire",
    "Delaware",
    "Massachusetts",
    "Kentucky",
    "Washington City [D.C.]",
];

/// Map image shown when no region is highlighted.
const REVOLUTIONARY_BLANK_IMAGE: &str = "Blank1770";
const EARLY_REPUBLIC_BLANK_IMAGE: &str = "Blank1796";

const REVOLUTIONARY_IMAGE_KEYS: &[(&str, &str)] = &[
    ("Virginia", "Virginia1770"),
    ("Rhode Island", "RhodeIsland1770"),
    ("Pennsylvania", "Pennsylvania1770"),
    ("New Hampshire", "NewHampshire1770"),
    ("Massachusetts", "Massachusetts1770"),
    ("New York", "NewYork1770"),
];

const EARLY_REPUBLIC_IMAGE_KEYS: &[(&str, &str)] = &[
    ("Virginia", "Virginia1796"),
    ("Rhode Island", "RhodeIsland1796"),
    ("Pennsylvania", "Pennsylvania1796"),
    ("New Hampshire", "NewHampshire1796"),
    ("Delaware", "Delaware1796"),
    ("Massachusetts", "Massachusetts1796"),
    ("Kentucky", "Kentucky1796"),
    ("Washington City [D.C.]", "Washington1796"),
];

/// `place_of_publication` substrings that count as publication inside a
/// region. Spellings vary across the dataset (bracketed qualifiers, hyphens,
/// historical borders), so each region carries every variant seen in it.
const REVOLUTIONARY_ALIASES: &[(&str, &[&str])] = &[
    (
        "Virginia",
        &[
            "Lexington [Ky.]",
            "Shepherdstown, Va. [W. Va.]",
            "Williamsburg [Va.]",
            "Williamsburg, Va.",
        ],
    ),
    ("Rhode Island", &["Newport [R.I.]"]),
    ("Pennsylvania", &["Philadelphia [Pa.]"]),
    (
        "New Hampshire",
        &["[Portsmouth, N.H.]", "Portsmouth [N.H.]", "Portsmouth, N.H."],
    ),
    ("Massachusetts", &["Boston [Mass.]"]),
    ("New York", &["New York [N.Y.]", "New-York [N.Y.]"]),
];

const EARLY_REPUBLIC_ALIASES: &[(&str, &[&str])] = &[
    (
        "Virginia",
        &[
            "Shepherdstown, Va. [W. Va.]",
            "Williamsburg [Va.]",
            "Alexandria [Va.]",
            "Lynchburg [Va.]",
            "Martinsburg, Va.",
            "Norfolk [Va.]",
            "Richmond, Va.",
            "Wheeling, Va. [W. Va.]",
            "Williamsburg, Va.",
        ],
    ),
    (
        "Rhode Island",
        &[
            "Warren, R.I.",
            "Providence [R.I.]",
            "Newport, R.I.",
            "Newport [R.I.]",
        ],
    ),
    ("Pennsylvania", &["Philadelphia [Pa.]"]),
    (
        "New Hampshire",
        &["[Portsmouth, N.H.]", "Portsmouth [N.H.]", "Portsmouth, N.H."],
    ),
    ("Delaware", &["Dover, Del.", "Wilmington [Del.]", "Wilmington, Del."]),
    (
        "Massachusetts",
        &["Boston [Mass.]", "Portland [Me.]", "Portland, Me."],
    ),
    ("Kentucky", &["[Lexington, Ky.]", "Lexington [Ky.]"]),
    ("Washington City [D.C.]", &["Washington City [D.C.]"]),
];

/// Decade options offered in the region view, oldest first.
pub const DECADES: &[&str] = &["1770-1779", "1780-1789", "1790-1799", "1800-1809"];

/// Regions selectable during `period`, in button order.
pub fn regions_for(period: Period) -> &'static [&'static str] {
    match period {
        Period::Revolutionary => REVOLUTIONARY_REGIONS,
        Period::EarlyRepublic => EARLY_REPUBLIC_REGIONS,
    }
}

pub fn is_region_for(period: Period, region: &str) -> bool {
    regions_for(period).contains(&region)
}

/// Image key for the current map view. An unknown or absent region falls
/// back to the period's blank map, never to a missing asset.
pub fn image_key(period: Period, region: Option<&str>) -> &'static str {
    let (keys, blank) = match period {
        Period::Revolutionary => (REVOLUTIONARY_IMAGE_KEYS, REVOLUTIONARY_BLANK_IMAGE),
        Period::EarlyRepublic => (EARLY_REPUBLIC_IMAGE_KEYS, EARLY_REPUBLIC_BLANK_IMAGE),
    };
    region
        .and_then(|name| table_get(keys, name))
        .unwrap_or(blank)
}

/// Alias list for a region during `period`. `None` means the region has no
/// alias entry and must not filter records.
pub fn region_aliases(period: Period, region: &str) -> Option<&'static [&'static str]> {
    let table = match period {
        Period::Revolutionary => REVOLUTIONARY_ALIASES,
        Period::EarlyRepublic => EARLY_REPUBLIC_ALIASES,
    };
    table
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, aliases)| *aliases)
}

fn table_get(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::{DECADES, image_key, is_region_for, region_aliases, regions_for};
    use crate::period::{Period, parse_year_range};

    #[test]
    fn every_region_has_an_image_key_and_aliases() {
        for period in Period::ALL {
            for &region in regions_for(period) {
                assert_ne!(
                    image_key(period, Some(region)),
                    image_key(period, None),
                    "{region} should have its own map image"
                );
                assert!(
                    region_aliases(period, region).is_some_and(|aliases| !aliases.is_empty()),
                    "{region} should have alias spellings"
                );
            }
        }
    }

    #[test]
    fn no_region_selected_falls_back_to_blank_map() {
        assert_eq!(image_key(Period::Revolutionary, None), "Blank1770");
        assert_eq!(image_key(Period::EarlyRepublic, None), "Blank1796");
    }

    #[test]
    fn unknown_region_falls_back_to_blank_map() {
        assert_eq!(image_key(Period::Revolutionary, Some("Delaware")), "Blank1770");
        assert_eq!(image_key(Period::EarlyRepublic, Some("Vermont")), "Blank1796");
    }

    #[test]
    fn selected_region_resolves_its_own_image() {
        assert_eq!(
            image_key(Period::Revolutionary, Some("Massachusetts")),
            "Massachusetts1770"
        );
        assert_eq!(
            image_key(Period::EarlyRepublic, Some("Washington City [D.C.]")),
            "Washington1796"
        );
    }

    #[test]
    fn region_lists_differ_between_periods() {
        assert!(is_region_for(Period::Revolutionary, "New York"));
        assert!(!is_region_for(Period::EarlyRepublic, "New York"));
        assert!(is_region_for(Period::EarlyRepublic, "Delaware"));
        assert!(!is_region_for(Period::Revolutionary, "Delaware"));
    }

    #[test]
    fn aliases_cover_spelling_variants() {
        let aliases = region_aliases(Period::Revolutionary, "New York")
            .expect("New York should have aliases");
        assert!(aliases.contains(&"New York [N.Y.]"));
        assert!(aliases.contains(&"New-York [N.Y.]"));
    }

    #[test]
    fn decades_parse_and_tile_the_covered_years() {
        let mut expected_start = 1770;
        for decade in DECADES {
            let (start, end) = parse_year_range(decade).expect("decade should parse");
            assert_eq!(start, expected_start);
            assert_eq!(end, start + 9);
            expected_start = end + 1;
        }
        assert_eq!(expected_start, 1810);
    }
}
