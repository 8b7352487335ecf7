//! Derives the two visible tables from the record set and the current
//! selection. Pure functions over borrowed records; the caller decides when
//! to recompute.

use serde::{Deserialize, Serialize};

use crate::mappings;
use crate::period::{Period, parse_year_range};
use crate::record::Record;
use crate::selection::Selection;

/// Row of the primary publications table: the issue date as printed in the
/// dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRow {
    pub issue_date: String,
}

/// Row of the region deep-dive table; `issue_date` links to `web_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRow {
    pub issue_date: String,
    pub web_url: String,
}

/// Rows of the primary table: records whose issue year falls inside the
/// selected period, narrowed to the selected region when one is set, sorted
/// by issue date.
pub fn period_table(records: &[Record], selection: &Selection) -> Vec<PeriodRow> {
    let period = selection.period();
    let mut rows: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record
                .issue_year()
                .is_some_and(|year| period.contains_year(year))
        })
        .filter(|record| match selection.region() {
            Some(region) => matches_region(record, period, region),
            None => true,
        })
        .collect();
    sort_by_issue_date(&mut rows);
    rows.into_iter()
        .map(|record| PeriodRow {
            issue_date: record.issue_date().unwrap_or_default().to_string(),
        })
        .collect()
}

/// Rows of the region deep-dive table, or empty when no region view is open.
///
/// The region filter runs over the full record set, not the period slice:
/// the deep dive shows a region's whole run, with the decade sub-filter as
/// the only year restriction.
pub fn region_table(records: &[Record], selection: &Selection) -> Vec<RegionRow> {
    let Some(region) = selection.region() else {
        return Vec::new();
    };
    let period = selection.period();
    let decade = selection.decade().map(parse_year_range);

    let mut rows: Vec<&Record> = records
        .iter()
        .filter(|record| matches_region(record, period, region))
        .filter(|record| match decade {
            Some(range) => in_decade(record, range),
            None => true,
        })
        .filter(|record| match selection.category() {
            Some(category) => record
                .categories()
                .is_some_and(|categories| categories.contains(category)),
            None => true,
        })
        .collect();
    sort_by_issue_date(&mut rows);
    rows.into_iter()
        .map(|record| RegionRow {
            issue_date: record.issue_date().unwrap_or_default().to_string(),
            web_url: record.web_url().unwrap_or_default().to_string(),
        })
        .collect()
}

/// Whether `record` was published in `region`, by alias substring match.
///
/// A region with no alias entry for the period filters nothing (every record
/// passes); a record with no place of publication never matches.
fn matches_region(record: &Record, period: Period, region: &str) -> bool {
    let Some(aliases) = mappings::region_aliases(period, region) else {
        return true;
    };
    let Some(place) = record.place_of_publication() else {
        return false;
    };
    aliases.iter().any(|alias| place.contains(alias))
}

/// A decade whose range string failed to parse matches nothing rather than
/// silently showing everything.
fn in_decade(record: &Record, range: Option<(i32, i32)>) -> bool {
    let Some((start, end)) = range else {
        return false;
    };
    record
        .issue_year()
        .is_some_and(|year| year >= start && year <= end)
}

/// Ascending by calendar date. Stable, with unparseable dates after every
/// parseable one in their original dataset order.
fn sort_by_issue_date(rows: &mut [&Record]) {
    rows.sort_by_key(|record| {
        let date = record.issue_calendar_date();
        (date.is_none(), date)
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{matches_region, period_table, region_table};
    use crate::period::Period;
    use crate::record::Record;
    use crate::selection::{Selection, SelectionEvent};

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(column, value)| ((*column).to_string(), (*value).to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn boston(date: &str) -> Record {
        record(&[
            ("issue_date", date),
            ("place_of_publication", "Boston [Mass.]"),
            ("Web_URL", "https://example.org/boston"),
        ])
    }

    fn newport(date: &str) -> Record {
        record(&[
            ("issue_date", date),
            ("place_of_publication", "Newport [R.I.]"),
            ("Web_URL", "https://example.org/newport"),
        ])
    }

    fn after(events: Vec<SelectionEvent>) -> Selection {
        events
            .into_iter()
            .fold(Selection::default(), Selection::apply)
    }

    fn select_region(region: &str) -> SelectionEvent {
        SelectionEvent::SelectRegion {
            region: region.to_string(),
        }
    }

    fn dates(rows: &[super::PeriodRow]) -> Vec<&str> {
        rows.iter().map(|row| row.issue_date.as_str()).collect()
    }

    #[test]
    fn primary_keeps_only_issues_dated_inside_the_period() {
        let records = vec![boston("1775-03-01"), boston("1799-06-01")];
        let rows = period_table(&records, &Selection::default());
        assert_eq!(dates(&rows), ["1775-03-01"]);

        let rows = period_table(
            &records,
            &after(vec![SelectionEvent::SelectPeriod {
                period: Period::EarlyRepublic,
            }]),
        );
        assert_eq!(dates(&rows), ["1799-06-01"]);
    }

    #[test]
    fn primary_excludes_missing_or_malformed_issue_dates() {
        let records = vec![
            boston("1775-03-01"),
            record(&[("place_of_publication", "Boston [Mass.]")]),
            boston("March 1775"),
        ];
        let rows = period_table(&records, &Selection::default());
        assert_eq!(dates(&rows), ["1775-03-01"]);
    }

    #[test]
    fn primary_region_filter_keeps_matching_places_only() {
        let records = vec![boston("1775-03-01"), newport("1790-01-01")];
        let rows = period_table(&records, &after(vec![select_region("Massachusetts")]));
        assert_eq!(dates(&rows), ["1775-03-01"]);
    }

    #[test]
    fn primary_sorts_ascending_by_calendar_date() {
        let records = vec![
            boston("1790-01-01"),
            boston("1775-03-01"),
            boston("1775-01-20"),
        ];
        let rows = period_table(&records, &Selection::default());
        assert_eq!(dates(&rows), ["1775-01-20", "1775-03-01", "1790-01-01"]);
    }

    #[test]
    fn region_match_is_substring_based() {
        let rec = record(&[(
            "place_of_publication",
            "Printed in Boston [Mass.] by Edes and Gill",
        )]);
        assert!(matches_region(&rec, Period::Revolutionary, "Massachusetts"));
        assert!(!matches_region(&rec, Period::Revolutionary, "Virginia"));
    }

    #[test]
    fn region_without_alias_entry_filters_nothing() {
        let rec = record(&[("place_of_publication", "Boston [Mass.]")]);
        assert!(matches_region(&rec, Period::Revolutionary, "Vermont"));
    }

    #[test]
    fn record_without_place_never_matches_a_region() {
        let rec = record(&[("issue_date", "1775-03-01")]);
        assert!(!matches_region(&rec, Period::Revolutionary, "Massachusetts"));
    }

    #[test]
    fn deep_dive_is_empty_without_an_open_region_view() {
        let records = vec![boston("1775-03-01")];
        assert!(region_table(&records, &Selection::default()).is_empty());
    }

    #[test]
    fn deep_dive_ignores_the_period_year_bounds() {
        // Newport 1799 sits outside 1770-1795 but inside the Rhode Island
        // deep dive opened from that period.
        let records = vec![newport("1799-06-01")];
        let selection = after(vec![select_region("Rhode Island")]);
        assert!(period_table(&records, &selection).is_empty());

        let rows = region_table(&records, &selection);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_date, "1799-06-01");
        assert_eq!(rows[0].web_url, "https://example.org/newport");
    }

    #[test]
    fn deep_dive_decade_restricts_by_issue_year() {
        let records = vec![boston("1775-03-01"), newport("1790-01-01")];
        let selection = after(vec![
            select_region("Rhode Island"),
            SelectionEvent::SelectDecade {
                decade: Some("1796-1809".to_string()),
            },
        ]);
        assert!(region_table(&records, &selection).is_empty());

        let selection = after(vec![
            select_region("Rhode Island"),
            SelectionEvent::SelectDecade {
                decade: Some("1790-1799".to_string()),
            },
        ]);
        let rows = region_table(&records, &selection);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_date, "1790-01-01");
    }

    #[test]
    fn unparseable_decade_matches_nothing() {
        let records = vec![newport("1790-01-01")];
        let selection = after(vec![
            select_region("Rhode Island"),
            SelectionEvent::SelectDecade {
                decade: Some("the nineties".to_string()),
            },
        ]);
        assert!(region_table(&records, &selection).is_empty());
    }

    #[test]
    fn deep_dive_category_is_a_substring_match() {
        let records = vec![
            record(&[
                ("issue_date", "1775-03-01"),
                ("place_of_publication", "Boston [Mass.]"),
                ("Categories", "Politics, Commerce"),
            ]),
            record(&[
                ("issue_date", "1776-07-04"),
                ("place_of_publication", "Boston [Mass.]"),
                ("Categories", "Shipping"),
            ]),
            boston("1777-01-01"),
        ];
        let selection = after(vec![
            select_region("Massachusetts"),
            SelectionEvent::SelectCategory {
                category: Some("Commerce".to_string()),
            },
        ]);
        let rows = region_table(&records, &selection);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_date, "1775-03-01");
    }

    #[test]
    fn missing_web_url_renders_as_empty_link_target() {
        let records = vec![record(&[
            ("issue_date", "1775-03-01"),
            ("place_of_publication", "Boston [Mass.]"),
        ])];
        let rows = region_table(&records, &after(vec![select_region("Massachusetts")]));
        assert_eq!(rows[0].web_url, "");
    }

    #[test]
    fn undated_records_sort_last_in_dataset_order() {
        let records = vec![
            record(&[
                ("issue_date", "??"),
                ("place_of_publication", "Newport [R.I.]"),
                ("Web_URL", "https://example.org/a"),
            ]),
            newport("1790-01-01"),
            record(&[
                ("issue_date", "undated"),
                ("place_of_publication", "Newport [R.I.]"),
                ("Web_URL", "https://example.org/b"),
            ]),
            newport("1775-06-12"),
        ];
        let rows = region_table(&records, &after(vec![select_region("Rhode Island")]));
        let order: Vec<&str> = rows.iter().map(|row| row.issue_date.as_str()).collect();
        assert_eq!(order, ["1775-06-12", "1790-01-01", "??", "undated"]);
    }
}
