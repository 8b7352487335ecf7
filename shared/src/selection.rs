use serde::{Deserialize, Serialize};

use crate::mappings;
use crate::period::Period;

/// One user interaction, fed to [`Selection::apply`] by the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    SelectPeriod { period: Period },
    /// Toggles: picking the already-selected region closes the region view.
    SelectRegion { region: String },
    SelectDecade { decade: Option<String> },
    SelectCategory { category: Option<String> },
    CloseRegionView,
}

/// The viewer's whole selection state.
///
/// Fields stay private so the invariants hold by construction: `region` is
/// only ever a region valid for `period`, and `decade`/`category` are only
/// set while a region view is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    period: Period,
    region: Option<String>,
    decade: Option<String>,
    category: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(Period::default())
    }
}

impl Selection {
    /// Fresh selection for `period`: no region, no sub-filters.
    pub fn new(period: Period) -> Self {
        Selection {
            period,
            region: None,
            decade: None,
            category: None,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn decade(&self) -> Option<&str> {
        self.decade.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the region deep-dive view is open.
    pub fn region_view_open(&self) -> bool {
        self.region.is_some()
    }

    /// Apply one event, producing the next selection.
    ///
    /// Total: invalid transitions (a region unknown to the current period, a
    /// decade or category change while no region view is open) return the
    /// selection unchanged. Selecting a period always resets everything
    /// else, even when it is the period already shown.
    #[must_use]
    pub fn apply(self, event: SelectionEvent) -> Selection {
        match event {
            SelectionEvent::SelectPeriod { period } => Selection::new(period),
            SelectionEvent::SelectRegion { region } => self.select_region(region),
            SelectionEvent::SelectDecade { decade } if self.region_view_open() => {
                Selection { decade, ..self }
            }
            SelectionEvent::SelectCategory { category } if self.region_view_open() => {
                Selection { category, ..self }
            }
            SelectionEvent::CloseRegionView => Selection::new(self.period),
            SelectionEvent::SelectDecade { .. } | SelectionEvent::SelectCategory { .. } => self,
        }
    }

    fn select_region(self, region: String) -> Selection {
        if !mappings::is_region_for(self.period, &region) {
            return self;
        }
        if self.region.as_deref() == Some(region.as_str()) {
            // Toggle off.
            return Selection::new(self.period);
        }
        Selection {
            period: self.period,
            region: Some(region),
            decade: None,
            category: None,
        }
    }
}
