use leptos::prelude::*;

use gazette_shared::{Period, RecordSet, Selection, SelectionEvent};

use crate::dataset::{self, DatasetStatus};
use crate::map_panel::MapPanel;
use crate::records_table::RecordsTable;
use crate::region_modal::RegionModal;

/// Newtype wrappers so each global signal has a distinct type for Leptos
/// context.
#[derive(Clone, Copy)]
pub(crate) struct Records(pub RwSignal<RecordSet>);
#[derive(Clone, Copy)]
pub(crate) struct LoadStatus(pub RwSignal<DatasetStatus>);
#[derive(Clone, Copy)]
pub(crate) struct CurrentSelection(pub RwSignal<Selection>);

/// Run one event through the selection reducer in place.
pub(crate) fn dispatch(selection: RwSignal<Selection>, event: SelectionEvent) {
    selection.update(|sel| *sel = std::mem::take(sel).apply(event));
}

/// Root application component. Provides global reactive signals via context.
#[component]
pub fn App() -> impl IntoView {
    let records: RwSignal<RecordSet> = RwSignal::new(Vec::new());
    let status: RwSignal<DatasetStatus> = RwSignal::new(DatasetStatus::Loading);
    let selection: RwSignal<Selection> = RwSignal::new(Selection::default());

    provide_context(Records(records));
    provide_context(LoadStatus(status));
    provide_context(CurrentSelection(selection));

    // One dataset fetch per session; every view below derives from it.
    Effect::new(move || {
        dataset::load(records, status);
    });

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px; font-family: Georgia, 'Times New Roman', serif; color: #2b2620;">
            <header style="display: flex; flex-wrap: wrap; align-items: baseline; justify-content: space-between; gap: 16px; border-bottom: 2px solid #2b2620; padding-bottom: 12px;">
                <h1 style="margin: 0; font-size: 1.6rem; letter-spacing: 0.02em;">
                    "Early American Newspapers"
                </h1>
                <PeriodButtons />
            </header>
            <main style="display: flex; gap: 24px; align-items: flex-start; margin-top: 20px;">
                <MapPanel />
                <RecordsTable />
            </main>
            <RegionModal />
        </div>
    }
}

/// One button per display period; clicking always resets to a fresh view of
/// that period.
#[component]
fn PeriodButtons() -> impl IntoView {
    let CurrentSelection(selection) = expect_context();

    view! {
        <div style="display: flex; gap: 8px;">
            {Period::ALL
                .into_iter()
                .map(|period| {
                    let is_active = move || selection.get().period() == period;
                    view! {
                        <button
                            style="padding: 6px 14px; font-family: inherit; font-size: 0.9rem; border: 1px solid #2b2620; background: #f7f2e7; cursor: pointer;"
                            style:background=move || if is_active() { "#2b2620" } else { "#f7f2e7" }
                            style:color=move || if is_active() { "#f7f2e7" } else { "#2b2620" }
                            on:click=move |_| {
                                dispatch(selection, SelectionEvent::SelectPeriod { period })
                            }
                        >
                            {period.id()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
