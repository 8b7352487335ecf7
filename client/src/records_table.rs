use leptos::prelude::*;

use gazette_shared::{PeriodRow, period_table};

use crate::app::{CurrentSelection, LoadStatus, Records};
use crate::dataset::DatasetStatus;

/// Primary publications table: issues dated inside the active period,
/// narrowed by the selected region when one is highlighted.
#[component]
pub fn RecordsTable() -> impl IntoView {
    let Records(records) = expect_context();
    let LoadStatus(status) = expect_context();
    let CurrentSelection(selection) = expect_context();

    let rows = Memo::new(move |_| period_table(&records.get(), &selection.get()));
    let heading = Memo::new(move |_| {
        let sel = selection.get();
        match sel.region() {
            Some(region) => format!("{} publications, {}", region, sel.period().id()),
            None => format!("Publications, {}", sel.period().id()),
        }
    });
    let status_text = Memo::new(move |_| match status.get() {
        DatasetStatus::Loading => "loading records".to_string(),
        DatasetStatus::Failed => "records unavailable".to_string(),
        DatasetStatus::Ready => match rows.get().len() {
            1 => "1 issue".to_string(),
            n => format!("{n} issues"),
        },
    });

    view! {
        <section style="flex: 1; min-width: 0;">
            <header style="display: flex; align-items: baseline; justify-content: space-between; gap: 12px; border-bottom: 1px solid #6b5f4e; padding-bottom: 6px;">
                <h2 style="margin: 0; font-size: 1.05rem;">{move || heading.get()}</h2>
                <span style="font-size: 0.78rem; color: #6b5f4e;">{move || status_text.get()}</span>
            </header>
            <table style="width: 100%; border-collapse: collapse; margin-top: 8px;">
                <thead>
                    <tr>
                        <th style="text-align: left; font-size: 0.8rem; color: #6b5f4e; padding: 4px 8px; border-bottom: 1px solid #d8cfbc;">
                            "Issue date"
                        </th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || rows.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, row)| (*index, row.issue_date.clone())
                        children=move |(_, row): (usize, PeriodRow)| {
                            view! {
                                <tr>
                                    <td style="padding: 4px 8px; font-size: 0.88rem; border-bottom: 1px solid #efe8d8;">
                                        {row.issue_date}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
