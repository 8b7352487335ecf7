use leptos::prelude::*;
use wasm_bindgen::JsCast;

use gazette_shared::{DECADES, Record, RegionRow, SelectionEvent, region_table};

use crate::app::{CurrentSelection, Records, dispatch};

/// Sentinel option value for "no sub-filter" in both dropdowns.
const ALL_OPTION: &str = "all";

/// Distinct category values for the dropdown: every comma-separated entry in
/// the `Categories` column across the whole record set, trimmed, deduplicated
/// and sorted.
fn category_options(records: &[Record]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        let Some(categories) = record.categories() else {
            continue;
        };
        for part in categories.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !options.iter().any(|existing| existing == part) {
                options.push(part.to_string());
            }
        }
    }
    options.sort();
    options
}

fn selected_value(event: &leptos::ev::Event) -> Option<String> {
    let target = event.target()?;
    let select = target.dyn_into::<web_sys::HtmlSelectElement>().ok()?;
    Some(select.value())
}

/// Deep-dive view for the selected region: the region's full run of issues
/// (all years, not just the active period) with decade and category
/// sub-filters. Rendered only while a region is selected.
#[component]
pub fn RegionModal() -> impl IntoView {
    let Records(records) = expect_context();
    let CurrentSelection(selection) = expect_context();

    let open = Memo::new(move |_| selection.get().region_view_open());
    let title = Memo::new(move |_| {
        selection
            .get()
            .region()
            .unwrap_or_default()
            .to_string()
    });
    let rows = Memo::new(move |_| region_table(&records.get(), &selection.get()));
    let row_count = Memo::new(move |_| rows.get().len());
    let categories = Memo::new(move |_| category_options(&records.get()));

    let on_decade_change = move |e: leptos::ev::Event| {
        let Some(value) = selected_value(&e) else {
            return;
        };
        let decade = (value != ALL_OPTION).then_some(value);
        dispatch(selection, SelectionEvent::SelectDecade { decade });
    };
    let on_category_change = move |e: leptos::ev::Event| {
        let Some(value) = selected_value(&e) else {
            return;
        };
        let category = (value != ALL_OPTION).then_some(value);
        dispatch(selection, SelectionEvent::SelectCategory { category });
    };

    view! {
        {move || {
            if !open.get() {
                return ().into_any();
            }
            view! {
                <div
                    style="position: fixed; inset: 0; background: rgba(43, 38, 32, 0.55); z-index: 20;"
                    on:click=move |_| dispatch(selection, SelectionEvent::CloseRegionView)
                />
                <div style="position: fixed; top: 8vh; left: 50%; transform: translateX(-50%); width: min(640px, 92vw); max-height: 80vh; overflow-y: auto; background: #fffdf8; border: 2px solid #2b2620; padding: 20px; z-index: 21; font-family: Georgia, 'Times New Roman', serif; color: #2b2620;">
                    <header style="display: flex; align-items: baseline; justify-content: space-between; gap: 12px; border-bottom: 2px solid #2b2620; padding-bottom: 8px;">
                        <h2 style="margin: 0; font-size: 1.2rem;">{move || title.get()}</h2>
                        <button
                            style="border: none; background: none; font-size: 1.3rem; cursor: pointer; color: #2b2620; line-height: 1;"
                            title="Close"
                            on:click=move |_| dispatch(selection, SelectionEvent::CloseRegionView)
                        >
                            "\u{00D7}"
                        </button>
                    </header>
                    <div style="display: flex; flex-wrap: wrap; gap: 16px; margin: 12px 0;">
                        <label style="display: flex; align-items: center; gap: 6px; font-size: 0.85rem;">
                            "Decade"
                            <select
                                on:change=on_decade_change
                                style="font-family: inherit; font-size: 0.85rem; padding: 3px 6px; border: 1px solid #6b5f4e; background: #f7f2e7;"
                            >
                                <option
                                    value=ALL_OPTION
                                    selected=move || selection.get().decade().is_none()
                                >
                                    "All decades"
                                </option>
                                {DECADES
                                    .iter()
                                    .copied()
                                    .map(|decade| {
                                        view! {
                                            <option
                                                value=decade
                                                selected=move || {
                                                    selection.get().decade() == Some(decade)
                                                }
                                            >
                                                {decade}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label style="display: flex; align-items: center; gap: 6px; font-size: 0.85rem;">
                            "Category"
                            <select
                                on:change=on_category_change
                                style="font-family: inherit; font-size: 0.85rem; padding: 3px 6px; border: 1px solid #6b5f4e; background: #f7f2e7;"
                            >
                                <option
                                    value=ALL_OPTION
                                    selected=move || selection.get().category().is_none()
                                >
                                    "All categories"
                                </option>
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|category| {
                                            let value = category.clone();
                                            let compare = category.clone();
                                            view! {
                                                <option
                                                    value=value
                                                    selected=move || {
                                                        selection.get().category()
                                                            == Some(compare.as_str())
                                                    }
                                                >
                                                    {category}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <span style="margin-left: auto; font-size: 0.78rem; color: #6b5f4e; align-self: center;">
                            {move || match row_count.get() {
                                1 => "1 issue".to_string(),
                                n => format!("{n} issues"),
                            }}
                        </span>
                    </div>
                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr>
                                <th style="text-align: left; font-size: 0.8rem; color: #6b5f4e; padding: 4px 8px; border-bottom: 1px solid #d8cfbc;">
                                    "Issue"
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each={move || rows.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(index, row)| (*index, row.issue_date.clone())
                                children=move |(_, row): (usize, RegionRow)| {
                                    view! {
                                        <tr>
                                            <td style="padding: 4px 8px; font-size: 0.88rem; border-bottom: 1px solid #efe8d8;">
                                                <a
                                                    href=row.web_url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    style="color: #1d4f73;"
                                                >
                                                    {row.issue_date}
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }
                .into_any()
        }}
    }
}
