use leptos::prelude::*;

use gazette_shared::{Period, SelectionEvent, image_key, regions_for};

use crate::app::{CurrentSelection, dispatch};

/// Where the server mounts the per-period map images.
const IMAGE_ROOT: &str = "/periods";

/// Asset path for the map matching the current selection. Unknown regions
/// resolve to the period's blank map, so this never points at a missing
/// file.
fn image_src(period: Period, region: Option<&str>) -> String {
    format!(
        "{IMAGE_ROOT}/{}/{}.png",
        period.id(),
        image_key(period, region)
    )
}

fn image_alt(period: Period, region: Option<&str>) -> String {
    match region {
        Some(region) => format!("Map of {} newspapers, {}", region, period.id()),
        None => format!("Map of newspaper locations, {}", period.id()),
    }
}

/// Map image plus the region buttons valid for the active period.
#[component]
pub fn MapPanel() -> impl IntoView {
    let CurrentSelection(selection) = expect_context();

    let src = Memo::new(move |_| {
        let sel = selection.get();
        image_src(sel.period(), sel.region())
    });
    let alt = Memo::new(move |_| {
        let sel = selection.get();
        image_alt(sel.period(), sel.region())
    });
    let regions = Memo::new(move |_| regions_for(selection.get().period()));

    view! {
        <section style="flex: 0 0 520px; display: flex; flex-direction: column; gap: 12px;">
            <img
                src=move || src.get()
                alt=move || alt.get()
                style="width: 100%; border: 1px solid #2b2620; background: #f7f2e7; display: block;"
            />
            <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                <For
                    each=move || regions.get().to_vec()
                    key=|region| *region
                    children=move |region: &'static str| {
                        let is_active = move || selection.get().region() == Some(region);
                        view! {
                            <button
                                style="padding: 4px 10px; font-family: inherit; font-size: 0.82rem; border: 1px solid #6b5f4e; background: #fffdf8; cursor: pointer;"
                                style:background=move || {
                                    if is_active() { "#6b5f4e" } else { "#fffdf8" }
                                }
                                style:color=move || {
                                    if is_active() { "#fffdf8" } else { "#2b2620" }
                                }
                                on:click=move |_| {
                                    dispatch(
                                        selection,
                                        SelectionEvent::SelectRegion {
                                            region: region.to_string(),
                                        },
                                    )
                                }
                            >
                                {region}
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}
