use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use gazette_shared::{RecordSet, parse_csv};

const DATA_URL: &str = "/data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetStatus {
    Loading,
    Ready,
    Failed,
}

/// Fetch and parse the publications dataset, once per session.
///
/// On failure the record signal stays empty and the viewer keeps rendering
/// with no rows; there is no retry.
pub fn load(records: RwSignal<RecordSet>, status: RwSignal<DatasetStatus>) {
    spawn_local(async move {
        match fetch_dataset().await {
            Ok(parsed) => {
                web_sys::console::info_1(
                    &format!("loaded {} publication records", parsed.len()).into(),
                );
                records.set(parsed);
                status.set(DatasetStatus::Ready);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Dataset load failed: {e}").into());
                status.set(DatasetStatus::Failed);
            }
        }
    });
}

async fn fetch_dataset() -> Result<RecordSet, String> {
    let resp = gloo_net::http::Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = resp.text().await.map_err(|e| format!("read error: {e}"))?;
    Ok(parse_csv(&text))
}
