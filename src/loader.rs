//! One-shot fetch of the record collection.

use crate::logging::js_error_message;
use formula_cards::{read_records_from_json_str, LoadError, RecordStore};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn network(err: JsValue) -> LoadError {
    LoadError::Network(js_error_message(&err))
}

/// Fetch and parse the collection at `url`. Runs once; there is no retry,
/// timeout or cancellation.
pub async fn fetch_records(url: &str) -> Result<RecordStore, LoadError> {
    debug!("Fetching formulas from {}", url);

    let response = JsFuture::from(gloo_utils::window().fetch_with_str(url))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    let body = body
        .as_string()
        .ok_or_else(|| LoadError::Malformed("response body is not text".to_string()))?;

    read_records_from_json_str(&body)
}
