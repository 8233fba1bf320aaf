/// Client-side calls against the item store's HTTP API. Every failure is
/// logged with its cause here and reported upward as a `StoreError` the UI
/// can branch on.
use gloo_net::http::Request;
use leptos::logging;

use crate::error::StoreError;
use crate::models::image::ImageRef;
use crate::models::item::Item;

/// Fetch every report, newest first. The server applies the ordering.
pub async fn fetch_items() -> Result<Vec<Item>, StoreError> {
    let response = Request::get("/api/items").send().await.map_err(|err| {
        logging::error!("[STORE] GET /api/items failed: {err}");
        StoreError::Fetch
    })?;

    if !response.ok() {
        logging::error!("[STORE] GET /api/items returned {}", response.status());
        return Err(StoreError::Fetch);
    }

    response.json::<Vec<Item>>().await.map_err(|err| {
        logging::error!("[STORE] Could not decode items: {err}");
        StoreError::Fetch
    })
}

/// Persist one report. Callers must only treat the submission as successful
/// when this returns Ok; anything else leaves the store untouched as far as
/// the UI is concerned.
pub async fn create_item(item: &Item) -> Result<Item, StoreError> {
    let request = Request::post("/api/items").json(item).map_err(|err| {
        logging::error!("[STORE] Could not encode report: {err}");
        StoreError::Write
    })?;

    let response = request.send().await.map_err(|err| {
        logging::error!("[STORE] POST /api/items failed: {err}");
        StoreError::Write
    })?;

    if !response.ok() {
        logging::error!("[STORE] POST /api/items returned {}", response.status());
        return Err(StoreError::Write);
    }

    response.json::<Item>().await.map_err(|err| {
        logging::error!("[STORE] Could not decode saved report: {err}");
        StoreError::Write
    })
}

/// Upload a photo and return the durable reference the server assigned.
pub async fn upload_image(file: &web_sys::File) -> Result<ImageRef, StoreError> {
    #[derive(serde::Deserialize)]
    struct UploadResponse {
        url: String,
    }

    let request = Request::post("/api/images")
        .header("content-type", &file.type_())
        .body(file.clone())
        .map_err(|err| {
            logging::error!("[STORE] Could not build upload request: {err}");
            StoreError::Upload
        })?;

    let response = request.send().await.map_err(|err| {
        logging::error!("[STORE] POST /api/images failed: {err}");
        StoreError::Upload
    })?;

    if !response.ok() {
        logging::error!("[STORE] POST /api/images returned {}", response.status());
        return Err(StoreError::Upload);
    }

    let body: UploadResponse = response.json().await.map_err(|err| {
        logging::error!("[STORE] Could not decode upload response: {err}");
        StoreError::Upload
    })?;
    Ok(ImageRef::Persisted(body.url))
}
