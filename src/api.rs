#[cfg(feature = "ssr")]
use actix_web::{web, HttpRequest, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::models::item::Item;
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;

/// Directory uploaded photos are written to; served back under /uploads.
#[cfg(feature = "ssr")]
const UPLOAD_DIR: &str = "uploads";

#[cfg(feature = "ssr")]
pub async fn get_items(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    let db = db.lock().await;
    match db.get_items().await {
        Ok(items) => {
            log!("[SERVER] Returning {} items", items.len());
            HttpResponse::Ok().json(items)
        }
        Err(err) => {
            log!("[SERVER ERROR] Failed to fetch items: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch items")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn create_item(
    db: web::Data<Arc<Mutex<Database>>>,
    item: web::Json<Item>,
) -> HttpResponse {
    let item = item.into_inner();
    log!(
        "[API] Received report - ID: {}, type: {}, name: {}",
        item.id,
        item.item_type,
        item.name
    );

    let db = db.lock().await;
    match db.insert_item(&item).await {
        Ok(_) => {
            log!("[API] Successfully saved item ID: {}", item.id);
            HttpResponse::Ok().json(item)
        }
        Err(e) => {
            log!("[API] Database error: {:?}", e);
            HttpResponse::InternalServerError().body(format!("Database error: {}", e))
        }
    }
}

/// Stores an uploaded photo and returns the durable URL for it. This is the
/// step that turns a session-local preview into something a record may keep.
#[cfg(feature = "ssr")]
pub async fn upload_image(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !content_type.starts_with("image/") {
        log!("[API] Rejected upload with content type: {}", content_type);
        return HttpResponse::BadRequest().body("Only image uploads are accepted");
    }

    let extension = match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "img",
    };
    let file_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);
    let path = std::path::Path::new(UPLOAD_DIR).join(&file_name);

    let written = std::fs::create_dir_all(UPLOAD_DIR).and_then(|_| std::fs::write(&path, &body));
    if let Err(err) = written {
        log!("[API] Failed to store upload: {:?}", err);
        return HttpResponse::InternalServerError().body("Failed to store image");
    }

    log!("[API] Stored image {} ({} bytes)", file_name, body.len());
    HttpResponse::Ok().json(serde_json::json!({
        "url": format!("/{}/{}", UPLOAD_DIR, file_name)
    }))
}
