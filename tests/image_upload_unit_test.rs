#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

use lostfound::components::image_upload::{accept_file, clear_attachment, is_image_type};
use lostfound::models::image::ImageRef;

wasm_bindgen_test_configure!(run_in_browser);

// Helper to build a File with a given content type, the way the browser
// hands one to the picker or the drop target
fn make_file(name: &str, content_type: &str) -> File {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str("file contents"));
    let options = FilePropertyBag::new();
    options.set_type(content_type);
    File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
}

#[wasm_bindgen_test]
fn image_file_is_accepted_with_an_ephemeral_preview() {
    let file = make_file("wallet.png", "image/png");
    let attachment = accept_file(&file).expect("image file should be accepted");

    assert_eq!(attachment.file.name(), "wallet.png");
    assert!(matches!(attachment.preview, ImageRef::Ephemeral(_)));
    assert!(!attachment.preview.is_persisted());
    assert!(attachment.preview.url().starts_with("blob:"));
}

#[wasm_bindgen_test]
fn non_image_file_is_rejected() {
    let file = make_file("notes.txt", "text/plain");
    assert!(accept_file(&file).is_none());

    let file = make_file("report.pdf", "application/pdf");
    assert!(accept_file(&file).is_none());
}

#[wasm_bindgen_test]
fn picker_and_drop_share_one_filter() {
    // Both input paths call accept_file, which delegates to is_image_type
    assert!(is_image_type(&make_file("a.jpg", "image/jpeg").type_()));
    assert!(!is_image_type(&make_file("a.js", "text/javascript").type_()));
}

#[wasm_bindgen_test]
fn clearing_releases_the_attachment() {
    let file = make_file("wallet.png", "image/png");
    let mut slot = accept_file(&file);
    assert!(slot.is_some());

    clear_attachment(&mut slot);
    assert!(slot.is_none());
}
