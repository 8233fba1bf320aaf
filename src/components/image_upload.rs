/// Image attachment picker for the report form. The file picker and the
/// drag-and-drop target both funnel through `accept_file`, so the two input
/// paths share one accept/reject rule: content type must be image/*.
use leptos::html::Input;
use leptos::*;
use web_sys::{DragEvent, File};

use crate::models::image::ImageRef;

/// A photo picked in the browser: the original file handle (still needed
/// for the upload on submit) plus the preview reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAttachment {
    pub file: File,
    pub preview: ImageRef,
}

/// True when the browser-reported content type is an image.
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Filters a picked file and allocates a preview object URL for it.
/// Non-image files are rejected and nothing is allocated.
pub fn accept_file(file: &File) -> Option<ImageAttachment> {
    if !is_image_type(&file.type_()) {
        return None;
    }
    let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
    Some(ImageAttachment {
        file: file.clone(),
        preview: ImageRef::Ephemeral(url),
    })
}

/// Releases the preview object URL held by an attachment slot.
pub fn clear_attachment(slot: &mut Option<ImageAttachment>) {
    if let Some(previous) = slot.take() {
        let _ = web_sys::Url::revoke_object_url(previous.preview.url());
    }
}

#[component]
pub fn ImageUpload(
    attachment: ReadSignal<Option<ImageAttachment>>,
    set_attachment: WriteSignal<Option<ImageAttachment>>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let input_ref = create_node_ref::<Input>();

    // Shared accept path for both the picker and the drop target.
    // Rejected files are silently ignored and the form state is untouched.
    let handle_file = move |file: Option<File>| {
        let Some(file) = file else { return };
        if let Some(next) = accept_file(&file) {
            set_attachment.update(|slot| {
                clear_attachment(slot);
                *slot = Some(next);
            });
        }
    };

    let on_picker_change = move |_| {
        let file = input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|list| list.get(0));
        handle_file(file);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|list| list.get(0));
        handle_file(file);
    };

    let remove = move |_| {
        set_attachment.update(clear_attachment);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        {move || match attachment.get() {
            Some(selected) => view! {
                <div class="image-preview">
                    <img src=selected.preview.url().to_string() alt="Item preview"/>
                    <button type="button" on:click=remove>{ "Remove" }</button>
                </div>
            }
            .into_view(),
            None => view! {
                <div
                    class="image-dropzone"
                    class:active=move || drag_active.get()
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_drag_active.set(true);
                    }
                    on:dragleave=move |_| set_drag_active.set(false)
                    on:drop=on_drop
                    on:click=move |_| {
                        if let Some(input) = input_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    <input
                        node_ref=input_ref
                        type="file"
                        accept="image/*"
                        style="display: none"
                        on:change=on_picker_change
                    />
                    <p class="dropzone-title">
                        {move || if drag_active.get() { "Drop image here" } else { "Upload item photo" }}
                    </p>
                    <p class="dropzone-hint">{ "Drag & drop or click to browse" }</p>
                </div>
            }
            .into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_content_types_pass_the_filter() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/jpeg"));
        assert!(is_image_type("image/svg+xml"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type(""));
        // Prefix match, not substring match
        assert!(!is_image_type("text/image"));
    }
}
