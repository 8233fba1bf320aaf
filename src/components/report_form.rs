/// The report form: collects a draft, validates required fields, uploads
/// the photo, persists the item, and only resets itself once the store has
/// confirmed the write.
use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::image_upload::{clear_attachment, ImageAttachment, ImageUpload};
use crate::error::ValidationError;
use crate::models::draft::ReportDraft;
use crate::models::item::{Category, ItemType};
use crate::store;

/// Outcome banner shown under the submit button.
#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Error(String),
    Success(String),
}

#[component]
pub fn ReportForm(on_saved: Callback<()>) -> impl IntoView {
    let (item_type, set_item_type) = create_signal(ItemType::Lost);
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (category, set_category) = create_signal(None::<Category>);
    let (location, set_location) = create_signal(String::new());
    let (reporter_name, set_reporter_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (attachment, set_attachment) = create_signal(None::<ImageAttachment>);
    let (submitting, set_submitting) = create_signal(false);
    let (status, set_status) = create_signal(FormStatus::Idle);

    // Back to the initial empty state. Only called after a confirmed write.
    let reset = move || {
        set_item_type.set(ItemType::Lost);
        set_name.set(String::new());
        set_description.set(String::new());
        set_category.set(None);
        set_location.set(String::new());
        set_reporter_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_date.set(String::new());
        set_attachment.update(clear_attachment);
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // One write at a time; a second click while in flight is ignored
        if submitting.get_untracked() {
            return;
        }

        let draft = ReportDraft {
            item_type: item_type.get_untracked(),
            name: name.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            location: location.get_untracked(),
            reporter_name: reporter_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            date: date.get_untracked(),
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            logging::warn!("[FORM] {}", ValidationError::MissingFields(missing.clone()));
            set_status.set(FormStatus::Error(format!(
                "Please fill in all required fields: {}.",
                missing.join(", ")
            )));
            return;
        }

        set_submitting.set(true);
        set_status.set(FormStatus::Idle);
        let file = attachment.get_untracked().map(|selected| selected.file);

        spawn_local(async move {
            // Upload first so the stored record points at a durable URL,
            // never at a session-local object URL.
            let image_url = match file {
                Some(file) => match store::upload_image(&file).await {
                    Ok(image) => Some(image.url().to_string()),
                    Err(err) => {
                        logging::error!("[FORM] Image upload failed: {err}");
                        set_status.set(FormStatus::Error(
                            "Could not upload the photo. Your report was not submitted.".into(),
                        ));
                        set_submitting.set(false);
                        return;
                    }
                },
                None => None,
            };

            let item = match draft.into_item(image_url) {
                Ok(item) => item,
                Err(err) => {
                    set_status.set(FormStatus::Error(err.to_string()));
                    set_submitting.set(false);
                    return;
                }
            };

            let kind = item.item_type;
            match store::create_item(&item).await {
                Ok(_) => {
                    reset();
                    set_status.set(FormStatus::Success(format!(
                        "Your {} item has been reported successfully.",
                        kind
                    )));
                    on_saved.call(());
                }
                Err(err) => {
                    // The user keeps what they typed; a failed write must
                    // not look like a success
                    logging::error!("[FORM] Saving report failed: {err}");
                    set_status.set(FormStatus::Error(
                        "Could not save your report. Please try again.".into(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="report-form" on:submit=handle_submit>
            <div class="field">
                <span class="field-label">{ "Item Type *" }</span>
                <label class="radio lost">
                    <input
                        type="radio"
                        name="item-type"
                        prop:checked=move || item_type.get() == ItemType::Lost
                        on:change=move |_| set_item_type.set(ItemType::Lost)
                    />
                    { "Lost" }
                </label>
                <label class="radio found">
                    <input
                        type="radio"
                        name="item-type"
                        prop:checked=move || item_type.get() == ItemType::Found
                        on:change=move |_| set_item_type.set(ItemType::Found)
                    />
                    { "Found" }
                </label>
            </div>

            <div class="field">
                <label class="field-label" for="item-name">{ "Item Name *" }</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder="e.g., Black leather wallet"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label class="field-label" for="description">{ "Description *" }</label>
                <textarea
                    id="description"
                    rows="4"
                    placeholder="Provide a detailed description of the item..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>

            <div class="field-row">
                <div class="field">
                    <label class="field-label" for="category">{ "Category *" }</label>
                    <select
                        id="category"
                        prop:value=move || {
                            category.get().map(|cat| cat.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            set_category.set(event_target_value(&ev).parse::<Category>().ok())
                        }
                    >
                        <option value="">{ "Select a category" }</option>
                        {Category::ALL
                            .iter()
                            .map(|cat| view! {
                                <option value=cat.to_string()>{ cat.to_string() }</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="field">
                    <label class="field-label" for="date">{ "Date *" }</label>
                    <input
                        id="date"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="field">
                <label class="field-label" for="location">{ "Location *" }</label>
                <input
                    id="location"
                    type="text"
                    placeholder="Where was the item lost/found?"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <span class="field-label">{ "Photo (optional)" }</span>
                <ImageUpload attachment=attachment set_attachment=set_attachment/>
            </div>

            <h3>{ "Your Contact Information" }</h3>

            <div class="field">
                <label class="field-label" for="reporter-name">{ "Your Name *" }</label>
                <input
                    id="reporter-name"
                    type="text"
                    placeholder="Your full name"
                    prop:value=move || reporter_name.get()
                    on:input=move |ev| set_reporter_name.set(event_target_value(&ev))
                />
            </div>

            <div class="field-row">
                <div class="field">
                    <label class="field-label" for="email">{ "Email *" }</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label class="field-label" for="phone">{ "Phone (optional)" }</label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="+1 (555) 000-0000"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <button type="submit" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
            </button>

            {move || match status.get() {
                FormStatus::Idle => ().into_view(),
                FormStatus::Error(message) => {
                    view! { <p class="form-status error">{ message }</p> }.into_view()
                }
                FormStatus::Success(message) => {
                    view! { <p class="form-status success">{ message }</p> }.into_view()
                }
            }}
        </form>
    }
}
