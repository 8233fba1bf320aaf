/// Components for the recent-reports section: the card grid plus the
/// loading and empty placeholders. Rendering is pure; the caller owns the
/// item order (newest first by `created_at`).
use leptos::*;

use crate::models::item::Item;

/// Cosmetic truncation for card descriptions. The stored text is untouched;
/// cuts land on char boundaries so multi-byte text stays valid.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}…", head.trim_end())
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let type_class = item.item_type.as_str();

    view! {
        <article class=format!("item-card {}", type_class)>
            {item.image_url.clone().map(|url| view! {
                <img class="item-photo" src=url alt=item.name.clone()/>
            })}
            <header class="card-header">
                <h3>{ item.name.clone() }</h3>
                <span class=format!("badge {}", type_class)>{ item.item_type.label() }</span>
            </header>
            <p class="card-description">{ truncate(&item.description, 140) }</p>
            <ul class="card-meta">
                <li class="meta-category">{ item.category.to_string() }</li>
                <li class="meta-location">{ item.location.clone() }</li>
                <li class="meta-date">{ item.date.format("%b %d, %Y").to_string() }</li>
            </ul>
            <footer class="card-footer">
                { "Reported by " }<strong>{ item.reporter_name.clone() }</strong>
            </footer>
        </article>
    }
}

#[component]
pub fn RecentItems(items: ReadSignal<Vec<Item>>, loading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="recent-items">
            {move || {
                if loading.get() {
                    // Never shown together with cards; loading replaces the grid
                    view! {
                        <div class="placeholder loading">
                            <p>{ "Loading items..." }</p>
                        </div>
                    }
                    .into_view()
                } else if items.with(|list| list.is_empty()) {
                    view! {
                        <div class="placeholder empty">
                            <h3>{ "No items reported yet" }</h3>
                            <p>{ "Be the first to report a lost or found item using the form above." }</p>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="items-grid">
                            <For
                                each=move || items.get()
                                key=|item| item.id.clone()
                                children=move |item| view! { <ItemCard item=item/> }
                            />
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_left_alone() {
        assert_eq!(truncate("Black leather", 140), "Black leather");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        let long = "x".repeat(200);
        let cut = truncate(&long, 140);
        assert_eq!(cut.chars().count(), 141);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "ångström ".repeat(40);
        let cut = truncate(&text, 140);
        assert!(cut.ends_with('…'));
        // Still valid UTF-8 and within the limit
        assert!(cut.chars().count() <= 141);
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let text = "y".repeat(140);
        assert_eq!(truncate(&text, 140), text);
    }
}
