/// Page shell for the Lost & Found board. The home page owns the items
/// list and the loading flag, loads the list from the store on mount, and
/// refreshes it after every confirmed submission.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{items_list::RecentItems, report_form::ReportForm};
use crate::models::item::Item;
use crate::store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Lost & Found"/>
        <Stylesheet id="leptos" href="/pkg/lostfound.css"/>
        <Router>
            <Routes>
                <Route path="" view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    // List state is owned here and nowhere else; the renderer only reads it.
    let (items, set_items) = create_signal(Vec::<Item>::new());
    let (loading, set_loading) = create_signal(true);
    let (fetch_failed, set_fetch_failed) = create_signal(false);

    // Fetch-all is the only read path. Every successful submission runs it
    // again (full refresh, no incremental append). In-flight fetches are
    // not cancelled; the last response to resolve wins.
    let refresh = move || {
        set_loading.set(true);
        spawn_local(async move {
            match store::fetch_items().await {
                Ok(list) => {
                    set_items.set(list);
                    set_fetch_failed.set(false);
                }
                Err(err) => {
                    logging::error!("[PAGE] Failed to load items: {err}");
                    set_fetch_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load, once the page is mounted in the browser.
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            refresh();
        }
    });

    view! {
        <header class="site-header">
            <h1>{ "Lost & Found" }</h1>
            <p>{ "Report and find lost items" }</p>
        </header>
        <main>
            <section class="report-section">
                <h2>{ "Report Lost/Found Item" }</h2>
                <p>{ "Fill out the form below to report an item" }</p>
                <ReportForm on_saved=Callback::new(move |_| refresh())/>
            </section>
            <section class="recent-section">
                <div class="recent-heading">
                    <h2>{ "Recent Items" }</h2>
                    {move || {
                        let count = items.with(|list| list.len());
                        (count > 0).then(|| view! { <span class="count">{ count }</span> })
                    }}
                </div>
                {move || fetch_failed.get().then(|| view! {
                    <div class="fetch-error">
                        <p>{ "Could not load the latest items." }</p>
                        <button on:click=move |_| refresh()>{ "Retry" }</button>
                    </div>
                })}
                <RecentItems items=items loading=loading/>
            </section>
        </main>
        <footer class="site-footer">
            <p>{ "Lost & Found Reporting System — Help reunite items with their owners" }</p>
        </footer>
    }
}
