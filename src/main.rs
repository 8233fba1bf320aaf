#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use lostfound::api::{create_item, get_items, upload_image};
    use lostfound::app::App;
    use lostfound::db::Database;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Initialize the database
    let db = Database::new("lostfound.db").unwrap();
    db.create_schema().await.unwrap();
    let db = Arc::new(Mutex::new(db)); // Shared state for all workers
    println!("Schema created successfully!");

    // Load configuration
    let conf = get_configuration(None).await.unwrap();
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);
    println!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;
        let db = db.clone();

        actix_web::App::new()
            .app_data(web::Data::new(db))
            // Register the store API BEFORE Leptos server functions
            .service(
                web::scope("/api")
                    .route("/items", web::get().to(get_items)) // GET /api/items
                    .route("/items", web::post().to(create_item)) // POST /api/items
                    .route("/images", web::post().to(upload_image)), // POST /api/images
            )
            // Register server functions
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve stored photos
            .service(Files::new("/uploads", "uploads"))
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            // Pass Leptos options to the app
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for the hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use lostfound::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
