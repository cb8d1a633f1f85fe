use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer};

use yardage_tracker::args;
use yardage_tracker::controller::{bag, edit_club, quick_add, select_brand};
use yardage_tracker::storage::blob::BlobStore;
use yardage_tracker::storage::gateway::db_prefill;
use yardage_tracker::storage::sqlite::SqliteBlobStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let store = match SqliteBlobStore::new(args.db_name.clone()).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("Error: {e}\nBacktrace: {:?}", std::backtrace::Backtrace::capture());
            std::process::exit(1);
        }
    };

    if let Some(json) = &args.db_populate_json {
        db_prefill(store.as_ref(), json).await?;
    }

    let store: Arc<dyn BlobStore> = store;
    let store_data: Data<dyn BlobStore> = Data::from(store);

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .route("/", web::get().to(bag::bag_page))
            .route("/quick-add", web::get().to(quick_add::quick_add_page))
            .route("/quick-add", web::post().to(quick_add::add_distance))
            .route("/edit-club", web::get().to(edit_club::edit_club_page))
            .route("/edit-club/add", web::post().to(edit_club::add_distance))
            .route("/edit-club/remove", web::post().to(edit_club::remove_distance))
            .route("/edit-club/clear", web::post().to(edit_club::clear_history))
            .route("/select-brand", web::get().to(select_brand::select_brand_page))
            .route("/select-brand/custom", web::post().to(select_brand::add_custom))
            .route("/select-brand/save", web::post().to(select_brand::save_brand))
            .route("/select-brand/apply", web::post().to(select_brand::apply_brand))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind(args.bind)?
    .run()
    .await?;
    Ok(())
}
