use actix_web::web::Data;
use actix_web::HttpResponse;

use crate::controller::navigation::html_page;
use crate::storage::blob::BlobStore;
use crate::storage::gateway;
use crate::view::bag::render_bag_page;

/// GET / — the bag list.
pub async fn bag_page(store: Data<dyn BlobStore>) -> HttpResponse {
    let clubs = gateway::load_clubs(store.get_ref()).await;
    html_page(render_bag_page(&clubs))
}
