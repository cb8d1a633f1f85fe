use std::collections::HashMap;

use actix_web::web::{Data, Form, Query};
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::controller::navigation::{html_page, push};
use crate::ledger::{BrandUpdate, ClubLedger, UpdateScope};
use crate::model::brand::{add_custom_brand, filter_brands};
use crate::model::club::is_iron_id;
use crate::storage::blob::BlobStore;
use crate::storage::gateway;
use crate::view::edit_club::render_not_found;
use crate::view::select_brand::{render_brand_list, render_iron_confirm, render_model_form};

/// GET /select-brand?club=<id>[&q=...][&brand=...] — the brand list, or
/// the model/degrees step once a brand has been picked.
pub async fn select_brand_page(
    query: Query<HashMap<String, String>>,
    store: Data<dyn BlobStore>,
) -> HttpResponse {
    let Some(club_id) = query.get("club") else {
        return html_page(render_not_found());
    };

    if let Some(brand) = query.get("brand") {
        let clubs = gateway::load_clubs(store.get_ref()).await;
        return match clubs.iter().find(|club| club.id == *club_id) {
            Some(club) => html_page(render_model_form(club, brand)),
            None => html_page(render_not_found()),
        };
    }

    let custom = gateway::load_custom_brands(store.get_ref()).await;
    let search = query.get("q").map(String::as_str).unwrap_or_default();
    let brands = filter_brands(&custom, search);
    html_page(render_brand_list(club_id, search, &brands, &custom))
}

#[derive(Deserialize)]
pub struct CustomBrandForm {
    pub club: String,
    pub name: String,
}

/// POST /select-brand/custom — add a user-entered brand. Blank input and
/// duplicates (against either list) are dropped without comment, matching
/// the original behavior.
pub async fn add_custom(form: Form<CustomBrandForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let mut custom = gateway::load_custom_brands(store.get_ref()).await;
    if add_custom_brand(&mut custom, &form.name) {
        gateway::save_custom_brands(store.get_ref(), &custom).await;
    }
    push(&format!("/select-brand?club={}", form.club))
}

#[derive(Deserialize)]
pub struct SaveBrandForm {
    pub club: String,
    pub brand: String,
    pub model: Option<String>,
    pub degrees: Option<String>,
}

impl SaveBrandForm {
    fn update(&self) -> BrandUpdate {
        BrandUpdate {
            brand: self.brand.trim().to_string(),
            model: self
                .model
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from),
            degrees: self
                .degrees
                .as_deref()
                .map(str::trim)
                .and_then(|d| d.parse::<u32>().ok()),
        }
    }
}

/// POST /select-brand/save — apply the picked brand/model. Saving from an
/// iron detours to the confirm/decline page; everything else applies to
/// the one club and returns to its editor.
pub async fn save_brand(form: Form<SaveBrandForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let update = form.update();

    if is_iron_id(&form.club) {
        return html_page(render_iron_confirm(&form.club, &update));
    }

    apply_and_return(store, &form.club, &update, UpdateScope::Single).await
}

#[derive(Deserialize)]
pub struct ApplyBrandForm {
    pub club: String,
    pub brand: String,
    pub model: Option<String>,
    pub scope: String,
}

/// POST /select-brand/apply — the confirm/decline branch for irons.
pub async fn apply_brand(form: Form<ApplyBrandForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let update = BrandUpdate {
        brand: form.brand.trim().to_string(),
        model: form
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from),
        degrees: None,
    };
    let scope = if form.scope == "irons" {
        UpdateScope::IronSet
    } else {
        UpdateScope::Single
    };
    apply_and_return(store, &form.club, &update, scope).await
}

async fn apply_and_return(
    store: Data<dyn BlobStore>,
    club_id: &str,
    update: &BrandUpdate,
    scope: UpdateScope,
) -> HttpResponse {
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let mut ledger = ClubLedger::new(clubs);
    if ledger.apply_brand(club_id, update, scope).is_ok() {
        let clubs = ledger.into_clubs();
        gateway::save_clubs(store.get_ref(), &clubs).await;
    }
    push(&format!("/edit-club?club={club_id}"))
}
