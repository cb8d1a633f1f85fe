use std::collections::HashMap;

use actix_web::web::{Data, Form, Query};
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::controller::navigation::{html_page, push};
use crate::ledger::ClubLedger;
use crate::model::club::SwingType;
use crate::storage::blob::BlobStore;
use crate::storage::gateway;
use crate::view::edit_club::{render_edit_page, render_not_found};

fn swing_from(value: Option<&String>) -> SwingType {
    value
        .and_then(|v| SwingType::parse(v.trim()))
        .unwrap_or_default()
}

fn edit_location(club_id: &str, swing: SwingType) -> String {
    format!("/edit-club?club={club_id}&swing={}", swing.slug())
}

/// GET /edit-club?club=<id> — the distance-history editor for one club.
pub async fn edit_club_page(
    query: Query<HashMap<String, String>>,
    store: Data<dyn BlobStore>,
) -> HttpResponse {
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(query.get("swing"));
    let club = query
        .get("club")
        .and_then(|id| clubs.iter().find(|club| club.id == *id));

    match club {
        Some(club) => html_page(render_edit_page(club, swing, None)),
        None => html_page(render_not_found()),
    }
}

#[derive(Deserialize)]
pub struct DistanceForm {
    pub club: String,
    pub swing: Option<String>,
    pub distance: Option<String>,
}

/// POST /edit-club/add — append a typed-in distance to the targeted
/// history. Non-numeric or non-positive input re-renders with an alert.
pub async fn add_distance(form: Form<DistanceForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(form.swing.as_ref());

    let yards = form
        .distance
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse::<u32>()
        .unwrap_or(0);

    let mut ledger = ClubLedger::new(clubs);
    let outcome = ledger.record_distance(&form.club, Some(swing), yards).map(|_| ());
    match outcome {
        Ok(()) => {
            let clubs = ledger.into_clubs();
            gateway::save_clubs(store.get_ref(), &clubs).await;
            push(&edit_location(&form.club, swing))
        }
        Err(e) => {
            let error = e.to_string();
            let clubs = ledger.into_clubs();
            match clubs.iter().find(|club| club.id == form.club) {
                Some(club) => html_page(render_edit_page(club, swing, Some(&error))),
                None => html_page(render_not_found()),
            }
        }
    }
}

#[derive(Deserialize)]
pub struct RemoveForm {
    pub club: String,
    pub swing: Option<String>,
    pub index: String,
}

/// POST /edit-club/remove — drop one history entry by index. The form only
/// ever offers indexes that exist; anything else is a no-op.
pub async fn remove_distance(form: Form<RemoveForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(form.swing.as_ref());

    if let Ok(index) = form.index.trim().parse::<usize>() {
        let mut ledger = ClubLedger::new(clubs);
        if ledger.remove_distance(&form.club, Some(swing), index).is_ok() {
            let clubs = ledger.into_clubs();
            gateway::save_clubs(store.get_ref(), &clubs).await;
        }
    }
    push(&edit_location(&form.club, swing))
}

#[derive(Deserialize)]
pub struct ClearForm {
    pub club: String,
    pub swing: Option<String>,
}

/// POST /edit-club/clear — empty the targeted history; other wedge buckets
/// stay as they are.
pub async fn clear_history(form: Form<ClearForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(form.swing.as_ref());

    let mut ledger = ClubLedger::new(clubs);
    if ledger.clear_history(&form.club, Some(swing)).is_ok() {
        let clubs = ledger.into_clubs();
        gateway::save_clubs(store.get_ref(), &clubs).await;
    }
    push(&edit_location(&form.club, swing))
}
