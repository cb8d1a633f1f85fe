use std::collections::HashMap;

use actix_web::web::{Data, Form, Query};
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::controller::navigation::{html_page, push};
use crate::error::LedgerError;
use crate::ledger::ClubLedger;
use crate::model::club::SwingType;
use crate::storage::blob::BlobStore;
use crate::storage::gateway;
use crate::view::quick_add::render_quick_add_page;

/// Wheel position when nothing informs a better default.
const DEFAULT_DISTANCE: u32 = 100;

fn swing_from(value: Option<&String>) -> SwingType {
    value
        .and_then(|v| SwingType::parse(v.trim()))
        .unwrap_or_default()
}

/// GET /quick-add — club grid, swing selector, distance wheel. The wheel
/// starts at the selected club's current average when one exists.
pub async fn quick_add_page(
    query: Query<HashMap<String, String>>,
    store: Data<dyn BlobStore>,
) -> HttpResponse {
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(query.get("swing"));
    let selected = query
        .get("club")
        .and_then(|id| clubs.iter().find(|club| club.id == *id));

    let current_average = selected.map_or(0, |club| club.current_average(swing));
    let distance = if current_average > 0 {
        current_average
    } else {
        DEFAULT_DISTANCE
    };

    let notice = match (query.get("notice").map(String::as_str), query.get("yards")) {
        (Some("added"), Some(yards)) => selected
            .map(|club| format!("Added {} yards to {}", yards.trim(), club.name)),
        _ => None,
    };

    html_page(render_quick_add_page(
        &clubs,
        selected,
        swing,
        distance,
        notice.as_deref(),
        None,
    ))
}

#[derive(Deserialize)]
pub struct QuickAddForm {
    pub club: Option<String>,
    pub swing: Option<String>,
    pub distance: Option<String>,
}

/// POST /quick-add — record one shot against the selected club/bucket.
/// Invalid input re-renders the screen with an alert and no mutation.
pub async fn add_distance(form: Form<QuickAddForm>, store: Data<dyn BlobStore>) -> HttpResponse {
    let form = form.into_inner();
    let clubs = gateway::load_clubs(store.get_ref()).await;
    let swing = swing_from(form.swing.as_ref());

    let club_id = match form.club.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let error = LedgerError::NoClubSelected.to_string();
            return html_page(render_quick_add_page(
                &clubs,
                None,
                swing,
                DEFAULT_DISTANCE,
                None,
                Some(&error),
            ));
        }
    };

    let yards = form
        .distance
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse::<u32>()
        .unwrap_or(0);

    let mut ledger = ClubLedger::new(clubs);
    let outcome = ledger
        .record_distance(&club_id, Some(swing), yards)
        .map(|_| ());
    match outcome {
        Ok(()) => {
            let clubs = ledger.into_clubs();
            gateway::save_clubs(store.get_ref(), &clubs).await;
            push(&format!(
                "/quick-add?club={club_id}&swing={}&notice=added&yards={yards}",
                swing.slug()
            ))
        }
        Err(e) => {
            let error = e.to_string();
            let clubs = ledger.into_clubs();
            let selected = clubs.iter().find(|club| club.id == club_id);
            html_page(render_quick_add_page(
                &clubs,
                selected,
                swing,
                DEFAULT_DISTANCE,
                None,
                Some(&error),
            ))
        }
    }
}
