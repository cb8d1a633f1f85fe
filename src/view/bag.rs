use maud::{html, Markup};

use crate::model::club::Club;
use crate::view::layout::{header, page};

/// The bag list: every club with its brand/model line and the average shown
/// on the bag (full-swing bucket for tracked wedges, flat average
/// otherwise). Each row links to the edit screen.
#[must_use]
pub fn render_bag_page(clubs: &[Club]) -> Markup {
    let title = format!("My Golf Bag ({})", clubs.len());
    page(
        &title,
        html! {
            (header(&title, None))
            div class="club-list" {
                @for club in clubs {
                    a class="club-item" href=(format!("/edit-club?club={}", club.id)) {
                        div class="club-info" {
                            span class="club-name" { (club.name) }
                            span class="club-brand" {
                                (club.brand)
                                @if let Some(model) = &club.model {
                                    " " span class="club-model" { (model) }
                                }
                            }
                        }
                        div class="club-distance" {
                            span class="distance-number" { (club.display_average()) }
                            span class="distance-unit" { "Yds" }
                        }
                    }
                }
            }
            div class="tab-bar" {
                a class="tab tab-active" href="/" { "Bag" }
                a class="tab" href="/quick-add" { "Add Shot" }
            }
        },
    )
}
