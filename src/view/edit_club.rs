use maud::{html, Markup};

use crate::model::club::{Club, SwingType};
use crate::view::layout::{alert, header, page};

/// Editor for one club: brand/model card, averages, an add-distance form,
/// and the distance history with per-entry remove and a clear control.
/// Wedges get one history card per swing type; the `swing` argument picks
/// which bucket the add form targets.
#[must_use]
pub fn render_edit_page(club: &Club, swing: SwingType, error_text: Option<&str>) -> Markup {
    page(
        &club.name,
        html! {
            (header(&club.name, Some("/")))
            @if let Some(text) = error_text {
                (alert(text))
            }

            div class="card club-info-card" {
                span class="club-name" { (club.name) }
                a class="brand-line" href=(format!("/select-brand?club={}", club.id)) {
                    span class="club-brand" { (club.brand) }
                    @if let Some(model) = &club.model {
                        " " span class="club-model" { (model) }
                    }
                    span class="change-link" { "Change" }
                }

                @if club.is_wedge() {
                    span class="average-label" { "Average Distances" }
                    div class="swing-average-list" {
                        @for option in SwingType::ALL {
                            div class="swing-average-item" {
                                span class="swing-label" { (option.label()) }
                                span class="swing-value" { (club.bucket_average(option)) " Yds" }
                            }
                        }
                    }
                } @else {
                    span class="average-label" { "Average Distance" }
                    span class="average-value" { (club.display_average()) " Yds" }
                }
            }

            div class="card" {
                h2 class="section-title" { "Add Distance" }
                @if club.is_wedge() {
                    div class="swing-selector" {
                        @for option in SwingType::ALL {
                            @let class = if option == swing { "swing-button swing-button-active" } else { "swing-button" };
                            a class=(class) href=(format!("/edit-club?club={}&swing={}", club.id, option.slug())) {
                                (option.label())
                            }
                        }
                    }
                }
                form class="add-distance-form" method="post" action="/edit-club/add" {
                    input type="hidden" name="club" value=(club.id);
                    input type="hidden" name="swing" value=(swing.slug());
                    input class="distance-input" type="text" name="distance"
                        inputmode="numeric" placeholder="Enter distance in yards";
                    button class="add-button" type="submit" { "Add" }
                }
            }

            @if club.is_wedge() {
                @for option in SwingType::ALL {
                    (history_card(club, option, option.label()))
                }
            } @else {
                (history_card(club, SwingType::Full, "Distance History"))
            }
        },
    )
}

/// Shown when the club query parameter does not match the collection.
#[must_use]
pub fn render_not_found() -> Markup {
    page(
        "Club Not Found",
        html! {
            (header("Club Not Found", Some("/")))
        },
    )
}

fn history_card(club: &Club, swing: SwingType, title: &str) -> Markup {
    let distances = club.history(swing);
    html! {
        div class="card history-card" {
            div class="history-header" {
                h2 class="section-title" { (title) }
                @if !distances.is_empty() {
                    form method="post" action="/edit-club/clear" {
                        input type="hidden" name="club" value=(club.id);
                        input type="hidden" name="swing" value=(swing.slug());
                        button class="clear-button" type="submit" {
                            @if club.is_wedge() { "Clear" } @else { "Clear All" }
                        }
                    }
                }
            }
            @if distances.is_empty() {
                p class="empty-text" { "No distances recorded yet" }
            } @else {
                div class="distance-list" {
                    @for (index, yards) in distances.iter().enumerate() {
                        div class="distance-item" {
                            span class="distance-text" { (yards) " Yds" }
                            form method="post" action="/edit-club/remove" {
                                input type="hidden" name="club" value=(club.id);
                                input type="hidden" name="swing" value=(swing.slug());
                                input type="hidden" name="index" value=(index);
                                button class="remove-button" type="submit" { "\u{00d7}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
