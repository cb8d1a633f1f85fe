use maud::{html, Markup};

use crate::model::club::{Club, SwingType};
use crate::view::layout::{alert, header, notice, page};
use crate::view::wheel::render_wheel;

/// Wheel range offered by the quick-add screen, yards.
pub const DISTANCE_VALUES: std::ops::RangeInclusive<u32> = 1..=400;

/// The quick-add screen: club grid, swing-type selector for wedges, the
/// distance wheel, and the current average for whatever is selected.
#[must_use]
pub fn render_quick_add_page(
    clubs: &[Club],
    selected: Option<&Club>,
    swing: SwingType,
    distance: u32,
    notice_text: Option<&str>,
    error_text: Option<&str>,
) -> Markup {
    let values: Vec<u32> = DISTANCE_VALUES.collect();
    let current_average = selected.map_or(0, |club| club.current_average(swing));

    page(
        "Add Shot",
        html! {
            (header("Add Shot", None))
            @if let Some(text) = notice_text {
                (notice(text))
            }
            @if let Some(text) = error_text {
                (alert(text))
            }

            div class="section" {
                h2 class="section-title" { "Select Club" }
                div class="club-grid" {
                    @for club in clubs {
                        @let is_selected = selected.is_some_and(|s| s.id == club.id);
                        @let class = if is_selected { "club-button club-button-selected" } else { "club-button" };
                        a class=(class) href=(format!("/quick-add?club={}&swing={}", club.id, swing.slug())) {
                            (club.name)
                        }
                    }
                }
            }

            @if let Some(club) = selected {
                @if club.is_wedge() {
                    div class="section" {
                        h2 class="section-title" { "Swing Type" }
                        div class="swing-selector" {
                            @for option in SwingType::ALL {
                                @let class = if option == swing { "swing-button swing-button-active" } else { "swing-button" };
                                a class=(class) href=(format!("/quick-add?club={}&swing={}", club.id, option.slug())) {
                                    (option.label())
                                }
                            }
                        }
                    }
                }
            }

            div class="section" {
                div class="distance-header" {
                    h2 class="section-title" { "Distance (Yards)" }
                    @if current_average > 0 {
                        span class="average-hint" { "Avg: " (current_average) }
                    }
                }
                form method="post" action="/quick-add" {
                    @if let Some(club) = selected {
                        input type="hidden" name="club" value=(club.id);
                    }
                    input type="hidden" name="swing" value=(swing.slug());
                    (render_wheel(&values, distance))
                    @let class = if selected.is_some() { "add-button" } else { "add-button add-button-disabled" };
                    button class=(class) type="submit" disabled[selected.is_none()] {
                        "Add Distance"
                    }
                }
            }

            @if selected.is_some() {
                div class="section" {
                    h2 class="section-title" { "Current Average" }
                    div class="average-card" {
                        span class="average-value" { (current_average) }
                        span class="average-unit" { "Yards" }
                    }
                }
            }

            div class="tab-bar" {
                a class="tab" href="/" { "Bag" }
                a class="tab tab-active" href="/quick-add" { "Add Shot" }
            }
        },
    )
}
