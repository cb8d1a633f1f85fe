use maud::{html, Markup};

use crate::ledger::BrandUpdate;
use crate::model::brand::is_custom_brand;
use crate::model::club::{is_iron_id, Club};
use crate::view::layout::{header, page};

/// Brand picker list: search box, inline add-custom form, and the merged
/// brand list with custom entries tagged. Picking a brand moves to the
/// model/degrees step on the same route.
#[must_use]
pub fn render_brand_list(club_id: &str, query: &str, brands: &[String], custom: &[String]) -> Markup {
    let back = format!("/edit-club?club={club_id}");
    page(
        "Select Brand",
        html! {
            (header("Select Brand", Some(&back)))

            form class="search-bar" method="get" action="/select-brand" {
                input type="hidden" name="club" value=(club_id);
                input class="search-input" type="text" name="q" value=(query)
                    placeholder="Search brands...";
            }

            form class="add-custom-form" method="post" action="/select-brand/custom" {
                input type="hidden" name="club" value=(club_id);
                input class="custom-brand-input" type="text" name="name" placeholder="Enter brand name";
                button class="add-button" type="submit" { "+ Add Custom Brand" }
            }

            div class="brand-list" {
                @for brand in brands {
                    a class="brand-option"
                        href=(format!("/select-brand?club={club_id}&brand={}", urlencode(brand))) {
                        span class="brand-option-text" { (brand) }
                        @if is_custom_brand(custom, brand) {
                            span class="custom-label" { "Custom" }
                        }
                    }
                }
                @if brands.is_empty() {
                    div class="empty-container" {
                        p class="empty-text" { "No brands found" }
                        p class="empty-subtext" { "Try a different search term" }
                    }
                }
            }
        },
    )
}

/// Second step: the chosen brand plus optional model, and an optional
/// degrees field for wedges.
#[must_use]
pub fn render_model_form(club: &Club, brand: &str) -> Markup {
    page(
        "Select Brand",
        html! {
            (header("Select Brand", Some(&format!("/select-brand?club={}", club.id))))

            div class="card selected-brand-card" {
                span class="selected-brand-label" { "Selected Brand" }
                span class="selected-brand-text" { (brand) }
            }

            form method="post" action="/select-brand/save" {
                input type="hidden" name="club" value=(club.id);
                input type="hidden" name="brand" value=(brand);
                div class="card model-input-section" {
                    label class="model-label" for="model" { "Model (Optional)" }
                    input class="model-input" id="model" type="text" name="model"
                        placeholder="Enter club model";
                }
                @if club.is_wedge() {
                    div class="card model-input-section" {
                        label class="model-label" for="degrees" { "Degrees (Optional)" }
                        input class="model-input" id="degrees" type="text" name="degrees"
                            inputmode="numeric" placeholder="Enter degrees (e.g., 48, 52, 56, 60)";
                    }
                }
                button class="save-button" type="submit" { "Save" }
            }
            a class="change-brand-link" href=(format!("/select-brand?club={}", club.id)) {
                "Change Brand"
            }
        },
    )
}

/// The confirm/decline branch for an iron: apply to the whole 4i-9i set, or
/// just the one club.
#[must_use]
pub fn render_iron_confirm(club_id: &str, update: &BrandUpdate) -> Markup {
    debug_assert!(is_iron_id(club_id));
    page(
        "Update All Irons?",
        html! {
            (header("Update All Irons?", None))
            div class="card confirm-card" {
                p class="confirm-message" {
                    "Would you like to apply this brand and model to all irons (4i - 9i)?"
                }
                form method="post" action="/select-brand/apply" {
                    input type="hidden" name="club" value=(club_id);
                    input type="hidden" name="brand" value=(update.brand);
                    @if let Some(model) = &update.model {
                        input type="hidden" name="model" value=(model);
                    }
                    button class="save-button" type="submit" name="scope" value="irons" {
                        "All Irons"
                    }
                    button class="cancel-button" type="submit" name="scope" value="single" {
                        "Just This Club"
                    }
                }
            }
        },
    )
}

/// Minimal query-string escaping for brand names in hrefs.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
