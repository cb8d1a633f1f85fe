use maud::{html, Markup};

use crate::HTMX_PATH;

/// Shared page chrome for every screen.
#[must_use]
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
            script src="/static/wheel.js" defer {}
        }
        body {
            (body)
        }
    }
}

/// Screen header bar, optionally with a back link on the left.
#[must_use]
pub fn header(title: &str, back_href: Option<&str>) -> Markup {
    html! {
        div class="header" {
            @if let Some(href) = back_href {
                a class="back-link" href=(href) { "\u{2190} Back" }
            }
            span class="header-title" { (title) }
            @if back_href.is_some() {
                span class="header-spacer" {}
            }
        }
    }
}

/// Blocking notice for invalid input; rendered in place of the alert dialog
/// the mobile build used.
#[must_use]
pub fn alert(message: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" { (message) }
    }
}

#[must_use]
pub fn notice(message: &str) -> Markup {
    html! {
        div class="alert alert-notice" role="status" { (message) }
    }
}
