//! Vertically snapping numeric picker. The server renders the value column
//! and selection state; `static/wheel.js` drives scrolling with the same
//! constants and posts the settled value through the enclosing form.

use maud::{html, Markup};

/// Row height in px; must match `.wheel-item` in the stylesheet.
pub const ITEM_HEIGHT: u32 = 44;
/// Rows visible in the viewport.
pub const VISIBLE_ITEMS: u32 = 5;
/// Quiet period after the last scroll event before the wheel settles.
pub const SETTLE_MS: u32 = 150;

/// Nearest row for a scroll offset, clamped to the list.
#[must_use]
pub fn snapped_index(offset_px: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (offset_px / f64::from(ITEM_HEIGHT)).round();
    let clamped = raw.clamp(0.0, (len - 1) as f64);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = clamped as usize;
    index
}

/// Visual emphasis by distance from the selected row.
#[must_use]
pub fn row_opacity(distance: usize) -> f32 {
    match distance {
        0 => 1.0,
        1 => 0.4,
        _ => 0.2,
    }
}

/// Settle outcome: the snapped value, but only when it differs from the
/// current selection. The change callback fires exactly once per settle.
#[must_use]
pub fn settled_change(values: &[u32], selected: u32, offset_px: f64) -> Option<u32> {
    let snapped = *values.get(snapped_index(offset_px, values.len()))?;
    (snapped != selected).then_some(snapped)
}

/// The wheel markup: a scrollable column of rows plus the fixed highlight
/// band. The selected value travels in the hidden input named `distance`.
#[must_use]
pub fn render_wheel(values: &[u32], selected: u32) -> Markup {
    let selected_index = values.iter().position(|v| *v == selected).unwrap_or(0);
    html! {
        div class="wheel-picker"
            data-item-height=(ITEM_HEIGHT)
            data-settle-ms=(SETTLE_MS)
            style=(format!("height: {}px;", ITEM_HEIGHT * VISIBLE_ITEMS)) {
            div class="wheel-highlight" style=(format!("height: {ITEM_HEIGHT}px;")) {}
            div class="wheel-scroll" {
                @for (index, value) in values.iter().enumerate() {
                    @let distance = index.abs_diff(selected_index);
                    @let class = if *value == selected { "wheel-item wheel-item-selected" } else { "wheel-item" };
                    div class=(class)
                        data-value=(value)
                        style=(format!("opacity: {};", row_opacity(distance))) {
                        (value)
                    }
                }
            }
        }
        input type="hidden" name="distance" value=(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_row_and_clamps() {
        assert_eq!(snapped_index(0.0, 400), 0);
        assert_eq!(snapped_index(21.0, 400), 0);
        assert_eq!(snapped_index(23.0, 400), 1);
        assert_eq!(snapped_index(44.0 * 399.0 + 500.0, 400), 399);
        assert_eq!(snapped_index(-30.0, 400), 0);
        assert_eq!(snapped_index(100.0, 0), 0);
    }

    #[test]
    fn settle_reports_only_on_change() {
        let values: Vec<u32> = (1..=400).collect();
        // offset for index 99 -> value 100, same as selected: no report
        assert_eq!(settled_change(&values, 100, 44.0 * 99.0), None);
        assert_eq!(settled_change(&values, 100, 44.0 * 100.0), Some(101));
    }

    #[test]
    fn opacity_decays_with_distance() {
        assert!((row_opacity(0) - 1.0).abs() < f32::EPSILON);
        assert!((row_opacity(1) - 0.4).abs() < f32::EPSILON);
        assert!((row_opacity(2) - 0.2).abs() < f32::EPSILON);
        assert!((row_opacity(10) - 0.2).abs() < f32::EPSILON);
    }
}
