/// Built-in brand catalog shown on the select-brand screen. User-added
/// custom brands are persisted separately and merged in at display time.
pub const GOLF_BRANDS: [&str; 19] = [
    "Titleist",
    "TaylorMade",
    "Callaway",
    "PING",
    "Cobra",
    "Mizuno",
    "PXG",
    "Srixon",
    "Wilson Staff",
    "Honma",
    "Miura",
    "Sub 70 Golf",
    "Tour Edge",
    "Scotty Cameron",
    "Edel Golf",
    "Bettinardi",
    "LA Golf",
    "Kirkland",
    "Top Flight",
];

/// Union of built-in and custom brands, sorted, filtered by a
/// case-insensitive substring match. An empty query returns everything.
#[must_use]
pub fn filter_brands(custom: &[String], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut merged: Vec<String> = GOLF_BRANDS
        .iter()
        .map(|b| (*b).to_string())
        .chain(custom.iter().cloned())
        .filter(|brand| query.is_empty() || brand.to_lowercase().contains(&query))
        .collect();
    merged.sort();
    merged
}

/// Add a user-entered brand to the custom list. Returns false (list
/// untouched) for blank input or a name already present in either list;
/// string comparison is case-sensitive, matching the stored data.
pub fn add_custom_brand(custom: &mut Vec<String>, candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty()
        || GOLF_BRANDS.contains(&trimmed)
        || custom.iter().any(|existing| existing == trimmed)
    {
        return false;
    }
    custom.push(trimmed.to_string());
    true
}

#[must_use]
pub fn is_custom_brand(custom: &[String], brand: &str) -> bool {
    custom.iter().any(|existing| existing == brand)
}
