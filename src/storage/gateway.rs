//! Load/save helpers between the domain model and the blob store.
//!
//! Read or parse failures are logged and fall back to defaults; write
//! failures are logged and dropped. Storage trouble never reaches the user,
//! worst case is seed-default or stale data.

use serde_json::Value;

use crate::model::club::{seed_clubs, Club};
use crate::model::wire::{
    clubs_from_records, migrate_legacy_wedge_name, records_from_clubs, ClubRecord,
};
use crate::storage::blob::{BlobStore, StorageError, CLUBS_KEY, CUSTOM_BRANDS_KEY};

/// # Errors
///
/// Returns `Err` on a read or parse failure; `Ok(None)` when nothing has
/// been saved yet.
pub async fn try_load_clubs(store: &dyn BlobStore) -> Result<Option<Vec<Club>>, StorageError> {
    let Some(raw) = store.get(CLUBS_KEY).await? else {
        return Ok(None);
    };
    let mut records: Vec<ClubRecord> = serde_json::from_str(&raw)?;
    for record in &mut records {
        migrate_legacy_wedge_name(record);
    }
    Ok(Some(clubs_from_records(records)))
}

/// The club collection, seeded with the default bag on first run or when
/// the saved blob cannot be read.
pub async fn load_clubs(store: &dyn BlobStore) -> Vec<Club> {
    match try_load_clubs(store).await {
        Ok(Some(clubs)) => clubs,
        Ok(None) => seed_clubs(),
        Err(e) => {
            eprintln!("Error loading clubs: {e}");
            seed_clubs()
        }
    }
}

/// Replace the whole collection blob. Best effort; failures are logged.
pub async fn save_clubs(store: &dyn BlobStore, clubs: &[Club]) {
    let records = records_from_clubs(clubs);
    match serde_json::to_string(&records) {
        Ok(raw) => {
            if let Err(e) = store.put(CLUBS_KEY, &raw).await {
                eprintln!("Error saving clubs: {e}");
            }
        }
        Err(e) => eprintln!("Error serializing clubs: {e}"),
    }
}

pub async fn load_custom_brands(store: &dyn BlobStore) -> Vec<String> {
    let raw = match store.get(CUSTOM_BRANDS_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            eprintln!("Error loading custom brands: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(brands) => brands,
        Err(e) => {
            eprintln!("Error parsing custom brands: {e}");
            Vec::new()
        }
    }
}

pub async fn save_custom_brands(store: &dyn BlobStore, brands: &[String]) {
    match serde_json::to_string(brands) {
        Ok(raw) => {
            if let Err(e) = store.put(CUSTOM_BRANDS_KEY, &raw).await {
                eprintln!("Error saving custom brands: {e}");
            }
        }
        Err(e) => eprintln!("Error serializing custom brands: {e}"),
    }
}

/// Startup prefill from `--db-populate-json`: loads a clubs array into the
/// store, but only when no collection has been saved yet.
///
/// # Errors
///
/// Returns `Err` when the JSON is not a club array or the write fails.
pub async fn db_prefill(store: &dyn BlobStore, json: &Value) -> Result<(), StorageError> {
    let records: Vec<ClubRecord> = serde_json::from_value(json.clone())?;
    if store.get(CLUBS_KEY).await?.is_some() {
        if cfg!(debug_assertions) {
            println!("clubs blob already present, skipping prefill");
        }
        return Ok(());
    }
    let raw = serde_json::to_string(&records)?;
    store.put(CLUBS_KEY, &raw).await
}
