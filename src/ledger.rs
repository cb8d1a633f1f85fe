//! The distance ledger: every mutation of the club collection goes through
//! here and returns the updated record. Callers load the collection from
//! the gateway, apply one operation, and write the whole blob back.

use crate::error::LedgerError;
use crate::model::club::{is_iron_id, Club, SwingType, IRON_IDS};

/// Brand/model metadata applied from the select-brand screen. `degrees`
/// only takes effect on wedges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandUpdate {
    pub brand: String,
    pub model: Option<String>,
    pub degrees: Option<u32>,
}

/// Whether a brand update touches one club or fans out over the iron set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateScope {
    Single,
    IronSet,
}

pub struct ClubLedger {
    clubs: Vec<Club>,
}

impl ClubLedger {
    #[must_use]
    pub fn new(clubs: Vec<Club>) -> Self {
        Self { clubs }
    }

    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    #[must_use]
    pub fn into_clubs(self) -> Vec<Club> {
        self.clubs
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Club, LedgerError> {
        self.clubs
            .iter_mut()
            .find(|club| club.id == id)
            .ok_or_else(|| LedgerError::UnknownClub(id.to_string()))
    }

    /// Append `yards` to the targeted history and recompute that history's
    /// average. Wedges bucket by swing type (Full when none was given);
    /// non-wedges ignore the swing type. Zero is rejected without mutating
    /// anything.
    ///
    /// # Errors
    ///
    /// `InvalidDistance` for a non-positive value, `UnknownClub` for an id
    /// not in the collection.
    pub fn record_distance(
        &mut self,
        id: &str,
        swing: Option<SwingType>,
        yards: u32,
    ) -> Result<&Club, LedgerError> {
        if yards == 0 {
            return Err(LedgerError::InvalidDistance);
        }
        let club = self.find_mut(id)?;
        club.record(swing.unwrap_or_default(), yards);
        Ok(club)
    }

    /// Remove the entry at `index` from the targeted history, preserving
    /// the order of the rest; only that bucket's average is recomputed.
    /// Out-of-range indexes are a no-op.
    ///
    /// # Errors
    ///
    /// `UnknownClub` for an id not in the collection.
    pub fn remove_distance(
        &mut self,
        id: &str,
        swing: Option<SwingType>,
        index: usize,
    ) -> Result<&Club, LedgerError> {
        let club = self.find_mut(id)?;
        club.remove(swing.unwrap_or_default(), index);
        Ok(club)
    }

    /// Empty the targeted history and reset its average to 0; other wedge
    /// buckets are untouched.
    ///
    /// # Errors
    ///
    /// `UnknownClub` for an id not in the collection.
    pub fn clear_history(
        &mut self,
        id: &str,
        swing: Option<SwingType>,
    ) -> Result<&Club, LedgerError> {
        let club = self.find_mut(id)?;
        club.clear(swing.unwrap_or_default());
        Ok(club)
    }

    /// Apply brand/model (and optionally degrees) to `id`, or fan the same
    /// update out over the fixed iron set when the confirm branch was
    /// accepted. Degrees regenerate a wedge's display name.
    ///
    /// # Errors
    ///
    /// `UnknownClub` when the anchor id is not in the collection.
    pub fn apply_brand(
        &mut self,
        id: &str,
        update: &BrandUpdate,
        scope: UpdateScope,
    ) -> Result<(), LedgerError> {
        // the anchor club must exist even when fanning out
        self.find_mut(id)?;

        let targets: Vec<&str> = match scope {
            UpdateScope::IronSet if is_iron_id(id) => IRON_IDS.to_vec(),
            _ => vec![id],
        };

        for club in self
            .clubs
            .iter_mut()
            .filter(|club| targets.contains(&club.id.as_str()))
        {
            club.brand = update.brand.clone();
            club.model = update.model.clone().filter(|m| !m.is_empty());
            if let Some(degrees) = update.degrees {
                club.set_degrees(degrees);
            }
        }
        Ok(())
    }
}
