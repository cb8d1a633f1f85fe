//! Persisted JSON shape of the club collection. Field names and casing
//! match the blobs written by earlier releases, so saved data loads
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::model::club::{average, Bucket, Club, ClubKind, WedgeBuckets, WedgeTracking, is_wedge_id};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwingDistancesRecord {
    pub full: Vec<u32>,
    #[serde(rename = "9oclock")]
    pub nine_oclock: Vec<u32>,
    #[serde(rename = "7oclock")]
    pub seven_oclock: Vec<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwingAveragesRecord {
    pub full: u32,
    #[serde(rename = "9oclock")]
    pub nine_oclock: u32,
    #[serde(rename = "7oclock")]
    pub seven_oclock: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degrees: Option<u32>,
    #[serde(default)]
    pub distances: Vec<u32>,
    #[serde(default)]
    pub average_distance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing_distances: Option<SwingDistancesRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing_averages: Option<SwingAveragesRecord>,
}

/// One hard-coded backward-compatible rename: a legacy lob wedge saved as
/// "L - 60" becomes "Lw - 60". Idempotent, since the renamed club no longer
/// matches.
pub fn migrate_legacy_wedge_name(record: &mut ClubRecord) {
    if record.id == "lw" && record.name == "L - 60" {
        record.name = "Lw - 60".to_string();
    }
}

impl ClubRecord {
    /// Select the tracking variant once, from id membership in the wedge
    /// set. A wedge record without swing fields stays uninitialized; a
    /// record with swing distances but no stored averages gets them
    /// recomputed.
    #[must_use]
    pub fn into_club(self) -> Club {
        let kind = if is_wedge_id(&self.id) {
            let buckets = match (self.swing_distances, self.swing_averages) {
                (None, None) => None,
                (distances, averages) => {
                    let distances = distances.unwrap_or_default();
                    let averages = averages.unwrap_or_else(|| SwingAveragesRecord {
                        full: average(&distances.full),
                        nine_oclock: average(&distances.nine_oclock),
                        seven_oclock: average(&distances.seven_oclock),
                    });
                    Some(WedgeBuckets {
                        full: Bucket {
                            distances: distances.full,
                            average: averages.full,
                        },
                        nine: Bucket {
                            distances: distances.nine_oclock,
                            average: averages.nine_oclock,
                        },
                        seven: Bucket {
                            distances: distances.seven_oclock,
                            average: averages.seven_oclock,
                        },
                    })
                }
            };
            ClubKind::Wedge(WedgeTracking {
                degrees: self.degrees,
                buckets,
                flat: Bucket {
                    distances: self.distances,
                    average: self.average_distance,
                },
            })
        } else {
            ClubKind::Standard(Bucket {
                distances: self.distances,
                average: self.average_distance,
            })
        };

        Club {
            id: self.id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            kind,
        }
    }

    #[must_use]
    pub fn from_club(club: &Club) -> Self {
        match &club.kind {
            ClubKind::Standard(bucket) => Self {
                id: club.id.clone(),
                name: club.name.clone(),
                brand: club.brand.clone(),
                model: club.model.clone(),
                degrees: None,
                distances: bucket.distances.clone(),
                average_distance: bucket.average,
                swing_distances: None,
                swing_averages: None,
            },
            ClubKind::Wedge(wedge) => Self {
                id: club.id.clone(),
                name: club.name.clone(),
                brand: club.brand.clone(),
                model: club.model.clone(),
                degrees: wedge.degrees,
                distances: wedge.flat.distances.clone(),
                average_distance: wedge.flat.average,
                swing_distances: wedge.buckets.as_ref().map(|b| SwingDistancesRecord {
                    full: b.full.distances.clone(),
                    nine_oclock: b.nine.distances.clone(),
                    seven_oclock: b.seven.distances.clone(),
                }),
                swing_averages: wedge.buckets.as_ref().map(|b| SwingAveragesRecord {
                    full: b.full.average,
                    nine_oclock: b.nine.average,
                    seven_oclock: b.seven.average,
                }),
            },
        }
    }
}

#[must_use]
pub fn records_from_clubs(clubs: &[Club]) -> Vec<ClubRecord> {
    clubs.iter().map(ClubRecord::from_club).collect()
}

#[must_use]
pub fn clubs_from_records(records: Vec<ClubRecord>) -> Vec<Club> {
    records.into_iter().map(ClubRecord::into_club).collect()
}
