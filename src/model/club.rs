/// The four short-game clubs tracked per swing type instead of one flat
/// history. Membership is fixed for the life of the application.
pub const WEDGE_IDS: [&str; 4] = ["pw", "gw", "sw", "lw"];

/// The iron set a brand/model update can fan out over.
pub const IRON_IDS: [&str; 6] = ["4iron", "5iron", "6iron", "7iron", "8iron", "9iron"];

#[must_use]
pub fn is_wedge_id(id: &str) -> bool {
    WEDGE_IDS.contains(&id)
}

#[must_use]
pub fn is_iron_id(id: &str) -> bool {
    IRON_IDS.contains(&id)
}

/// Rounded arithmetic mean of a distance history, 0 when empty. All inputs
/// are positive, so f64 rounding (half away from zero) is round half up.
#[must_use]
pub fn average(distances: &[u32]) -> u32 {
    if distances.is_empty() {
        return 0;
    }
    let sum: u64 = distances.iter().map(|d| u64::from(*d)).sum();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let avg = (sum as f64 / distances.len() as f64).round() as u32;
    avg
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwingType {
    #[default]
    Full,
    NineOclock,
    SevenOclock,
}

impl SwingType {
    pub const ALL: [SwingType; 3] = [
        SwingType::Full,
        SwingType::NineOclock,
        SwingType::SevenOclock,
    ];

    /// Query/form value, matching the persisted bucket names.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SwingType::Full => "full",
            SwingType::NineOclock => "9oclock",
            SwingType::SevenOclock => "7oclock",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SwingType::Full => "Full Swing",
            SwingType::NineOclock => "9 O'clock",
            SwingType::SevenOclock => "7 O'clock",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(SwingType::Full),
            "9oclock" => Some(SwingType::NineOclock),
            "7oclock" => Some(SwingType::SevenOclock),
            _ => None,
        }
    }
}

/// One distance history plus its stored average. The average is persisted
/// rather than derived because seed clubs start with a non-zero average over
/// an empty history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bucket {
    pub distances: Vec<u32>,
    pub average: u32,
}

impl Bucket {
    #[must_use]
    pub fn seeded(average: u32) -> Self {
        Self {
            distances: Vec::new(),
            average,
        }
    }

    pub fn record(&mut self, yards: u32) {
        self.distances.push(yards);
        self.average = average(&self.distances);
    }

    /// Index-filtered removal; out-of-range indexes leave the bucket alone.
    pub fn remove(&mut self, index: usize) {
        if index < self.distances.len() {
            self.distances.remove(index);
            self.average = average(&self.distances);
        }
    }

    pub fn clear(&mut self) {
        self.distances.clear();
        self.average = 0;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WedgeBuckets {
    pub full: Bucket,
    pub nine: Bucket,
    pub seven: Bucket,
}

impl WedgeBuckets {
    #[must_use]
    pub fn bucket(&self, swing: SwingType) -> &Bucket {
        match swing {
            SwingType::Full => &self.full,
            SwingType::NineOclock => &self.nine,
            SwingType::SevenOclock => &self.seven,
        }
    }

    pub fn bucket_mut(&mut self, swing: SwingType) -> &mut Bucket {
        match swing {
            SwingType::Full => &mut self.full,
            SwingType::NineOclock => &mut self.nine,
            SwingType::SevenOclock => &mut self.seven,
        }
    }
}

/// Per-swing-type tracking for a wedge.
///
/// `buckets` stays `None` until the first swing-bucket mutation; that first
/// mutation creates all three buckets at once so partial state never exists.
/// `flat` carries the seeded (or legacy pre-bucket) flat history; it is
/// preserved through load/save but nothing mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WedgeTracking {
    pub degrees: Option<u32>,
    pub buckets: Option<WedgeBuckets>,
    pub flat: Bucket,
}

impl WedgeTracking {
    /// The recorded bucket, if any recording has happened yet.
    #[must_use]
    pub fn bucket(&self, swing: SwingType) -> Option<&Bucket> {
        self.buckets.as_ref().map(|b| b.bucket(swing))
    }

    pub fn bucket_mut(&mut self, swing: SwingType) -> &mut Bucket {
        self.buckets.get_or_insert_with(WedgeBuckets::default).bucket_mut(swing)
    }

    /// The average a screen quotes for `swing`: the recorded bucket once
    /// buckets exist, else the flat seed average.
    #[must_use]
    pub fn current_average(&self, swing: SwingType) -> u32 {
        match &self.buckets {
            Some(buckets) => buckets.bucket(swing).average,
            None => self.flat.average,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClubKind {
    Standard(Bucket),
    Wedge(WedgeTracking),
}

/// One golf club record. `id` is the join key for every mutation and is
/// never regenerated; `kind` is chosen once from the id and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub kind: ClubKind,
}

impl Club {
    #[must_use]
    pub fn is_wedge(&self) -> bool {
        matches!(self.kind, ClubKind::Wedge(_))
    }

    #[must_use]
    pub fn degrees(&self) -> Option<u32> {
        match &self.kind {
            ClubKind::Wedge(wedge) => wedge.degrees,
            ClubKind::Standard(_) => None,
        }
    }

    /// The average shown on the bag list: full-swing for tracked wedges,
    /// flat otherwise.
    #[must_use]
    pub fn display_average(&self) -> u32 {
        self.current_average(SwingType::Full)
    }

    /// The average quoted next to the wheel for the targeted history.
    #[must_use]
    pub fn current_average(&self, swing: SwingType) -> u32 {
        match &self.kind {
            ClubKind::Standard(bucket) => bucket.average,
            ClubKind::Wedge(wedge) => wedge.current_average(swing),
        }
    }

    /// The history targeted by a mutation: the swing bucket for wedges, the
    /// flat history otherwise (swing type is ignored for non-wedges).
    #[must_use]
    pub fn history(&self, swing: SwingType) -> &[u32] {
        match &self.kind {
            ClubKind::Standard(bucket) => &bucket.distances,
            ClubKind::Wedge(wedge) => wedge
                .bucket(swing)
                .map_or(&[] as &[u32], |b| b.distances.as_slice()),
        }
    }

    #[must_use]
    pub fn bucket_average(&self, swing: SwingType) -> u32 {
        match &self.kind {
            ClubKind::Standard(bucket) => bucket.average,
            ClubKind::Wedge(wedge) => wedge.bucket(swing).map_or(0, |b| b.average),
        }
    }

    pub fn record(&mut self, swing: SwingType, yards: u32) {
        match &mut self.kind {
            ClubKind::Standard(bucket) => bucket.record(yards),
            ClubKind::Wedge(wedge) => wedge.bucket_mut(swing).record(yards),
        }
    }

    pub fn remove(&mut self, swing: SwingType, index: usize) {
        match &mut self.kind {
            ClubKind::Standard(bucket) => bucket.remove(index),
            ClubKind::Wedge(wedge) => wedge.bucket_mut(swing).remove(index),
        }
    }

    pub fn clear(&mut self, swing: SwingType) {
        match &mut self.kind {
            ClubKind::Standard(bucket) => bucket.clear(),
            ClubKind::Wedge(wedge) => wedge.bucket_mut(swing).clear(),
        }
    }

    /// Set a new loft and regenerate the display name from the text before
    /// the existing " - " separator, e.g. "Pw - 48" with 52 becomes
    /// "Pw - 52". No-op for non-wedges.
    pub fn set_degrees(&mut self, degrees: u32) {
        if let ClubKind::Wedge(wedge) = &mut self.kind {
            wedge.degrees = Some(degrees);
            let prefix = self
                .name
                .split(" - ")
                .next()
                .unwrap_or(self.name.as_str())
                .to_string();
            self.name = format!("{prefix} - {degrees}");
        }
    }
}

fn standard(id: &str, name: &str, brand: &str, seed_average: u32) -> Club {
    Club {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        model: None,
        kind: ClubKind::Standard(Bucket::seeded(seed_average)),
    }
}

fn wedge(id: &str, name: &str, brand: &str, degrees: u32, seed_average: u32) -> Club {
    Club {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        model: None,
        kind: ClubKind::Wedge(WedgeTracking {
            degrees: Some(degrees),
            buckets: None,
            flat: Bucket::seeded(seed_average),
        }),
    }
}

/// The fixed 12-club default bag, used on first run and whenever the saved
/// collection cannot be read.
#[must_use]
pub fn seed_clubs() -> Vec<Club> {
    vec![
        standard("driver", "Driver", "Mizuno", 260),
        standard("5wood", "5w", "Maltby", 220),
        standard("4iron", "4i", "Maltby", 190),
        standard("5iron", "5i", "Maltby", 180),
        standard("6iron", "6i", "Maltby", 170),
        standard("7iron", "7i", "Maltby", 160),
        standard("8iron", "8i", "Maltby", 150),
        standard("9iron", "9i", "Maltby", 140),
        wedge("pw", "Pw - 48", "Maltby", 48, 130),
        wedge("gw", "Gw - 52", "Maltby", 52, 120),
        wedge("sw", "Sw - 56", "Maltby", 56, 100),
        wedge("lw", "Lw - 60", "Maltby", 60, 85),
    ]
}
