use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary launch result
// ---------------------------------------------------------------------------

/// Launch result, stored in the source data as the `class` column (1 = the
/// booster landed / mission succeeded, 0 = it did not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

/// The `class` column held something other than 0 or 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("class value must be 0 or 1, got {0}")]
pub struct InvalidClass(pub i64);

impl Outcome {
    /// Convert a raw `class` cell into a typed outcome.
    pub fn from_class(value: i64) -> Result<Self, InvalidClass> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(InvalidClass(other)),
        }
    }

    /// The numeric form used for summing and for the scatter y-axis.
    pub fn class(self) -> u32 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    /// Launch facility name, e.g. "KSC LC-39A".
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Binary launch result.
    pub outcome: Outcome,
    /// Booster version grouping used to color the scatter plot.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with indices derived once at construction.
/// Immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
    /// Smallest payload mass present in the data.
    pub payload_min: f64,
    /// Largest payload mass present in the data.
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the derived indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<String> = BTreeSet::new();
        let mut booster_set: BTreeSet<String> = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            site_set.insert(rec.site.clone());
            booster_set.insert(rec.booster_category.clone());
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }

        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites: site_set.into_iter().collect(),
            booster_categories: booster_set.into_iter().collect(),
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the given site name appears in the data.
    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}
