use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Site selection: which launch site the dashboard is focused on
// ---------------------------------------------------------------------------

/// The dropdown state: either the synthetic "all sites" aggregate or one
/// named launch site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` is within this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome breakdown: data behind the pie chart
// ---------------------------------------------------------------------------

/// One sector of the breakdown.  Label and value travel together so the
/// rendering order can never pair a count with the wrong name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSlice {
    pub label: String,
    pub value: u32,
}

/// Compute the outcome breakdown for the current site selection.
///
/// * `All` – one slice per site, valued by that site's total number of
///   successful launches (the sum of the outcome field).  Sites with zero
///   successes still get a slice.  Slices are in sorted site order.
/// * `Site(name)` – exactly two slices, `Success` then `Failure`, counting
///   that site's launches by result.
///
/// A selection naming a site with no rows yields an empty breakdown.
pub fn outcome_breakdown(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<OutcomeSlice> {
    match selection {
        SiteSelection::All => {
            let mut successes_by_site: BTreeMap<&str, u32> = BTreeMap::new();
            for rec in &dataset.records {
                *successes_by_site.entry(rec.site.as_str()).or_default() += rec.outcome.class();
            }
            successes_by_site
                .into_iter()
                .map(|(site, successes)| OutcomeSlice {
                    label: site.to_string(),
                    value: successes,
                })
                .collect()
        }
        SiteSelection::Site(name) => {
            let mut successes = 0u32;
            let mut failures = 0u32;
            for rec in dataset.records.iter().filter(|r| r.site == *name) {
                if rec.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }
            if successes == 0 && failures == 0 {
                return Vec::new();
            }
            vec![
                OutcomeSlice {
                    label: Outcome::Success.to_string(),
                    value: successes,
                },
                OutcomeSlice {
                    label: Outcome::Failure.to_string(),
                    value: failures,
                },
            ]
        }
    }
}

// ---------------------------------------------------------------------------
// Payload/outcome projection: data behind the scatter plot
// ---------------------------------------------------------------------------

/// One scatter point: payload mass on x, outcome on y, booster version
/// category as the color grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Project the records matching the site selection and the inclusive payload
/// interval `[lo, hi]` onto scatter points.  An inverted interval (`lo > hi`)
/// matches nothing.  Input order is preserved.
pub fn payload_outcome_points(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    lo: f64,
    hi: f64,
) -> Vec<ScatterPoint> {
    dataset
        .records
        .iter()
        .filter(|r| r.payload_mass_kg >= lo && r.payload_mass_kg <= hi)
        .filter(|r| selection.matches(&r.site))
        .map(|r| ScatterPoint {
            payload_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect()
}
