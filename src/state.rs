use crate::color::ColorMap;
use crate::data::aggregate::{
    OutcomeSlice, ScatterPoint, SiteSelection, outcome_breakdown, payload_outcome_points,
};
use crate::data::model::LaunchDataset;

/// Bounds and step of the payload range control, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` is loaded once at startup and never mutated.  The two chart
/// outputs are cached here and replaced wholesale whenever one of their
/// watched inputs changes: the pie watches only the site dropdown, the
/// scatter watches the dropdown and the payload range.
pub struct AppState {
    /// Loaded launch table (read-only).
    pub dataset: LaunchDataset,

    /// Current dropdown value.
    pub site_selection: SiteSelection,

    /// Lower end of the payload interval, kg.
    pub payload_lo: f64,

    /// Upper end of the payload interval, kg.
    pub payload_hi: f64,

    /// Current pie-chart data.
    pub pie_slices: Vec<OutcomeSlice>,

    /// Current scatter-chart data.
    pub scatter_points: Vec<ScatterPoint>,

    /// Colours for the all-sites pie slices.
    pub site_colors: ColorMap,

    /// Colours for the scatter's booster version groups.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Build the initial state: all sites selected, payload interval defaulted
    /// to the data's min/max, both charts computed.
    pub fn new(dataset: LaunchDataset) -> Self {
        let payload_lo = dataset.payload_min.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        let payload_hi = dataset.payload_max.clamp(payload_lo, PAYLOAD_SLIDER_MAX);

        let mut state = Self {
            site_colors: ColorMap::new(&dataset.sites),
            booster_colors: ColorMap::new(&dataset.booster_categories),
            dataset,
            site_selection: SiteSelection::All,
            payload_lo,
            payload_hi,
            pie_slices: Vec::new(),
            scatter_points: Vec::new(),
        };
        state.refresh_pie();
        state.refresh_scatter();
        state
    }

    /// Dropdown options: the all-sites aggregate plus each distinct site.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(
                self.dataset
                    .sites
                    .iter()
                    .cloned()
                    .map(SiteSelection::Site),
            )
            .collect()
    }

    /// Dropdown changed: both charts watch it.
    pub fn select_site(&mut self, selection: SiteSelection) {
        self.site_selection = selection;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Range control changed: only the scatter watches it.  Ends are clamped
    /// to the control bounds and the upper end is dragged along when the
    /// lower end moves past it, so `lo ≤ hi` holds after every call.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        self.payload_lo = lo.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        self.payload_hi = hi.clamp(self.payload_lo, PAYLOAD_SLIDER_MAX);
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie_slices = outcome_breakdown(&self.dataset, &self.site_selection);
    }

    fn refresh_scatter(&mut self) {
        self.scatter_points = payload_outcome_points(
            &self.dataset,
            &self.site_selection,
            self.payload_lo,
            self.payload_hi,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    fn sample_state() -> AppState {
        AppState::new(LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, 1, "v1.0"),
            record("CCAFS LC-40", 1500.0, 0, "v1.1"),
            record("VAFB SLC-4E", 800.0, 1, "v1.1"),
            record("KSC LC-39A", 6100.0, 0, "B4"),
        ]))
    }

    #[test]
    fn defaults_are_all_sites_and_data_payload_bounds() {
        let state = sample_state();
        assert_eq!(state.site_selection, SiteSelection::All);
        assert_eq!(state.payload_lo, 500.0);
        assert_eq!(state.payload_hi, 6100.0);
        assert_eq!(state.pie_slices.len(), 3);
        assert_eq!(state.scatter_points.len(), 4);
    }

    #[test]
    fn site_options_lead_with_all() {
        let state = sample_state();
        let options = state.site_options();
        assert_eq!(options[0], SiteSelection::All);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&SiteSelection::Site("KSC LC-39A".into())));
    }

    #[test]
    fn selecting_a_site_refreshes_both_charts() {
        let mut state = sample_state();
        state.select_site(SiteSelection::Site("CCAFS LC-40".into()));

        assert_eq!(state.pie_slices.len(), 2);
        assert_eq!(state.pie_slices[0].label, "Success");
        assert_eq!(state.pie_slices[0].value, 1);
        assert_eq!(state.scatter_points.len(), 2);
    }

    #[test]
    fn range_change_leaves_the_pie_alone() {
        let mut state = sample_state();
        let pie_before = state.pie_slices.clone();

        state.set_payload_range(0.0, 1000.0);
        assert_eq!(state.pie_slices, pie_before);
        assert_eq!(state.scatter_points.len(), 2);
    }

    #[test]
    fn range_is_clamped_and_kept_ordered() {
        let mut state = sample_state();

        state.set_payload_range(-500.0, 20_000.0);
        assert_eq!(state.payload_lo, 0.0);
        assert_eq!(state.payload_hi, PAYLOAD_SLIDER_MAX);

        // Lower end pushed past the upper end drags it along.
        state.set_payload_range(7000.0, 1000.0);
        assert_eq!(state.payload_lo, 7000.0);
        assert_eq!(state.payload_hi, 7000.0);
    }

    #[test]
    fn unknown_site_degrades_to_empty_charts() {
        let mut state = sample_state();
        state.select_site(SiteSelection::Site("Boca Chica".into()));
        assert!(state.pie_slices.is_empty());
        assert!(state.scatter_points.is_empty());
    }
}
