use crate::model::{Classification, Reading};

/// Which of the two fetched collections the table is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    All,
    AlertsOnly,
}

/// Single source of truth for the dashboard view.
///
/// Both collections are retained across view switches; switching only
/// changes which one is read at render time. Collections are replaced
/// wholesale by gateway results, never edited in place.
#[derive(Debug, Default)]
pub struct DashboardState {
    unit_id: String,
    all_readings: Vec<Reading>,
    alert_readings: Vec<Reading>,
    active_view: ActiveView,
    last_classification: Option<Classification>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    pub fn set_unit_id(&mut self, unit_id: impl Into<String>) {
        self.unit_id = unit_id.into();
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Replace the "all readings" collection with a fresh fetch result.
    pub fn replace_all_readings(&mut self, readings: Vec<Reading>) {
        self.all_readings = readings;
    }

    /// Replace the "alerts only" collection with a fresh fetch result.
    pub fn replace_alert_readings(&mut self, readings: Vec<Reading>) {
        self.alert_readings = readings;
    }

    #[allow(dead_code)]
    pub fn all_readings(&self) -> &[Reading] {
        &self.all_readings
    }

    #[allow(dead_code)]
    pub fn alert_readings(&self) -> &[Reading] {
        &self.alert_readings
    }

    /// The collection selected by the current view.
    pub fn active_readings(&self) -> &[Reading] {
        match self.active_view {
            ActiveView::All => &self.all_readings,
            ActiveView::AlertsOnly => &self.alert_readings,
        }
    }

    pub fn last_classification(&self) -> Option<Classification> {
        self.last_classification
    }

    pub fn record_classification(&mut self, classification: Classification) {
        self.last_classification = Some(classification);
    }
}
