use tracing::info;

use crate::{
    dashboard::{ActiveView, DashboardState},
    error::GatewayError,
    gateway::SensorApi,
    model::SensorValues,
};

/// Identifier used for synthetic submissions while the operator has not
/// entered a unit ID yet.
const FALLBACK_UNIT_ID: &str = "unit-123";

/// Drives user actions against the gateway and owns the dashboard state.
///
/// Every action awaits its gateway call in full and commits the complete
/// result in one step; a failed call leaves the state untouched and hands
/// the error to the caller for display.
pub struct DashboardController<G> {
    gateway: G,
    state: DashboardState,
}

impl<G: SensorApi> DashboardController<G> {
    pub fn new(gateway: G, state: DashboardState) -> Self {
        Self { gateway, state }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn set_unit_id(&mut self, unit_id: impl Into<String>) {
        self.state.set_unit_id(unit_id);
    }

    /// "Show All Readings": fetch the full list and make it the active view.
    pub async fn show_all(&mut self) -> Result<(), GatewayError> {
        let unit_id = self.state.unit_id().to_owned();
        let readings = self.gateway.fetch_readings(&unit_id).await?;
        info!(unit_id = %unit_id, count = readings.len(), "Fetched readings");

        self.state.replace_all_readings(readings);
        self.state.set_active_view(ActiveView::All);
        Ok(())
    }

    /// "Show Alerts Only": fetch the alert list and make it the active view.
    pub async fn show_alerts(&mut self) -> Result<(), GatewayError> {
        let unit_id = self.state.unit_id().to_owned();
        let alerts = self.gateway.fetch_alerts(&unit_id).await?;
        info!(unit_id = %unit_id, count = alerts.len(), "Fetched alerts");

        self.state.replace_alert_readings(alerts);
        self.state.set_active_view(ActiveView::AlertsOnly);
        Ok(())
    }

    /// "Send Random Reading": submit generated values, then refresh the
    /// all-readings collection through a chained fetch.
    ///
    /// The refresh runs even when alerts are on screen and does not switch
    /// the view; it only brings the underlying collection up to date.
    pub async fn send_random(&mut self) -> Result<(), GatewayError> {
        let unit_id = match self.state.unit_id() {
            "" => FALLBACK_UNIT_ID.to_owned(),
            id => id.to_owned(),
        };
        let values = SensorValues::synthetic();

        let classification = self.gateway.submit_reading(&unit_id, values).await?;
        info!(unit_id = %unit_id, classification = %classification, "Reading submitted");
        self.state.record_classification(classification);

        let readings = self.gateway.fetch_readings(&unit_id).await?;
        self.state.replace_all_readings(readings);
        Ok(())
    }
}
