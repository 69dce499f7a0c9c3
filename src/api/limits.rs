//! Risk limit configuration.

use crate::api::types::RiskLimits;
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Fetch the account's current risk limits.
    pub async fn risk_limits(&self) -> Result<RiskLimits> {
        self.get_json("/api/risk/limits").await
    }

    /// Replace the risk limits with the edited document.
    ///
    /// The server validates the document; a 422 response carries the
    /// field-level detail the classifier turns into a message.
    pub async fn update_risk_limits(&self, limits: &RiskLimits) -> Result<RiskLimits> {
        self.put_json("/api/risk/limits", limits).await
    }
}
