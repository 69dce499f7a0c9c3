//! Position queries for the dashboard.

use crate::api::types::Position;
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// List all open positions.
    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.get_json("/api/positions").await
    }

    /// Fetch a single position by symbol. 404 maps to the not-found error.
    pub async fn position(&self, symbol: &str) -> Result<Position> {
        self.get_json(&format!("/api/positions/{}", symbol)).await
    }
}
