//! Backtesting workflow operations.

use crate::api::types::{BacktestRequest, BacktestRun};
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Submit a backtest for execution. Returns the run in its initial
    /// (usually "pending") status.
    pub async fn submit_backtest(&self, request: &BacktestRequest) -> Result<BacktestRun> {
        self.post_json("/api/backtests", request).await
    }

    /// List all backtest runs, newest first.
    pub async fn backtests(&self) -> Result<Vec<BacktestRun>> {
        self.get_json("/api/backtests").await
    }

    /// Fetch one run's status and metrics.
    pub async fn backtest(&self, id: &str) -> Result<BacktestRun> {
        self.get_json(&format!("/api/backtests/{}", id)).await
    }
}
