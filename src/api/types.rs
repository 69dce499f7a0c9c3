//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A RiskDesk user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    /// Role name (e.g., "trader", "risk_manager", "admin").
    pub role: String,
    /// RFC 3339 creation timestamp, as reported by the backend.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Response from the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial user update; absent fields are left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// An open position, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: f64,
    pub avg_price: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
}

/// Account-wide risk limits edited in the configuration screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLimits {
    pub max_position_size: f64,
    pub max_daily_loss: f64,
    pub max_leverage: f64,
    #[serde(default)]
    pub allowed_symbols: Vec<String>,
}

/// Request to launch a backtest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub strategy: String,
    pub symbol: String,
    /// Inclusive ISO date bounds.
    pub start_date: String,
    pub end_date: String,
    pub initial_capital: f64,
    /// Strategy-specific parameters, passed through opaquely.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
}

/// A backtest run: submitted request plus server-side status and results.
#[derive(Debug, Clone, Deserialize)]
pub struct BacktestRun {
    pub id: String,
    /// "pending", "running", "completed" or "failed".
    pub status: String,
    #[serde(default)]
    pub metrics: Option<BacktestMetrics>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BacktestRun {
    /// Whether the run has reached a terminal status.
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "completed" | "failed")
    }
}

/// Summary metrics of a completed backtest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BacktestMetrics {
    pub total_return: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    pub trade_count: u64,
}
