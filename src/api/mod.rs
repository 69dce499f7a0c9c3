//! Typed bindings over the RiskDesk REST API.
//!
//! Each file binds one backend surface to methods on
//! [`ApiClient`](crate::client::ApiClient); the wire models live in
//! [`types`]. Every call goes through the client's shared request path, so
//! bearer decoration, error mapping, and 401 teardown apply uniformly.
//!
//! ## Endpoints
//!
//! ### Auth
//! - `POST /api/auth/login` - Log in (form-encoded credentials)
//! - `POST /api/auth/register` - Create an account
//! - `GET /api/auth/me` - Fetch the current user's profile
//! - `PUT /api/auth/me` - Update the current user's profile
//!
//! ### Positions
//! - `GET /api/positions` - List open positions
//! - `GET /api/positions/{symbol}` - Fetch one position
//!
//! ### Risk limits
//! - `GET /api/risk/limits` - Fetch risk limits
//! - `PUT /api/risk/limits` - Replace risk limits
//!
//! ### Backtests
//! - `POST /api/backtests` - Submit a backtest
//! - `GET /api/backtests` - List runs
//! - `GET /api/backtests/{id}` - Fetch one run

mod auth;
mod backtests;
mod limits;
mod positions;
pub mod types;

pub use types::{
    BacktestMetrics, BacktestRequest, BacktestRun, Position, ProfileUpdate, RegisterRequest,
    RiskLimits, TokenResponse, User,
};
