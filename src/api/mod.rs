//! HTTP API module for the payroll engine.
//!
//! This module exposes the payroll and calendar engines over HTTP:
//! `POST /calculate` for gross-to-net and net-to-gross calculations and
//! `GET /working-days/{year}` for the holiday and working-day table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, WorkingDaysResponse};
pub use state::AppState;
