//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    audit_breakdown, build_payslip, compute_from_gross, duplicate_dates, format_iso,
    holidays_by_month, holidays_for_year, is_easter_year_supported, orthodox_easter,
    solve_gross_for_net, working_days_by_month,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, AuditWarning, CalculationMode, CalculationResult, ExchangeRate, RateSource,
    WorkingDaysSummary,
};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, WorkingDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/working-days/:year", get(working_days_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn warning(code: &str, message: String, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the payroll breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                mode = ?result.mode,
                fiscal_year = result.fiscal_year,
                dependents = result.dependents,
                gross = %result.breakdown.gross,
                net = %result.breakdown.net,
                warnings = result.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Runs a gross-to-net or net-to-gross calculation for a request.
fn perform_calculation(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let requested_year = request.year.unwrap_or_else(|| config.latest_year());
    let fiscal = config.fiscal_year(requested_year)?;
    if fiscal.year != requested_year {
        warnings.push(warning(
            "FISCAL_YEAR_CARRIED_FORWARD",
            format!(
                "No configuration for {}; applying the {} fiscal year",
                requested_year, fiscal.year
            ),
            "low",
        ));
    }

    let amount = if request.amount < Decimal::ZERO {
        warn!(amount = %request.amount, "Negative amount clamped to zero");
        warnings.push(warning(
            "NEGATIVE_AMOUNT_CLAMPED",
            format!("Amount {} was clamped to 0", request.amount),
            "medium",
        ));
        Decimal::ZERO
    } else {
        request.amount
    };

    let gross = match request.mode {
        CalculationMode::GrossToNet => amount,
        CalculationMode::NetToGross => solve_gross_for_net(amount, request.dependents, fiscal),
    };
    let breakdown = compute_from_gross(gross, request.dependents, fiscal);

    if request.mode == CalculationMode::NetToGross && (breakdown.net - amount).abs() > Decimal::ONE
    {
        warnings.push(warning(
            "TARGET_NET_UNREACHABLE",
            format!(
                "No gross yields a net of {}; closest reachable net is {}",
                amount, breakdown.net
            ),
            "medium",
        ));
    }

    let currency = config.currency();
    let exchange_rate = ExchangeRate::resolve(
        currency.foreign_currency.clone(),
        request.exchange_rate,
        request.exchange_rate_date,
        currency.fallback_rate,
    );
    if exchange_rate.source == RateSource::Fallback {
        warnings.push(warning(
            "EXCHANGE_RATE_FALLBACK",
            format!(
                "No usable exchange rate supplied; using fallback {} {} per {}",
                exchange_rate.rate,
                exchange_rate.currency,
                config.jurisdiction().currency
            ),
            "low",
        ));
    }

    let steps = audit_breakdown(&breakdown, request.dependents, fiscal);
    let payslip = build_payslip(&breakdown, request.dependents, &fiscal.rates);
    let converted = exchange_rate.convert_breakdown(&breakdown);
    let cost_split = breakdown.cost_split();

    let duration_us = micros(start_time.elapsed());

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        mode: request.mode,
        requested_amount: amount,
        fiscal_year: fiscal.year,
        dependents: request.dependents,
        breakdown,
        cost_split,
        exchange_rate,
        converted,
        payslip,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

/// Handler for GET /working-days/{year} endpoint.
///
/// Returns the legal holidays and per-month working days for a year.
async fn working_days_handler(year: Result<Path<i32>, PathRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid year in path"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(format!("Invalid year: {}", rejection.body_text())),
            );
        }
    };

    let start_time = Instant::now();
    match build_working_days(year) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                year,
                total_work = response.summary.total_work,
                warnings = response.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Working days computed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year,
                error = %err,
                "Working days request failed"
            );
            error_response(err.into())
        }
    }
}

fn build_working_days(year: i32) -> EngineResult<WorkingDaysResponse> {
    let mut warnings = Vec::new();

    let easter = orthodox_easter(year)?;
    if !is_easter_year_supported(year) {
        warnings.push(warning(
            "EASTER_OUTSIDE_VALIDITY_WINDOW",
            format!(
                "Orthodox Easter for {} is outside 1900-2099 and may be inaccurate",
                year
            ),
            "medium",
        ));
    }

    let holidays = holidays_for_year(year)?;
    for date in duplicate_dates(&holidays) {
        let names: Vec<&str> = holidays
            .iter()
            .filter(|h| h.date == date)
            .map(|h| h.name.as_str())
            .collect();
        warnings.push(warning(
            "HOLIDAY_COINCIDENCE",
            format!("{} falls on {}", names.join(" and "), format_iso(date)),
            "low",
        ));
    }

    let dates: HashSet<_> = holidays.iter().map(|h| h.date).collect();
    let months = working_days_by_month(year, &dates)?;
    let by_month: BTreeMap<u32, Vec<String>> = holidays_by_month(&holidays)
        .into_iter()
        .map(|(month, group)| (month, group.into_iter().map(|h| h.name).collect()))
        .collect();

    Ok(WorkingDaysResponse {
        year,
        easter,
        holidays,
        holidays_by_month: by_month,
        summary: WorkingDaysSummary::new(year, months),
        warnings,
    })
}
