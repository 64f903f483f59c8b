//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers:
//! - Gross-to-net calculations at, inside and above the deduction band
//! - Dependents and the personal deduction
//! - Net-to-gross inversion
//! - Exchange rates (supplied and fallback)
//! - Payslip and cost split
//! - Working days and holidays per year
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ro").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal serialized as a JSON string.
fn decimal_at(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal serialized as string"))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_working_days(router: Router, year: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(format!("/working-days/{}", year))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn gross_to_net(amount: &str, dependents: u32) -> Value {
    json!({
        "mode": "gross_to_net",
        "amount": amount,
        "dependents": dependents,
        "year": 2025
    })
}

fn assert_breakdown(result: &Value, field: &str, expected: &str) {
    let actual = decimal_at(&result["breakdown"][field]);
    assert_eq!(
        actual,
        decimal(expected),
        "Expected breakdown.{} {}, got {}",
        field,
        expected,
        actual
    );
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Gross to net
// =============================================================================

#[tokio::test]
async fn test_minimum_wage_applies_relief() {
    let (status, result) = post_calculate(create_router_for_test(), gross_to_net("4050", 0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "untaxed_relief", "300");
    assert_breakdown(&result, "personal_deduction", "810");
    assert_breakdown(&result, "contribution_base", "3750");
    assert_breakdown(&result, "cas", "938");
    assert_breakdown(&result, "cass", "375");
    assert_breakdown(&result, "taxable", "1627");
    assert_breakdown(&result, "tax", "163");
    assert_breakdown(&result, "net", "2574");
    assert_breakdown(&result, "cam", "91");
    assert_breakdown(&result, "employer_cost", "4141");
}

#[tokio::test]
async fn test_gross_above_band() {
    let (status, result) = post_calculate(create_router_for_test(), gross_to_net("7000", 0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "untaxed_relief", "0");
    assert_breakdown(&result, "personal_deduction", "0");
    assert_breakdown(&result, "cas", "1750");
    assert_breakdown(&result, "cass", "700");
    assert_breakdown(&result, "taxable", "4550");
    assert_breakdown(&result, "tax", "455");
    assert_breakdown(&result, "net", "4095");
    assert_breakdown(&result, "cam", "158");
    assert_breakdown(&result, "employer_cost", "7158");
}

#[tokio::test]
async fn test_gross_inside_band() {
    let (status, result) = post_calculate(create_router_for_test(), gross_to_net("5000", 0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "personal_deduction", "425.25");
    assert_breakdown(&result, "tax", "282");
    assert_breakdown(&result, "net", "2968");
}

#[tokio::test]
async fn test_dependents_increase_deduction() {
    let (_, none) = post_calculate(create_router_for_test(), gross_to_net("5000", 0)).await;
    let (_, two) = post_calculate(create_router_for_test(), gross_to_net("5000", 2)).await;

    assert_breakdown(&two, "personal_deduction", "637.875");
    assert_breakdown(&two, "net", "2989");
    assert!(decimal_at(&two["breakdown"]["net"]) > decimal_at(&none["breakdown"]["net"]));
}

#[tokio::test]
async fn test_numeric_amount_accepted() {
    let body = json!({"mode": "gross_to_net", "amount": 7000, "year": 2025});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "net", "4095");
}

#[tokio::test]
async fn test_default_year_is_latest_configured() {
    let body = json!({"mode": "gross_to_net", "amount": "7000"});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["fiscal_year"], 2025);
    assert!(!warning_codes(&result).contains(&"FISCAL_YEAR_CARRIED_FORWARD".to_string()));
}

#[tokio::test]
async fn test_negative_amount_clamped() {
    let (status, result) = post_calculate(create_router_for_test(), gross_to_net("-250", 0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "gross", "0");
    assert_breakdown(&result, "net", "0");
    assert!(warning_codes(&result).contains(&"NEGATIVE_AMOUNT_CLAMPED".to_string()));
}

// =============================================================================
// SECTION 2: Net to gross
// =============================================================================

#[tokio::test]
async fn test_net_to_gross_round_trip() {
    let body = json!({"mode": "net_to_gross", "amount": "4095", "year": 2025});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["mode"], "net_to_gross");
    let gross = decimal_at(&result["breakdown"]["gross"]);
    let net = decimal_at(&result["breakdown"]["net"]);
    assert!((gross - decimal("7000")).abs() < Decimal::ONE);
    assert!((net - decimal("4095")).abs() <= Decimal::ONE);
    assert_eq!(decimal_at(&result["requested_amount"]), decimal("4095"));
}

#[tokio::test]
async fn test_net_to_gross_with_dependents() {
    let body = json!({"mode": "net_to_gross", "amount": "2989", "dependents": 2, "year": 2025});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    let gross = decimal_at(&result["breakdown"]["gross"]);
    assert!((gross - decimal("5000")).abs() < decimal("2"));
}

// =============================================================================
// SECTION 3: Exchange rate, payslip, cost split
// =============================================================================

#[tokio::test]
async fn test_supplied_exchange_rate() {
    let body = json!({
        "mode": "gross_to_net",
        "amount": "7000",
        "year": 2025,
        "exchange_rate": "0.2011",
        "exchange_rate_date": "2025-03-14"
    });
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["exchange_rate"]["source"], "supplied");
    assert_eq!(result["exchange_rate"]["as_of"], "2025-03-14");
    assert_eq!(decimal_at(&result["converted"]["net"]), decimal("823.50"));
    assert!(!warning_codes(&result).contains(&"EXCHANGE_RATE_FALLBACK".to_string()));
}

#[tokio::test]
async fn test_fallback_exchange_rate() {
    let body = json!({
        "mode": "gross_to_net",
        "amount": "7000",
        "year": 2025,
        "exchange_rate": "0"
    });
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["exchange_rate"]["source"], "fallback");
    assert_eq!(result["exchange_rate"]["currency"], "EUR");
    assert_eq!(decimal_at(&result["converted"]["employer_cost"]), decimal("1431.60"));
    assert!(warning_codes(&result).contains(&"EXCHANGE_RATE_FALLBACK".to_string()));
}

#[tokio::test]
async fn test_conversion_overflow_saturates() {
    let body = json!({
        "mode": "gross_to_net",
        "amount": "79228162514264337593543950335",
        "exchange_rate": "5"
    });
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["exchange_rate"]["source"], "supplied");
    assert_eq!(decimal_at(&result["converted"]["gross"]), Decimal::MAX);
}

#[tokio::test]
async fn test_payslip_sections() {
    let (_, result) = post_calculate(create_router_for_test(), gross_to_net("4050", 0)).await;

    let sections = result["payslip"]["sections"].as_array().unwrap();
    let titles: Vec<&str> = sections.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Angajat", "Angajator", "Deduceri aplicate"]);
    assert_eq!(sections[0]["lines"][0]["label"], "CAS (25%)");
    assert_eq!(decimal_at(&result["payslip"]["net"]), decimal("2574"));
}

#[tokio::test]
async fn test_cost_split() {
    let (_, result) = post_calculate(create_router_for_test(), gross_to_net("7000", 0)).await;

    assert_eq!(decimal_at(&result["cost_split"]["employee_pct"]), decimal("57.2"));
    assert_eq!(decimal_at(&result["cost_split"]["state_pct"]), decimal("42.8"));
}

#[tokio::test]
async fn test_audit_trace_steps() {
    let (_, result) = post_calculate(create_router_for_test(), gross_to_net("7000", 0)).await;

    let rule_ids: Vec<&str> = result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "untaxed_relief",
            "personal_deduction",
            "social_contributions",
            "income_tax",
            "net_salary",
            "employer_contribution"
        ]
    );
}

// =============================================================================
// SECTION 4: Working days
// =============================================================================

#[tokio::test]
async fn test_working_days_2025() {
    let (status, result) = get_working_days(create_router_for_test(), "2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["easter"], "2025-04-20");
    assert_eq!(result["holidays"].as_array().unwrap().len(), 17);
    assert_eq!(result["summary"]["months"][0]["total"], 31);
    assert_eq!(result["summary"]["months"][0]["work"], 18);
    assert_eq!(result["summary"]["total_days"], 365);
    assert_eq!(result["summary"]["total_work"], 248);
    assert_eq!(result["summary"]["hours_at_8h"], 1984);
    assert_eq!(result["holidays_by_month"]["3"].as_array().unwrap().len(), 3);
    assert!(result["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_working_days_leap_year() {
    let (status, result) = get_working_days(create_router_for_test(), "2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["easter"], "2024-05-05");
    assert_eq!(result["summary"]["months"][1]["total"], 29);
    assert_eq!(result["summary"]["total_days"], 366);
    assert_eq!(result["summary"]["total_work"], 252);
}

#[tokio::test]
async fn test_working_days_coincidence_warning() {
    let (status, result) = get_working_days(create_router_for_test(), "2026").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["holidays"].as_array().unwrap().len(), 17);
    assert_eq!(result["summary"]["total_work"], 250);
    assert_eq!(result["warnings"][0]["code"], "HOLIDAY_COINCIDENCE");
}

#[tokio::test]
async fn test_working_days_out_of_window_warning() {
    let (status, result) = get_working_days(create_router_for_test(), "2200").await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = result["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"EASTER_OUTSIDE_VALIDITY_WINDOW"));
}

// =============================================================================
// SECTION 5: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let (status, result) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_mode() {
    let (status, result) =
        post_calculate(create_router_for_test(), json!({"amount": "7000"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_mode() {
    let body = json!({"mode": "sideways", "amount": "7000"});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_year_before_first_configuration() {
    let body = json!({"mode": "gross_to_net", "amount": "7000", "year": 2019});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "FISCAL_YEAR_NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_year_in_path() {
    let (status, result) = get_working_days(create_router_for_test(), "twenty").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
