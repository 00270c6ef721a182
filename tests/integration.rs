//! Integration tests for the vacation pay engine.
//!
//! This suite drives the HTTP API end to end:
//! - Income averages and vacation pay
//! - Automatic payable day counting with holidays
//! - Period resizing and month labels
//! - Diagnostics for missing dates and a zero divisor
//! - CSV export
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

use vacation_pay::api::{AppState, create_router};
use vacation_pay::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/vacation_pay.yaml").expect("Failed to load config");
    AppState::from(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field serialized as a string.
fn decimal_field(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal fields are strings"))
}

fn assert_close(actual: Decimal, expected: &str) {
    let diff = (actual - decimal(expected)).abs();
    assert!(
        diff < decimal("0.0001"),
        "Expected approximately {}, got {}",
        expected,
        actual
    );
}

async fn post(router: Router, uri: &str, body: String) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = post(create_router_for_test(), uri, body.to_string()).await;

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn diagnostic_codes(json: &Value) -> Vec<String> {
    json["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap().to_string())
        .collect()
}

fn three_month_request() -> Value {
    json!({
        "months_count": 3,
        "monthly_incomes": [100, 200, 300],
        "bonuses": 50,
        "paid_days": 10
    })
}

// =============================================================================
// Income and vacation pay
// =============================================================================

#[tokio::test]
async fn test_three_month_period_manual_days() {
    let (status, json) = post_json("/recompute", three_month_request()).await;

    assert_eq!(status, StatusCode::OK);
    let output = &json["output"];
    assert_eq!(decimal_field(&output["total_income"]), decimal("650"));
    assert_close(decimal_field(&output["avg_monthly"]), "216.6667");
    assert_close(decimal_field(&output["avg_daily"]), "8.5639");
    assert_close(decimal_field(&output["vacation_pay"]), "85.6390");
    assert_eq!(output["paid_days"], 10);
    assert!(diagnostic_codes(&json).is_empty());
    assert_eq!(json["months_resized"], false);
}

#[tokio::test]
async fn test_response_metadata() {
    let (_, json) = post_json("/recompute", three_month_request()).await;

    assert!(json["calculation_id"].as_str().is_some());
    assert!(json["timestamp"].as_str().is_some());
    assert_eq!(json["engine_version"], env!("CARGO_PKG_VERSION"));

    let steps = json["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert_eq!(
        rule_ids,
        vec!["total_income", "avg_monthly", "avg_daily", "vacation_pay"]
    );
    assert_eq!(steps[0]["step_number"], 1);
    assert_eq!(steps[3]["step_number"], 4);
}

#[tokio::test]
async fn test_text_fields_with_decimal_commas() {
    let body = json!({
        "months_count": "2",
        "monthly_incomes": ["1000,50", " 999.50 "],
        "bonuses": "abc",
        "paid_days": "4"
    });
    let (status, json) = post_json("/recompute", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&json["output"]["total_income"]), decimal("2000"));
    assert_eq!(decimal_field(&json["output"]["avg_monthly"]), decimal("1000"));
    assert_eq!(decimal_field(&json["input"]["bonuses"]), Decimal::ZERO);
    assert_eq!(json["output"]["paid_days"], 4);
}

#[tokio::test]
async fn test_negative_values_count_as_zero() {
    let body = json!({
        "months_count": 2,
        "monthly_incomes": [-500, 300],
        "bonuses": -100,
        "paid_days": -5
    });
    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(decimal_field(&json["output"]["total_income"]), decimal("300"));
    assert_eq!(json["output"]["paid_days"], 0);
    assert_eq!(decimal_field(&json["output"]["vacation_pay"]), Decimal::ZERO);
}

// =============================================================================
// Period resizing and labels
// =============================================================================

#[tokio::test]
async fn test_growing_period_pads_with_zeros() {
    let mut body = three_month_request();
    body["months_count"] = json!(5);
    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(json["months_resized"], true);
    let incomes = json["input"]["monthly_incomes"].as_array().unwrap();
    assert_eq!(incomes.len(), 5);
    assert_eq!(decimal_field(&incomes[2]), decimal("300"));
    assert_eq!(decimal_field(&incomes[4]), Decimal::ZERO);
    assert_eq!(decimal_field(&json["output"]["avg_monthly"]), decimal("130"));
}

#[tokio::test]
async fn test_shrinking_period_drops_newest_months() {
    let mut body = three_month_request();
    body["months_count"] = json!(2);
    let (_, json) = post_json("/recompute", body).await;

    let incomes = json["input"]["monthly_incomes"].as_array().unwrap();
    assert_eq!(incomes.len(), 2);
    assert_eq!(decimal_field(&json["output"]["total_income"]), decimal("350"));
}

#[tokio::test]
async fn test_period_clamped_to_configured_range() {
    let (_, json) = post_json("/recompute", json!({ "months_count": 100 })).await;
    assert_eq!(json["input"]["months_count"], 36);
    assert_eq!(json["labels"].as_array().unwrap().len(), 36);

    let (_, json) = post_json("/recompute", json!({ "months_count": 0 })).await;
    assert_eq!(json["input"]["months_count"], 1);
    assert!(diagnostic_codes(&json).is_empty());
}

#[tokio::test]
async fn test_huge_period_text_is_clamped() {
    let (status, json) = post_json("/recompute", json!({ "months_count": "3e9" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["input"]["months_count"], 36);
    assert_eq!(json["input"]["monthly_incomes"].as_array().unwrap().len(), 36);
}

#[tokio::test]
async fn test_timestamp_dates_count_paid_days() {
    let mut body = three_month_request();
    body["auto_days"] = json!(true);
    body["start_date"] = json!("2024-03-04T00:00:00.000Z");
    body["end_date"] = json!("2024-03-17T21:00:00+03:00");
    body["holidays"] = json!("2024-03-08");

    let (_, json) = post_json("/recompute", body).await;

    assert!(diagnostic_codes(&json).is_empty());
    assert_eq!(json["output"]["paid_days"], 11);
    assert_eq!(json["input"]["start_date"], "2024-03-04");
}

#[tokio::test]
async fn test_labels_end_at_vacation_month() {
    let body = json!({
        "months_count": 3,
        "start_date": "2024-02-10",
        "monthly_incomes": [1, 2, 3]
    });
    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(
        json["labels"],
        json!(["December 2023", "January 2024", "February 2024"])
    );
}

#[tokio::test]
async fn test_labels_endpoint() {
    let (status, json) = post_json(
        "/labels",
        json!({ "start_date": "2024-03-15", "months_count": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["labels"],
        json!(["January 2024", "February 2024", "March 2024"])
    );
}

#[tokio::test]
async fn test_labels_endpoint_without_date_is_empty() {
    let (_, json) = post_json("/labels", json!({ "months_count": 3 })).await;
    assert_eq!(json["labels"], json!([]));
}

// =============================================================================
// Automatic payable days
// =============================================================================

#[tokio::test]
async fn test_auto_days_excludes_sundays_and_holidays() {
    // 2024-03-04 (Mon) .. 2024-03-17 (Sun): 14 days, 2 Sundays, 1 holiday
    let mut body = three_month_request();
    body["auto_days"] = json!(true);
    body["start_date"] = json!("2024-03-04");
    body["end_date"] = json!("2024-03-17");
    body["holidays"] = json!("2024-03-08, 2024-03-10, not-a-date");

    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(json["output"]["paid_days"], 11);
    assert_eq!(json["input"]["paid_days"], 11);
    let expected = decimal("650") / decimal("3") / decimal("25.3") * decimal("11");
    assert_close(decimal_field(&json["output"]["vacation_pay"]), &expected.to_string());

    let steps = json["audit_trace"]["steps"].as_array().unwrap();
    let paid_days_step = steps
        .iter()
        .find(|s| s["rule_id"] == "paid_days")
        .expect("paid_days step recorded");
    assert_eq!(
        paid_days_step["reasoning"],
        "14 calendar days - 2 Sundays - 1 holidays = 11 paid days"
    );
}

#[tokio::test]
async fn test_auto_days_missing_end_date_keeps_previous_count() {
    let mut body = three_month_request();
    body["auto_days"] = json!(true);
    body["start_date"] = json!("2024-03-04");

    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(json["output"]["paid_days"], 10);
    assert_eq!(diagnostic_codes(&json), vec!["missing_dates_for_auto_count"]);
    assert_eq!(
        json["diagnostics"][0]["message"],
        "start and end dates required for automatic day count"
    );
    assert_close(decimal_field(&json["output"]["vacation_pay"]), "85.6390");
}

#[tokio::test]
async fn test_auto_days_reversed_range_is_zero() {
    let mut body = three_month_request();
    body["auto_days"] = json!(true);
    body["start_date"] = json!("2024-03-17");
    body["end_date"] = json!("2024-03-04");

    let (_, json) = post_json("/recompute", body).await;

    assert_eq!(json["output"]["paid_days"], 0);
    assert!(diagnostic_codes(&json).is_empty());
}

#[tokio::test]
async fn test_paid_days_endpoint_full_year() {
    let (status, json) = post_json(
        "/paid-days",
        json!({ "start_date": "2018-01-01", "end_date": "2018-12-31" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["paid_days"], 313);
    assert_eq!(json["breakdown"]["calendar_days"], 365);
    assert_eq!(json["breakdown"]["rest_days"], 52);
}

#[tokio::test]
async fn test_paid_days_endpoint_holiday_list() {
    let (_, json) = post_json(
        "/paid-days",
        json!({
            "start_date": "2023-12-30",
            "end_date": "2024-01-02",
            "holidays": ["2024-01-01"]
        }),
    )
    .await;

    assert_eq!(json["paid_days"], 2);
}

#[tokio::test]
async fn test_paid_days_endpoint_missing_date_is_zero() {
    let (status, json) = post_json("/paid-days", json!({ "start_date": "2024-03-04" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["paid_days"], 0);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[tokio::test]
async fn test_zero_divisor_reports_diagnostic() {
    let mut body = three_month_request();
    body["daily_divisor"] = json!("0");

    let (status, json) = post_json("/recompute", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(diagnostic_codes(&json), vec!["zero_daily_divisor"]);
    assert_eq!(decimal_field(&json["output"]["avg_daily"]), Decimal::ZERO);
    assert_eq!(decimal_field(&json["output"]["vacation_pay"]), Decimal::ZERO);
    assert_eq!(decimal_field(&json["output"]["total_income"]), decimal("650"));
}

// =============================================================================
// CSV export
// =============================================================================

#[tokio::test]
async fn test_export_returns_csv_attachment() {
    let mut body = three_month_request();
    body["start_date"] = json!("2024-03-04");
    body["end_date"] = json!("2024-03-17");

    let response = post(create_router_for_test(), "/export", body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"vacation-calculator.csv\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("start_date;end_date;period_months;bonuses;month_1;month_2;"));
    assert!(
        lines[0].ends_with("month_12;paid_days;total_income;avg_monthly;avg_daily;vacation_pay")
    );
    assert!(lines[1].starts_with("2024-03-04;2024-03-17;3;50;100;200;300;;"));

    let fields: Vec<&str> = lines[1].split(';').collect();
    assert_eq!(fields.len(), 21);
    assert_eq!(fields[16], "10");
    assert_eq!(fields[17], "650");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = post(create_router_for_test(), "/recompute", "{invalid json".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_wrong_type_returns_validation_error() {
    let (status, json) = post_json("/recompute", json!({ "auto_days": "yes" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_body_is_reset_state() {
    let (status, json) = post_json("/recompute", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["input"]["months_count"], 12);
    assert_eq!(json["labels"][0], "Month 1");
    assert_eq!(json["labels"][11], "Month 12");
    assert_eq!(decimal_field(&json["output"]["vacation_pay"]), Decimal::ZERO);
}
