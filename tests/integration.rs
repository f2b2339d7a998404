//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers:
//! - Shift durations, including overnight shifts
//! - Earnings per shift type
//! - Hour buckets and leave counts
//! - Date range and agent filters
//! - Net pay with adjustments
//! - Share links
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
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn create_strict_router() -> Router {
    let yaml = std::fs::read_to_string("./config/payroll.yaml").expect("Failed to read config");
    let yaml = yaml.replace("unknown_shift_type: regular_fallback", "unknown_shift_type: reject");
    let config = ConfigLoader::from_yaml_str(&yaml, "strict").expect("Failed to parse config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
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

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/calculate", body).await
}

fn create_entry(agent: &str, date: &str, time_in: &str, time_out: &str, rate: &str, shift_type: &str) -> Value {
    json!({
        "date": date,
        "agent_name": agent,
        "time_in": time_in,
        "time_out": time_out,
        "hourly_rate": rate,
        "shift_type": shift_type
    })
}

fn create_request(entries: Vec<Value>) -> Value {
    json!({ "entries": entries })
}

fn assert_decimal(value: &Value, expected: &str, what: &str) {
    let actual = value.as_str().unwrap_or_else(|| panic!("{} is not a string: {}", what, value));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        what,
        expected,
        actual
    );
}

fn assert_total_earnings(result: &Value, expected: &str) {
    assert_decimal(&result["totals"]["total_earnings"], expected, "total_earnings");
}

fn assert_total_hours(result: &Value, expected: &str) {
    assert_decimal(&result["totals"]["total_hours"], expected, "total_hours");
}

fn agent<'a>(result: &'a Value, name: &str) -> &'a Value {
    result["agents"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["agent_name"] == name)
        .unwrap_or_else(|| panic!("agent {} not in report", name))
}

// =============================================================================
// SECTION 1: Durations
// =============================================================================

#[tokio::test]
async fn test_day_shift_duration() {
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "9:00 AM", "6:00 PM", "100", "Regular Shift",
    )]);

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_hours(&result, "9");
    assert_total_earnings(&result, "900");
}

#[tokio::test]
async fn test_overnight_shift_wraps_past_midnight() {
    // 10:00 PM to 6:00 AM is eight hours, not minus sixteen
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "10:00 PM", "6:00 AM", "100", "Regular Shift",
    )]);

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_hours(&result, "8");
    assert_total_earnings(&result, "800");
}

#[tokio::test]
async fn test_partial_hours() {
    // 8:15 AM to 5:45 PM = 9.5 hours
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "8:15 AM", "5:45 PM", "100", "Regular Shift",
    )]);

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    assert_total_hours(&result, "9.5");
    assert_total_earnings(&result, "950");
}

#[tokio::test]
async fn test_noon_and_midnight() {
    // 12:00 AM is 00:00 and 12:00 PM is noon
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "12:00 AM", "12:00 PM", "100", "Regular Shift",
    )]);

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    assert_total_hours(&result, "12");
}

// =============================================================================
// SECTION 2: Earnings per shift type
// =============================================================================

#[tokio::test]
async fn test_earnings_per_shift_type() {
    let cases = [
        ("Regular Shift", "800"),
        ("Regular OT", "1000"),
        ("Rest Day OT", "1040"),
        ("Special Holidays", "1040"),
        ("Regular Holidays", "1600"),
        ("UnPaid Leave", "0"),
        ("UnPaid SL", "0"),
    ];

    for (shift_type, expected) in cases {
        let request = create_request(vec![create_entry(
            "Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", shift_type,
        )]);
        let (status, result) = post_calculate(create_router_for_test(), request).await;

        assert_eq!(status, StatusCode::OK, "{}", shift_type);
        assert_total_earnings(&result, expected);
    }
}

#[tokio::test]
async fn test_paid_leave_credits_flat_eight_hours() {
    // recorded as a two-hour entry, paid as a full day
    let request = create_request(vec![
        create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "11:00 AM", "100", "Paid Leave"),
        create_entry("Ana Cruz", "2025-03-04", "9:00 AM", "9:00 AM", "100", "Paid SL"),
    ]);

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_earnings(&result, "1600");
    assert_eq!(result["leave_hours_policy"], "flat_credit");
}

#[tokio::test]
async fn test_fractional_rate_keeps_cents() {
    // 114.94 x 7.5 = 862.05
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "9:00 AM", "4:30 PM", "114.94", "Regular Shift",
    )]);

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    assert_total_earnings(&result, "862.05");
}

// =============================================================================
// SECTION 3: Hour buckets and leave counts
// =============================================================================

#[tokio::test]
async fn test_hour_buckets() {
    let request = create_request(vec![
        create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        create_entry("Ana Cruz", "2025-03-03", "5:00 PM", "8:00 PM", "100", "Regular OT"),
        create_entry("Ana Cruz", "2025-03-08", "9:00 AM", "1:00 PM", "100", "Rest Day OT"),
        create_entry("Ana Cruz", "2025-03-10", "9:00 AM", "5:00 PM", "100", "Special Holidays"),
        create_entry("Ana Cruz", "2025-03-11", "9:00 AM", "5:00 PM", "100", "Regular Holidays"),
        create_entry("Ana Cruz", "2025-03-12", "9:00 AM", "9:00 AM", "100", "Paid Leave"),
        create_entry("Ana Cruz", "2025-03-13", "9:00 AM", "9:00 AM", "100", "UnPaid Leave"),
        create_entry("Ana Cruz", "2025-03-14", "9:00 AM", "9:00 AM", "100", "Paid SL"),
    ]);

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let totals = &result["totals"];
    assert_decimal(&totals["total_hours"], "31", "total_hours");
    assert_decimal(&totals["overtime_hours"], "7", "overtime_hours");
    assert_decimal(&totals["holiday_hours"], "16", "holiday_hours");
    assert_eq!(totals["leave_days"], 2);
    assert_eq!(totals["sick_leave_days"], 1);
    assert_eq!(totals["entry_count"], 8);
}

#[tokio::test]
async fn test_agents_reported_separately_and_in_name_order() {
    let request = create_request(vec![
        create_entry("Jose Reyes", "2025-03-03", "9:00 AM", "5:00 PM", "80", "Regular Shift"),
        create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        create_entry("Jose Reyes", "2025-03-04", "9:00 AM", "5:00 PM", "80", "Regular Holidays"),
    ]);

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    let names: Vec<&str> = result["agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["agent_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana Cruz", "Jose Reyes"]);

    assert_decimal(&agent(&result, "Jose Reyes")["totals"]["total_earnings"], "1920", "Jose earnings");
    assert_decimal(&agent(&result, "Ana Cruz")["totals"]["total_earnings"], "800", "Ana earnings");
    assert_total_earnings(&result, "2720");
}

#[tokio::test]
async fn test_result_does_not_depend_on_entry_order() {
    let entries = vec![
        create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        create_entry("Jose Reyes", "2025-03-05", "10:00 PM", "6:00 AM", "80", "Regular OT"),
        create_entry("Ana Cruz", "2025-03-07", "9:00 AM", "9:00 AM", "100", "Paid Leave"),
    ];
    let mut reversed = entries.clone();
    reversed.reverse();

    let (_, a) = post_calculate(create_router_for_test(), create_request(entries)).await;
    let (_, b) = post_calculate(create_router_for_test(), create_request(reversed)).await;

    assert_eq!(a["agents"], b["agents"]);
    assert_eq!(a["totals"], b["totals"]);
}

// =============================================================================
// SECTION 4: Filters
// =============================================================================

#[tokio::test]
async fn test_date_range_filter_is_inclusive() {
    let request = json!({
        "entries": [
            create_entry("Ana Cruz", "2025-02-28", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
            create_entry("Ana Cruz", "2025-03-01", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
            create_entry("Ana Cruz", "2025-03-15", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
            create_entry("Ana Cruz", "2025-03-16", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        ],
        "filter": { "range": { "start_date": "2025-03-01", "end_date": "2025-03-15" } }
    });

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["totals"]["entry_count"], 2);
    assert_total_earnings(&result, "1600");
}

#[tokio::test]
async fn test_agent_filter() {
    let request = json!({
        "entries": [
            create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
            create_entry("Jose Reyes", "2025-03-03", "9:00 AM", "5:00 PM", "80", "Regular Shift"),
        ],
        "filter": { "agent_name": "Jose Reyes" }
    });

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(result["agents"].as_array().unwrap().len(), 1);
    assert_total_earnings(&result, "640");
}

// =============================================================================
// SECTION 5: Net pay
// =============================================================================

#[tokio::test]
async fn test_net_pay_with_adjustments() {
    let request = json!({
        "entries": [
            create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
            create_entry("Ana Cruz", "2025-03-04", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        ],
        "adjustments": [
            {
                "id": "6f1c5a4e-3f7b-4c1d-9a55-0d3c7e2b8a11",
                "agent_name": "Ana Cruz",
                "kind": "deduction",
                "amount": "300",
                "description": "cash advance"
            },
            {
                "id": "0b8d2f7a-5c1e-4e9b-8f3a-6a2d4c9e1b22",
                "agent_name": "Ana Cruz",
                "kind": "reimbursement",
                "amount": "125.50",
                "description": "internet"
            },
            {
                "id": "c2e7a9b1-8d4f-4a6c-b3e5-1f9d7a2c4e33",
                "agent_name": "Jose Reyes",
                "kind": "deduction",
                "amount": "999"
            }
        ]
    });

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let net = &agent(&result, "Ana Cruz")["net_pay"];
    assert_decimal(&net["earnings"], "1600", "earnings");
    assert_decimal(&net["deductions"], "300", "deductions");
    assert_decimal(&net["reimbursements"], "125.50", "reimbursements");
    assert_decimal(&net["net_pay"], "1425.50", "net_pay");
}

#[tokio::test]
async fn test_audit_trace_has_one_step_per_entry() {
    let request = create_request(vec![
        create_entry("Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Regular Shift"),
        create_entry("Ana Cruz", "2025-03-04", "9:00 AM", "9:00 AM", "100", "Paid Leave"),
    ]);

    let (_, result) = post_calculate(create_router_for_test(), request).await;

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert!(steps.iter().all(|s| s["rule_id"] == "entry_earnings"));
    assert!(steps[1]["reasoning"].as_str().unwrap().contains("flat 8 hours"));
}

// =============================================================================
// SECTION 6: Share links
// =============================================================================

#[tokio::test]
async fn test_share_link_issued_and_resolved() {
    let (status, issued) = post_json(
        create_router_for_test(),
        "/share-links",
        json!({
            "agent_name": "Ana Cruz",
            "start_date": "2025-03-01",
            "end_date": "2025-03-15"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = issued["token"].as_str().unwrap();
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    let (status, report) = send(
        create_router_for_test(),
        Request::builder()
            .uri(format!("/share/{}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["filter"]["agent_name"], "Ana Cruz");
    assert_eq!(report["filter"]["range"]["start_date"], "2025-03-01");
    assert_eq!(report["filter"]["range"]["end_date"], "2025-03-15");
}

#[tokio::test]
async fn test_share_link_reversed_range_rejected() {
    let (status, error) = post_json(
        create_router_for_test(),
        "/share-links",
        json!({
            "agent_name": "Ana Cruz",
            "start_date": "2025-03-15",
            "end_date": "2025-03-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_mangled_share_link_fails_closed() {
    let (status, error) = send(
        create_router_for_test(),
        Request::builder()
            .uri("/share/bm90LWEtdG9rZW4")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SHARE_LINK");
}

// =============================================================================
// SECTION 7: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_time_is_rejected() {
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "13:00 PM", "5:00 PM", "100", "Regular Shift",
    )]);

    let (status, error) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_TIME");
    assert!(error["message"].as_str().unwrap().contains("13:00 PM"));
}

#[tokio::test]
async fn test_unknown_shift_type_falls_back_to_regular() {
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Night Differential",
    )]);

    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_earnings(&result, "800");
}

#[tokio::test]
async fn test_unknown_shift_type_rejected_when_strict() {
    let request = create_request(vec![create_entry(
        "Ana Cruz", "2025-03-03", "9:00 AM", "5:00 PM", "100", "Night Differential",
    )]);

    let (status, error) = post_calculate(create_strict_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNKNOWN_SHIFT_TYPE");
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let request = json!({
        "entries": [{
            "date": "2025-03-03",
            "agent_name": "Ana Cruz",
            "time_in": "9:00 AM",
            "hourly_rate": "100",
            "shift_type": "Regular Shift"
        }]
    });

    let (status, error) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type() {
    let (status, error) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from(create_request(vec![]).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_empty_request_returns_empty_report() {
    let (status, result) = post_calculate(create_router_for_test(), create_request(vec![])).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["agents"].as_array().unwrap().is_empty());
    assert_total_earnings(&result, "0");
}
