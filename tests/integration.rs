//! Comprehensive integration tests for the payroll engine.
//!
//! This test suite covers all calculation scenarios including:
//! - CLT payslips (overtime, INSS, IRRF, FGTS)
//! - PJ payslips (no statutory withholdings)
//! - Overtime edge cases and rounding
//! - Error cases
//! - Payroll report consolidation

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::TaxTableLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let loader =
        TaxTableLoader::load("./config/tables/2024.yaml").expect("Failed to load tax table");
    AppState::new(loader.table().clone())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_calculation_request(
    id: &str,
    department: Option<&str>,
    contract_type: &str,
    base_salary: &str,
    overtime_hours: &str,
) -> Value {
    json!({
        "worker": {
            "id": id,
            "department": department,
            "contract_type": contract_type,
            "base_salary": base_salary
        },
        "overtime_hours": overtime_hours,
        "period": {"month": 3, "year": 2024}
    })
}

fn create_benefit(employee_id: &str, type_name: &str, value: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "benefit_type": {"name": type_name},
        "value": value
    })
}

fn assert_payslip_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["payslip"][field].as_str().unwrap();
    let actual_normalized = normalize_decimal(actual);
    let expected_normalized = normalize_decimal(expected);
    assert_eq!(
        actual_normalized, expected_normalized,
        "Expected payslip.{} {}, got {}",
        field, expected_normalized, actual_normalized
    );
}

fn assert_summary_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["summary"][field].as_str().unwrap();
    let actual_normalized = normalize_decimal(actual);
    let expected_normalized = normalize_decimal(expected);
    assert_eq!(
        actual_normalized, expected_normalized,
        "Expected summary.{} {}, got {}",
        field, expected_normalized, actual_normalized
    );
}

// =============================================================================
// SECTION 1: CLT Payslip Tests - 6 tests
// =============================================================================

#[tokio::test]
async fn test_clt_3000_with_10h_overtime() {
    // CLT worker, R$3000 base, 10h overtime
    // Hourly: 3000 / 220 = 13.6363..., overtime: 13.6363 * 10 * 1.5 = 204.55
    // Gross: 3204.55, INSS: 283.37, IRRF: 56.74, net: 2864.44
    let router = create_router_for_test();
    let request = create_calculation_request("emp_001", Some("Engenharia"), "CLT", "3000.00", "10");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "base_salary", "3000.00");
    assert_payslip_amount(&result, "overtime_pay", "204.55");
    assert_payslip_amount(&result, "gross_salary", "3204.55");
    assert_payslip_amount(&result, "inss", "283.37");
    assert_payslip_amount(&result, "irrf", "56.74");
    assert_payslip_amount(&result, "fgts", "256.364");
    assert_payslip_amount(&result, "deductions", "340.11");
    assert_payslip_amount(&result, "net_salary", "2864.44");
    assert_eq!(result["payslip"]["status"], "pending");
}

#[tokio::test]
async fn test_clt_2000_without_overtime() {
    // CLT worker, R$2000 base, no overtime
    // INSS: 105.90 + (2000 - 1412) * 0.09 = 158.82
    // IRRF base: 1841.18, below the exemption limit
    let router = create_router_for_test();
    let request = create_calculation_request("emp_002", None, "CLT", "2000.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "gross_salary", "2000.00");
    assert_payslip_amount(&result, "inss", "158.82");
    assert_payslip_amount(&result, "irrf", "0");
    assert_payslip_amount(&result, "fgts", "160.00");
    assert_payslip_amount(&result, "net_salary", "1841.18");
}

#[tokio::test]
async fn test_clt_minimum_wage() {
    // CLT worker at the 2024 minimum wage of R$1412
    // INSS: 1412 * 0.075 = 105.90, no IRRF
    let router = create_router_for_test();
    let request = create_calculation_request("emp_003", None, "CLT", "1412.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "inss", "105.90");
    assert_payslip_amount(&result, "irrf", "0");
    assert_payslip_amount(&result, "net_salary", "1306.10");
}

#[tokio::test]
async fn test_clt_10000_hits_inss_ceiling() {
    // CLT worker, R$10000 base
    // INSS is capped at the contribution ceiling: 908.86
    // IRRF: (10000 - 908.86) * 0.275 - 896.00 = 1604.06
    let router = create_router_for_test();
    let request = create_calculation_request("emp_004", None, "CLT", "10000.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "inss", "908.86");
    assert_payslip_amount(&result, "irrf", "1604.06");
    assert_payslip_amount(&result, "net_salary", "7487.08");
}

#[tokio::test]
async fn test_clt_inss_is_flat_above_ceiling() {
    // Two salaries above the INSS ceiling withhold the same INSS
    let request_8k = create_calculation_request("emp_005", None, "CLT", "8000.00", "0");
    let (_, result_8k) = post_json(create_router_for_test(), "/payroll/calculate", request_8k).await;

    let request_10k = create_calculation_request("emp_006", None, "CLT", "10000.00", "0");
    let (_, result_10k) =
        post_json(create_router_for_test(), "/payroll/calculate", request_10k).await;

    assert_payslip_amount(&result_8k, "inss", "908.86");
    assert_payslip_amount(&result_10k, "inss", "908.86");
}

#[tokio::test]
async fn test_clt_inss_can_pull_irrf_base_into_exemption() {
    // CLT worker, R$2400 base
    // INSS: 105.90 + 988 * 0.09 = 194.82
    // IRRF base: 2400 - 194.82 = 2205.18, below the 2259.20 exemption limit
    let router = create_router_for_test();
    let request = create_calculation_request("emp_007", None, "CLT", "2400.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "inss", "194.82");
    assert_payslip_amount(&result, "irrf", "0");
    assert_payslip_amount(&result, "net_salary", "2205.18");
}

// =============================================================================
// SECTION 2: PJ Payslip Tests - 3 tests
// =============================================================================

#[tokio::test]
async fn test_pj_no_statutory_withholdings() {
    // PJ contractor, R$5000: no INSS, IRRF or FGTS, net equals gross
    let router = create_router_for_test();
    let request = create_calculation_request("pj_001", None, "PJ", "5000.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["payslip"].get("inss").is_none());
    assert!(result["payslip"].get("irrf").is_none());
    assert!(result["payslip"].get("fgts").is_none());
    assert_payslip_amount(&result, "deductions", "0");
    assert_payslip_amount(&result, "net_salary", "5000.00");
}

#[tokio::test]
async fn test_pj_overtime_at_plain_hourly_rate() {
    // PJ contractor, R$2200 base, 10h overtime
    // Hourly: 2200 / 220 = 10.00, no uplift: 10 * 10 = 100.00
    let router = create_router_for_test();
    let request = create_calculation_request("pj_002", None, "PJ", "2200.00", "10");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "overtime_pay", "100.00");
    assert_payslip_amount(&result, "gross_salary", "2300.00");
    assert_payslip_amount(&result, "net_salary", "2300.00");
}

#[tokio::test]
async fn test_clt_overtime_is_1_5x_pj_overtime() {
    // Same base and hours: the CLT overtime carries the 50% uplift
    let request_clt = create_calculation_request("emp_cmp", None, "CLT", "2200.00", "10");
    let (_, result_clt) =
        post_json(create_router_for_test(), "/payroll/calculate", request_clt).await;

    let request_pj = create_calculation_request("pj_cmp", None, "PJ", "2200.00", "10");
    let (_, result_pj) = post_json(create_router_for_test(), "/payroll/calculate", request_pj).await;

    let clt_overtime: Decimal = result_clt["payslip"]["overtime_pay"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let pj_overtime: Decimal = result_pj["payslip"]["overtime_pay"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(clt_overtime, pj_overtime * decimal("1.5"));
}

// =============================================================================
// SECTION 3: Overtime Edge Cases - 2 tests
// =============================================================================

#[tokio::test]
async fn test_fractional_overtime_rounds_half_away_from_zero() {
    // CLT worker, R$2200 base (hourly exactly 10), 0.335h overtime
    // 10 * 0.335 * 1.5 = 5.025, rounds to 5.03
    let router = create_router_for_test();
    let request = create_calculation_request("emp_frac", None, "CLT", "2200.00", "0.335");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "overtime_pay", "5.03");
}

#[tokio::test]
async fn test_overtime_hours_field_is_optional() {
    // Omitting overtime_hours defaults to zero
    let router = create_router_for_test();
    let request = json!({
        "worker": {
            "id": "emp_noot",
            "contract_type": "CLT",
            "base_salary": "3000.00"
        },
        "period": {"month": 3, "year": 2024}
    });

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_payslip_amount(&result, "overtime_pay", "0");
    assert_payslip_amount(&result, "gross_salary", "3000.00");
}

// =============================================================================
// SECTION 4: Error Cases Tests - 7 tests
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_worker() {
    let router = create_router_for_test();

    let body = json!({
        "period": {"month": 3, "year": 2024}
    });

    let (status, error) = post_json(router, "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_missing_period() {
    let router = create_router_for_test();

    let body = json!({
        "worker": {
            "id": "emp_001",
            "contract_type": "CLT",
            "base_salary": "3000.00"
        }
    });

    let (status, error) = post_json(router, "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_invalid_contract_type() {
    let router = create_router_for_test();
    let request = create_calculation_request("emp_001", None, "FREELANCE", "3000.00", "0");

    let (status, error) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    // Should fail deserialization for unknown contract type
    assert!(
        error["code"].as_str().unwrap() == "VALIDATION_ERROR"
            || error["code"].as_str().unwrap() == "MALFORMED_JSON"
    );
}

#[tokio::test]
async fn test_error_negative_base_salary() {
    let router = create_router_for_test();
    let request = create_calculation_request("emp_001", None, "CLT", "-3000.00", "0");

    let (status, error) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("base_salary"));
}

#[tokio::test]
async fn test_error_negative_overtime_hours() {
    let router = create_router_for_test();
    let request = create_calculation_request("emp_001", None, "CLT", "3000.00", "-1");

    let (status, error) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("overtime_hours"));
}

#[tokio::test]
async fn test_error_month_out_of_range() {
    let router = create_router_for_test();

    let body = json!({
        "worker": {
            "id": "emp_001",
            "contract_type": "CLT",
            "base_salary": "3000.00"
        },
        "period": {"month": 0, "year": 2024}
    });

    let (status, error) = post_json(router, "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("period.month"));
}

// =============================================================================
// SECTION 5: Payroll Report Tests - 5 tests
// =============================================================================

#[tokio::test]
async fn test_report_of_calculated_payslips() {
    // Calculate three payslips through the API, then consolidate them.
    // emp_a: CLT 3000 + 10h overtime, Engenharia
    // emp_b: PJ 5000, department resolved from the directory
    // emp_c: CLT 2000, Engenharia
    let requests = vec![
        create_calculation_request("emp_a", Some("Engenharia"), "CLT", "3000.00", "10"),
        create_calculation_request("emp_b", None, "PJ", "5000.00", "0"),
        create_calculation_request("emp_c", Some("Engenharia"), "CLT", "2000.00", "0"),
    ];

    let mut payslips = Vec::new();
    for request in requests {
        let (status, result) = post_json(create_router_for_test(), "/payroll/calculate", request).await;
        assert_eq!(status, StatusCode::OK);
        payslips.push(result["payslip"].clone());
    }

    let report_request = json!({
        "payslips": payslips,
        "benefits": [
            create_benefit("emp_a", "Vale Transporte", "220.00"),
            create_benefit("emp_b", "Vale Refeição", "750.10"),
            create_benefit("emp_c", "Auxílio Creche", "150.00"),
            create_benefit("emp_z", "Vale Transporte", "99.00")
        ],
        "departments": {"emp_b": "Diretoria"}
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/report", report_request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["summary"]["employees"], 3);
    assert_summary_amount(&result, "total_base_salary", "10000.00");
    assert_summary_amount(&result, "total_overtime_pay", "204.55");
    assert_summary_amount(&result, "total_gross_salary", "10204.55");
    assert_summary_amount(&result, "total_inss", "442.19");
    assert_summary_amount(&result, "total_irrf", "56.74");
    assert_summary_amount(&result, "total_fgts", "416.364");
    assert_summary_amount(&result, "total_deductions", "498.93");
    assert_summary_amount(&result, "total_net_salary", "9705.62");
    // The emp_z grant has no payslip in the run and is excluded
    assert_summary_amount(&result, "total_benefits", "1120.10");

    let benefits = &result["summary"]["benefits"];
    assert_eq!(normalize_decimal(benefits["transport_voucher"].as_str().unwrap()), "220");
    assert_eq!(normalize_decimal(benefits["meal_voucher"].as_str().unwrap()), "750.1");
    assert_eq!(normalize_decimal(benefits["other_benefits"].as_str().unwrap()), "150");

    let departments = result["summary"]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0]["department"], "Engenharia");
    assert_eq!(departments[0]["employees"], 2);
    assert_eq!(
        normalize_decimal(departments[0]["total_net_salary"].as_str().unwrap()),
        "4705.62"
    );
    assert_eq!(departments[1]["department"], "Diretoria");
    assert_eq!(departments[1]["employees"], 1);
    assert_eq!(
        normalize_decimal(departments[1]["total_net_salary"].as_str().unwrap()),
        "5000"
    );
}

#[tokio::test]
async fn test_report_department_resolution_order() {
    // Directory beats the payslip record; the record is the fallback;
    // workers with neither land in "Sem Departamento".
    let payslip = |id: &str, department: Value| {
        json!({
            "employee_id": id,
            "department": department,
            "period": {"month": 3, "year": 2024},
            "contract_type": "PJ",
            "status": "processed",
            "base_salary": "1000.00",
            "overtime_pay": "0.00",
            "gross_salary": "1000.00",
            "deductions": "0.00",
            "net_salary": "1000.00"
        })
    };

    let report_request = json!({
        "payslips": [
            payslip("emp_directory", json!("Comercial")),
            payslip("emp_record", json!("Comercial")),
            payslip("emp_neither", Value::Null)
        ],
        "departments": {"emp_directory": "Diretoria"}
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/report", report_request).await;

    assert_eq!(status, StatusCode::OK);

    let departments = result["summary"]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 3);
    assert_eq!(departments[0]["department"], "Diretoria");
    assert_eq!(departments[1]["department"], "Comercial");
    assert_eq!(departments[2]["department"], "Sem Departamento");
}

#[tokio::test]
async fn test_report_skips_benefits_without_payslip() {
    let report_request = json!({
        "payslips": [{
            "employee_id": "emp_001",
            "period": {"month": 3, "year": 2024},
            "contract_type": "PJ",
            "status": "processed",
            "base_salary": "1000.00",
            "overtime_pay": "0.00",
            "gross_salary": "1000.00",
            "deductions": "0.00",
            "net_salary": "1000.00"
        }],
        "benefits": [create_benefit("emp_other", "Vale Transporte", "220.00")]
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/report", report_request).await;

    assert_eq!(status, StatusCode::OK);
    assert_summary_amount(&result, "total_benefits", "0");
    assert_eq!(
        normalize_decimal(result["summary"]["benefits"]["transport_voucher"].as_str().unwrap()),
        "0"
    );
}

#[tokio::test]
async fn test_report_counts_duplicate_payslips_per_record() {
    let payslip = json!({
        "employee_id": "emp_dup",
        "department": "Comercial",
        "period": {"month": 3, "year": 2024},
        "contract_type": "PJ",
        "status": "processed",
        "base_salary": "1000.00",
        "overtime_pay": "0.00",
        "gross_salary": "1000.00",
        "deductions": "0.00",
        "net_salary": "1000.00"
    });

    let report_request = json!({
        "payslips": [payslip.clone(), payslip]
    });

    let (status, result) = post_json(create_router_for_test(), "/payroll/report", report_request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["summary"]["employees"], 2);
    assert_summary_amount(&result, "total_net_salary", "2000.00");

    let departments = result["summary"]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0]["employees"], 2);
}

#[tokio::test]
async fn test_report_empty_run_returns_zeroes() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll/report",
        json!({"payslips": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["summary"]["employees"], 0);
    assert_summary_amount(&result, "total_net_salary", "0");
    assert_summary_amount(&result, "total_benefits", "0");
    assert!(result["summary"]["departments"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 6: Response Field Validation Tests - 2 tests
// =============================================================================

#[tokio::test]
async fn test_calculation_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let request = create_calculation_request("emp_fields", Some("Engenharia"), "CLT", "3000.00", "0");

    let (status, result) = post_json(router, "/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);

    // Verify envelope fields
    assert!(result["calculation_id"].is_string());
    assert!(result["calculated_at"].is_string());
    assert!(result["engine_version"].is_string());

    // Verify payslip fields
    let payslip = &result["payslip"];
    assert_eq!(payslip["employee_id"], "emp_fields");
    assert_eq!(payslip["department"], "Engenharia");
    assert_eq!(payslip["period"]["month"], 3);
    assert_eq!(payslip["period"]["year"], 2024);
    assert_eq!(payslip["contract_type"], "CLT");
    assert_eq!(payslip["status"], "pending");
    assert!(payslip["base_salary"].is_string());
    assert!(payslip["overtime_pay"].is_string());
    assert!(payslip["gross_salary"].is_string());
    assert!(payslip["inss"].is_string());
    assert!(payslip["irrf"].is_string());
    assert!(payslip["fgts"].is_string());
    assert!(payslip["deductions"].is_string());
    assert!(payslip["net_salary"].is_string());
}

#[tokio::test]
async fn test_report_result_contains_all_required_fields() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/payroll/report",
        json!({"payslips": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    assert!(result["report_id"].is_string());
    assert!(result["generated_at"].is_string());
    assert!(result["engine_version"].is_string());

    let summary = &result["summary"];
    assert!(summary["employees"].is_number());
    assert!(summary["total_base_salary"].is_string());
    assert!(summary["total_overtime_pay"].is_string());
    assert!(summary["total_gross_salary"].is_string());
    assert!(summary["total_inss"].is_string());
    assert!(summary["total_irrf"].is_string());
    assert!(summary["total_fgts"].is_string());
    assert!(summary["total_deductions"].is_string());
    assert!(summary["total_net_salary"].is_string());
    assert!(summary["total_benefits"].is_string());
    assert!(summary["departments"].is_array());
    assert!(summary["benefits"]["transport_voucher"].is_string());
    assert!(summary["benefits"]["meal_voucher"].is_string());
    assert!(summary["benefits"]["other_benefits"].is_string());
}
