use super::*;

// =============================================================
// RiskBand
// =============================================================

#[test]
fn band_boundaries() {
    assert_eq!(RiskBand::classify(5.0), RiskBand::Low);
    assert_eq!(RiskBand::classify(6.0), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(15.0), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(16.0), RiskBand::High);
}

#[test]
fn band_fractional_scores() {
    assert_eq!(RiskBand::classify(5.9), RiskBand::Low);
    assert_eq!(RiskBand::classify(15.1), RiskBand::High);
    assert_eq!(RiskBand::classify(0.0), RiskBand::Low);
}

#[test]
fn band_labels() {
    assert_eq!(RiskBand::Low.to_string(), "Low");
    assert_eq!(RiskBand::Moderate.label(), "Moderate");
    assert_eq!(RiskBand::High.to_string(), "High");
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn risk_input_serializes_every_field_by_name() {
    let value = serde_json::to_value(RiskInput {
        age: 78.0,
        sex: "F".to_owned(),
        recent_fall: true,
        medication_count: 6.0,
        ..RiskInput::default()
    })
    .unwrap();
    let object = value.as_object().unwrap();
    for field in [
        "age",
        "sex",
        "heart_rate",
        "blood_pressure_sys",
        "respiration_rate",
        "oxygen_saturation",
        "gait_speed",
        "step_variability",
        "hrv",
        "sleep_hours",
        "recent_fall",
        "mobility_aid",
        "cognitive_score",
        "balance_test",
        "medication_count",
    ] {
        assert!(object.contains_key(field), "missing {field}");
    }
    assert_eq!(object.len(), 15);
    assert_eq!(value["recent_fall"], true);
}

#[test]
fn risk_input_accepts_partial_form_with_float_counts() {
    let input: RiskInput =
        serde_json::from_str(r#"{"age":72.0,"sex":"M","medication_count":3,"recent_fall":true}"#).unwrap();
    assert_eq!(input.age, 72.0);
    assert_eq!(input.medication_count, 3.0);
    assert!(input.recent_fall);
    assert_eq!(input.heart_rate, 0.0);
    assert!(!input.mobility_aid);
}

#[test]
fn health_status_passes_payload_through() {
    let raw = r#"{"status":"ok","db":"/srv/predictwell.db"}"#;
    let health: HealthStatus = serde_json::from_str(raw).unwrap();
    assert_eq!(health.status(), Some("ok"));
    assert_eq!(serde_json::to_value(&health).unwrap()["db"], "/srv/predictwell.db");
    assert!(health.display().contains("\"db\": \"/srv/predictwell.db\""));
}

#[test]
fn health_status_without_status_field() {
    let health: HealthStatus = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert_eq!(health.status(), None);
}

#[test]
fn risk_response_needs_only_score() {
    let response: RiskResponse = serde_json::from_str(r#"{"risk_score":12.5}"#).unwrap();
    assert_eq!(response.band(), RiskBand::Moderate);
    assert!(response.flags.is_empty());
    assert!(response.risk_level.is_none());
}

#[test]
fn risk_response_keeps_unknown_fields() {
    let response: RiskResponse = serde_json::from_str(
        r#"{"risk_score":20,"risk_level":"high","flags":["Recent fall"],"model":"v2"}"#,
    )
    .unwrap();
    assert_eq!(response.band(), RiskBand::High);
    assert_eq!(response.flags, vec!["Recent fall".to_owned()]);
    assert_eq!(response.extra.get("model"), Some(&Value::from("v2")));
}

#[test]
fn risk_response_without_score_is_rejected() {
    assert!(serde_json::from_str::<RiskResponse>(r#"{"risk_level":"low"}"#).is_err());
}

#[test]
fn risk_summary_includes_band() {
    let response: RiskResponse = serde_json::from_str(r#"{"risk_score":5}"#).unwrap();
    assert_eq!(risk_summary(&response), "Risk score: 5 (Low)");
}

// =============================================================
// Endpoints and messages
// =============================================================

#[test]
fn endpoint_joins_base_url() {
    assert_eq!(ApiConfig::default().endpoint(HEALTH_PATH), "/api/health");
    assert_eq!(
        ApiConfig::new("https://api.example.org/").endpoint(RISK_SCORE_PATH),
        "https://api.example.org/api/risk-score"
    );
}

#[test]
fn inline_messages_describe_failure() {
    assert_eq!(ApiError::Status(502).inline_message(), "Error: request failed: 502");
    assert_eq!(
        ApiError::Network("offline".to_owned()).inline_message(),
        "Error: network error: offline"
    );
}

#[test]
fn display_json_pretty_prints() {
    let value = serde_json::json!({"status": "ok"});
    assert_eq!(display_json(&value), "{\n  \"status\": \"ok\"\n}");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_calls_are_unavailable() {
    use futures::executor::block_on;

    let config = ApiConfig::default();
    assert!(matches!(block_on(fetch_health(&config)), Err(ApiError::Unavailable)));
    assert!(matches!(
        block_on(submit_risk_score(&config, &RiskInput::default())),
        Err(ApiError::Unavailable)
    ));
}
