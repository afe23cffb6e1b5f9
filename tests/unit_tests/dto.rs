// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use homestead_core::{
    http::dto::{AvQuery, ImpiPath, RegDataBody, error_body},
    orchestrator::OrchestratorError,
};

#[test]
fn error_body_carries_the_display_message() {
    let body = error_body(OrchestratorError::NotFound);
    assert_eq!(body["error"], OrchestratorError::NotFound.to_string());
}

#[test]
fn impi_path_deserializes_from_a_path_param_map() {
    let path: ImpiPath = serde_json::from_value(serde_json::json!({"impi": "alice@example.com"})).expect("deserialize");
    assert_eq!(path.impi, "alice@example.com");
}

#[test]
fn av_query_tolerates_every_field_absent() {
    let q: AvQuery = serde_json::from_value(serde_json::json!({})).expect("deserialize");
    assert!(q.impu.is_none());
    assert!(q.server_name.is_none());
}

#[test]
fn av_query_maps_the_kebab_case_server_name_field() {
    let q: AvQuery = serde_json::from_value(serde_json::json!({"server-name": "scscf1.ims.example.com"})).expect("deserialize");
    assert_eq!(q.server_name.as_deref(), Some("scscf1.ims.example.com"));
}

#[test]
fn reg_data_body_round_trips_through_json() {
    let body = RegDataBody {
        reqtype: "dereg-user".to_string(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    let back: RegDataBody = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back.reqtype, "dereg-user");
}
