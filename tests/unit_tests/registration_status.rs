// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use homestead_core::{
    diameter::{
        messages::UaaAnswer,
        result_codes::{
            experimental_result_code::DIAMETER_ERROR_USER_UNKNOWN, result_code::DIAMETER_SUCCESS,
        },
    },
    model::Impi,
    orchestrator::{OrchestratorError, registration_status::registration_status},
};

use super::support::{ScriptedStack, deps_with};

#[tokio::test]
async fn success_with_a_server_name_reports_the_scscf() {
    let stack = ScriptedStack::new().with_uaa(UaaAnswer {
        result_code: Some(DIAMETER_SUCCESS),
        experimental_result_code: None,
        server_name: Some("scscf1.ims.example.com".to_string()),
        server_capabilities: None,
    });
    let deps = deps_with(Arc::new(stack));

    let body = registration_status(&deps, Impi::from("alice@example.com"), "sip:alice@example.com".to_string(), None, None)
        .await
        .expect("ok");
    assert_eq!(body["scscf"], "scscf1.ims.example.com");
    assert_eq!(body["result-code"], DIAMETER_SUCCESS);
}

#[tokio::test]
async fn unknown_user_maps_to_not_found() {
    let stack = ScriptedStack::new().with_uaa(UaaAnswer {
        result_code: None,
        experimental_result_code: Some(DIAMETER_ERROR_USER_UNKNOWN),
        server_name: None,
        server_capabilities: None,
    });
    let deps = deps_with(Arc::new(stack));

    let err = registration_status(&deps, Impi::from("ghost@example.com"), "sip:ghost@example.com".to_string(), None, None)
        .await
        .expect_err("expected NotFound");
    assert_eq!(err, OrchestratorError::NotFound);
}
