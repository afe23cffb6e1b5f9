// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use homestead_core::{
    diameter::{
        messages::LiaAnswer,
        result_codes::{
            experimental_result_code::DIAMETER_UNREGISTERED_SERVICE, result_code::DIAMETER_SUCCESS,
        },
    },
    orchestrator::location_info::location_info,
};
use serde_json::json;

use super::support::{ScriptedStack, deps_with};

#[tokio::test]
async fn registered_service_reports_the_scscf() {
    let stack = ScriptedStack::new().with_lia(LiaAnswer {
        result_code: Some(DIAMETER_SUCCESS),
        experimental_result_code: None,
        server_name: Some("scscf1.ims.example.com".to_string()),
        server_capabilities: None,
    });
    let deps = deps_with(Arc::new(stack));

    let body = location_info(&deps, "sip:alice@example.com".to_string(), None, None).await.expect("ok");
    assert_eq!(body["scscf"], "scscf1.ims.example.com");
}

#[tokio::test]
async fn unregistered_service_is_not_an_error_and_carries_capabilities() {
    let stack = ScriptedStack::new().with_lia(LiaAnswer {
        result_code: None,
        experimental_result_code: Some(DIAMETER_UNREGISTERED_SERVICE),
        server_name: None,
        server_capabilities: Some(json!({"mandatory-capability": [102]})),
    });
    let deps = deps_with(Arc::new(stack));

    let body = location_info(&deps, "sip:bob@example.com".to_string(), None, None).await.expect("not an error");
    assert_eq!(body["result-code"], DIAMETER_UNREGISTERED_SERVICE);
    assert_eq!(body["server-capabilities"]["mandatory-capability"][0], 102);
}
