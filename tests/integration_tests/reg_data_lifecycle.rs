// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use homestead_core::{
    cache::Store,
    diameter::{messages::SaaAnswer, result_codes::result_code::DIAMETER_SUCCESS},
    model::{ChargingAddresses, Impi, Impu},
    orchestrator::reg_data::{RegDataRequest, RegDataVerb, reg_data},
};

use super::common::{QueuedStack, RecordingSipRouter, deps_with};

const SUBSCRIPTION_XML: &str = r#"<IMSSubscription><PrivateID>alice@example.com</PrivateID><ServiceProfile><PublicIdentity><Identity>sip:alice@example.com</Identity></PublicIdentity></ServiceProfile></IMSSubscription>"#;

#[tokio::test]
async fn put_reg_then_get_is_served_from_cache_without_another_sar() {
    let stack = QueuedStack::with_saa_answers(vec![SaaAnswer {
        result_code: Some(DIAMETER_SUCCESS),
        experimental_result_code: None,
        user_data: Some(SUBSCRIPTION_XML.to_string()),
        charging_addresses: ChargingAddresses::default(),
    }]);
    let deps = deps_with(Arc::new(stack), Arc::new(RecordingSipRouter::new()));

    let put = reg_data(&deps, RegDataRequest {
        impu: Impu::from("sip:alice@example.com"),
        impi: Some(Impi::from("alice@example.com")),
        verb: RegDataVerb::Put,
        reqtype: Some(homestead_core::model::sat::RegDataReqType::Reg),
    })
    .await
    .expect("put succeeds");
    assert_eq!(put["regstate"], "REGISTERED");
    assert_eq!(put["xml"], SUBSCRIPTION_XML);

    // Second call is a pure GET: QueuedStack has no more SAA answers
    // queued, so a correct cache hit never calls send_sar again.
    let got = reg_data(&deps, RegDataRequest {
        impu: Impu::from("sip:alice@example.com"),
        impi: None,
        verb: RegDataVerb::Get,
        reqtype: None,
    })
    .await
    .expect("get succeeds from cache");
    assert_eq!(got["xml"], SUBSCRIPTION_XML);
    assert_eq!(got["regstate"], "REGISTERED");
}

#[tokio::test]
async fn dereg_user_clears_the_cached_subscription() {
    let stack = QueuedStack::with_saa_answers(vec![
        SaaAnswer {
            result_code: Some(DIAMETER_SUCCESS),
            experimental_result_code: None,
            user_data: Some(SUBSCRIPTION_XML.to_string()),
            charging_addresses: ChargingAddresses::default(),
        },
        SaaAnswer {
            result_code: Some(DIAMETER_SUCCESS),
            experimental_result_code: None,
            user_data: None,
            charging_addresses: ChargingAddresses::default(),
        },
    ]);
    let deps = deps_with(Arc::new(stack), Arc::new(RecordingSipRouter::new()));

    reg_data(&deps, RegDataRequest {
        impu: Impu::from("sip:alice@example.com"),
        impi: Some(Impi::from("alice@example.com")),
        verb: RegDataVerb::Put,
        reqtype: Some(homestead_core::model::sat::RegDataReqType::Reg),
    })
    .await
    .expect("initial registration succeeds");

    let dereg = reg_data(&deps, RegDataRequest {
        impu: Impu::from("sip:alice@example.com"),
        impi: Some(Impi::from("alice@example.com")),
        verb: RegDataVerb::Delete,
        reqtype: Some(homestead_core::model::sat::RegDataReqType::DeregUser),
    })
    .await
    .expect("deregistration succeeds");
    assert_eq!(dereg, serde_json::json!({}));

    // User deregistration dissociates the IRS from the IMPI (and, being a
    // final dereg, deletes the IMPI mapping outright) but leaves the
    // subscription row itself for the cache's TTL to reclaim — per
    // `spec.md` §3, the cache action for a dereg SAT never writes the
    // subscription row.
    let remaining = deps
        .store
        .get_associated_primary_public_ids(&[Impi::from("alice@example.com")])
        .await
        .expect("lookup");
    assert!(remaining.is_empty());
}
