// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use homestead_core::{
    cache::Store,
    diameter::{messages::MaaAnswer, result_codes::result_code::DIAMETER_SUCCESS},
    model::{AuthVector, Impi},
    orchestrator::digest_av::get_av,
};

use super::support::{ScriptedStack, UnreachableStack, deps_with};

#[tokio::test]
async fn unconfigured_hss_synthesizes_a_digest_without_touching_the_stack() {
    let mut deps = deps_with(Arc::new(UnreachableStack));
    Arc::get_mut(&mut deps.config).expect("sole owner").diameter.hss_configured = false;

    let av = get_av(&deps, Impi::from("alice@example.com"), None, None, None).await.expect("ok");
    match av {
        AuthVector::Digest { realm, .. } => assert_eq!(realm, deps.config.diameter.dest_realm),
        AuthVector::Aka { .. } => panic!("expected synthetic digest"),
    }
}

#[tokio::test]
async fn cache_miss_falls_through_to_the_stack() {
    let av = AuthVector::Digest {
        ha1: "deadbeef".to_string(),
        realm: "ims.example.com".to_string(),
        qop: "auth".to_string(),
        preferred_scheme: "SIP Digest".to_string(),
    };
    let stack = ScriptedStack::new().with_maa(MaaAnswer {
        result_code: Some(DIAMETER_SUCCESS),
        experimental_result_code: None,
        auth_vector: Some(av.clone()),
    });
    let deps = deps_with(Arc::new(stack));

    let got = get_av(&deps, Impi::from("bob@example.com"), Some("sip:bob@example.com".to_string()), None, None)
        .await
        .expect("ok");
    assert_eq!(got, av);
}

#[tokio::test]
async fn resync_authorization_bypasses_the_cache_and_is_forwarded_to_the_mar() {
    let av = AuthVector::Digest {
        ha1: "resynced".to_string(),
        realm: "ims.example.com".to_string(),
        qop: "auth".to_string(),
        preferred_scheme: "SIP Digest".to_string(),
    };
    let stack = ScriptedStack::new().with_maa(MaaAnswer {
        result_code: Some(DIAMETER_SUCCESS),
        experimental_result_code: None,
        auth_vector: Some(av.clone()),
    });
    let deps = deps_with(Arc::new(stack));
    deps.store
        .put_av(
            &Impi::from("carol@example.com"),
            AuthVector::Digest {
                ha1: "stale-cached".to_string(),
                realm: "ims.example.com".to_string(),
                qop: "auth".to_string(),
                preferred_scheme: "SIP Digest".to_string(),
            },
            homestead_core::cache::TimestampGenerator::new().generate(),
            std::time::Duration::from_secs(60),
        )
        .await
        .expect("seed cache");

    let got = get_av(
        &deps,
        Impi::from("carol@example.com"),
        None,
        None,
        Some("resync-auts-value".to_string()),
    )
    .await
    .expect("ok");
    assert_eq!(got, av);
}
