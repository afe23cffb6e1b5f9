// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{sync::Arc, time::Duration};

use homestead_core::{
    cache::{Store, TimestampGenerator},
    diameter::{
        messages::{RtaAnswer, RtrRequest},
        result_codes::{DeregistrationReason, result_code::DIAMETER_SUCCESS},
    },
    model::{Impi, Impu, Irs, RegistrationState},
    orchestrator::hss_push::handle_rtr,
};

use super::common::{QueuedStack, RecordingSipRouter, deps_with};

const SUBSCRIPTION_XML: &str = r#"<IMSSubscription><ServiceProfile><PublicIdentity><Identity>sip:alice@example.com</Identity></PublicIdentity><PublicIdentity><Identity>tel:+15551234</Identity></PublicIdentity></ServiceProfile></IMSSubscription>"#;

/// Drives `handle_rtr` against a real [`InMemoryStore`][homestead_core::cache::InMemoryStore],
/// seeded through the same `put_ims_subscription` write path `reg_data`
/// uses, so the registration-set expansion exercised here is the real
/// cache's XML-backed row, not a hand-built fixture.
#[tokio::test]
async fn permanent_termination_notifies_the_default_impu_of_the_cached_irs() {
    let sip_router = Arc::new(RecordingSipRouter::new());
    let deps = deps_with(Arc::new(QueuedStack::with_saa_answers(Vec::new())), sip_router.clone());

    let impu = Impu::from("sip:alice@example.com");
    let irs = Irs::new(vec![impu.clone()]);
    let timestamps = TimestampGenerator::new();

    deps.store
        .put_ims_subscription(&irs, SUBSCRIPTION_XML, RegistrationState::Registered, timestamps.generate(), Duration::from_secs(7200))
        .await
        .expect("seed the subscription row");

    let answer: RtaAnswer = handle_rtr(&deps, RtrRequest {
        deregistration_reason: DeregistrationReason::PermanentTermination,
        impi: Impi::from("alice@example.com"),
        associated_identities: Vec::new(),
        // Trustworthy for PermanentTermination: the request names the IMPU
        // directly rather than needing the associated-primary-ids fallback.
        impus: vec![impu.clone()],
    })
    .await;
    assert_eq!(answer.result_code, DIAMETER_SUCCESS);

    let calls = sip_router.calls.lock().expect("lock");
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].send_notifications);
    assert_eq!(calls[0].impis, vec!["alice@example.com".to_string()]);
    assert_eq!(calls[0].registrations.len(), 1);
    assert_eq!(calls[0].registrations[0].primary_impu, "sip:alice@example.com");
}
