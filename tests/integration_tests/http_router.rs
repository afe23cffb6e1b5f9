// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use bytes::Bytes;
use homestead_core::{cfg::config::Config, http::build_router};
use http::Request;
use http_body_util::Empty;
use tako::client::TakoClient;
use tokio::net::TcpListener;

use super::common::{QueuedStack, RecordingSipRouter, deps_with};

/// Binds the real router to an ephemeral port and drives it with the same
/// `tako` client the downstream SIP-router calls use, confirming the six
/// routes in `src/http/server.rs` actually answer over HTTP rather than
/// only when called as plain functions.
#[tokio::test]
async fn get_av_over_http_returns_a_synthetic_digest_when_the_hss_is_unconfigured() {
    let mut deps = deps_with(Arc::new(QueuedStack::with_saa_answers(Vec::new())), Arc::new(RecordingSipRouter::new()));
    let mut cfg = Config::sample();
    cfg.diameter.hss_configured = false;
    deps.config = Arc::new(cfg);

    let stats = deps.stats.clone();

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let router = build_router(deps);
    tokio::spawn(tako::serve(listener, router));

    let mut client = TakoClient::<Empty<Bytes>>::new("127.0.0.1", Some(addr.port())).await.expect("connect");
    let request = Request::builder()
        .method("GET")
        .uri("/impi/alice/av")
        .body(Empty::new())
        .expect("build request");
    let response = client.request(request).await.expect("request");

    assert_eq!(response.status(), http::StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(response.body()).expect("json body");
    assert_eq!(body["scheme"], "digest");
    assert_eq!(stats.http_incoming_requests_total(), 1);
    assert_eq!(stats.http_rejected_overload_total(), 0);
}
