// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{Impi, Impu};

/// Body of the downstream deregister call, per `spec.md` §6: `DELETE
/// /registrations?send-notifications={true|false}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeregisterRequest {
    pub registrations: Vec<RegistrationRef>,
    pub impis: Vec<String>,
    pub send_notifications: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRef {
    #[serde(rename = "primary-impu")]
    pub primary_impu: String,
}

impl DeregisterRequest {
    pub fn new(impus: &[Impu], impis: &[Impi], send_notifications: bool) -> Self {
        DeregisterRequest {
            registrations: impus
                .iter()
                .map(|impu| RegistrationRef {
                    primary_impu: impu.to_string(),
                })
                .collect(),
            impis: impis.iter().map(|impi| impi.to_string()).collect(),
            send_notifications,
        }
    }
}

/// The downstream SIP router's HTTP API (§6), used by the C8 RTR branch to
/// tell the SIP router which bindings to drop.
#[async_trait]
pub trait SipRouterClient: Send + Sync {
    /// Returns `true` iff the downstream call returned 200; any 4xx/5xx is
    /// `false` (`spec.md` §4.8.2 step 5).
    async fn deregister(&self, req: DeregisterRequest) -> anyhow::Result<bool>;
}

/// [`SipRouterClient`] over plain HTTP, using `tako`'s own client support
/// (`features = ["client"]`) rather than adding a second HTTP client crate:
/// this core already depends on `tako` for the inbound frontend.
///
/// A fresh TCP connection is opened per call: the downstream call rate here
/// is one per RTR, not hot-path traffic, so paying a connect per request is
/// simpler than keeping a persistent connection alive across concurrent
/// callers (`TakoClient::request` takes `&mut self`).
pub struct HttpSipRouterClient {
    host: String,
    port: u16,
    path_prefix: String,
}

impl HttpSipRouterClient {
    /// `base_url` is the downstream SIP router's base URL, e.g.
    /// `http://sprout.example.com:9888` (`spec.md` §6,
    /// `HttpConfig::sip_router_base_url`).
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let uri: http::Uri = base_url.parse().map_err(|e| anyhow::anyhow!("invalid sip_router_base_url {base_url:?}: {e}"))?;
        let host = uri
            .host()
            .ok_or_else(|| anyhow::anyhow!("sip_router_base_url {base_url:?} has no host"))?
            .to_string();
        let port = uri.port_u16().unwrap_or(80);
        let path_prefix = uri.path().trim_end_matches('/').to_string();
        Ok(Self {
            host,
            port,
            path_prefix,
        })
    }
}

#[async_trait]
impl SipRouterClient for HttpSipRouterClient {
    async fn deregister(&self, req: DeregisterRequest) -> anyhow::Result<bool> {
        use bytes::Bytes;
        use http_body_util::Full;
        use tako::client::TakoClient;

        let body = serde_json::to_vec(&req)?;
        let path = format!(
            "{}/registrations?send-notifications={}",
            self.path_prefix, req.send_notifications
        );

        let http_req = http::Request::builder()
            .method(http::Method::DELETE)
            .uri(path)
            .header(http::header::HOST, format!("{}:{}", self.host, self.port))
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        let mut client = TakoClient::<Full<Bytes>>::new(&self.host, Some(self.port))
            .await
            .map_err(|e| anyhow::anyhow!("connecting to sip router {}:{}: {e}", self.host, self.port))?;

        let response = client
            .request(http_req)
            .await
            .map_err(|e| anyhow::anyhow!("sip router deregister request failed: {e}"))?;

        Ok(response.status() == http::StatusCode::OK)
    }
}
