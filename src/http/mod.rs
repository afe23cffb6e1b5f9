// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! HTTP frontend: the six `spec.md` §6 endpoints wired onto the C4–C7
//! orchestrators through a `tako` [`tako::router::Router`].

pub mod dto;
pub mod routes;
pub mod server;

use bytes::Bytes;
use http::{HeaderValue, StatusCode, header};
use http_body_util::Full;
use serde_json::Value;
use tako::{body::TakoBody, responder::Responder};

pub use server::{build_router, run};

/// A JSON HTTP response: status code plus a `serde_json::Value` body.
/// `tako`'s [`Responder`] has no blanket impl for `Value`, so every handler
/// in [`routes`] returns this instead.
pub struct JsonResponse {
    status: StatusCode,
    body: Value,
}

impl JsonResponse {
    pub fn ok(body: Value) -> Self {
        JsonResponse {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn error(status: u16, body: Value) -> Self {
        JsonResponse {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        }
    }
}

impl Responder for JsonResponse {
    fn into_response(self) -> http::Response<TakoBody> {
        let bytes = serde_json::to_vec(&self.body).unwrap_or_default();
        let mut res = http::Response::new(TakoBody::new(Full::from(Bytes::from(bytes))));
        *res.status_mut() = self.status;
        res.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        res
    }
}
