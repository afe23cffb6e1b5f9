// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! HTTP handlers for the six endpoints `spec.md` §6 names, one per
//! orchestrator (C4–C7). Each handler extracts path/query/body, calls the
//! matching orchestrator function, and renders the `Result<_,
//! OrchestratorError>` onto an HTTP status via [`JsonResponse`]. Every
//! handler records its arrival and latency into [`Stats`](crate::stats::Stats)
//! per `spec.md` §A.4's `http_incoming_requests`/`http_latency_us` counters,
//! and a `Busy` outcome additionally counts against `http_rejected_overload`.

use std::time::Instant;

use serde_json::json;
use tako::extractors::{params::Params, query::Query, state::State};

use crate::{
    http::{
        JsonResponse,
        dto::{AvQuery, ImpiPath, ImpuPath, LocationQuery, RegDataBody, RegDataQuery, RegistrationStatusQuery, error_body},
    },
    model::{Impi, Impu, sat::RegDataReqType},
    orchestrator::{
        Deps, OrchestratorError, digest_av, location_info,
        reg_data::{self, RegDataRequest, RegDataVerb},
        registration_status,
    },
};

fn err_response(deps: &Deps, e: OrchestratorError) -> JsonResponse {
    if e == OrchestratorError::Busy {
        deps.stats.http_rejected_overload();
    }
    JsonResponse::error(e.http_status(), error_body(e))
}

pub async fn get_av(Params(path): Params<ImpiPath>, Query(q): Query<AvQuery>, State(deps): State<Deps>) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let impi = Impi::from(path.impi);
    let response = match digest_av::get_av(&deps, impi, q.impu, q.server_name, q.autn).await {
        Ok(av) => JsonResponse::ok(serde_json::to_value(av).unwrap_or_else(|_| json!({}))),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}

pub async fn get_registration_status(
    Params(path): Params<ImpiPath>,
    Query(q): Query<RegistrationStatusQuery>,
    State(deps): State<Deps>,
) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let impi = Impi::from(path.impi);
    let response = match registration_status::registration_status(&deps, impi, q.impu, q.visited_network, q.auth_type).await {
        Ok(body) => JsonResponse::ok(body),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}

pub async fn get_location(Params(path): Params<ImpuPath>, Query(q): Query<LocationQuery>, State(deps): State<Deps>) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let impu = path.impu;
    let response = match location_info::location_info(&deps, impu, q.originating, q.auth_type).await {
        Ok(body) => JsonResponse::ok(body),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}

pub async fn get_reg_data(Params(path): Params<ImpuPath>, Query(q): Query<RegDataQuery>, State(deps): State<Deps>) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let req = RegDataRequest {
        impu: Impu::from(path.impu),
        impi: q.private_id.map(Impi::from),
        verb: RegDataVerb::Get,
        reqtype: None,
    };
    let response = match reg_data::reg_data(&deps, req).await {
        Ok(body) => JsonResponse::ok(body),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}

pub async fn put_reg_data(
    Params(path): Params<ImpuPath>,
    Query(q): Query<RegDataQuery>,
    tako::extractors::json::Json(body): tako::extractors::json::Json<RegDataBody>,
    State(deps): State<Deps>,
) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let Some(reqtype) = RegDataReqType::parse(&body.reqtype) else {
        let response = err_response(&deps, OrchestratorError::Invalid);
        deps.stats.record_http_latency(started.elapsed());
        return response;
    };
    let req = RegDataRequest {
        impu: Impu::from(path.impu),
        impi: q.private_id.map(Impi::from),
        verb: RegDataVerb::Put,
        reqtype: Some(reqtype),
    };
    let response = match reg_data::reg_data(&deps, req).await {
        Ok(body) => JsonResponse::ok(body),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}

pub async fn delete_reg_data(
    Params(path): Params<ImpuPath>,
    Query(q): Query<RegDataQuery>,
    tako::extractors::json::Json(body): tako::extractors::json::Json<RegDataBody>,
    State(deps): State<Deps>,
) -> JsonResponse {
    deps.stats.http_incoming_request();
    let started = Instant::now();
    let Some(reqtype) = RegDataReqType::parse(&body.reqtype) else {
        let response = err_response(&deps, OrchestratorError::Invalid);
        deps.stats.record_http_latency(started.elapsed());
        return response;
    };
    let req = RegDataRequest {
        impu: Impu::from(path.impu),
        impi: q.private_id.map(Impi::from),
        verb: RegDataVerb::Delete,
        reqtype: Some(reqtype),
    };
    let response = match reg_data::reg_data(&deps, req).await {
        Ok(body) => JsonResponse::ok(body),
        Err(e) => err_response(&deps, e),
    };
    deps.stats.record_http_latency(started.elapsed());
    response
}
