// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{future::Future, pin::Pin};

use serde_json::{Value, json};

use crate::{
    cache::{CacheError, store::ImsSubscription},
    diameter::{
        Transaction,
        messages::SarRequest,
        result_codes::{
            experimental_result_code::{DIAMETER_ERROR_ROAMING_NOT_ALLOWED, DIAMETER_ERROR_USER_UNKNOWN},
            result_code::{DIAMETER_AUTHORIZATION_REJECTED, DIAMETER_TOO_BUSY},
        },
    },
    model::{
        ChargingAddresses, Impi, Impu, Irs, RegistrationState, ServerAssignmentType, extract_public_identities,
        sat::RegDataReqType,
    },
    orchestrator::{Deps, OrchestratorError},
    stats::StatsBucket,
    state_machine::common::{StateMachine, Transition, run},
};

/// HTTP verb driving the C7 handler; `type`/`reqtype` resolves the initial
/// SAT jointly with this (`spec.md` §4.7 decision table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegDataVerb {
    Get,
    Put,
    Delete,
}

/// One `GET`/`PUT`/`DELETE /impu/<impu>/reg-data` request.
#[derive(Debug, Clone)]
pub struct RegDataRequest {
    pub impu: Impu,
    pub impi: Option<Impi>,
    pub verb: RegDataVerb,
    /// `reqtype` body field; absent on `GET`, where the SAT always starts
    /// at `NO_ASSIGNMENT`.
    pub reqtype: Option<RegDataReqType>,
}

/// Mutable working state threaded through the C7 state machine: the SAT as
/// it gets upgraded by the cache-lookup step, and whatever the HSS (or a
/// pure cache hit) ultimately hands back to render into the HTTP response.
struct RegDataCtx<'a> {
    deps: &'a Deps,
    req: RegDataRequest,
    sat: ServerAssignmentType,
    xml: String,
    charging: ChargingAddresses,
    served_from_cache: Option<ImsSubscription>,
}

enum RegDataState {
    CacheLookup,
    EmitSar,
    ApplyCacheAction,
}

type RegDataOut = Result<Value, OrchestratorError>;

impl StateMachine<RegDataCtx<'_>, RegDataOut> for RegDataState {
    fn step(self, ctx: &mut RegDataCtx<'_>) -> Pin<Box<dyn Future<Output = Transition<Self, RegDataOut>> + Send + '_>> {
        Box::pin(async move {
            match self {
                RegDataState::CacheLookup => cache_lookup(ctx).await,
                RegDataState::EmitSar => emit_sar(ctx).await,
                RegDataState::ApplyCacheAction => apply_cache_action(ctx).await,
            }
        })
    }
}

async fn cache_lookup(ctx: &mut RegDataCtx<'_>) -> Transition<RegDataState, RegDataOut> {
    if !ctx.sat.cache_lookup_first() {
        return Transition::Next(RegDataState::EmitSar);
    }

    match ctx.deps.store.get_ims_subscription(&ctx.req.impu).await {
        Ok(sub) => {
            if ctx.req.verb == RegDataVerb::Get && ctx.sat == ServerAssignmentType::NoAssignment {
                // Pure cache-hit GET: the SAT never needed to touch the HSS.
                return Transition::Done(Ok(reg_data_response(&sub.xml, sub.reg_state, &sub.charging_addresses)));
            }
            if ctx.sat == ServerAssignmentType::Registration && sub.reg_state == RegistrationState::Registered {
                ctx.sat = ServerAssignmentType::ReRegistration;
            }
            ctx.served_from_cache = Some(sub);
        },
        Err(CacheError::NotFound) => {
            if ctx.sat == ServerAssignmentType::NoAssignment {
                ctx.sat = ServerAssignmentType::UnregisteredUser;
            }
        },
        Err(e) => return Transition::Done(Err(e.into())),
    }

    Transition::Next(RegDataState::EmitSar)
}

async fn emit_sar(ctx: &mut RegDataCtx<'_>) -> Transition<RegDataState, RegDataOut> {
    let req = SarRequest {
        impi: ctx.req.impi.clone(),
        impu: ctx.req.impu.to_string(),
        server_name: ctx.deps.config.diameter.server_name.clone(),
        server_assignment_type: ctx.sat,
        user_data_already_available: ctx.served_from_cache.is_some(),
    };

    let txn = Transaction::new(&ctx.deps.stats);
    let saa = match txn
        .send(
            StatsBucket::HssSubscription,
            ctx.deps.config.diameter.transaction_timeout,
            ctx.deps.stack.send_sar(req),
        )
        .await
    {
        Ok(saa) => saa,
        Err(e) => return Transition::Done(Err(e.into())),
    };

    let codes = saa.result_codes();
    let effective = codes.effective_code();

    if effective == Some(DIAMETER_ERROR_USER_UNKNOWN) {
        return Transition::Done(Err(OrchestratorError::NotFound));
    }
    if codes.result_code == Some(DIAMETER_AUTHORIZATION_REJECTED) || effective == Some(DIAMETER_ERROR_ROAMING_NOT_ALLOWED) {
        return Transition::Done(Err(OrchestratorError::Denied));
    }
    if codes.result_code == Some(DIAMETER_TOO_BUSY) {
        return Transition::Done(Err(OrchestratorError::Busy));
    }
    if !codes.is_success() {
        return Transition::Done(Err(OrchestratorError::Upstream));
    }

    ctx.xml = saa.user_data.unwrap_or_default();
    ctx.charging = saa.charging_addresses;

    Transition::Next(RegDataState::ApplyCacheAction)
}

async fn apply_cache_action(ctx: &mut RegDataCtx<'_>) -> Transition<RegDataState, RegDataOut> {
    let ts = ctx.deps.timestamps.generate();
    let impis: Vec<Impi> = ctx.req.impi.iter().cloned().collect();

    if ctx.sat.deregistration() {
        let irs = Irs::new(vec![ctx.req.impu.clone()]);
        if let Err(e) = ctx.deps.store.dissociate_implicit_registration_set_from_impi(&irs, &impis, ts).await {
            return Transition::Done(Err(e.into()));
        }
        if ctx.sat.is_final_deregistration() {
            if let Err(e) = ctx.deps.store.delete_impi_mapping(&impis, ts).await {
                return Transition::Done(Err(e.into()));
            }
        }
        return Transition::Done(Ok(json!({})));
    }

    let mut impus = extract_public_identities(&ctx.xml);
    if impus.is_empty() {
        impus.push(ctx.req.impu.clone());
    }
    let irs = Irs::new(impus);

    let new_state = match ctx.sat {
        ServerAssignmentType::Registration | ServerAssignmentType::ReRegistration => RegistrationState::Registered,
        ServerAssignmentType::UnregisteredUser => RegistrationState::Unregistered,
        _ => RegistrationState::Unchanged,
    };

    // Invariant: the cache write completes before the HTTP 200 below is
    // returned to the caller.
    if let Err(e) = ctx
        .deps
        .store
        .put_ims_subscription(&irs, &ctx.xml, new_state, ts, ctx.deps.config.cache.subscription_ttl())
        .await
    {
        return Transition::Done(Err(e.into()));
    }

    Transition::Done(Ok(reg_data_response(&ctx.xml, new_state, &ctx.charging)))
}

fn reg_data_response(xml: &str, reg_state: RegistrationState, charging: &ChargingAddresses) -> Value {
    json!({
        "regstate": reg_state.to_string(),
        "xml": xml,
        "charging-addresses": charging,
    })
}

/// IMS-Subscription/Reg-State Orchestrator (C7): `GET`/`PUT`/`DELETE
/// /impu/<id>/reg-data`, per `spec.md` §4.7 — the decision table driving
/// (verb, reqtype) to a `ServerAssignmentType`, a possible cache-upgrade
/// lookup, a conditional SAR, and a cache action split on deregistration.
pub async fn reg_data(deps: &Deps, req: RegDataRequest) -> Result<Value, OrchestratorError> {
    let sat = match req.verb {
        RegDataVerb::Get => ServerAssignmentType::NoAssignment,
        RegDataVerb::Put | RegDataVerb::Delete => req
            .reqtype
            .ok_or(OrchestratorError::Invalid)?
            .initial_sat(),
    };

    let mut ctx = RegDataCtx {
        deps,
        req,
        sat,
        xml: String::new(),
        charging: ChargingAddresses::default(),
        served_from_cache: None,
    };

    run(RegDataState::CacheLookup, &mut ctx).await
}
