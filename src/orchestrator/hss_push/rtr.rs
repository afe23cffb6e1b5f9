// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    diameter::result_codes::DeregistrationReason,
    model::{Impi, Impu, Irs, extract_public_identities},
    orchestrator::{Deps, sip_router_client::DeregisterRequest},
};

pub use crate::diameter::messages::{RtaAnswer, RtrRequest};

/// Handles an inbound Registration-Termination-Request (C8, `spec.md`
/// §4.8.2). Expands the request down to the implicit registration sets it
/// names, notifies the downstream SIP router, and tears down the
/// corresponding cache rows regardless of whether that notification
/// succeeded. `deregistration_reason` is `DeregistrationReason`, not a raw
/// wire integer: Diameter wire decode is out of scope for this core (see
/// `spec.md`'s Non-goals), so there is no decode step here to reject an
/// out-of-range value at. `DeregistrationReason::from_wire` is the
/// conversion a real wire-decoding stack would call before it can even
/// produce an `RtrRequest`; an unrecognized value never reaches this
/// function because it never becomes one.
pub async fn handle_rtr(deps: &Deps, req: RtrRequest) -> RtaAnswer {
    let reason = req.deregistration_reason;

    let mut impis = vec![req.impi.clone()];
    impis.extend(req.associated_identities.iter().cloned());

    // The request's own IMPUs are only trustworthy when the HSS isn't about
    // to hand the subscriber to a different S-CSCF; for SERVER_CHANGE/
    // NEW_SERVER_ASSIGNED the cache is the source of truth instead.
    let mut impus: Vec<Impu> = match reason {
        DeregistrationReason::ServerChange | DeregistrationReason::NewServerAssigned => Vec::new(),
        _ => req.impus.clone(),
    };

    if impus.is_empty() {
        match deps.store.get_associated_primary_public_ids(&impis).await {
            Ok(found) => {
                impus = found.into_iter().collect();
                if impus.is_empty() {
                    return RtaAnswer::success();
                }
            },
            Err(_) => return RtaAnswer::unable_to_comply(),
        }
    }

    let discover_more_impis =
        matches!(reason, DeregistrationReason::ServerChange | DeregistrationReason::NewServerAssigned);

    let mut registration_sets: Vec<Irs> = Vec::with_capacity(impus.len());
    for impu in &impus {
        let sub = match deps.store.get_ims_subscription(impu).await {
            Ok(sub) => sub,
            Err(_) => return RtaAnswer::unable_to_comply(),
        };

        let mut members = extract_public_identities(&sub.xml);
        if members.is_empty() {
            members.push(impu.clone());
        }
        if discover_more_impis {
            impis.extend(sub.associated_impis.iter().cloned());
        }
        registration_sets.push(Irs::new(members));
    }

    impis.sort();
    impis.dedup();

    let default_impus: Vec<Impu> = registration_sets.iter().filter_map(|irs| irs.default_impu().cloned()).collect();

    let (notify_impis, send_notifications): (Vec<Impi>, bool) = match reason {
        DeregistrationReason::PermanentTermination => (impis.clone(), false),
        DeregistrationReason::RemoveScscf | DeregistrationReason::ServerChange => (Vec::new(), true),
        DeregistrationReason::NewServerAssigned => (Vec::new(), false),
    };

    let downstream_ok = matches!(
        deps.sip_router
            .deregister(DeregisterRequest::new(&default_impus, &notify_impis, send_notifications))
            .await,
        Ok(true)
    );

    let ts = deps.timestamps.generate();
    for irs in &registration_sets {
        // Best-effort per `spec.md` §7: the RTA result is already decided by
        // the downstream HTTP outcome above, not by these writes.
        let _ = deps.store.dissociate_implicit_registration_set_from_impi(irs, &impis, ts).await;
    }
    if discover_more_impis {
        let _ = deps.store.delete_impi_mapping(&impis, ts).await;
    }

    if downstream_ok {
        RtaAnswer::success()
    } else {
        RtaAnswer::unable_to_comply()
    }
}
