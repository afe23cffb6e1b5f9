// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    model::{Irs, RegistrationState, extract_public_identities},
    orchestrator::Deps,
};

pub use crate::diameter::messages::{PpaAnswer, PprRequest};

/// Handles an inbound Push-Profile-Request (C8, `spec.md` §4.8.1): writes
/// whatever of `{auth_vector, ims_subscription_xml}` is present, AV first,
/// and reports the first cache failure as `PpaAnswer::unable_to_comply`.
pub async fn handle_ppr(deps: &Deps, req: PprRequest) -> PpaAnswer {
    let ts = deps.timestamps.generate();

    if let Some(av) = req.auth_vector {
        if deps
            .store
            .put_av(&req.impi, av, ts, deps.config.cache.impu_cache_ttl)
            .await
            .is_err()
        {
            return PpaAnswer::unable_to_comply();
        }
    }

    if let Some(xml) = req.ims_subscription_xml {
        let mut impus = extract_public_identities(&xml);
        impus.dedup();
        let irs = Irs::new(impus);
        if deps
            .store
            .put_ims_subscription(&irs, &xml, RegistrationState::Unchanged, ts, deps.config.cache.subscription_ttl())
            .await
            .is_err()
        {
            return PpaAnswer::unable_to_comply();
        }
    }

    PpaAnswer::success()
}
