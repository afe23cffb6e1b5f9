// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    cache::CacheError,
    diameter::{
        Transaction, messages::MarRequest,
        result_codes::experimental_result_code::DIAMETER_ERROR_USER_UNKNOWN,
    },
    model::{AuthVector, Impi},
    orchestrator::{Deps, OrchestratorError},
    stats::StatsBucket,
};

/// IMPI-AV Orchestrator (C4): `GET /impi/<id>/av`, per `spec.md` §4.4.
///
/// `authorization` (the HTTP query's `autn`) carries an AKA resync `AUTS`
/// value when the client is re-synchronizing its sequence number; when
/// present, the cache is bypassed (a resync must always reach the HSS) and
/// it is forwarded as the MAR's `SIP-Authorization` AVP.
pub async fn get_av(
    deps: &Deps,
    impi: Impi,
    impu: Option<String>,
    scheme: Option<String>,
    authorization: Option<String>,
) -> Result<AuthVector, OrchestratorError> {
    if !deps.config.diameter.hss_configured {
        return Ok(AuthVector::synthetic_digest(&deps.config.diameter.dest_realm));
    }

    if authorization.is_none() {
        match deps.store.get_av(&impi).await {
            Ok(av) => return Ok(av),
            Err(CacheError::NotFound) => {},
            Err(e) => return Err(e.into()),
        }
    }

    let mut req = MarRequest::new(
        impi.clone(),
        impu.unwrap_or_default(),
        deps.config.diameter.server_name.clone(),
        scheme.unwrap_or_else(|| "SIP Digest".to_string()),
    );
    req.sip_authorization = authorization;

    let txn = Transaction::new(&deps.stats);
    let maa = txn
        .send(
            StatsBucket::HssDigest,
            deps.config.diameter.transaction_timeout,
            deps.stack.send_mar(req),
        )
        .await?;

    let codes = maa.result_codes();
    if codes.experimental_result_code == Some(DIAMETER_ERROR_USER_UNKNOWN) {
        return Err(OrchestratorError::NotFound);
    }
    if !codes.is_success() {
        return Err(OrchestratorError::Upstream);
    }

    let av = maa.auth_vector.ok_or(OrchestratorError::Upstream)?;
    deps.store
        .put_av(
            &impi,
            av.clone(),
            deps.timestamps.generate(),
            deps.config.cache.impu_cache_ttl,
        )
        .await?;

    Ok(av)
}
