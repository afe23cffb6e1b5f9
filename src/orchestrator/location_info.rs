// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use serde_json::{Value, json};

use crate::{
    diameter::{
        Transaction,
        messages::LirRequest,
        result_codes::{
            experimental_result_code::{
                DIAMETER_ERROR_IDENTITY_NOT_REGISTERED, DIAMETER_ERROR_USER_UNKNOWN,
                DIAMETER_UNREGISTERED_SERVICE,
            },
            result_code::{DIAMETER_SUCCESS, DIAMETER_TOO_BUSY},
        },
    },
    orchestrator::{Deps, OrchestratorError},
    stats::StatsBucket,
};

/// Location-Info Orchestrator (C6): `GET /impu/<id>/location`, per
/// `spec.md` §4.6. Same shape as C5, but `DIAMETER_UNREGISTERED_SERVICE` is
/// a non-error outcome that returns server-capabilities for the caller to
/// pick an S-CSCF from.
pub async fn location_info(
    deps: &Deps,
    impu: String,
    originating: Option<String>,
    auth_type: Option<String>,
) -> Result<Value, OrchestratorError> {
    let req = LirRequest {
        impu,
        originating,
        auth_type,
    };

    let txn = Transaction::new(&deps.stats);
    let lia = txn
        .send(
            StatsBucket::Hss,
            deps.config.diameter.transaction_timeout,
            deps.stack.send_lir(req),
        )
        .await?;

    let codes = lia.result_codes();
    let effective = codes.effective_code();

    if codes.result_code == Some(DIAMETER_SUCCESS) || effective == Some(DIAMETER_UNREGISTERED_SERVICE) {
        let code = effective.unwrap_or(DIAMETER_SUCCESS);
        // Supplemented Feature 5: `Server-Name` is only consulted when the
        // transaction truly succeeded; an unregistered-service result never
        // carries a usable one.
        return Ok(match lia.usable_server_name() {
            Some(server_name) => json!({"result-code": code, "scscf": server_name}),
            None => json!({
                "result-code": code,
                "server-capabilities": lia.server_capabilities.clone().unwrap_or_else(|| json!({})),
            }),
        });
    }

    if effective == Some(DIAMETER_ERROR_USER_UNKNOWN)
        || effective == Some(DIAMETER_ERROR_IDENTITY_NOT_REGISTERED)
    {
        return Err(OrchestratorError::NotFound);
    }

    if codes.result_code == Some(DIAMETER_TOO_BUSY) {
        return Err(OrchestratorError::Busy);
    }

    Err(OrchestratorError::Upstream)
}
