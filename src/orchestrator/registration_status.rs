// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use serde_json::{Value, json};

use crate::{
    diameter::{
        Transaction,
        messages::UarRequest,
        result_codes::{
            experimental_result_code::{
                DIAMETER_ERROR_IDENTITIES_DONT_MATCH, DIAMETER_ERROR_ROAMING_NOT_ALLOWED,
                DIAMETER_ERROR_USER_UNKNOWN, DIAMETER_FIRST_REGISTRATION,
                DIAMETER_SUBSEQUENT_REGISTRATION,
            },
            result_code::{DIAMETER_AUTHORIZATION_REJECTED, DIAMETER_SUCCESS, DIAMETER_TOO_BUSY},
        },
    },
    model::Impi,
    orchestrator::{Deps, OrchestratorError},
    stats::StatsBucket,
};

/// Registration-Status Orchestrator (C5): `GET
/// /impi/<id>/registration-status`, per `spec.md` §4.5.
pub async fn registration_status(
    deps: &Deps,
    impi: Impi,
    impu: String,
    visited_network: Option<String>,
    auth_type: Option<String>,
) -> Result<Value, OrchestratorError> {
    let req = UarRequest {
        impi,
        impu,
        visited_network: visited_network.unwrap_or_else(|| deps.config.diameter.dest_realm.clone()),
        auth_type,
    };

    let txn = Transaction::new(&deps.stats);
    let uaa = txn
        .send(
            StatsBucket::Hss,
            deps.config.diameter.transaction_timeout,
            deps.stack.send_uar(req),
        )
        .await?;

    let codes = uaa.result_codes();
    let effective = codes.effective_code();

    if codes.result_code == Some(DIAMETER_SUCCESS)
        || effective == Some(DIAMETER_FIRST_REGISTRATION)
        || effective == Some(DIAMETER_SUBSEQUENT_REGISTRATION)
    {
        let code = effective.unwrap_or(DIAMETER_SUCCESS);
        return Ok(match &uaa.server_name {
            Some(server_name) => json!({"result-code": code, "scscf": server_name}),
            None => json!({
                "result-code": code,
                "server-capabilities": uaa.server_capabilities.clone().unwrap_or_else(|| json!({})),
            }),
        });
    }

    if effective == Some(DIAMETER_ERROR_USER_UNKNOWN)
        || effective == Some(DIAMETER_ERROR_IDENTITIES_DONT_MATCH)
    {
        return Err(OrchestratorError::NotFound);
    }

    if codes.result_code == Some(DIAMETER_AUTHORIZATION_REJECTED)
        || effective == Some(DIAMETER_ERROR_ROAMING_NOT_ALLOWED)
    {
        return Err(OrchestratorError::Denied);
    }

    if codes.result_code == Some(DIAMETER_TOO_BUSY) {
        return Err(OrchestratorError::Busy);
    }

    Err(OrchestratorError::Upstream)
}
