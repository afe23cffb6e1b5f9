// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Wire shapes for the HTTP frontend: path and query parameter structs and
//! JSON request/response bodies for the six endpoints `spec.md` §6 names.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::orchestrator::OrchestratorError;

#[derive(Debug, Deserialize)]
pub struct ImpiPath {
    pub impi: String,
}

#[derive(Debug, Deserialize)]
pub struct ImpuPath {
    pub impu: String,
}

/// `GET /impi/<impi>/av` query parameters.
#[derive(Debug, Deserialize)]
pub struct AvQuery {
    #[serde(default)]
    pub impu: Option<String>,
    #[serde(default, rename = "server-name")]
    pub server_name: Option<String>,
    /// AKA resync `AUTS` value, carried by the client on a re-synchronization
    /// request and forwarded as the MAR's `SIP-Authorization` AVP.
    #[serde(default)]
    pub autn: Option<String>,
}

/// `GET /impi/<impi>/registration-status` query parameters.
#[derive(Debug, Deserialize)]
pub struct RegistrationStatusQuery {
    pub impu: String,
    #[serde(default, rename = "visited-network")]
    pub visited_network: Option<String>,
    #[serde(default, rename = "auth-type")]
    pub auth_type: Option<String>,
}

/// `GET /impu/<impu>/location` query parameters.
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub originating: Option<String>,
    #[serde(default, rename = "auth-type")]
    pub auth_type: Option<String>,
}

/// `GET /impu/<impu>/reg-data` query parameters: the private identity is
/// optional on a pure-cache-lookup GET, required on PUT/DELETE.
#[derive(Debug, Deserialize, Default)]
pub struct RegDataQuery {
    #[serde(default, rename = "private_id")]
    pub private_id: Option<String>,
}

/// `PUT`/`DELETE /impu/<impu>/reg-data` request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegDataBody {
    pub reqtype: String,
}

/// Renders an [`OrchestratorError`] as the JSON body this frontend returns
/// alongside its mapped HTTP status, per `spec.md` §7.
pub fn error_body(e: OrchestratorError) -> Value {
    json!({ "error": e.to_string() })
}
