// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use core::fmt;

use serde::{Deserialize, Serialize};

/// Server-Assignment-Type, the Cx-defined reason code carried on a SAR.
/// Wire values per 3GPP TS 29.229 §6.3.15, carried verbatim including the
/// two variants the original never produces (see below).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ServerAssignmentType {
    NoAssignment = 0,
    Registration = 1,
    ReRegistration = 2,
    UnregisteredUser = 3,
    TimeoutDeregistration = 4,
    UserDeregistration = 5,
    /// Present for wire fidelity only; never produced by this core's
    /// decision table (`spec.md` §9, Open Question).
    TimeoutDeregistrationStoreServerName = 6,
    /// Present for wire fidelity only; never produced by this core's
    /// decision table (`spec.md` §9, Open Question).
    UserDeregistrationStoreServerName = 7,
    AdministrativeDeregistration = 8,
    AuthenticationFailure = 9,
    AuthenticationTimeout = 10,
}

impl ServerAssignmentType {
    pub fn wire_value(self) -> u32 {
        self as u8 as u32
    }

    /// Whether the HTTP handler should consult the cache before (possibly)
    /// emitting a SAR, per the C7 decision table.
    pub fn cache_lookup_first(self) -> bool {
        matches!(
            self,
            ServerAssignmentType::NoAssignment
                | ServerAssignmentType::Registration
                | ServerAssignmentType::UnregisteredUser
        )
    }

    /// Whether a successful SAA for this SAT implies tearing down cache
    /// state (dissociate/delete) rather than writing fresh subscription data.
    pub fn deregistration(self) -> bool {
        matches!(
            self,
            ServerAssignmentType::UserDeregistration
                | ServerAssignmentType::TimeoutDeregistration
                | ServerAssignmentType::AdministrativeDeregistration
                | ServerAssignmentType::AuthenticationFailure
                | ServerAssignmentType::AuthenticationTimeout
                | ServerAssignmentType::TimeoutDeregistrationStoreServerName
                | ServerAssignmentType::UserDeregistrationStoreServerName
        )
    }

    /// Whether the dereg is final: associated IMPI→IMPU mappings must be
    /// deleted outright, not merely dissociated from this IRS.
    pub fn is_final_deregistration(self) -> bool {
        matches!(
            self,
            ServerAssignmentType::UserDeregistration
                | ServerAssignmentType::AdministrativeDeregistration
        )
    }

    /// Unused by this core; carried only so the enum round-trips the wire
    /// value faithfully (`spec.md` §3: "store_server_name (unused in this
    /// core)").
    pub fn store_server_name(self) -> bool {
        false
    }
}

impl fmt::Display for ServerAssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerAssignmentType::NoAssignment => "NO_ASSIGNMENT",
            ServerAssignmentType::Registration => "REGISTRATION",
            ServerAssignmentType::ReRegistration => "RE_REGISTRATION",
            ServerAssignmentType::UnregisteredUser => "UNREGISTERED_USER",
            ServerAssignmentType::TimeoutDeregistration => "TIMEOUT_DEREGISTRATION",
            ServerAssignmentType::UserDeregistration => "USER_DEREGISTRATION",
            ServerAssignmentType::TimeoutDeregistrationStoreServerName => {
                "TIMEOUT_DEREGISTRATION_STORE_SERVER_NAME"
            },
            ServerAssignmentType::UserDeregistrationStoreServerName => {
                "USER_DEREGISTRATION_STORE_SERVER_NAME"
            },
            ServerAssignmentType::AdministrativeDeregistration => {
                "ADMINISTRATIVE_DEREGISTRATION"
            },
            ServerAssignmentType::AuthenticationFailure => "AUTHENTICATION_FAILURE",
            ServerAssignmentType::AuthenticationTimeout => "AUTHENTICATION_TIMEOUT",
        };
        f.write_str(s)
    }
}

/// The `reqtype` values accepted on `PUT`/`DELETE /impu/<impu>/reg-data`,
/// mapped to a SAT per the C7 decision table (`spec.md` §4.7). `reg` maps
/// to `Registration` or `ReRegistration` depending on cache state, resolved
/// by the orchestrator, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegDataReqType {
    Reg,
    Call,
    DeregUser,
    DeregAdmin,
    DeregTimeout,
    DeregAuthFailed,
    DeregAuthTimeout,
}

impl RegDataReqType {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "reg" => RegDataReqType::Reg,
            "call" => RegDataReqType::Call,
            "dereg-user" => RegDataReqType::DeregUser,
            "dereg-admin" => RegDataReqType::DeregAdmin,
            "dereg-timeout" => RegDataReqType::DeregTimeout,
            "dereg-auth-failed" => RegDataReqType::DeregAuthFailed,
            "dereg-auth-timeout" => RegDataReqType::DeregAuthTimeout,
            _ => return None,
        })
    }

    /// The SAT a `PUT`/`DELETE` with this reqtype maps to, absent any
    /// cache-state upgrade (`reg`/`call` start as `Registration`, upgraded
    /// to `ReRegistration` by the orchestrator on a registered cache hit).
    pub fn initial_sat(self) -> ServerAssignmentType {
        match self {
            RegDataReqType::Reg | RegDataReqType::Call => ServerAssignmentType::Registration,
            RegDataReqType::DeregUser => ServerAssignmentType::UserDeregistration,
            RegDataReqType::DeregAdmin => ServerAssignmentType::AdministrativeDeregistration,
            RegDataReqType::DeregTimeout => ServerAssignmentType::TimeoutDeregistration,
            RegDataReqType::DeregAuthFailed => ServerAssignmentType::AuthenticationFailure,
            RegDataReqType::DeregAuthTimeout => ServerAssignmentType::AuthenticationTimeout,
        }
    }
}
