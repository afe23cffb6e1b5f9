// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Base-protocol and Cx-experimental result codes used by the orchestrators.
//! Values per RFC 6733 and 3GPP TS 29.229 §6.3.

/// `Result-Code` AVP values from the base Diameter protocol (RFC 6733 §7.1).
pub mod result_code {
    pub const DIAMETER_SUCCESS: u32 = 2001;
    pub const DIAMETER_TOO_BUSY: u32 = 3004;
    pub const DIAMETER_AUTHORIZATION_REJECTED: u32 = 5003;
    pub const DIAMETER_UNABLE_TO_COMPLY: u32 = 5012;
}

/// `Experimental-Result-Code` AVP values defined by 3GPP TS 29.229 §6.3 for
/// the Cx reference point.
pub mod experimental_result_code {
    pub const DIAMETER_FIRST_REGISTRATION: u32 = 2001;
    pub const DIAMETER_SUBSEQUENT_REGISTRATION: u32 = 2002;
    pub const DIAMETER_UNREGISTERED_SERVICE: u32 = 2003;
    pub const DIAMETER_SUCCESS_SERVER_NAME_NOT_STORED: u32 = 2004;
    pub const DIAMETER_ERROR_USER_UNKNOWN: u32 = 5001;
    pub const DIAMETER_ERROR_IDENTITIES_DONT_MATCH: u32 = 5002;
    pub const DIAMETER_ERROR_IDENTITY_NOT_REGISTERED: u32 = 5003;
    pub const DIAMETER_ERROR_ROAMING_NOT_ALLOWED: u32 = 5004;
}

/// `Deregistration-Reason` enumerated values carried by an RTR (TS 29.229
/// §6.3.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeregistrationReason {
    PermanentTermination = 0,
    NewServerAssigned = 1,
    ServerChange = 2,
    RemoveScscf = 3,
}

impl DeregistrationReason {
    pub fn from_wire(v: u32) -> Option<Self> {
        Some(match v {
            0 => DeregistrationReason::PermanentTermination,
            1 => DeregistrationReason::NewServerAssigned,
            2 => DeregistrationReason::ServerChange,
            3 => DeregistrationReason::RemoveScscf,
            _ => return None,
        })
    }

    pub fn wire_value(self) -> u32 {
        self as u8 as u32
    }
}


/// The result of extracting `(Result-Code, Experimental-Result-Code)` from
/// an answer, with the precedence rule §4.5/§4.6 both apply: prefer
/// `result_code` when present, else fall back to the experimental code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultCodes {
    pub result_code: Option<u32>,
    pub experimental_result_code: Option<u32>,
}

impl ResultCodes {
    /// `result_code ? result_code : experimental_result_code`, per
    /// `examples/original_source/src/handlers_icscf.cpp`.
    pub fn effective_code(self) -> Option<u32> {
        self.result_code.or(self.experimental_result_code)
    }

    pub fn is_success(self) -> bool {
        self.result_code == Some(result_code::DIAMETER_SUCCESS)
    }
}
