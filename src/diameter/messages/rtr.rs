// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    diameter::result_codes::DeregistrationReason,
    model::{Impi, Impu},
};

/// Registration-Termination-Request (RTR), inbound from the HSS.
#[derive(Debug, Clone)]
pub struct RtrRequest {
    pub deregistration_reason: DeregistrationReason,
    pub impi: Impi,
    pub associated_identities: Vec<Impi>,
    pub impus: Vec<Impu>,
}

/// Registration-Termination-Answer (RTA), the reply this core sends back.
#[derive(Debug, Clone)]
pub struct RtaAnswer {
    pub result_code: u32,
}

impl RtaAnswer {
    pub fn success() -> Self {
        RtaAnswer {
            result_code: crate::diameter::result_codes::result_code::DIAMETER_SUCCESS,
        }
    }

    pub fn unable_to_comply() -> Self {
        RtaAnswer {
            result_code: crate::diameter::result_codes::result_code::DIAMETER_UNABLE_TO_COMPLY,
        }
    }
}
