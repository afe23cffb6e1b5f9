// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::model::{AuthVector, Impi};

/// Push-Profile-Request (PPR), inbound from the HSS.
#[derive(Debug, Clone)]
pub struct PprRequest {
    pub impi: Impi,
    pub auth_vector: Option<AuthVector>,
    pub ims_subscription_xml: Option<String>,
}

/// Push-Profile-Answer (PPA), the reply this core sends back.
#[derive(Debug, Clone)]
pub struct PpaAnswer {
    pub result_code: u32,
}

impl PpaAnswer {
    pub fn success() -> Self {
        PpaAnswer {
            result_code: crate::diameter::result_codes::result_code::DIAMETER_SUCCESS,
        }
    }

    pub fn unable_to_comply() -> Self {
        PpaAnswer {
            result_code: crate::diameter::result_codes::result_code::DIAMETER_UNABLE_TO_COMPLY,
        }
    }
}
