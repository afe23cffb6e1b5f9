// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{diameter::result_codes::ResultCodes, model::Impi};

/// User-Authorization-Request (UAR).
#[derive(Debug, Clone)]
pub struct UarRequest {
    pub impi: Impi,
    pub impu: String,
    pub visited_network: String,
    pub auth_type: Option<String>,
}

/// User-Authorization-Answer (UAA).
#[derive(Debug, Clone, Default)]
pub struct UaaAnswer {
    pub result_code: Option<u32>,
    pub experimental_result_code: Option<u32>,
    pub server_name: Option<String>,
    /// `Server-Capabilities` grouped AVP, relayed opaquely as a JSON-ready
    /// value built by the caller from the stack's parsed fields.
    pub server_capabilities: Option<serde_json::Value>,
}

impl UaaAnswer {
    pub fn result_codes(&self) -> ResultCodes {
        ResultCodes {
            result_code: self.result_code,
            experimental_result_code: self.experimental_result_code,
        }
    }
}
