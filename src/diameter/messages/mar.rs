// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{diameter::result_codes::ResultCodes, model::Impi};

/// Multimedia-Auth-Request (MAR): requests a digest or AKA authentication
/// vector for `impi`/`impu` with a single item (`SIP-Number-Auth-Items =
/// 1`, per `spec.md` §4.4).
#[derive(Debug, Clone)]
pub struct MarRequest {
    pub impi: Impi,
    pub impu: String,
    pub server_name: String,
    pub sip_auth_scheme: String,
    pub sip_number_auth_items: u32,
    pub sip_authorization: Option<String>,
}

impl MarRequest {
    pub fn new(impi: Impi, impu: String, server_name: String, sip_auth_scheme: String) -> Self {
        MarRequest {
            impi,
            impu,
            server_name,
            sip_auth_scheme,
            sip_number_auth_items: 1,
            sip_authorization: None,
        }
    }
}

/// Multimedia-Auth-Answer (MAA).
#[derive(Debug, Clone, Default)]
pub struct MaaAnswer {
    pub result_code: Option<u32>,
    pub experimental_result_code: Option<u32>,
    /// Present on success: the SIP-Auth-Data-Item contents, already
    /// normalized into the core's [`crate::model::AuthVector`] by the
    /// caller (the grouped AVP's internal shape is a stack concern).
    pub auth_vector: Option<crate::model::AuthVector>,
}

impl MaaAnswer {
    pub fn result_codes(&self) -> ResultCodes {
        ResultCodes {
            result_code: self.result_code,
            experimental_result_code: self.experimental_result_code,
        }
    }
}
