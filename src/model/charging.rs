// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use serde::{Deserialize, Serialize};

/// Charging function addresses returned alongside IMS-subscription data by
/// a successful SAA. Opaque to the core beyond storage and JSON relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingAddresses {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ccf_primary: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ccf_secondary: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecf_primary: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ecf_secondary: Vec<String>,
}

impl ChargingAddresses {
    pub fn is_empty(&self) -> bool {
        self.ccf_primary.is_empty()
            && self.ccf_secondary.is_empty()
            && self.ecf_primary.is_empty()
            && self.ecf_secondary.is_empty()
    }
}
