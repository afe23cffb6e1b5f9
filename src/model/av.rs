// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use serde::{Deserialize, Serialize};

/// Authentication vector returned by `GetAV`/emitted by `PutAV`. Tagged
/// union of the two Cx authentication schemes; both variants are carried as
/// strings since the core never interprets digest or cryptographic
/// material, only stores and forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "kebab-case")]
pub enum AuthVector {
    Digest {
        ha1: String,
        realm: String,
        qop: String,
        preferred_scheme: String,
    },
    Aka {
        challenge: String,
        response: String,
        cryptkey: String,
        integritykey: String,
    },
}

impl AuthVector {
    pub fn preferred_scheme(&self) -> &str {
        match self {
            AuthVector::Digest {
                preferred_scheme, ..
            } => preferred_scheme,
            AuthVector::Aka { .. } => "SIP Digest",
        }
    }

    /// Synthesizes a digest AV purely from configuration, used when
    /// `hss_configured = false` (no HSS to ask).
    pub fn synthetic_digest(realm: &str) -> Self {
        AuthVector::Digest {
            ha1: String::new(),
            realm: realm.to_string(),
            qop: "auth".to_string(),
            preferred_scheme: "SIP Digest".to_string(),
        }
    }
}
