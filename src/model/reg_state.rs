// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use core::fmt;

use serde::{Deserialize, Serialize};

/// Registration state stored alongside an `impu_subscription` row.
/// `Unchanged` is a write-only sentinel: it never appears in a stored row,
/// only as the `reg_state` argument to a write that must preserve whatever
/// state is already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationState {
    Registered,
    Unregistered,
    NotRegistered,
    Unchanged,
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationState::Registered => "REGISTERED",
            RegistrationState::Unregistered => "UNREGISTERED",
            RegistrationState::NotRegistered => "NOT_REGISTERED",
            RegistrationState::Unchanged => "UNCHANGED",
        })
    }
}

impl RegistrationState {
    /// Resolves a write-time state against whatever is already stored.
    /// `Unchanged` defers to `existing`; every other variant is written
    /// verbatim. Mirrors the `PutIMSSubscription` contract in `spec.md` §4.1.
    pub fn resolve_for_write(self, existing: Option<RegistrationState>) -> RegistrationState {
        match self {
            RegistrationState::Unchanged => existing.unwrap_or(RegistrationState::NotRegistered),
            other => other,
        }
    }
}
