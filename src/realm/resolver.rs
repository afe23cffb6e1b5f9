// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::time::Duration;

use async_trait::async_trait;

use crate::realm::peer::{PeerKey, Transport};

/// A single resolved target: a peer address plus the transport to reach it
/// over, before any connection has been attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub host: String,
    pub transport: Transport,
    pub port: u16,
}

impl ResolvedTarget {
    pub fn key(&self) -> PeerKey {
        PeerKey {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Resolves Diameter peers for a realm, injected into the realm manager so
/// tests can supply canned target lists (`spec.md` §4.9 step 1).
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns up to `max_peers` targets for `realm`/`hostname`, plus the
    /// TTL after which the caller should re-resolve.
    async fn resolve(
        &self,
        realm: &str,
        hostname: &str,
        max_peers: usize,
    ) -> anyhow::Result<(Vec<ResolvedTarget>, Duration)>;
}
