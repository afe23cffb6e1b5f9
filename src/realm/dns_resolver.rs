// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! DNS-backed [`Resolver`] (C9 collaborator): resolves Diameter peers for a
//! realm via SRV lookup on `_diameter._tcp.<realm>` and `_diameter._sctp.<realm>`,
//! per the DNS-based peer discovery `spec.md` §4.9 assumes sits behind this
//! trait. Falls back to a plain `A`/`AAAA` lookup of the realm itself,
//! using the configured Diameter port, when neither SRV name resolves —
//! useful for lab deployments that don't publish SRV records.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
};

use crate::realm::{
    peer::Transport,
    resolver::{ResolvedTarget, Resolver},
};

const DEFAULT_DIAMETER_PORT: u16 = 3868;
const FALLBACK_TTL: Duration = Duration::from_secs(300);

pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        }
    }

    async fn srv_targets(&self, realm: &str, transport: Transport, max_peers: usize) -> Vec<ResolvedTarget> {
        let proto = match transport {
            Transport::Tcp => "_tcp",
            Transport::Sctp => "_sctp",
        };
        let name = format!("_diameter.{proto}.{realm}");

        let Ok(lookup) = self.resolver.srv_lookup(name).await else {
            return Vec::new();
        };

        let mut targets: Vec<ResolvedTarget> = lookup
            .iter()
            .take(max_peers)
            .map(|srv| ResolvedTarget {
                host: srv.target().to_utf8().trim_end_matches('.').to_string(),
                transport,
                port: srv.port(),
            })
            .collect();
        targets.truncate(max_peers);
        targets
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn resolve(&self, realm: &str, hostname: &str, max_peers: usize) -> anyhow::Result<(Vec<ResolvedTarget>, Duration)> {
        let _ = hostname;

        let mut targets = self.srv_targets(realm, Transport::Tcp, max_peers).await;
        if targets.len() < max_peers {
            let remaining = max_peers - targets.len();
            targets.extend(self.srv_targets(realm, Transport::Sctp, remaining).await);
        }

        if targets.is_empty() {
            if let Ok(lookup) = self.resolver.lookup_ip(realm).await {
                targets = lookup
                    .iter()
                    .take(max_peers)
                    .map(|ip| ResolvedTarget {
                        host: ip.to_string(),
                        transport: Transport::Tcp,
                        port: DEFAULT_DIAMETER_PORT,
                    })
                    .collect();
            }
        }

        Ok((targets, FALLBACK_TTL))
    }
}
