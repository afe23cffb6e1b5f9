// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    diameter::DiameterStack,
    realm::{
        peer::{Peer, PeerKey},
        resolver::Resolver,
    },
};

/// Background control loop that keeps a Diameter stack's connected-peer set
/// in sync with what a [`Resolver`] reports for `(realm, hostname,
/// max_peers)`. One tick implements `spec.md` §4.9 steps 1–4 exactly;
/// `run` drives ticks until [`RealmManager::stop`] is called.
pub struct RealmManager<S, R> {
    stack: Arc<S>,
    resolver: Arc<R>,
    realm: String,
    hostname: String,
    max_peers: usize,
    max_tick_interval: Duration,
    peers: DashMap<PeerKey, Arc<Peer>>,
    cancel: CancellationToken,
}

impl<S, R> RealmManager<S, R>
where
    S: DiameterStack + 'static,
    R: Resolver + 'static,
{
    pub fn new(
        stack: Arc<S>,
        resolver: Arc<R>,
        realm: String,
        hostname: String,
        max_peers: usize,
        max_tick_interval: Duration,
    ) -> Self {
        RealmManager {
            stack,
            resolver,
            realm,
            hostname,
            max_peers,
            max_tick_interval,
            peers: DashMap::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Called by the stack's connection-succeeded hook.
    pub fn connection_succeeded(&self, key: &PeerKey) {
        if let Some(peer) = self.peers.get(key) {
            peer.set_connected(true);
        }
    }

    /// Called by the stack's connection-failed hook: the peer is dropped
    /// immediately and does not count against `max_peers` (`spec.md` §4.9,
    /// "Connection hooks").
    pub fn connection_failed(&self, key: &PeerKey) {
        self.peers.remove(key);
    }

    /// Called by the stack's connection-closed hook, once a tombstoned
    /// peer has actually finished shutting down.
    pub fn connection_closed(&self, key: &PeerKey) {
        self.peers.remove(key);
    }

    /// Runs one resolve-and-reconcile tick, returning the TTL the caller
    /// should wait before the next tick.
    pub async fn manage_connections(&self) -> anyhow::Result<Duration> {
        let (targets, ttl) = self
            .resolver
            .resolve(&self.realm, &self.hostname, self.max_peers)
            .await?;

        let wanted: DashMap<PeerKey, ()> =
            targets.iter().map(|t| (t.key(), ())).collect();

        for target in &targets {
            let key = target.key();
            if self.peers.contains_key(&key) {
                continue;
            }
            let peer = Arc::new(Peer::new(target.host.clone(), target.transport, target.port));
            if self.stack.add(&peer).await {
                self.peers.insert(key, peer);
            }
            // `add` returning false means the stack already considers this
            // peer connected (e.g. from a prior tick's tombstone that
            // hasn't finished closing); discard rather than double-track it.
        }

        let stale: Vec<PeerKey> = self
            .peers
            .iter()
            .filter(|entry| entry.value().is_connected() && !wanted.contains_key(entry.key()))
            .map(|entry| entry.key().clone())
            .collect();

        for key in stale {
            if let Some(entry) = self.peers.get(&key) {
                let peer = Arc::clone(entry.value());
                drop(entry);
                self.stack.remove(&peer).await;
                peer.tombstone();
            }
        }

        Ok(ttl)
    }

    /// Drives ticks until [`stop`](Self::stop) is called. Each tick waits
    /// on `min(ttl, max_tick_interval)` so a long resolver TTL never keeps
    /// `stop()` from waking the loop promptly.
    pub async fn run(self: Arc<Self>) {
        loop {
            let deadline = match self.manage_connections().await {
                Ok(ttl) => ttl.min(self.max_tick_interval),
                Err(e) => {
                    warn!(error = %e, "realm manager resolve failed, retrying after floor interval");
                    self.max_tick_interval
                },
            };

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("realm manager stopping");
                    break;
                }
                _ = tokio::time::sleep(deadline) => {}
            }
        }

        self.shutdown().await;
    }

    /// Signals [`run`](Self::run) to stop after its current tick.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    async fn shutdown(&self) {
        for entry in self.peers.iter() {
            if entry.value().is_connected() {
                self.stack.remove(entry.value()).await;
            }
        }
        self.peers.clear();
    }
}
