// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Shared fixtures for the black-box unit tests: a scriptable
//! [`DiameterStack`] double and a `Deps` builder, so each test file only
//! states the answer it cares about.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homestead_core::{
    cache::{InMemoryStore, Store, TimestampGenerator},
    cfg::config::Config,
    diameter::{
        DiameterStack,
        messages::{LiaAnswer, LirRequest, MaaAnswer, MarRequest, PpaAnswer, PprRequest, RtaAnswer, RtrRequest, SaaAnswer, SarRequest, UaaAnswer, UarRequest},
    },
    orchestrator::{Deps, sip_router_client::{DeregisterRequest, SipRouterClient}},
    realm::Peer,
    stats::Stats,
};

/// A [`DiameterStack`] whose answers are fixed in advance. Any send not
/// stubbed panics, so a test only has to wire up the exchange it exercises.
#[derive(Default)]
pub struct ScriptedStack {
    pub maa: Mutex<Option<anyhow::Result<MaaAnswer>>>,
    pub uaa: Mutex<Option<anyhow::Result<UaaAnswer>>>,
    pub lia: Mutex<Option<anyhow::Result<LiaAnswer>>>,
    pub saa: Mutex<Option<anyhow::Result<SaaAnswer>>>,
}

impl ScriptedStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maa(self, answer: MaaAnswer) -> Self {
        *self.maa.lock().expect("lock") = Some(Ok(answer));
        self
    }

    pub fn with_uaa(self, answer: UaaAnswer) -> Self {
        *self.uaa.lock().expect("lock") = Some(Ok(answer));
        self
    }

    pub fn with_lia(self, answer: LiaAnswer) -> Self {
        *self.lia.lock().expect("lock") = Some(Ok(answer));
        self
    }

    pub fn with_saa(self, answer: SaaAnswer) -> Self {
        *self.saa.lock().expect("lock") = Some(Ok(answer));
        self
    }
}

#[async_trait]
impl DiameterStack for ScriptedStack {
    async fn send_mar(&self, _req: MarRequest) -> anyhow::Result<MaaAnswer> {
        self.maa.lock().expect("lock").take().expect("send_mar not stubbed")
    }

    async fn send_uar(&self, _req: UarRequest) -> anyhow::Result<UaaAnswer> {
        self.uaa.lock().expect("lock").take().expect("send_uar not stubbed")
    }

    async fn send_lir(&self, _req: LirRequest) -> anyhow::Result<LiaAnswer> {
        self.lia.lock().expect("lock").take().expect("send_lir not stubbed")
    }

    async fn send_sar(&self, _req: SarRequest) -> anyhow::Result<SaaAnswer> {
        self.saa.lock().expect("lock").take().expect("send_sar not stubbed")
    }

    async fn reply_ppa(&self, _answer: PpaAnswer) -> anyhow::Result<()> {
        Ok(())
    }

    async fn reply_rta(&self, _answer: RtaAnswer) -> anyhow::Result<()> {
        Ok(())
    }

    async fn add(&self, _peer: &Peer) -> bool {
        true
    }

    async fn remove(&self, _peer: &Peer) {}
}

/// A stack no test here expects to be called; every send panics.
pub struct UnreachableStack;

#[async_trait]
impl DiameterStack for UnreachableStack {
    async fn send_mar(&self, _req: MarRequest) -> anyhow::Result<MaaAnswer> {
        panic!("send_mar should not be called")
    }

    async fn send_uar(&self, _req: UarRequest) -> anyhow::Result<UaaAnswer> {
        panic!("send_uar should not be called")
    }

    async fn send_lir(&self, _req: LirRequest) -> anyhow::Result<LiaAnswer> {
        panic!("send_lir should not be called")
    }

    async fn send_sar(&self, _req: SarRequest) -> anyhow::Result<SaaAnswer> {
        panic!("send_sar should not be called")
    }

    async fn reply_ppa(&self, _answer: PpaAnswer) -> anyhow::Result<()> {
        Ok(())
    }

    async fn reply_rta(&self, _answer: RtaAnswer) -> anyhow::Result<()> {
        Ok(())
    }

    async fn add(&self, _peer: &Peer) -> bool {
        true
    }

    async fn remove(&self, _peer: &Peer) {}
}

pub struct RecordingSipRouter {
    pub calls: Mutex<Vec<DeregisterRequest>>,
}

impl RecordingSipRouter {
    pub fn new() -> Self {
        RecordingSipRouter {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SipRouterClient for RecordingSipRouter {
    async fn deregister(&self, req: DeregisterRequest) -> anyhow::Result<bool> {
        self.calls.lock().expect("lock").push(req);
        Ok(true)
    }
}

/// Builds a [`Deps`] over a real [`InMemoryStore`] and the given stack,
/// with [`Config::sample`] and a fresh [`Stats`]/[`TimestampGenerator`].
pub fn deps_with(stack: Arc<dyn DiameterStack>) -> Deps {
    Deps {
        store: Arc::new(InMemoryStore::default()) as Arc<dyn Store>,
        stack,
        sip_router: Arc::new(RecordingSipRouter::new()),
        config: Arc::new(Config::sample()),
        stats: Arc::new(Stats::new()),
        timestamps: Arc::new(TimestampGenerator::new()),
    }
}
