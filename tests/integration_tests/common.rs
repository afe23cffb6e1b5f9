// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Shared fixtures for the integration tests: a real [`InMemoryStore`]
//! wired up behind [`Deps`], plus a scriptable stack and a recording SIP
//! router so a test can assert on what each component actually did.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homestead_core::{
    cache::{InMemoryStore, Store, TimestampGenerator},
    cfg::config::Config,
    diameter::{
        DiameterStack,
        messages::{LiaAnswer, LirRequest, MaaAnswer, MarRequest, PpaAnswer, RtaAnswer, SaaAnswer, SarRequest, UaaAnswer, UarRequest},
    },
    orchestrator::{Deps, sip_router_client::{DeregisterRequest, SipRouterClient}},
    realm::Peer,
    stats::Stats,
};
use tokio::sync::Mutex as AsyncMutex;

/// A [`DiameterStack`] whose SAR answers are handed out from a queue, one
/// per call, so a multi-step scenario can script a distinct answer for
/// each SAR the orchestrator emits.
pub struct QueuedStack {
    saa_queue: AsyncMutex<Vec<anyhow::Result<SaaAnswer>>>,
}

impl QueuedStack {
    pub fn with_saa_answers(answers: Vec<SaaAnswer>) -> Self {
        QueuedStack {
            saa_queue: AsyncMutex::new(answers.into_iter().map(Ok).rev().collect()),
        }
    }
}

#[async_trait]
impl DiameterStack for QueuedStack {
    async fn send_mar(&self, _req: MarRequest) -> anyhow::Result<MaaAnswer> {
        anyhow::bail!("not scripted for this scenario")
    }

    async fn send_uar(&self, _req: UarRequest) -> anyhow::Result<UaaAnswer> {
        anyhow::bail!("not scripted for this scenario")
    }

    async fn send_lir(&self, _req: LirRequest) -> anyhow::Result<LiaAnswer> {
        anyhow::bail!("not scripted for this scenario")
    }

    async fn send_sar(&self, _req: SarRequest) -> anyhow::Result<SaaAnswer> {
        self.saa_queue.lock().await.pop().expect("no more scripted SAA answers")
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

/// A [`Deps`] over a real [`InMemoryStore`], so a test can assert on cache
/// state before and after driving an orchestrator through it.
pub fn deps_with(stack: Arc<dyn DiameterStack>, sip_router: Arc<dyn SipRouterClient>) -> Deps {
    Deps {
        store: Arc::new(InMemoryStore::default()) as Arc<dyn Store>,
        stack,
        sip_router,
        config: Arc::new(Config::sample()),
        stats: Arc::new(Stats::new()),
        timestamps: Arc::new(TimestampGenerator::new()),
    }
}
