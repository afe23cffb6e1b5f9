// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Placeholder [`DiameterStack`] for deployments that haven't wired in a
//! real one yet. Per the doc comment on [`crate::diameter::messages`], wire
//! encoding is out of scope for this core: a production binary links an
//! external Diameter stack and adapts it to this trait. Until then,
//! `NullDiameterStack` keeps the process runnable: every Cx send fails
//! cleanly, peer bookkeeping and push replies are harmless no-ops.

use async_trait::async_trait;
use tracing::warn;

use crate::{
    diameter::{
        messages::{LiaAnswer, LirRequest, MaaAnswer, MarRequest, PpaAnswer, PprRequest, RtaAnswer, RtrRequest, SaaAnswer, SarRequest, UaaAnswer, UarRequest},
        stack::{DiameterStack, PushRequest, PushRequestSource},
    },
    realm::peer::Peer,
};

#[derive(Debug, Default)]
pub struct NullDiameterStack;

impl NullDiameterStack {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DiameterStack for NullDiameterStack {
    async fn send_mar(&self, _req: MarRequest) -> anyhow::Result<MaaAnswer> {
        anyhow::bail!("no Diameter stack configured: cannot send MAR")
    }

    async fn send_uar(&self, _req: UarRequest) -> anyhow::Result<UaaAnswer> {
        anyhow::bail!("no Diameter stack configured: cannot send UAR")
    }

    async fn send_lir(&self, _req: LirRequest) -> anyhow::Result<LiaAnswer> {
        anyhow::bail!("no Diameter stack configured: cannot send LIR")
    }

    async fn send_sar(&self, _req: SarRequest) -> anyhow::Result<SaaAnswer> {
        anyhow::bail!("no Diameter stack configured: cannot send SAR")
    }

    async fn reply_ppa(&self, _answer: PpaAnswer) -> anyhow::Result<()> {
        warn!("no Diameter stack configured: dropping PPA");
        Ok(())
    }

    async fn reply_rta(&self, _answer: RtaAnswer) -> anyhow::Result<()> {
        warn!("no Diameter stack configured: dropping RTA");
        Ok(())
    }

    async fn add(&self, _peer: &Peer) -> bool {
        true
    }

    async fn remove(&self, _peer: &Peer) {}
}

/// A [`PushRequestSource`] that never yields anything, paired with
/// [`NullDiameterStack`]: the C8 push dispatcher (`hss_push::run`) exits
/// its drain loop immediately rather than spinning against a stack that
/// can never produce a PPR/RTR.
#[derive(Debug, Default)]
pub struct NullPushSource;

impl NullPushSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushRequestSource for NullPushSource {
    async fn next(&self) -> Option<PushRequest> {
        None
    }
}
