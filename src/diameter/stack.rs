// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use async_trait::async_trait;

use crate::{
    diameter::messages::{
        LiaAnswer, LirRequest, MaaAnswer, MarRequest, PpaAnswer, PprRequest, RtaAnswer, RtrRequest,
        SaaAnswer, SarRequest, UaaAnswer, UarRequest,
    },
    realm::peer::Peer,
};

/// The injected Diameter stack dependency: sends Cx requests and carries
/// the realm manager's peer lifecycle calls (Design Note "Global stack
/// singleton" — treated as an explicit dependency with its own lifetime,
/// not module-scope state, so tests can stub it).
///
/// Message-send methods return `anyhow::Result` because failures here are
/// stack-level (connection lost, encoding failure); the
/// [`crate::diameter::transaction::Transaction`] wrapper is what turns
/// "took too long" into a distinguished timeout outcome.
#[async_trait]
pub trait DiameterStack: Send + Sync {
    async fn send_mar(&self, req: MarRequest) -> anyhow::Result<MaaAnswer>;
    async fn send_uar(&self, req: UarRequest) -> anyhow::Result<UaaAnswer>;
    async fn send_lir(&self, req: LirRequest) -> anyhow::Result<LiaAnswer>;
    async fn send_sar(&self, req: SarRequest) -> anyhow::Result<SaaAnswer>;

    /// Replies to an inbound PPR with the given PPA. There is no answer to
    /// await: this closes out the HSS-initiated transaction.
    async fn reply_ppa(&self, answer: PpaAnswer) -> anyhow::Result<()>;
    /// Replies to an inbound RTR with the given RTA.
    async fn reply_rta(&self, answer: RtaAnswer) -> anyhow::Result<()>;

    /// Adds `peer` to the stack's connected-peer set. Returns `false` if
    /// the stack already has this peer (caller should discard it), `true`
    /// if it was newly added.
    async fn add(&self, peer: &Peer) -> bool;

    /// Removes `peer` from the stack. The peer becomes a tombstone in the
    /// realm manager's table until the stack's connection-closed hook
    /// fires for it.
    async fn remove(&self, peer: &Peer);
}

/// A single HSS-initiated request as it arrives off the stack, consumed by
/// the C8 push dispatcher.
pub enum PushRequest {
    Ppr(PprRequest),
    Rtr(RtrRequest),
}

/// Lets the C8 push dispatcher (`spec.md` §4.8) stay generic over how PPRs
/// and RTRs actually arrive, without depending on a specific transport.
#[async_trait]
pub trait PushRequestSource: Send + Sync {
    async fn next(&self) -> Option<PushRequest>;
}
