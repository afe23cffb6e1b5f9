// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! HSS-Push Orchestrator (C8): dispatches inbound PPRs and RTRs arriving
//! off the Diameter stack to their handlers and replies with the resulting
//! PPA/RTA, per `spec.md` §4.8.

pub mod ppr;
pub mod rtr;

use std::sync::Arc;

use tracing::error;

use crate::{
    diameter::{DiameterStack, PushRequest, PushRequestSource},
    orchestrator::Deps,
};

pub use ppr::handle_ppr;
pub use rtr::handle_rtr;

/// Drains `source` until it yields `None` (stack shutdown), dispatching
/// each push request to its handler and replying on the same stack the
/// request arrived on. Runs for the lifetime of the process alongside the
/// HTTP server and the realm manager (`spec.md` §5).
pub async fn run(deps: Deps, source: Arc<dyn PushRequestSource>) {
    while let Some(req) = source.next().await {
        match req {
            PushRequest::Ppr(ppr) => {
                let answer = handle_ppr(&deps, ppr).await;
                if let Err(e) = deps.stack.reply_ppa(answer).await {
                    error!(error = %e, "failed to send PPA");
                }
            },
            PushRequest::Rtr(rtr) => {
                let answer = handle_rtr(&deps, rtr).await;
                if let Err(e) = deps.stack.reply_rta(answer).await {
                    error!(error = %e, "failed to send RTA");
                }
            },
        }
    }
}
