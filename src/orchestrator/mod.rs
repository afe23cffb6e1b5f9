// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Per-request orchestrators (C4–C8): each HTTP or HSS-push entry point is
//! one function (or, for C7/C8-RTR, a small tagged state machine built on
//! [`crate::state_machine::common`]) that sequences cache lookups, Cx
//! exchanges, and cache writes to a single terminal result, per Design Note
//! "Per-request handler as state machine."

pub mod digest_av;
pub mod error;
pub mod hss_push;
pub mod location_info;
pub mod reg_data;
pub mod registration_status;
pub mod sip_router_client;

use std::sync::Arc;

use crate::{
    cache::Store, cfg::config::Config, diameter::DiameterStack, orchestrator::sip_router_client::SipRouterClient,
    stats::Stats,
};

pub use error::OrchestratorError;

/// Shared collaborators every orchestrator function is handed: the cache,
/// the Diameter stack, the downstream SIP router client, process
/// configuration, and the statistics recorder. Bundled in one struct so
/// handler signatures stay short as the set of orchestrators grows (Design
/// Note "Global stack singleton": explicit injected dependency, not
/// module-scope state).
#[derive(Clone)]
pub struct Deps {
    pub store: Arc<dyn Store>,
    pub stack: Arc<dyn DiameterStack>,
    pub sip_router: Arc<dyn SipRouterClient>,
    pub config: Arc<Config>,
    pub stats: Arc<Stats>,
    pub timestamps: Arc<crate::cache::TimestampGenerator>,
}
