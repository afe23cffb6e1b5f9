// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::sync::Arc;

use anyhow::{Context, Result};
use homestead_core::{
    cache::{InMemoryStore, TimestampGenerator},
    cfg::{cli::resolve_config_path, config::Config, logger::init_logger},
    diameter::{NullDiameterStack, NullPushSource},
    http,
    orchestrator::{Deps, hss_push, sip_router_client::HttpSipRouterClient},
    realm::{DnsResolver, RealmManager},
    stats::Stats,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _logger_guard = init_logger("config/logger.yaml")?;

    let cfg = resolve_config_path("config/homestead.yaml")
        .and_then(Config::load_from_file)
        .context("failed to resolve or load config")?;
    let cfg = Arc::new(cfg);

    let store = Arc::new(InMemoryStore::new());
    let stack = Arc::new(NullDiameterStack::new());
    let resolver = Arc::new(DnsResolver::new());
    let sip_router = Arc::new(
        HttpSipRouterClient::new(&cfg.http.sip_router_base_url).context("failed to configure sip router client")?,
    );
    let stats = Arc::new(Stats::new());
    let timestamps = Arc::new(TimestampGenerator::new());

    let deps = Deps {
        store,
        stack: stack.clone(),
        sip_router,
        config: cfg.clone(),
        stats,
        timestamps,
    };

    let realm_manager = Arc::new(RealmManager::new(
        stack.clone(),
        resolver,
        cfg.realm.realm.clone(),
        cfg.realm.hostname.clone(),
        cfg.realm.max_peers,
        cfg.realm.max_tick_interval,
    ));
    let realm_manager_handle = tokio::spawn(realm_manager.clone().run());

    let push_source: Arc<dyn homestead_core::diameter::PushRequestSource> = Arc::new(NullPushSource::new());
    let hss_push_handle = tokio::spawn(hss_push::run(deps.clone(), push_source));

    let bind_address = cfg.http.bind_address.clone();
    info!(bind_address, "starting homestead");

    let http_result = http::run(deps, &bind_address).await;

    // `spec.md` §5 shutdown order: realm manager stops first (so it quits
    // offering new peers to the stack), then the HSS-push dispatcher drains
    // on its own once the (absent, in this build) stack stops producing
    // pushes.
    realm_manager.stop();
    let _ = realm_manager_handle.await;
    hss_push_handle.abort();

    http_result
}
