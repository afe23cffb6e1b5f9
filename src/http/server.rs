// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Router assembly and the HTTP frontend's serve loop.

use tako::{Method, router::Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::{http::routes, orchestrator::Deps};

/// Builds the router for the six endpoints `spec.md` §6 names, with `deps`
/// injected as tako global state (retrieved by [`tako::extractors::state::State`]
/// in each handler).
pub fn build_router(deps: Deps) -> Router {
    let mut router = Router::new();
    router.state("deps", deps);

    router.route(Method::GET, "/impi/{impi}/av", routes::get_av);
    router.route(Method::GET, "/impi/{impi}/registration-status", routes::get_registration_status);
    router.route(Method::GET, "/impu/{impu}/location", routes::get_location);
    router.route(Method::GET, "/impu/{impu}/reg-data", routes::get_reg_data);
    router.route(Method::PUT, "/impu/{impu}/reg-data", routes::put_reg_data);
    router.route(Method::DELETE, "/impu/{impu}/reg-data", routes::delete_reg_data);

    router
}

/// Binds `bind_address` and serves the HTTP frontend until the process
/// shuts down, per `spec.md` §5.
pub async fn run(deps: Deps, bind_address: &str) -> anyhow::Result<()> {
    let router = build_router(deps);
    let listener = TcpListener::bind(bind_address).await?;
    info!(bind_address, "homestead HTTP frontend listening");
    tako::serve(listener, router).await;
    Ok(())
}
