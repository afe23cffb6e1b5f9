// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{future::Future, time::Duration};

use thiserror::Error;
use tokio::time::timeout;
use tracing::warn;

use crate::stats::{Stats, StatsBucket};

/// Diameter Transaction Layer (C2): wraps a single Cx request/answer
/// exchange with a timeout, guaranteeing exactly one outcome — the answer
/// or a timeout — and recording latency into the bucket the caller names.
///
/// The `stack` implementation owns correlation of request to answer (it is
/// the thing the external Diameter library provides); this layer only
/// arms the deadline and records statistics, per `spec.md` §4.2: "the layer
/// does not retry; retry policy lives in the orchestrator when it exists."
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("diameter transaction timed out")]
    Timeout,
    #[error("diameter stack error: {0}")]
    Stack(#[from] anyhow::Error),
}

pub struct Transaction<'a> {
    stats: &'a Stats,
}

impl<'a> Transaction<'a> {
    pub fn new(stats: &'a Stats) -> Self {
        Transaction { stats }
    }

    /// Runs `fut` to completion, enforcing `deadline` with a monotonic
    /// clock (`tokio::time::timeout`) and recording the outcome's latency
    /// into `bucket`. On timeout, `fut` is dropped and never polled again —
    /// the one-shot callback guarantee from `spec.md` §4.2. A timeout also
    /// counts against `rejected_overload`: the HSS failed to answer inside
    /// its deadline, the same signal an overloaded upstream produces.
    pub async fn send<T, F>(
        &self,
        bucket: StatsBucket,
        deadline: Duration,
        fut: F,
    ) -> Result<T, TransactionError>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        self.stats.incoming_request();
        let started = tokio::time::Instant::now();
        let result = timeout(deadline, fut).await;
        let elapsed = started.elapsed();
        self.stats.record_latency(bucket, elapsed);

        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(TransactionError::Stack(e)),
            Err(_) => {
                warn!(bucket = ?bucket, deadline_ms = deadline.as_millis(), "diameter transaction timed out");
                self.stats.rejected_overload();
                Err(TransactionError::Timeout)
            },
        }
    }
}
