// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Statistics recorder, grounded in
//! `examples/original_source/src/ut/mockstatisticsmanager.hpp`, the
//! authoritative list of counters the original maintains. Buckets classify
//! latency into {hss, hss_digest, hss_subscription, cache} per `spec.md`
//! §4.2, plus the HTTP-side request/overload counters.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsBucket {
    Hss,
    HssDigest,
    HssSubscription,
    Cache,
}

impl StatsBucket {
    fn field_name(self) -> &'static str {
        match self {
            StatsBucket::Hss => "hss_latency_us",
            StatsBucket::HssDigest => "hss_digest_latency_us",
            StatsBucket::HssSubscription => "hss_subscription_latency_us",
            StatsBucket::Cache => "cache_latency_us",
        }
    }
}

#[derive(Debug, Default)]
struct Counter(AtomicU64);

impl Counter {
    fn incr(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Process-wide statistics recorder. A thin sample counter rather than a
/// full histogram implementation — emission to an external time-series
/// store is out of scope (`spec.md` §1, Non-goals), but the bucket names
/// and counters are the ones the original process exposes.
#[derive(Debug, Default)]
pub struct Stats {
    latency_us: Counter,
    hss_latency_us: Counter,
    hss_digest_latency_us: Counter,
    hss_subscription_latency_us: Counter,
    cache_latency_us: Counter,
    incoming_requests: Counter,
    rejected_overload: Counter,
    http_latency_us: Counter,
    http_incoming_requests: Counter,
    http_rejected_overload: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_latency(&self, bucket: StatsBucket, elapsed: Duration) {
        let us = elapsed.as_micros() as u64;
        self.latency_us.0.fetch_add(us, Ordering::Relaxed);
        match bucket {
            StatsBucket::Hss => self.hss_latency_us.0.fetch_add(us, Ordering::Relaxed),
            StatsBucket::HssDigest => {
                self.hss_digest_latency_us.0.fetch_add(us, Ordering::Relaxed)
            },
            StatsBucket::HssSubscription => self
                .hss_subscription_latency_us
                .0
                .fetch_add(us, Ordering::Relaxed),
            StatsBucket::Cache => self.cache_latency_us.0.fetch_add(us, Ordering::Relaxed),
        };
        debug!(bucket = bucket.field_name(), micros = us, "recorded transaction latency");
    }

    pub fn incoming_request(&self) {
        self.incoming_requests.incr();
    }

    pub fn rejected_overload(&self) {
        self.rejected_overload.incr();
    }

    pub fn http_incoming_request(&self) {
        self.http_incoming_requests.incr();
    }

    pub fn http_rejected_overload(&self) {
        self.http_rejected_overload.incr();
    }

    pub fn record_http_latency(&self, elapsed: Duration) {
        self.http_latency_us
            .0
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn incoming_requests_total(&self) -> u64 {
        self.incoming_requests.get()
    }

    pub fn rejected_overload_total(&self) -> u64 {
        self.rejected_overload.get()
    }

    pub fn http_incoming_requests_total(&self) -> u64 {
        self.http_incoming_requests.get()
    }

    pub fn http_rejected_overload_total(&self) -> u64 {
        self.http_rejected_overload.get()
    }
}
