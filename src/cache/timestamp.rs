// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// A cache write version: monotonically non-decreasing microseconds plus a
/// local tie-break counter, per Design Note "Timestamp source" — the
/// dedicated version clock used for last-write-wins reconciliation (kept
/// separate from the monotonic clock Diameter transaction timeouts use).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    micros: u64,
    tie_break: u32,
}

impl Timestamp {
    pub fn micros(self) -> u64 {
        self.micros
    }

    pub fn tie_break(self) -> u32 {
        self.tie_break
    }
}

/// Generates [`Timestamp`]s for a single process. `micros` comes from the
/// wall clock; `tie_break` is a local counter so two writes issued within
/// the same microsecond still compare deterministically (ties broken by
/// insertion order within this generator, not across processes).
#[derive(Debug, Default)]
pub struct TimestampGenerator {
    counter: AtomicU32,
}

impl TimestampGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU32::new(0),
        }
    }

    pub fn generate(&self) -> Timestamp {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64;
        let tie_break = self.counter.fetch_add(1, Ordering::Relaxed);
        Timestamp { micros, tie_break }
    }
}
