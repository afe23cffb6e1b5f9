// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Cache Request Layer (C1): the narrow async contract between the
//! orchestrators and the backing wide-column store, plus the timestamp
//! discipline used for last-write-wins reconciliation.

pub mod memory;
pub mod result;
pub mod store;
pub mod timestamp;

pub use memory::InMemoryStore;
pub use result::CacheError;
pub use store::Store;
pub use timestamp::{Timestamp, TimestampGenerator};
