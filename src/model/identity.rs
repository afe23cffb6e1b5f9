// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{
    collections::BTreeSet,
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

/// Private identity (IMPI). Opaque UTF-8 string identifying a subscriber
/// credential.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Impi(pub String);

/// Public identity (IMPU). Opaque UTF-8 string, SIP or tel URI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Impu(pub String);

impl fmt::Display for Impi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Impu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Impi {
    fn from(s: String) -> Self {
        Impi(s)
    }
}

impl From<&str> for Impi {
    fn from(s: &str) -> Self {
        Impi(s.to_string())
    }
}

impl From<String> for Impu {
    fn from(s: String) -> Self {
        Impu(s)
    }
}

impl From<&str> for Impu {
    fn from(s: &str) -> Self {
        Impu(s.to_string())
    }
}

/// An implicit registration set: an ordered sequence of IMPUs that are
/// always (de)registered together and share one IMS-subscription XML and
/// registration state. Element 0 is the default IMPU.
///
/// IRS-expansion code accumulates these as sets (per Design Note "IRS
/// deduplication" — source does sort-then-unique on IMPU vectors); `Irs`
/// keeps the first-seen order for the default-IMPU slot while `as_set`
/// gives the order-irrelevant view the cache layer actually requires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Irs(Vec<Impu>);

impl Irs {
    pub fn new(impus: Vec<Impu>) -> Self {
        Irs(impus)
    }

    /// The default IMPU (element 0), if the set is non-empty.
    pub fn default_impu(&self) -> Option<&Impu> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[Impu] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Order-irrelevant view used when the only requirement is set
    /// membership (cache writes, dedup against other IRSes).
    pub fn as_set(&self) -> BTreeSet<Impu> {
        self.0.iter().cloned().collect()
    }
}

impl Deref for Irs {
    type Target = [Impu];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Irs {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Impu> for Irs {
    fn from_iter<T: IntoIterator<Item = Impu>>(iter: T) -> Self {
        Irs(iter.into_iter().collect())
    }
}
