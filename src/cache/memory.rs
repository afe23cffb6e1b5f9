// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! In-process [`Store`] backed by [`DashMap`], expiry-on-read. This is the
//! default runnable backend: `spec.md` §1 scopes the wide-column store's
//! own wire protocol out, so a production deployment points `Store` at
//! whatever client speaks to the real backing store instead.

use std::{
    collections::BTreeSet,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{
    cache::{
        CacheError, Timestamp,
        store::{ImsSubscription, Store},
    },
    model::{AuthVector, ChargingAddresses, Impi, Impu, Irs, RegistrationState},
};

#[derive(Clone)]
struct AvRow {
    av: AuthVector,
    ts: Timestamp,
    expires_at: Instant,
}

#[derive(Clone)]
struct SubscriptionRow {
    sub: ImsSubscription,
    ts: Timestamp,
    expires_at: Instant,
}

/// An in-memory [`Store`] implementation. Rows written with
/// [`Store::put_av`]/[`Store::put_ims_subscription`] expire lazily: a read
/// past `expires_at` is treated as [`CacheError::NotFound`] and the row is
/// dropped.
///
/// Implicit-registration-set bookkeeping (`associated_primary_public_ids`,
/// impi-mapping deletion) is tracked in a second table keyed by IMPI, since
/// the real wide-column schema (`spec.md` §3) splits these concerns across
/// distinct tables too.
#[derive(Default)]
pub struct InMemoryStore {
    avs: DashMap<Impi, AvRow>,
    subscriptions: DashMap<Impu, SubscriptionRow>,
    impi_to_impus: DashMap<Impi, BTreeSet<Impu>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get_av(&self, impi: &Impi) -> Result<AuthVector, CacheError> {
        let Some(row) = self.avs.get(impi) else {
            return Err(CacheError::NotFound);
        };
        if row.expires_at < Instant::now() {
            drop(row);
            self.avs.remove(impi);
            return Err(CacheError::NotFound);
        }
        Ok(row.av.clone())
    }

    async fn put_av(&self, impi: &Impi, av: AuthVector, ts: Timestamp, ttl: Duration) -> Result<(), CacheError> {
        if let Some(existing) = self.avs.get(impi) {
            if existing.ts > ts {
                return Ok(());
            }
        }
        self.avs.insert(
            impi.clone(),
            AvRow {
                av,
                ts,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get_ims_subscription(&self, impu: &Impu) -> Result<ImsSubscription, CacheError> {
        let Some(row) = self.subscriptions.get(impu) else {
            return Err(CacheError::NotFound);
        };
        if row.expires_at < Instant::now() {
            drop(row);
            self.subscriptions.remove(impu);
            return Err(CacheError::NotFound);
        }
        Ok(row.sub.clone())
    }

    async fn put_ims_subscription(
        &self,
        impus: &Irs,
        xml: &str,
        reg_state: RegistrationState,
        ts: Timestamp,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let expires_at = Instant::now() + ttl;
        for impu in impus.as_slice() {
            if let Some(existing) = self.subscriptions.get(impu) {
                if existing.ts > ts {
                    continue;
                }
            }
            let reg_state = match reg_state {
                RegistrationState::Unchanged => self
                    .subscriptions
                    .get(impu)
                    .map(|row| row.sub.reg_state)
                    .unwrap_or(RegistrationState::NotRegistered),
                other => other,
            };
            self.subscriptions.insert(
                impu.clone(),
                SubscriptionRow {
                    sub: ImsSubscription {
                        xml: xml.to_string(),
                        reg_state,
                        associated_impis: Vec::new(),
                        charging_addresses: ChargingAddresses::default(),
                    },
                    ts,
                    expires_at,
                },
            );
        }
        Ok(())
    }

    async fn get_associated_primary_public_ids(&self, impis: &[Impi]) -> Result<BTreeSet<Impu>, CacheError> {
        let mut out = BTreeSet::new();
        for impi in impis {
            if let Some(impus) = self.impi_to_impus.get(impi) {
                out.extend(impus.iter().cloned());
            }
        }
        Ok(out)
    }

    async fn dissociate_implicit_registration_set_from_impi(
        &self,
        impus: &Irs,
        impis: &[Impi],
        _ts: Timestamp,
    ) -> Result<(), CacheError> {
        let members = impus.as_set();
        for impi in impis {
            if let Some(mut existing) = self.impi_to_impus.get_mut(impi) {
                existing.retain(|impu| !members.contains(impu));
            }
        }
        Ok(())
    }

    async fn delete_impi_mapping(&self, impis: &[Impi], _ts: Timestamp) -> Result<(), CacheError> {
        for impi in impis {
            self.impi_to_impus.remove(impi);
        }
        Ok(())
    }
}
