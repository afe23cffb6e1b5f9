// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{collections::BTreeSet, time::Duration};

use async_trait::async_trait;

use crate::{
    cache::{CacheError, Timestamp},
    model::{AuthVector, ChargingAddresses, Impi, Impu, Irs, RegistrationState},
};

/// A stored `impu_subscription` row: the IMS-subscription XML, its
/// registration state, the IMPIs associated via the HSS, and any charging
/// addresses returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImsSubscription {
    pub xml: String,
    pub reg_state: RegistrationState,
    pub associated_impis: Vec<Impi>,
    pub charging_addresses: ChargingAddresses,
}

/// The cache request layer contract (C1): a narrow, injectable interface
/// over the backing wide-column store. Orchestrators depend on this trait
/// object, never on a concrete store, so tests can supply an in-memory fake
/// (Design Note "Global stack singleton" applies equally here: explicit
/// injected dependency, not module-scope state).
#[async_trait]
pub trait Store: Send + Sync {
    async fn get_av(&self, impi: &Impi) -> Result<AuthVector, CacheError>;

    async fn put_av(
        &self,
        impi: &Impi,
        av: AuthVector,
        ts: Timestamp,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    async fn get_ims_subscription(&self, impu: &Impu) -> Result<ImsSubscription, CacheError>;

    /// Writes an identical row for every IMPU in `impus`. If `reg_state ==
    /// Unchanged`, each row's existing state is preserved individually.
    async fn put_ims_subscription(
        &self,
        impus: &Irs,
        xml: &str,
        reg_state: RegistrationState,
        ts: Timestamp,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    async fn get_associated_primary_public_ids(
        &self,
        impis: &[Impi],
    ) -> Result<BTreeSet<Impu>, CacheError>;

    async fn dissociate_implicit_registration_set_from_impi(
        &self,
        impus: &Irs,
        impis: &[Impi],
        ts: Timestamp,
    ) -> Result<(), CacheError>;

    async fn delete_impi_mapping(
        &self,
        impis: &[Impi],
        ts: Timestamp,
    ) -> Result<(), CacheError>;
}
