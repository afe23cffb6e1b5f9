// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Data model shared by the cache, Diameter, and orchestrator layers:
//! identities, authentication vectors, registration state, the
//! Server-Assignment-Type decision matrix, and charging addresses.

pub mod av;
pub mod charging;
pub mod identity;
pub mod ims_xml;
pub mod reg_state;
pub mod sat;

pub use av::AuthVector;
pub use charging::ChargingAddresses;
pub use identity::{Impi, Impu, Irs};
pub use ims_xml::extract_public_identities;
pub use reg_state::RegistrationState;
pub use sat::ServerAssignmentType;
