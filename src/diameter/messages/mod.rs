// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Cx Message Builders/Parsers (C3): typed request/answer pairs for the six
//! Cx commands this core speaks. Each request carries the mandatory AVPs as
//! plain fields (builder = struct literal); each answer exposes the
//! optional AVPs it may carry plus the normalized result-code pair.
//!
//! Wire encoding is out of scope (`spec.md` §1, Non-goals): these types are
//! what [`crate::diameter::stack::DiameterStack`] sends and receives: the
//! external Diameter library is assumed to translate them to and from real
//! AVPs.

pub mod lir;
pub mod mar;
pub mod ppr;
pub mod rtr;
pub mod sar;
pub mod uar;

pub use lir::{LirRequest, LiaAnswer};
pub use mar::{MarRequest, MaaAnswer};
pub use ppr::{PprRequest, PpaAnswer};
pub use rtr::{RtaAnswer, RtrRequest};
pub use sar::{SaaAnswer, SarRequest};
pub use uar::{UaaAnswer, UarRequest};
