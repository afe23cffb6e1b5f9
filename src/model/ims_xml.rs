// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Pulls the handful of facts the orchestrators need out of an IMS
//! subscription document (3GPP TS 29.228 Annex B) without modelling the
//! whole schema. Grounded on `XmlUtils::get_public_ids` in
//! `examples/original_source/src/handlers_requests.cpp`, which does the same
//! thing against the C++ document object.

use quick_xml::{Reader, events::Event};

use crate::model::Impu;

/// Every `<PublicIdentity><Identity>` value in a `<IMSSubscription>`
/// document, in document order. Malformed XML yields whatever was
/// recovered before the parse error, never a hard failure — the orchestrator
/// treats an empty result as "nothing to write", not as a protocol error.
pub fn extract_public_identities(xml: &str) -> Vec<Impu> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut out = Vec::new();
    let mut in_identity = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"Identity" => in_identity = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"Identity" => in_identity = false,
            Ok(Event::Text(t)) if in_identity => {
                if let Ok(text) = t.unescape() {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        out.push(Impu::from(trimmed));
                    }
                }
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {},
        }
        buf.clear();
    }

    out
}
