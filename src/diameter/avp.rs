// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::diameter::result_codes::ResultCodes;

/// Extracts `(value, present)` for an optional scalar AVP, matching the
/// getter shape `spec.md` §4.3 prescribes for Cx answers: callers ask
/// "is it there, and if so what" rather than unwrapping an `Option` chain
/// themselves at every call site.
pub fn get<T: Clone>(opt: &Option<T>) -> (Option<T>, bool) {
    (opt.clone(), opt.is_some())
}

/// Normalizes the `Result-Code` / grouped `Experimental-Result` AVPs of an
/// answer into one [`ResultCodes`] value, per the "Experimental-Result
/// extraction" requirement in `spec.md` §4.3.
pub fn extract_result_codes(result_code: Option<u32>, experimental_result_code: Option<u32>) -> ResultCodes {
    ResultCodes {
        result_code,
        experimental_result_code,
    }
}
