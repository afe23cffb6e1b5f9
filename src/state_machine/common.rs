// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{future::Future, pin::Pin};

/// Outcome of a single state transition: either move to the next state and
/// keep going, or terminate the machine with a final result.
pub enum Transition<S, R> {
    Next(S),
    Done(R),
}

/// A single state of a tagged-state-machine handler.
///
/// `step` consumes `self` (states are one-shot) and is handed the shared
/// mutable context; it returns the next state or a terminal result. Boxing
/// the future lets heterogeneous state enums share one trait without naming
/// the concrete future type per variant.
pub trait StateMachine<Ctx, Out>: Sized + Send {
    fn step(self, ctx: &mut Ctx) -> Pin<Box<dyn Future<Output = Transition<Self, Out>> + Send + '_>>;
}

/// Drives a [`StateMachine`] to completion, looping `step` until it reports
/// `Transition::Done`. Free function rather than a method so any state enum
/// gets the loop for free instead of re-deriving it per handler.
pub async fn run<Ctx, Out, S>(mut state: S, ctx: &mut Ctx) -> Out
where
    S: StateMachine<Ctx, Out>,
{
    loop {
        match state.step(ctx).await {
            Transition::Next(next) => state = next,
            Transition::Done(out) => return out,
        }
    }
}
