// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{future::Future, pin::Pin};

use homestead_core::state_machine::common::{StateMachine, Transition, run};

struct Ctx {
    steps: Vec<&'static str>,
}

enum CountUp {
    One,
    Two,
    Three,
}

impl StateMachine<Ctx, u32> for CountUp {
    fn step(self, ctx: &mut Ctx) -> Pin<Box<dyn Future<Output = Transition<Self, u32>> + Send + '_>> {
        Box::pin(async move {
            match self {
                CountUp::One => {
                    ctx.steps.push("one");
                    Transition::Next(CountUp::Two)
                },
                CountUp::Two => {
                    ctx.steps.push("two");
                    Transition::Next(CountUp::Three)
                },
                CountUp::Three => {
                    ctx.steps.push("three");
                    Transition::Done(3)
                },
            }
        })
    }
}

#[tokio::test]
async fn run_drives_every_state_through_to_the_terminal_result() {
    let mut ctx = Ctx { steps: Vec::new() };
    let out = run(CountUp::One, &mut ctx).await;
    assert_eq!(out, 3);
    assert_eq!(ctx.steps, vec!["one", "two", "three"]);
}

enum Immediate {
    Done,
}

impl StateMachine<(), &'static str> for Immediate {
    fn step(self, _ctx: &mut ()) -> Pin<Box<dyn Future<Output = Transition<Self, &'static str>> + Send + '_>> {
        Box::pin(async move { Transition::Done("done") })
    }
}

#[tokio::test]
async fn a_machine_that_starts_done_never_steps_twice() {
    let out = run(Immediate::Done, &mut ()).await;
    assert_eq!(out, "done");
}
