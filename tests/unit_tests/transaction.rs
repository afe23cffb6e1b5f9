// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::time::Duration;

use homestead_core::{
    diameter::{Transaction, TransactionError},
    stats::{Stats, StatsBucket},
};

#[tokio::test]
async fn send_returns_the_future_s_value_on_success() {
    let stats = Stats::new();
    let txn = Transaction::new(&stats);

    let got = txn
        .send(StatsBucket::Hss, Duration::from_millis(50), async { Ok::<_, anyhow::Error>(42) })
        .await
        .expect("ok");
    assert_eq!(got, 42);
}

#[tokio::test]
async fn send_propagates_the_future_s_error() {
    let stats = Stats::new();
    let txn = Transaction::new(&stats);

    let err = txn
        .send(StatsBucket::Hss, Duration::from_millis(50), async {
            Err::<i32, _>(anyhow::anyhow!("stack exploded"))
        })
        .await
        .expect_err("expected an error");
    assert!(matches!(err, TransactionError::Stack(_)));
}

#[tokio::test]
async fn send_times_out_rather_than_waiting_forever() {
    let stats = Stats::new();
    let txn = Transaction::new(&stats);

    let err = txn
        .send(StatsBucket::Hss, Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, anyhow::Error>(())
        })
        .await
        .expect_err("expected a timeout");
    assert!(matches!(err, TransactionError::Timeout));
    assert_eq!(stats.rejected_overload_total(), 1);
}

#[tokio::test]
async fn send_counts_every_attempt_as_an_incoming_request() {
    let stats = Stats::new();
    let txn = Transaction::new(&stats);

    txn.send(StatsBucket::Hss, Duration::from_millis(50), async { Ok::<_, anyhow::Error>(()) })
        .await
        .expect("ok");
    txn.send(StatsBucket::Hss, Duration::from_millis(50), async {
        Err::<(), _>(anyhow::anyhow!("boom"))
    })
    .await
    .expect_err("err");

    assert_eq!(stats.incoming_requests_total(), 2);
    assert_eq!(stats.rejected_overload_total(), 0);
}
