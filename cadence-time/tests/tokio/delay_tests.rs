// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_test_utils::helpers::{advance_and_settle, ms};
use cadence_test_utils::CallRecorder;
use cadence_time::{delay, sleep};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_delay_invokes_after_wait() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();

    // Act
    let task = delay(recorder.func(), ms(100), 7_u32);
    advance_and_settle(ms(99)).await;
    assert_eq!(recorder.count(), 0);
    advance_and_settle(ms(1)).await;

    // Assert
    assert_eq!(recorder.args(), vec![7]);
    assert_eq!(recorder.times(), vec![ms(100)]);
    assert!(!task.is_cancelled());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_cancel_skips_invocation() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let task = delay(recorder.func(), ms(100), "skipped");

    // Act
    advance_and_settle(ms(50)).await;
    task.cancel();
    advance_and_settle(ms(100)).await;

    // Assert
    assert_eq!(recorder.count(), 0);
    assert!(task.is_cancelled());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_dropped_handle_skips_invocation() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();

    // Act
    drop(delay(recorder.func(), ms(100), 1_u8));
    advance_and_settle(ms(200)).await;

    // Assert
    assert_eq!(recorder.count(), 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_detached_handle_still_invokes() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();

    // Act
    delay(recorder.func(), ms(30), 3_u8).detach();
    advance_and_settle(ms(30)).await;

    // Assert
    assert_eq!(recorder.args(), vec![3]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_delay_panicking_invocation_is_contained() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let _failing = delay(|_: ()| panic!("boom"), ms(10), ());
    let _working = delay(recorder.func(), ms(20), "after");

    // Act
    advance_and_settle(ms(10)).await;
    advance_and_settle(ms(10)).await;

    // Assert
    assert_eq!(recorder.args(), vec!["after"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sleep_completes_after_duration() {
    // Arrange
    let start = Instant::now();

    // Act
    sleep(ms(250)).await;

    // Assert
    assert_eq!(start.elapsed(), ms(250));
}
