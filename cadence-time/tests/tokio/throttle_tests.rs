// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::CadenceError;
use cadence_test_utils::helpers::{advance_and_settle, ms};
use cadence_test_utils::CallRecorder;
use cadence_time::{throttle, ThrottleOptions};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_throttle_limits_invocation_rate() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.func(), ms(100), ThrottleOptions::default())?;

    // Act
    for i in 0..50_u32 {
        throttled.call(i);
        advance_and_settle(ms(10)).await;
    }
    advance_and_settle(ms(200)).await;

    // Assert
    assert_eq!(recorder.args(), vec![0, 10, 20, 30, 40]);
    let times = recorder.times();
    assert_eq!(times[0], ms(0));
    for pair in times.windows(2) {
        assert!(pair[1] - pair[0] >= ms(100));
    }

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_call_after_idle_period_runs_immediately() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.func(), ms(100), ThrottleOptions::default())?;

    // Act
    throttled.call(1);
    advance_and_settle(ms(250)).await;
    throttled.call(2);

    // Assert
    assert_eq!(recorder.args(), vec![1, 2]);
    assert_eq!(recorder.times(), vec![ms(0), ms(250)]);
    assert!(!throttled.is_pending());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_trailing_runs_last_call_of_window() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(true);
    let throttled = throttle(recorder.func(), ms(100), options)?;

    // Act
    throttled.call(1);
    advance_and_settle(ms(10)).await;
    throttled.call(2);
    advance_and_settle(ms(10)).await;
    throttled.call(3);
    assert!(throttled.is_pending());
    advance_and_settle(ms(80)).await;
    advance_and_settle(ms(50)).await;
    throttled.call(4);
    advance_and_settle(ms(50)).await;

    // Assert
    assert_eq!(recorder.args(), vec![1, 3, 4]);
    assert_eq!(recorder.times(), vec![ms(0), ms(100), ms(200)]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_trailing_only_defers_every_invocation() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::new()
        .with_leading(false)
        .with_trailing(true);
    let throttled = throttle(recorder.func(), ms(100), options)?;

    // Act
    for i in 0..30_u32 {
        throttled.call(i);
        advance_and_settle(ms(10)).await;
    }
    advance_and_settle(ms(100)).await;

    // Assert
    assert_eq!(recorder.args(), vec![9, 19, 29]);
    assert_eq!(recorder.times(), vec![ms(100), ms(200), ms(300)]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_cancel_drops_trailing_call_and_resets_window() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(true);
    let throttled = throttle(recorder.func(), ms(100), options)?;

    // Act
    throttled.call(1);
    advance_and_settle(ms(20)).await;
    throttled.call(2);
    throttled.cancel();
    advance_and_settle(ms(200)).await;
    assert_eq!(recorder.args(), vec![1]);

    throttled.call(3);
    advance_and_settle(ms(10)).await;
    throttled.cancel();
    throttled.call(4);

    // Assert
    assert_eq!(recorder.args(), vec![1, 3, 4]);
    assert_eq!(recorder.times(), vec![ms(0), ms(220), ms(230)]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_flush_runs_trailing_call_now() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(true);
    let throttled = throttle(recorder.func(), ms(100), options)?;

    // Act
    throttled.call(1);
    advance_and_settle(ms(40)).await;
    throttled.call(2);
    let flushed = throttled.flush();

    // Assert
    assert!(flushed);
    assert!(!throttled.flush());
    assert_eq!(recorder.args(), vec![1, 2]);

    // The flushed call opened a new window
    throttled.call(3);
    assert_eq!(recorder.count(), 2);
    advance_and_settle(ms(100)).await;
    assert_eq!(recorder.args(), vec![1, 2, 3]);
    assert_eq!(recorder.times(), vec![ms(0), ms(40), ms(140)]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_panicking_trailing_call_keeps_wrapper_usable() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let spy = recorder.clone();
    let options = ThrottleOptions::new()
        .with_leading(false)
        .with_trailing(true);
    let throttled = throttle(
        move |x: u32| {
            if x == 0 {
                panic!("rejected zero");
            }
            spy.record(x);
        },
        ms(50),
        options,
    )?;

    // Act
    throttled.call(0);
    advance_and_settle(ms(50)).await;
    throttled.call(5);
    advance_and_settle(ms(50)).await;

    // Assert
    assert_eq!(recorder.args(), vec![5]);
    assert_eq!(recorder.times(), vec![ms(100)]);

    Ok(())
}

#[tokio::test]
async fn test_throttle_without_edges_is_rejected() {
    // Arrange
    let options = ThrottleOptions::new().with_leading(false);

    // Act
    let result = throttle(|_: u8| {}, ms(100), options);

    // Assert
    assert!(matches!(result, Err(CadenceError::InvalidConfig { .. })));
}

#[tokio::test]
async fn test_throttle_overdue_trailing_call_runs_before_new_call() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(true);
    let throttled = throttle(recorder.func(), ms(50), options)?;

    // Act
    throttled.call(1);
    throttled.call(2);
    // Blocks the runtime thread so the trailing timer cannot run in time
    std::thread::sleep(ms(80));
    throttled.call(3);

    // Assert
    assert_eq!(recorder.args(), vec![1, 2]);
    assert!(throttled.is_pending());

    tokio::time::sleep(ms(100)).await;
    assert_eq!(recorder.args(), vec![1, 2, 3]);
    assert!(!throttled.is_pending());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_with_unbounded_wait_does_not_overflow() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(true);
    let throttled = throttle(recorder.func(), Duration::MAX, options)?;

    // Act
    throttled.call(1);
    advance_and_settle(ms(10)).await;
    throttled.call(2);
    advance_and_settle(Duration::from_secs(3600)).await;
    throttled.call(3);

    // Assert
    assert_eq!(recorder.args(), vec![1]);
    assert!(throttled.is_pending());

    throttled.cancel();
    throttled.call(4);
    assert_eq!(recorder.args(), vec![1, 4]);

    Ok(())
}
