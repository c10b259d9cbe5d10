// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_test_utils::helpers::ms;
use cadence_test_utils::CallRecorder;
use cadence_time::{
    delay_on, sleep_on, DebounceOptions, Debounced, SmolRuntime, ThrottleOptions, Throttled,
};

#[test]
fn test_debounce_on_smol_collapses_burst() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let debounced = Debounced::<_, _, SmolRuntime>::new(
            recorder.func(),
            ms(20),
            DebounceOptions::default(),
        )?;

        // Act
        for i in 0..3_u32 {
            debounced.call(i);
        }
        sleep_on::<SmolRuntime>(ms(100)).await;

        // Assert
        assert_eq!(recorder.args(), vec![2]);
        Ok::<_, anyhow::Error>(())
    })
}

#[test]
fn test_throttle_on_smol_drops_calls_inside_window() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();
        let throttled = Throttled::<_, _, SmolRuntime>::new(
            recorder.func(),
            ms(200),
            ThrottleOptions::default().with_trailing(true),
        )?;

        // Act
        throttled.call(1_u32);
        throttled.call(2);
        throttled.call(3);
        assert_eq!(recorder.args(), vec![1]);
        sleep_on::<SmolRuntime>(ms(400)).await;

        // Assert
        assert_eq!(recorder.args(), vec![1, 3]);
        Ok::<_, anyhow::Error>(())
    })
}

#[test]
fn test_delay_on_smol_invokes_once() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::new();

        // Act
        let _task = delay_on::<SmolRuntime, _, _>(recorder.func(), ms(10), "late");
        sleep_on::<SmolRuntime>(ms(100)).await;

        // Assert
        assert_eq!(recorder.args(), vec!["late"]);
    });
}
