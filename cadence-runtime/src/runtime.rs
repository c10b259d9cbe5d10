// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::default::Default;
use core::future::Future;
use core::marker::Send;

pub trait Runtime: 'static {
    type Timer: Timer + Default;

    /// Spawns a detached task. The task keeps running when its handle is gone.
    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Instant type of a runtime's clock.
pub type InstantOf<R> = <<R as Runtime>::Timer as Timer>::Instant;
