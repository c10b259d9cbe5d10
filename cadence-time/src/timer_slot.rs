// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_runtime::ScheduledTask;

/// The single pending-invocation timer owned by a debounce or throttle wrapper.
///
/// Arming replaces (and thereby cancels) the previous task. Each arm bumps the
/// generation; a task that wakes up with an older generation has been
/// superseded and must not touch the wrapper state.
#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    task: Option<ScheduledTask>,
}

impl TimerSlot {
    pub(crate) fn arm(&mut self, spawn: impl FnOnce(u64) -> ScheduledTask) {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.task = Some(spawn(self.generation));
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.task.is_some() && self.generation == generation
    }

    /// Forget the task whose callback is running right now.
    pub(crate) fn fired(&mut self) {
        if let Some(task) = self.task.take() {
            task.detach();
        }
    }

    pub(crate) fn cancel(&mut self) {
        // ScheduledTask cancels on drop
        self.task = None;
    }
}
