// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::{CadenceError, Result};
use core::time::Duration;

/// Edge and deadline configuration of a [`Debounced`](crate::Debounced) wrapper.
///
/// The default fires on the trailing edge only, without a `max_wait` cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst.
    pub leading: bool,
    /// Invoke with the last call's arguments once the burst goes quiet.
    pub trailing: bool,
    /// Longest a burst may defer the invocation.
    pub max_wait: Option<Duration>,
}

impl DebounceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    #[must_use]
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Rejects a configuration that could never invoke the wrapped function.
    ///
    /// # Errors
    /// Returns [`CadenceError::InvalidConfig`] when both edges are disabled.
    pub fn validate(&self) -> Result<()> {
        if !self.leading && !self.trailing {
            return Err(CadenceError::invalid_config(
                "debounce needs at least one of the leading or trailing edge",
            ));
        }
        Ok(())
    }

    /// Validates and raises a `max_wait` shorter than `wait` up to `wait`.
    pub(crate) fn normalized(mut self, wait: Duration) -> Result<Self> {
        self.validate()?;
        if let Some(max_wait) = self.max_wait {
            if max_wait < wait {
                cadence_core::warn!(
                    "debounce max_wait {:?} is shorter than wait {:?}; using {:?}",
                    max_wait,
                    wait,
                    wait
                );
                self.max_wait = Some(wait);
            }
        }
        Ok(self)
    }
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            leading: false,
            trailing: true,
            max_wait: None,
        }
    }
}
