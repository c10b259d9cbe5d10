// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::{CadenceError, Result};

/// Edge policy of a [`Throttled`](crate::Throttled) wrapper.
///
/// Defaults to leading edge only: the call that opens a window runs, calls
/// inside the window are dropped. Enabling `trailing` keeps the last dropped
/// call and runs it when the window closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl ThrottleOptions {
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

    /// # Errors
    /// Returns [`CadenceError::InvalidConfig`] when both edges are disabled.
    pub fn validate(&self) -> Result<()> {
        if !self.leading && !self.trailing {
            return Err(CadenceError::invalid_config(
                "throttle needs at least one of the leading or trailing edge",
            ));
        }
        Ok(())
    }
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: false,
        }
    }
}
