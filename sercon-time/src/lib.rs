// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! Time sources for the sercon debug console.
//!
//! The console needs two readings for its message headers: a monotonic
//! millisecond uptime counter and an optional wall-clock time of day. Both
//! come in through the [`Clock`] trait so the console never talks to the
//! operating system directly and tests can pin the clock to a fixed value.

use std::cell::Cell;
use std::time::Instant;

/// Wall-clock time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Clock collaborator of the console.
pub trait Clock {
    /// Monotonic milliseconds since the clock started.
    fn uptime_millis(&self) -> u64;

    /// Current time of day, or `None` if no valid wall clock is available
    /// (e.g. an RTC that has never been set).
    fn wall_time(&self) -> Option<WallTime>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn uptime_millis(&self) -> u64 {
        (**self).uptime_millis()
    }

    fn wall_time(&self) -> Option<WallTime> {
        (**self).wall_time()
    }
}

/// Clock backed by the operating system.
///
/// Uptime counts from the moment of construction. The wall clock reads UTC
/// and is always considered set.
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn uptime_millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn wall_time(&self) -> Option<WallTime> {
        let (hour, minute, second) = time::OffsetDateTime::now_utc().time().as_hms();
        Some(WallTime {
            hour,
            minute,
            second,
        })
    }
}

/// Clock the caller drives explicitly.
///
/// For targets without an OS clock, and for tests that need deterministic
/// headers. Starts at zero uptime with no wall clock set.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: Cell<u64>,
    wall: Cell<Option<WallTime>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    /// Set the uptime counter to an absolute value.
    pub fn set_millis(&self, millis: u64) {
        self.millis.set(millis);
    }

    /// Advance the uptime counter.
    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }

    /// Mark the wall clock as set.
    pub fn set_wall_time(&self, wall: WallTime) {
        self.wall.set(Some(wall));
    }

    /// Mark the wall clock as unset.
    pub fn clear_wall_time(&self) {
        self.wall.set(None);
    }
}

impl Clock for ManualClock {
    fn uptime_millis(&self) -> u64 {
        self.millis.get()
    }

    fn wall_time(&self) -> Option<WallTime> {
        self.wall.get()
    }
}
