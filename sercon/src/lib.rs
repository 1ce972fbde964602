// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! Serial-port debug console for firmware projects: timestamped leveled
//! log lines plus a hex dump for inspecting raw buffers over a serial link.
//!
//! The console is an explicitly constructed handle over an injected
//! [`SerialPort`] and [`Clock`](sercon_time::Clock), not a hidden global,
//! so tests substitute an in-memory port and a pinned clock and assert on
//! the captured bytes. Call sites go through the [`Log`] trait, which lets
//! [`NopConsole`] stand in for the real console in release builds without
//! touching the call sites.
//!
//! A log message may be built from several calls: as long as the emitted
//! text does not end in a newline, the next call suppresses its header and
//! emits a blank, width-aligned one instead, so the on-wire output reads as
//! one coherent line.
//!
#![cfg_attr(feature = "console", doc = "```")]
#![cfg_attr(not(feature = "console"), doc = "```ignore")]
//! use sercon::{Console, ConsoleConfig, Level, StdoutPort};
//! use sercon_time::SystemClock;
//!
//! let mut console = Console::new(StdoutPort, SystemClock::new(), ConsoleConfig::default())
//!     .expect("failed to open console");
//! sercon::log_info!(console, "booted after {} ms\n", 42);
//! console.hex_dump(Level::Debug, &[0xde, 0xad, 0xbe, 0xef]);
//! ```

use std::fmt;

#[cfg(feature = "console")]
mod console;
mod error;
#[cfg(feature = "console")]
mod hexdump;
mod macros;
mod port;
#[cfg(all(test, feature = "console"))]
pub(crate) mod testutil;

#[cfg(feature = "console")]
pub use crate::console::{Console, ConsoleConfig, DEFAULT_BAUD_RATE, PRINT_BUF_SIZE};
pub use crate::error::Error;
pub use crate::port::{SerialPort, StdoutPort};

/// Log level of a single message. Purely presentational: the console does
/// no filtering beyond the compile-time feature toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Crit,
}

impl Level {
    /// Fixed-width 5 character tag used verbatim as the leading header
    /// field, space padded.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
            Level::Crit => "CRIT ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink shared by [`Console`] and [`NopConsole`] so call sites are
/// identical whether logging is compiled in or not.
pub trait Log {
    /// Emit one leveled, possibly continued, log message. Returns the
    /// number of bytes written to the transport (header plus body).
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) -> usize;

    /// Render `buf` as a two-column hex/ASCII dump.
    fn hex_dump(&mut self, level: Level, buf: &[u8]);
}

/// Console that emits nothing and opens no transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopConsole;

impl Log for NopConsole {
    fn log(&mut self, _level: Level, _args: fmt::Arguments<'_>) -> usize {
        0
    }

    fn hex_dump(&mut self, _level: Level, _buf: &[u8]) {}
}
