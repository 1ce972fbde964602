// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! Level-tagged call sites.
//!
//! Each macro takes the console handle first and a format string plus
//! arguments after, and forwards to the sink's `log` method — bring the
//! [`Log`](crate::Log) trait into scope when the handle is a trait object
//! or a generic sink. With the `console` feature off every macro expands
//! to an empty block; the arguments are not evaluated and no code is
//! emitted. `log_debug!` additionally requires the `debug-logs` feature.
//!
#![cfg_attr(feature = "console", doc = "```")]
#![cfg_attr(not(feature = "console"), doc = "```ignore")]
//! use sercon::{Console, ConsoleConfig, StdoutPort};
//! use sercon_time::SystemClock;
//!
//! let mut console = Console::new(StdoutPort, SystemClock::new(), ConsoleConfig::default())
//!     .expect("failed to open console");
//! sercon::log_warn!(console, "battery at {}%\n", 11);
//! ```

/// Log at debug level. Compiled in only with both the `console` and
/// `debug-logs` features.
#[cfg(all(feature = "console", feature = "debug-logs"))]
#[macro_export]
macro_rules! log_debug {
    ($console:expr, $($arg:tt)*) => {{
        $console.log($crate::Level::Debug, ::core::format_args!($($arg)*));
    }};
}

#[cfg(not(all(feature = "console", feature = "debug-logs")))]
#[macro_export]
macro_rules! log_debug {
    ($console:expr, $($arg:tt)*) => {{}};
}

/// Log at info level.
#[cfg(feature = "console")]
#[macro_export]
macro_rules! log_info {
    ($console:expr, $($arg:tt)*) => {{
        $console.log($crate::Level::Info, ::core::format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "console"))]
#[macro_export]
macro_rules! log_info {
    ($console:expr, $($arg:tt)*) => {{}};
}

/// Log at warn level.
#[cfg(feature = "console")]
#[macro_export]
macro_rules! log_warn {
    ($console:expr, $($arg:tt)*) => {{
        $console.log($crate::Level::Warn, ::core::format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "console"))]
#[macro_export]
macro_rules! log_warn {
    ($console:expr, $($arg:tt)*) => {{}};
}

/// Log at error level.
#[cfg(feature = "console")]
#[macro_export]
macro_rules! log_error {
    ($console:expr, $($arg:tt)*) => {{
        $console.log($crate::Level::Error, ::core::format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "console"))]
#[macro_export]
macro_rules! log_error {
    ($console:expr, $($arg:tt)*) => {{}};
}

/// Log at critical level.
#[cfg(feature = "console")]
#[macro_export]
macro_rules! log_crit {
    ($console:expr, $($arg:tt)*) => {{
        $console.log($crate::Level::Crit, ::core::format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "console"))]
#[macro_export]
macro_rules! log_crit {
    ($console:expr, $($arg:tt)*) => {{}};
}

#[cfg(all(test, feature = "console"))]
mod test {
    use crate::console::{Console, ConsoleConfig};
    use crate::testutil::MemPort;
    use crate::Log;
    use sercon_time::ManualClock;

    #[test]
    fn macros_forward_level_and_args() {
        let port = MemPort::attached();
        let clock = ManualClock::new();
        let mut console =
            Console::new(port.clone(), &clock, ConsoleConfig::default()).expect("console");

        log_info!(console, "up {} ms\n", 12);
        log_warn!(console, "queue {}/{}\n", 15, 16);
        log_error!(console, "timeout\n");
        log_crit!(console, "brownout\n");

        let text = port.text();
        assert!(text.contains("INFO  | ??:??:?? 0 | up 12 ms\n"));
        assert!(text.contains("WARN  | ??:??:?? 0 | queue 15/16\n"));
        assert!(text.contains("ERROR | ??:??:?? 0 | timeout\n"));
        assert!(text.contains("CRIT  | ??:??:?? 0 | brownout\n"));
    }

    #[test]
    fn macros_work_through_the_trait() {
        let port = MemPort::attached();
        let clock = ManualClock::new();
        let console =
            Console::new(port.clone(), &clock, ConsoleConfig::default()).expect("console");
        let mut sink: Box<dyn Log + '_> = Box::new(console);

        log_info!(sink, "boxed\n");

        assert!(port.text().ends_with("boxed\n"));
    }

    #[cfg(not(feature = "debug-logs"))]
    #[test]
    fn log_debug_is_a_nop_without_the_feature() {
        let port = MemPort::attached();
        let clock = ManualClock::new();
        let _console =
            Console::new(port.clone(), &clock, ConsoleConfig::default()).expect("console");

        log_debug!(_console, "never rendered {}", 1);

        assert!(port.text().is_empty());
    }

    #[cfg(feature = "debug-logs")]
    #[test]
    fn log_debug_emits_with_the_feature() {
        let port = MemPort::attached();
        let clock = ManualClock::new();
        let mut console =
            Console::new(port.clone(), &clock, ConsoleConfig::default()).expect("console");

        log_debug!(console, "rendered {}\n", 1);

        assert!(port.text().contains("DEBUG | ??:??:?? 0 | rendered 1\n"));
    }
}
