// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

use crate::port::SerialPort;
use crate::{Error, Level, Log};
use sercon_time::Clock;
use std::fmt::{self, Write as _};
use std::thread;
use std::time::Duration;

/// Capacity of the scratch render buffer. One formatted message is
/// materialized here before it goes to the port; anything longer is cut to
/// `PRINT_BUF_SIZE - 1` bytes.
pub const PRINT_BUF_SIZE: usize = 160;

/// Default baud rate of the serial link.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Peer poll interval of the optional startup wait.
const CONNECT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Console construction parameters.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub baud_rate: u32,
    /// Block in [`Console::new`] until a host terminal attaches, so the
    /// earliest boot messages are not lost before a terminal connects.
    pub wait_for_connection: bool,
    /// Bound on the startup wait. `None` waits forever.
    pub connect_timeout: Option<Duration>,
}

impl Default for ConsoleConfig {
    fn default() -> ConsoleConfig {
        ConsoleConfig {
            baud_rate: DEFAULT_BAUD_RATE,
            wait_for_connection: false,
            connect_timeout: None,
        }
    }
}

/// The debug console: timestamped leveled log lines plus a hex dump,
/// written to an injected serial port.
///
/// Not reentrant: one scratch buffer, one continuation flag, no lock.
/// Callers on preemptive targets must serialize access externally, e.g. by
/// masking interrupts around log calls.
#[derive(Debug)]
pub struct Console<P: SerialPort, C> {
    port: P,
    clock: C,
    continuation: bool,
    buf: [u8; PRINT_BUF_SIZE],
}

impl<P: SerialPort, C: Clock> Console<P, C> {
    /// Open `port` at the configured baud rate, optionally blocking until
    /// a peer attaches.
    ///
    /// With `wait_for_connection` the attach predicate is polled every
    /// 100 ms. The wait is unbounded unless `connect_timeout` is set, in
    /// which case an elapsed timeout closes the port again and fails with
    /// [`Error::ConnectTimeout`]. Without `wait_for_connection` the
    /// constructor never blocks, whatever the peer status.
    pub fn new(mut port: P, clock: C, config: ConsoleConfig) -> Result<Console<P, C>, Error> {
        port.open(config.baud_rate);

        if config.wait_for_connection {
            let mut waited = Duration::ZERO;
            while !port.is_peer_attached() {
                if let Some(timeout) = config.connect_timeout {
                    if waited >= timeout {
                        port.close();
                        return Err(Error::ConnectTimeout);
                    }
                }
                thread::sleep(CONNECT_POLL_INTERVAL);
                waited += CONNECT_POLL_INTERVAL;
            }
        }

        Ok(Console {
            port,
            clock,
            continuation: false,
            buf: [0; PRINT_BUF_SIZE],
        })
    }

    /// Emit one leveled log message.
    ///
    /// Unless the previous message left the console in continuation state,
    /// the message is prefixed with `LEVEL | HH:MM:SS <uptime-secs> | `,
    /// falling back to `??:??:??` while the wall clock is unset. In
    /// continuation state a blank header of the same shape is emitted
    /// instead, aligning the line under the previous header.
    ///
    /// A body that does not end in a newline puts the console into
    /// continuation state, so a logical message can be built from several
    /// calls without repeating the header.
    ///
    /// Returns the number of bytes written to the port, header plus body.
    pub fn log(&mut self, level: Level, args: fmt::Arguments<'_>) -> usize {
        let mut written = 0;

        if !self.continuation {
            let secs = self.clock.uptime_millis() / 1000;
            written += match self.clock.wall_time() {
                Some(t) => {
                    self.render_and_write(format_args!(
                        "{level} | {:02}:{:02}:{:02} {secs} | ",
                        t.hour, t.minute, t.second
                    ))
                    .0
                }
                None => {
                    self.render_and_write(format_args!("{level} | ??:??:?? {secs} | "))
                        .0
                }
            };
        } else {
            written += self.render_and_write(format_args!("{:22} | ", "")).0;
        }

        let (body, has_newline) = self.render_and_write(args);
        written += body;
        self.continuation = !has_newline;

        written
    }

    /// Render `args` into the scratch buffer and push the result to the
    /// port.
    ///
    /// Output longer than `PRINT_BUF_SIZE - 1` bytes is truncated to that
    /// length with the final byte forced to `\n`, so truncated messages
    /// stay visually terminated. Returns the bytes the port accepted and
    /// whether the emitted text ends in a newline. The count means bytes
    /// physically written, never the untruncated formatter length.
    fn render_and_write(&mut self, args: fmt::Arguments<'_>) -> (usize, bool) {
        let mut writer = TruncWriter {
            buf: &mut self.buf[..PRINT_BUF_SIZE - 1],
            pos: 0,
            overflow: false,
        };
        // Infallible: the writer swallows overflow instead of erroring.
        let _ = writer.write_fmt(args);
        let (mut len, overflow) = (writer.pos, writer.overflow);

        if overflow {
            len = PRINT_BUF_SIZE - 1;
            self.buf[len - 1] = b'\n';
        }

        let written = self.port.write(&self.buf[..len]);
        let has_newline = len > 0 && self.buf[len - 1] == b'\n';
        (written, has_newline)
    }
}

impl<P: SerialPort, C: Clock> Log for Console<P, C> {
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) -> usize {
        Console::log(self, level, args)
    }

    fn hex_dump(&mut self, level: Level, buf: &[u8]) {
        Console::hex_dump(self, level, buf)
    }
}

impl<P: SerialPort, C> Drop for Console<P, C> {
    fn drop(&mut self) {
        self.port.close();
    }
}

/// `fmt::Write` into a fixed slice: copies what fits, records overflow,
/// never errors.
struct TruncWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    overflow: bool,
}

impl fmt::Write for TruncWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let n = bytes.len().min(self.buf.len() - self.pos);
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        if n < bytes.len() {
            self.overflow = true;
        }
        Ok(())
    }
}
