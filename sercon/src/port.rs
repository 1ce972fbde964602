// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

/// Serial peripheral the console writes to.
///
/// Writes are best effort. A disconnected peer is neither detected nor
/// surfaced; the console never retries. The attach predicate is consulted
/// only by the optional startup wait.
pub trait SerialPort {
    /// Open the peripheral at `baud_rate`.
    fn open(&mut self, baud_rate: u32);

    /// Close the peripheral.
    fn close(&mut self);

    /// Write raw bytes, returning how many the transport accepted.
    fn write(&mut self, bytes: &[u8]) -> usize;

    /// Whether a host terminal is attached.
    fn is_peer_attached(&self) -> bool;
}

/// Port writing to stdout, for running firmware code on the host.
///
/// Open and close are no-ops and the peer counts as always attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPort;

impl SerialPort for StdoutPort {
    fn open(&mut self, _baud_rate: u32) {}

    fn close(&mut self) {}

    fn write(&mut self, bytes: &[u8]) -> usize {
        io::stdout().write(bytes).unwrap_or(0)
    }

    fn is_peer_attached(&self) -> bool {
        true
    }
}
