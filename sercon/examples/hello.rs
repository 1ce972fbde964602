// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

use sercon::{log_error, log_info, log_warn, Console, ConsoleConfig, Level, StdoutPort};
use sercon_time::SystemClock;

fn main() {
    let mut console = Console::new(StdoutPort, SystemClock::new(), ConsoleConfig::default())
        .expect("failed to open console");

    log_info!(console, "radio init: channel {}, power {} dBm\n", 42, 17);

    // A logical message built from several calls: only the first carries
    // the header, the rest line up under it.
    log_info!(console, "battery: ");
    log_info!(console, "{:.2} V ", 3.87);
    log_info!(console, "({}%)\n", 81);

    log_warn!(console, "rx queue at {} of {}\n", 14, 16);
    log_error!(console, "crc mismatch on frame {}\n", 1201);

    console.hex_dump(Level::Info, b"\x01\x02\x03hello sercon\x00\xff");
}
