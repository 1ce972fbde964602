// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! Two-column hex/ASCII dump, rendered through the console's own `log`
//! path so every line carries a regular message header.

use crate::console::Console;
use crate::port::SerialPort;
use crate::Level;
use sercon_time::Clock;

const BORDER: &str = "   +------------------------------------------------+ +----------------+";
const COLUMNS: &str = "   |.0 .1 .2 .3 .4 .5 .6 .7 .8 .9 .A .B .C .D .E .F | |      ASCII     |";

/// Empty row: hex cells at 1..49, ASCII cells at 52..68.
const ROW_TEMPLATE: &[u8; 69] =
    b"|                                                | |                |";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes per dump row.
const ROW_BYTES: usize = 16;

/// Bytes per bordered section.
const SECTION_BYTES: usize = 128;

impl<P: SerialPort, C: Clock> Console<P, C> {
    /// Render `buf` as a classic hex/ASCII dump, one `log` line per
    /// 16-byte row.
    ///
    /// Bytes outside printable ASCII (32..=126) show as `.` in the ASCII
    /// column. Rows are prefixed with a fixed-width hex row index and the
    /// border is repeated before every 128-byte section. The trailing row
    /// of a buffer that is not a multiple of 16 leaves its unused cells
    /// blank.
    pub fn hex_dump(&mut self, level: Level, buf: &[u8]) {
        self.log(level, format_args!("{BORDER}\n"));
        self.log(level, format_args!("{COLUMNS}\n"));

        for offset in (0..buf.len()).step_by(ROW_BYTES) {
            if offset % SECTION_BYTES == 0 {
                self.log(level, format_args!("{BORDER}\n"));
            }

            let end = (offset + ROW_BYTES).min(buf.len());
            let row = render_row(&buf[offset..end]);
            // Safety: the template and everything written into it is ASCII.
            let row = unsafe { std::str::from_utf8_unchecked(&row) };
            self.log(level, format_args!("{:03x}.{row}\n", offset / ROW_BYTES));
        }

        self.log(level, format_args!("{BORDER}\n\n"));
    }
}

/// Fill one row template with up to 16 bytes of hex and ASCII cells.
fn render_row(chunk: &[u8]) -> [u8; ROW_TEMPLATE.len()] {
    let mut row = *ROW_TEMPLATE;
    let mut ix = 1;
    let mut iy = 52;

    for &byte in chunk {
        row[ix] = HEX_DIGITS[(byte >> 4) as usize];
        row[ix + 1] = HEX_DIGITS[(byte & 0x0f) as usize];
        ix += 3;
        row[iy] = if (32..=126).contains(&byte) { byte } else { b'.' };
        iy += 1;
    }

    row
}
