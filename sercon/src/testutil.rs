// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory serial port for the crate's tests.

use crate::port::SerialPort;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fake port capturing everything the console writes. Clones share the
/// captured state, so tests keep one handle while the console owns another.
#[derive(Clone, Debug, Default)]
pub struct MemPort {
    pub state: Rc<RefCell<MemPortState>>,
    peer_attached: bool,
    polls_until_attach: Cell<u32>,
}

#[derive(Debug, Default)]
pub struct MemPortState {
    pub data: Vec<u8>,
    pub opened_with: Option<u32>,
    pub closed: bool,
}

impl MemPort {
    pub fn attached() -> MemPort {
        MemPort {
            peer_attached: true,
            ..MemPort::default()
        }
    }

    pub fn detached() -> MemPort {
        MemPort::default()
    }

    /// Peer that attaches after `polls` attach queries.
    pub fn attached_after(polls: u32) -> MemPort {
        MemPort {
            peer_attached: true,
            polls_until_attach: Cell::new(polls),
            ..MemPort::default()
        }
    }

    /// Everything written so far, as text.
    pub fn text(&self) -> String {
        String::from_utf8(self.state.borrow().data.clone()).expect("non-utf8 console output")
    }
}

impl SerialPort for MemPort {
    fn open(&mut self, baud_rate: u32) {
        self.state.borrow_mut().opened_with = Some(baud_rate);
    }

    fn close(&mut self) {
        self.state.borrow_mut().closed = true;
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        self.state.borrow_mut().data.extend_from_slice(bytes);
        bytes.len()
    }

    fn is_peer_attached(&self) -> bool {
        let polls = self.polls_until_attach.get();
        if polls > 0 {
            self.polls_until_attach.set(polls - 1);
            return false;
        }
        self.peer_attached
    }
}
