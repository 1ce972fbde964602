// Copyright 2025 The sercon authors.
//
// SPDX-License-Identifier: Apache-2.0

//! Console error type.
//!
//! Logging itself is infallible by design: overlong messages are truncated
//! and transport writes are best effort. The only fallible operation is
//! construction with a bounded wait for a peer.

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// No peer attached within the configured connect timeout.
    ConnectTimeout,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ConnectTimeout => write!(f, "no peer attached within the connect timeout"),
        }
    }
}
