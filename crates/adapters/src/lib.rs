// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters between the cleanup core and the build host's execution fabric.

pub mod fleet;
pub mod host;
pub mod transport;

pub use fleet::{FleetError, FleetSnapshot};
pub use host::{BuildHost, HostError};
#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeTransport, InjectedFailure};
pub use transport::{LocalTransport, TransportError, WorkspaceTransport};
