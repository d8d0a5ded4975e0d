// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative interruption of an in-flight deletion.

use std::sync::Arc;

use tokio::sync::Notify;

/// Handle used to interrupt the deletion currently in flight.
///
/// An interrupt is consumed by the one deletion it abandons; later
/// deletions in the same pass run normally. An interrupt raised while no
/// deletion is running is held for the next one.
#[derive(Clone, Default)]
pub struct Interrupt {
    notify: Arc<Notify>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        self.notify.notify_one();
    }

    /// Completes once an interrupt is raised, consuming it.
    pub async fn raised(&self) {
        self.notify.notified().await;
    }
}
