// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build log wording.
//!
//! Existing automation scrapes these lines from build logs; keep them stable.

use wsc_core::NodeName;

pub const PASS_HEADER: &str = "run PrePostClean";

pub const SKIP_ROAMING: &str = "skipping roaming project.";

pub fn running_on(node: &NodeName) -> String {
    format!("running on {}", node.display_label())
}

pub fn cleaning_on(label: &str) -> String {
    format!("cleaning on {}", label)
}

pub fn no_workspace(label: &str) -> String {
    format!("no workspace found on {}; node is maybe offline", label)
}

pub fn cannot_delete(label: &str, message: &str) -> String {
    format!("can't delete on {}: {}", label, message)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
