// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

pub mod negotiator;
pub mod reports;
pub mod sources;
pub mod workflow;
