// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: histogram-based entropies over a fixed binning,
// exposed to the parent approaches module.

pub mod binning;

pub mod rao_q;
pub mod renyi;
pub mod shannon;
