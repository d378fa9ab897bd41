#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict (reference-compatible) and Hardened operation.

use serde::{Deserialize, Serialize};

/// Operational mode governing compatibility/safety trade-offs.
///
/// - **Strict**: Match the reference numerics as closely as possible; a
///   decreasing interval is accepted and integrated in reverse, and
///   non-finite values propagate under IEEE 754 rules.
/// - **Hardened**: Extra safety layer beyond the reference; rejects
///   reversed intervals and non-finite initial values up front instead of
///   letting them flow into the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeMode {
    Strict,
    Hardened,
}
