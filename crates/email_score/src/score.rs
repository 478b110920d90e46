//! Weighted aggregation of check signals and status classification
//!
//! Each true signal contributes its fixed weight; the raw sum is clamped
//! to the maximum positive contribution and normalized to 0–100.

use crate::{CheckSignals, Status};

/// Per-signal score contributions. Process-wide constants.
pub mod weights {
    pub const SYNTAX: i32 = 20;
    pub const DOMAIN: i32 = 15;
    pub const MX: i32 = 15;
    pub const DISPOSABLE: i32 = -10;
    pub const ROLE_BASED: i32 = -5;
    pub const CATCH_ALL: i32 = -5;
    pub const SMTP: i32 = 25;

    /// Sum of the positive weights; the normalization ceiling.
    pub const MAX_POSITIVE: i32 = SYNTAX + DOMAIN + MX + SMTP;
}

/// Compute the normalized 0–100 score for a set of signals.
///
/// Sums the weight of every true signal, clamps to `[0, 75]` and scales to
/// a percentage. Rounding uses `f64::round`, which for the non-negative
/// values produced here behaves as round-half-up.
pub fn score_signals(signals: &CheckSignals) -> u8 {
    let mut sum = 0i32;

    if signals.syntax {
        sum += weights::SYNTAX;
    }
    if signals.domain {
        sum += weights::DOMAIN;
    }
    if signals.mx {
        sum += weights::MX;
    }
    if signals.disposable {
        sum += weights::DISPOSABLE;
    }
    if signals.role_based {
        sum += weights::ROLE_BASED;
    }
    if signals.catch_all {
        sum += weights::CATCH_ALL;
    }
    if signals.smtp {
        sum += weights::SMTP;
    }

    let clamped = sum.clamp(0, weights::MAX_POSITIVE);
    (f64::from(clamped) / f64::from(weights::MAX_POSITIVE) * 100.0).round() as u8
}

/// Classify a score into the three-way verdict.
///
/// `>= 75` is valid, `40..75` is risky, `< 40` is invalid. Both boundaries
/// are inclusive on the upper side.
pub fn classify(score: u8) -> Status {
    match score {
        75..=u8::MAX => Status::Valid,
        40..=74 => Status::Risky,
        _ => Status::Invalid,
    }
}
