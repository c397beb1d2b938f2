// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate error type.
//!
//! Only genuine caller mistakes surface here. The documented approximation
//! policies (calendar-gap canonicalization, ΔT extrapolation, angle range
//! reduction) never fail.

use thiserror::Error;

/// Errors produced by `jieqi`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Month outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    /// Day outside the length of its month.
    #[error("day {day} is outside 1..={max} for {year}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },

    /// Time of day out of range (or non-finite seconds).
    #[error("time of day {hour:02}:{minute:02}:{second} is out of range")]
    InvalidTime { hour: u32, minute: u32, second: f64 },

    /// A NaN or infinite Julian Date reached an inverse conversion.
    #[error("Julian Date {0} is not finite")]
    NonFiniteJulianDate(f64),

    /// A Julian Date too far from the epoch to decompose into an `i32` year.
    #[error("Julian Date {0} is outside the civil range ±{max}", max = crate::julian_date_ext::CIVIL_RANGE_DAYS)]
    JulianDateOutOfRange(f64),

    /// The solar-term root search ran out of iterations.
    #[error("no solar longitude crossing of {target_deg}° found after {iterations} iterations")]
    NoConvergence { target_deg: f64, iterations: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
