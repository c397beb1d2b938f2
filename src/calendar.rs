// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian/Gregorian calendar boundary policy.
//!
//! Every date-based operation in the crate decides which calendar applies by
//! comparing the full `(year, month, day)` triple against two fixed dates:
//!
//! | Date | Meaning |
//! |------|---------|
//! | 1582-10-04 | last day of the Julian calendar (inclusive) |
//! | 1582-10-15 | first day of the Gregorian calendar (inclusive) |
//!
//! The ten dates in between never existed. They are **not** rejected: they
//! collapse onto 1582-10-15 and are treated as Gregorian (see [`resolve`]).
//!
//! ## Two boundaries
//!
//! [`is_leap_year`] only looks at the year (`year <= 1582` → Julian rule).
//! This coarser rule can disagree with the exact-date boundary inside 1582
//! itself. Both definitions are kept on purpose; use
//! [`CalendarKind::is_leap_year`] when the exact regime matters.

use chrono::Weekday;
use log::warn;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last date (inclusive) computed with Julian calendar arithmetic.
pub const JULIAN_LAST_DATE: (i32, u32, u32) = (1582, 10, 4);

/// First date (inclusive) computed with Gregorian calendar arithmetic.
pub const GREGORIAN_FIRST_DATE: (i32, u32, u32) = (1582, 10, 15);

/// Last year using the Julian leap rule in [`is_leap_year`].
pub const JULIAN_LAST_YEAR: i32 = 1582;

/// Calendar regime used for day-count arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarKind {
    Julian,
    Gregorian,
}

impl CalendarKind {
    /// Regime for an exact date. Gap dates report [`CalendarKind::Gregorian`].
    ///
    /// Unlike [`resolve`] this never logs.
    #[inline]
    pub fn of(year: i32, month: u32, day: u32) -> Self {
        if (year, month, day) <= JULIAN_LAST_DATE {
            Self::Julian
        } else {
            Self::Gregorian
        }
    }

    /// Leap-year rule of this regime.
    #[inline]
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Julian => is_julian_leap_year(year),
            Self::Gregorian => is_gregorian_leap_year(year),
        }
    }
}

/// A date after the boundary policy has been applied.
///
/// `year`/`month`/`day` equal the input except for gap dates, which are
/// replaced with [`GREGORIAN_FIRST_DATE`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    pub kind: CalendarKind,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// `true` for the ten dates 1582-10-05 ..= 1582-10-14.
#[inline]
pub fn is_gap_date(year: i32, month: u32, day: u32) -> bool {
    let date = (year, month, day);
    date > JULIAN_LAST_DATE && date < GREGORIAN_FIRST_DATE
}

/// Applies the calendar boundary policy to a date.
///
/// 1. on or before 1582-10-04 → Julian;
/// 2. on or after 1582-10-15 → Gregorian;
/// 3. otherwise the date is silently moved to 1582-10-15 (Gregorian).
///
/// Case 3 changes the caller's date. It is a canonicalization, not an error,
/// and is reported through a `log` warning only.
pub fn resolve(year: i32, month: u32, day: u32) -> ResolvedDate {
    let date = (year, month, day);
    if date <= JULIAN_LAST_DATE {
        return ResolvedDate {
            kind: CalendarKind::Julian,
            year,
            month,
            day,
        };
    }
    if date >= GREGORIAN_FIRST_DATE {
        return ResolvedDate {
            kind: CalendarKind::Gregorian,
            year,
            month,
            day,
        };
    }

    let (gy, gm, gd) = GREGORIAN_FIRST_DATE;
    warn!(
        "{year:04}-{month:02}-{day:02} falls in the Julian/Gregorian gap; using {gy:04}-{gm:02}-{gd:02}"
    );
    ResolvedDate {
        kind: CalendarKind::Gregorian,
        year: gy,
        month: gm,
        day: gd,
    }
}

/// Julian leap rule: every fourth year.
#[inline]
pub fn is_julian_leap_year(year: i32) -> bool {
    year & 3 == 0
}

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
#[inline]
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year & 3 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Leap year using the year-only boundary: Julian rule up to and including
/// 1582, Gregorian afterwards.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    if year <= JULIAN_LAST_YEAR {
        is_julian_leap_year(year)
    } else {
        is_gregorian_leap_year(year)
    }
}

/// Number of days in a month, with February decided by [`is_leap_year`].
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        other => return Err(Error::InvalidMonth(other)),
    };
    Ok(days)
}

const WEEK_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Day of the week by Zeller's congruence.
///
/// The regime is chosen with the same exact-date boundary as the Julian Date
/// conversion; gap dates report the weekday of 1582-10-15.
/// `weekday(..).num_days_from_sunday()` gives the `0 = Sunday` numbering.
pub fn weekday(year: i32, month: u32, day: u32) -> Weekday {
    let date = resolve(year, month, day);
    let index = match date.kind {
        CalendarKind::Julian => zeller_julian(date.year, date.month, date.day),
        CalendarKind::Gregorian => zeller_gregorian(date.year, date.month, date.day),
    };
    WEEK_FROM_SUNDAY[index]
}

/// Month/year shift shared by both congruences: January and February count
/// as months 13 and 14 of the previous year. Century and year-of-century use
/// floor division so years ≤ 0 stay on the same weekday cycle.
#[inline]
fn zeller_shift(year: i32, month: u32, day: u32) -> (i32, i32, i32, i32) {
    let (y, m) = if month <= 2 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };
    (y.div_euclid(100), y.rem_euclid(100), m, day as i32)
}

fn zeller_gregorian(year: i32, month: u32, day: u32) -> usize {
    let (c, y, m, d) = zeller_shift(year, month, day);
    let w = d + 13 * (m + 1) / 5 + y + y / 4 + c.div_euclid(4) - 2 * c - 1;
    w.rem_euclid(7) as usize
}

fn zeller_julian(year: i32, month: u32, day: u32) -> usize {
    let (c, y, m, d) = zeller_shift(year, month, day);
    let w = d + 13 * (m + 1) / 5 + y + y / 4 + 4 - c;
    w.rem_euclid(7) as usize
}
