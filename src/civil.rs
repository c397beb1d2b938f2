// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (calendar) date and time.

use std::fmt;

use crate::calendar::{self, CalendarKind};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

/// A proleptic calendar date with a time of day.
///
/// Years may be zero or negative (astronomical numbering). Whether the fields
/// are read as Julian or Gregorian is decided by
/// [`calendar::resolve`] at conversion time, not stored here.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    /// Validated constructor.
    ///
    /// Dates inside the 1582 Julian/Gregorian gap are accepted; they are
    /// canonicalized when converted to a Julian Date.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        let max = calendar::days_in_month(year, month)?;
        if day == 0 || day > max {
            return Err(Error::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        if hour > 23 || minute > 59 || !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(Error::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3_600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Calendar regime these fields are interpreted in.
    #[inline]
    pub fn calendar_kind(&self) -> CalendarKind {
        CalendarKind::of(self.year, self.month, self.day)
    }
}

// Deserialization goes through `new` so out-of-range fields are rejected.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
            day: u32,
            hour: u32,
            minute: u32,
            second: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
            .map_err(de::Error::custom)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
