// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar ↔ Julian Date conversion and J2000 scalings.
//!
//! ## Forward
//! The integer day number follows the Fliegel–Van Flandern arithmetic, with
//! the century correction only in Gregorian mode. The regime is chosen by
//! [`calendar::resolve`], so dates in the 1582 gap map to the Julian Date of
//! 1582-10-15.
//!
//! ## Inverse
//! Meeus' algorithm (*Astronomical Algorithms*, ch. 7). Values below
//! [`JulianDate::GREGORIAN_ADOPTION`] use Julian arithmetic, the rest
//! Gregorian. The optional TT→UT correction is a fixed two-pass bootstrap:
//! decompose once to get the year/month for the ΔT lookup, subtract ΔT, then
//! decompose the corrected value. There is no iteration to convergence.

use chrono::FixedOffset;
use qtty::*;

use crate::calendar::{self, CalendarKind};
use crate::civil::CivilDateTime;
use crate::delta_t;
use crate::error::{Error, Result};
use crate::julian_date::JulianDate;

/// Integer Julian Day Number of 1582-10-15 (first Gregorian day).
const GREGORIAN_ADOPTION_JDN: i64 = 2_299_161;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Largest `|jd|` [`decompose`] accepts: about ±1.37 billion years, so the
/// year fits an `i32` and the day arithmetic cannot overflow.
pub(crate) const CIVIL_RANGE_DAYS: f64 = 5.0e11;

/// Optional shift applied before decomposing a Julian Date into a calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TimeCorrection {
    /// Decompose the value as given.
    #[default]
    None,
    /// Treat the value as TT and subtract ΔT first.
    TtToUt,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Noon of 1582-10-15, the first Gregorian day.
    pub const GREGORIAN_ADOPTION: Self = Self::new(GREGORIAN_ADOPTION_JDN as f64);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian millennium expressed in days.
    pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

    /// Julian millennia since J2000.0, the time argument of VSOP87.
    #[inline]
    pub fn julian_millennia(&self) -> Millennia {
        Millennia::new(
            ((*self - Self::J2000) / Self::JULIAN_MILLENNIUM)
                .simplify()
                .value(),
        )
    }

    /// Julian centuries since J2000.0 (used by the FK5 frame correction).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian Date of a civil date and time, referenced to noon.
    ///
    /// The regime follows the exact-date boundary; gap dates are
    /// canonicalized to 1582-10-15 with a logged warning.
    pub fn from_civil(datetime: &CivilDateTime) -> Self {
        let jdn = julian_day_number(datetime.year, datetime.month, datetime.day);
        Self::new(add_time_of_day(jdn, datetime))
    }

    /// Like [`JulianDate::from_civil`] but with the calendar regime forced.
    pub fn from_civil_in(kind: CalendarKind, datetime: &CivilDateTime) -> Self {
        let jdn = julian_day_number_in(kind, datetime.year, datetime.month, datetime.day);
        Self::new(add_time_of_day(jdn, datetime))
    }

    /// Calendar date and time of this Julian Date.
    ///
    /// `offset` shifts the wall clock of the result (UTC+8 for Beijing time,
    /// for example). With [`TimeCorrection::TtToUt`] the value is first moved
    /// from TT to UT by subtracting ΔT.
    ///
    /// Fails for NaN/∞ input and for values (after correction and offset)
    /// beyond ±5·10¹¹ days.
    pub fn to_civil(
        &self,
        offset: FixedOffset,
        correction: TimeCorrection,
    ) -> Result<CivilDateTime> {
        let mut jd = self.value();
        if !jd.is_finite() {
            return Err(Error::NonFiniteJulianDate(jd));
        }
        if correction == TimeCorrection::TtToUt {
            jd -= delta_t::delta_t_for(*self).value() / SECONDS_PER_DAY;
        }
        jd += f64::from(offset.local_minus_utc()) / SECONDS_PER_DAY;
        if jd.abs() > CIVIL_RANGE_DAYS {
            return Err(Error::JulianDateOutOfRange(self.value()));
        }
        Ok(decompose(jd))
    }

    /// UT → TT: adds ΔT looked up at this date.
    #[inline]
    pub fn tt_from_ut(&self) -> Self {
        *self + delta_t_days(*self)
    }

    /// TT → UT with the same single-step lookup [`JulianDate::to_civil`] uses.
    #[inline]
    pub fn ut_from_tt(&self) -> Self {
        *self - delta_t_days(*self)
    }
}

#[inline]
fn delta_t_days(jd: JulianDate) -> Days {
    Days::new(delta_t::delta_t_for(jd).value() / SECONDS_PER_DAY)
}

#[inline]
fn add_time_of_day(jdn: i64, datetime: &CivilDateTime) -> f64 {
    jdn as f64
        + (f64::from(datetime.hour) - 12.0) / 24.0
        + f64::from(datetime.minute) / 1_440.0
        + datetime.second / SECONDS_PER_DAY
}

/// Integer Julian Day Number (noon-referenced) of a calendar date.
///
/// This is the Julian Date of the date's noon, i.e. the conversion without a
/// time of day.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let date = calendar::resolve(year, month, day);
    julian_day_number_in(date.kind, date.year, date.month, date.day)
}

/// Integer Julian Day Number using the given calendar's arithmetic,
/// regardless of the historical boundary.
pub fn julian_day_number_in(kind: CalendarKind, year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let base = day + (153 * m + 2) / 5 + 365 * y + y / 4;
    match kind {
        CalendarKind::Gregorian => base - y / 100 + y / 400 - 32_045,
        CalendarKind::Julian => base - 32_083,
    }
}

/// Meeus' inverse algorithm on a raw (already corrected and offset) value.
///
/// Total for finite input within ±[`CIVIL_RANGE_DAYS`]; callers check.
pub(crate) fn decompose(jd: f64) -> CivilDateTime {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let z = z as i64;

    let a = if z < GREGORIAN_ADOPTION_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25) as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25) as i64;
    let d = (365.25 * c as f64) as i64;
    let e = ((b - d) as f64 / 30.6001) as i64;

    let day_with_fraction = (b - d - (30.6001 * e as f64) as i64) as f64 + f;
    let month = if e <= 13 { e - 1 } else { e - 13 };
    let year = if month <= 2 { c - 4715 } else { c - 4716 };

    let day = day_with_fraction.floor();
    let hours = (day_with_fraction - day) * 24.0;
    let hour = hours.floor();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.floor();
    // rounding guard: (minutes - minute) < 1 but the product can round up to 60
    let second = ((minutes - minute) * 60.0).min(59.999_999_999);

    CivilDateTime {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
        minute: minute as u32,
        second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: f64) -> CivilDateTime {
        CivilDateTime::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(julian_day_number(1977, 3, 27), 2_443_230);
        assert_eq!(julian_day_number(2005, 5, 31), 2_453_522);
        assert_eq!(julian_day_number(1400, 3, 27), 2_232_494);
        assert_eq!(
            julian_day_number_in(CalendarKind::Julian, 1400, 3, 27),
            2_232_494
        );
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn regime_boundary_is_contiguous() {
        let last_julian = julian_day_number(1582, 10, 4);
        let first_gregorian = julian_day_number(1582, 10, 15);
        assert_eq!(last_julian, 2_299_160);
        assert_eq!(first_gregorian, 2_299_161);
        for day in 5..=14 {
            assert_eq!(julian_day_number(1582, 10, day), first_gregorian);
        }
    }

    #[test]
    fn time_of_day_is_noon_referenced() {
        let jd = JulianDate::from_civil(&civil(1400, 3, 27, 6, 6, 6.0));
        assert_eq!(jd.value(), 2_232_493.754_236_111_4);
        let jd = JulianDate::from_civil(&civil(1977, 3, 27, 6, 6, 6.0));
        assert_eq!(jd.value(), 2_443_229.754_236_111_4);
        let jd = JulianDate::from_civil(&civil(2000, 1, 1, 12, 0, 0.0));
        assert_eq!(jd, JulianDate::J2000);
    }

    #[test]
    fn forced_regime() {
        let dt = civil(1977, 3, 27, 12, 0, 0.0);
        let g = JulianDate::from_civil_in(CalendarKind::Gregorian, &dt);
        let j = JulianDate::from_civil_in(CalendarKind::Julian, &dt);
        assert_eq!(g.value(), 2_443_230.0);
        // Thirteen days apart in the twentieth century.
        assert_eq!((j - g).value(), 13.0);
    }

    #[test]
    fn decompose_gregorian() {
        let dt = JulianDate::new(2_443_229.754_236_111_4)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (1977, 3, 27));
        assert!((dt.seconds_of_day() - 21_966.0).abs() < 1e-3, "{dt}");
    }

    #[test]
    fn decompose_julian() {
        let dt = JulianDate::new(2_232_493.754_236_111_4)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (1400, 3, 27));
        assert!((dt.seconds_of_day() - 21_966.0).abs() < 1e-3, "{dt}");
    }

    #[test]
    fn decompose_across_adoption() {
        let dt = JulianDate::new(2_299_160.0)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (1582, 10, 4, 12));

        let dt = JulianDate::new(2_299_160.5)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (1582, 10, 15, 0));
    }

    #[test]
    fn tt_to_ut_correction() {
        // ΔT(1977-03) ≈ 47.77 s
        let dt = JulianDate::new(2_443_229.754_236_111_4)
            .to_civil(utc(), TimeCorrection::TtToUt)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (1977, 3, 27, 6, 5));
        assert!((dt.second - 18.227).abs() < 1e-2, "{dt}");

        // ΔT(1400-03) ≈ 321.45 s, Julian calendar
        let dt = JulianDate::new(2_232_493.754_236_111_4)
            .to_civil(utc(), TimeCorrection::TtToUt)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (1400, 3, 27, 6, 0));
        assert!((dt.second - 44.547).abs() < 1e-2, "{dt}");
    }

    #[test]
    fn timezone_offset_shifts_wall_clock() {
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = JulianDate::new(2_443_229.754_236_111_4)
            .to_civil(beijing, TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (1977, 3, 27, 14, 6));

        let dt = JulianDate::new(2_451_545.0)
            .to_civil(beijing, TimeCorrection::None)
            .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (2000, 1, 1, 20));
    }

    #[test]
    fn non_finite_input_fails_fast() {
        let err = JulianDate::new(f64::NAN)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap_err();
        assert!(matches!(err, Error::NonFiniteJulianDate(_)));
        assert!(JulianDate::new(f64::NEG_INFINITY)
            .to_civil(utc(), TimeCorrection::TtToUt)
            .is_err());
    }

    #[test]
    fn far_julian_dates_are_rejected() {
        for value in [1.0e19, -1.0e19, 6.0e11, f64::MAX] {
            let err = JulianDate::new(value)
                .to_civil(utc(), TimeCorrection::None)
                .unwrap_err();
            assert_eq!(err, Error::JulianDateOutOfRange(value));
        }
        assert!(JulianDate::new(1.0e19)
            .to_civil(utc(), TimeCorrection::TtToUt)
            .is_err());

        // Still inside the range: about 1.3 billion years ahead.
        let dt = JulianDate::new(4.9e11)
            .to_civil(utc(), TimeCorrection::None)
            .unwrap();
        assert!(dt.year > 1_000_000_000);
    }

    #[test]
    fn j2000_scalings() {
        let jd = JulianDate::new(2_232_493.754_236_111_4);
        assert!((jd.julian_millennia().value() + 0.599_729_625_636_929_8).abs() < 1e-15);
        assert!((jd.julian_centuries().value() + 5.997_296_256_369_297).abs() < 1e-14);

        let jd = JulianDate::J2000 + Days::new(365_250.0);
        assert!((jd.julian_millennia().value() - 1.0).abs() < 1e-12);
        assert!((jd.julian_centuries().value() - 10.0).abs() < 1e-12);
        assert_eq!(JulianDate::J2000.julian_millennia().value(), 0.0);
    }

    #[test]
    fn ut_tt_shifts_are_inverse_near_j2000() {
        let ut = JulianDate::new(2_451_545.0);
        let tt = ut.tt_from_ut();
        let offset_s = (tt - ut).value() * SECONDS_PER_DAY;
        assert!((offset_s - 63.87).abs() < 0.1, "ΔT = {offset_s}");
        let back = tt.ut_from_tt();
        assert!((back - ut).value().abs() < 1e-9);
    }

    #[test]
    fn roundtrip_negative_year() {
        let dt = civil(-500, 6, 30, 18, 30, 15.5);
        let jd = JulianDate::from_civil(&dt);
        let back = jd.to_civil(utc(), TimeCorrection::None).unwrap();
        assert_eq!((back.year, back.month, back.day), (-500, 6, 30));
        assert!((back.seconds_of_day() - dt.seconds_of_day()).abs() < 1e-3);
    }
}
