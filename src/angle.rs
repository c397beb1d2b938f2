// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle unit helpers and range reduction.
//!
//! Conversions are written as plain `value · π / 180` products so that the
//! solar pipeline reproduces the same bits on every platform.
//!
//! ## Range reduction
//!
//! | Function | Range |
//! |----------|-------|
//! | [`mod_two_pi`] | `[0, 2π)` |
//! | [`mod_pi`] | `[-π, π]` |
//!
//! Both step by whole turns in a loop instead of taking a floating
//! remainder, so an input that is already in range comes back untouched.

use std::f64::consts::{PI, TAU};
use std::fmt;

use qtty::{Arcseconds, Degrees, Radians};

/// Arc-seconds per degree.
pub const ARCSECONDS_PER_DEGREE: f64 = 3_600.0;

/// Turns beyond which the stepping loop is replaced by a remainder.
pub const MAX_STEPPED_TURNS: f64 = 1.0e6;

/// Degrees to radians.
#[inline]
pub fn degrees_to_radians(angle: Degrees) -> Radians {
    Radians::new(angle.value() * PI / 180.0)
}

/// Arc-seconds to radians, through degrees.
#[inline]
pub fn arcseconds_to_radians(angle: Arcseconds) -> Radians {
    degrees_to_radians(Degrees::new(angle.value() / ARCSECONDS_PER_DEGREE))
}

/// Packs degrees, arc-minutes and arc-seconds into decimal degrees.
///
/// The parts are summed as given: a negative angle needs every part negative.
#[inline]
pub fn dms_to_degrees(degrees: i32, minutes: i32, seconds: f64) -> Degrees {
    Degrees::new(f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3_600.0)
}

/// Packs degrees, arc-minutes and arc-seconds into arc-seconds.
#[inline]
pub fn dms_to_arcseconds(degrees: i32, minutes: i32, seconds: f64) -> Arcseconds {
    Arcseconds::new(f64::from(degrees) * 3_600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Packs degrees, arc-minutes and arc-seconds into radians.
#[inline]
pub fn dms_to_radians(degrees: i32, minutes: i32, seconds: f64) -> Radians {
    degrees_to_radians(dms_to_degrees(degrees, minutes, seconds))
}

/// An angle split into sexagesimal parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(
            f,
            "{sign}{}° {:02}' {:05.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Unpacks an angle into degrees, arc-minutes and arc-seconds.
pub fn radians_to_dms(angle: Radians) -> Dms {
    let degrees = angle.value() * 180.0 / PI;
    let mut rest = degrees.abs();
    let whole = rest.trunc();
    rest = (rest - whole) * 60.0;
    let minutes = rest.trunc();
    Dms {
        negative: degrees.is_sign_negative() && degrees != 0.0,
        degrees: whole as u32,
        minutes: minutes as u32,
        seconds: (rest - minutes) * 60.0,
    }
}

/// Reduces an angle into `[0, 2π)`.
///
/// Whole turns are added or subtracted one at a time. Beyond
/// [`MAX_STEPPED_TURNS`] turns a single `%` reduces the input first, so
/// those results can differ in the last bits from pure stepping.
/// Non-finite input yields NaN.
pub fn mod_two_pi(angle: Radians) -> Radians {
    let mut r = angle.value();
    if !r.is_finite() {
        return Radians::new(f64::NAN);
    }
    if r.abs() > MAX_STEPPED_TURNS * TAU {
        r %= TAU;
    }
    while r < 0.0 {
        r += TAU;
    }
    while r >= TAU {
        r -= TAU;
    }
    Radians::new(r)
}

/// Reduces an angle into `[-π, π]`.
///
/// Whole turns are added or subtracted one at a time. Beyond
/// [`MAX_STEPPED_TURNS`] turns a single `%` reduces the input first, so
/// those results can differ in the last bits from pure stepping.
/// Non-finite input yields NaN.
pub fn mod_pi(angle: Radians) -> Radians {
    let mut r = angle.value();
    if !r.is_finite() {
        return Radians::new(f64::NAN);
    }
    if r.abs() > MAX_STEPPED_TURNS * TAU {
        r %= TAU;
    }
    while r < -PI {
        r += TAU;
    }
    while r > PI {
        r -= TAU;
    }
    Radians::new(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(degrees_to_radians(Degrees::new(90.0)).value(), PI / 2.0);
        assert_eq!(arcseconds_to_radians(Arcseconds::new(648_000.0)).value(), PI);
        assert_eq!(dms_to_degrees(40, 11, 15.0).value(), 40.1875);
        assert_eq!(dms_to_arcseconds(40, 11, 15.0).value(), 144_675.0);
        assert_eq!(dms_to_radians(40, 11, 15.0).value(), 0.701_404_193_145_221_2);
    }

    #[test]
    fn dms_unpacking() {
        let dms = radians_to_dms(dms_to_radians(40, 11, 15.0));
        assert!(!dms.negative);
        assert_eq!((dms.degrees, dms.minutes), (40, 11));
        assert!((dms.seconds - 15.0).abs() < 1e-9);

        let neg = radians_to_dms(degrees_to_radians(Degrees::new(-23.4392)));
        assert!(neg.negative);
        assert_eq!((neg.degrees, neg.minutes), (23, 26));
        assert_eq!(neg.to_string(), "-23° 26' 21.12\"");
    }

    #[test]
    fn mod_two_pi_known_values() {
        assert_eq!(mod_two_pi(Radians::new(3.0 * PI)).value(), PI);
        assert_eq!(mod_two_pi(Radians::new(-PI)).value(), PI);
        assert_eq!(mod_two_pi(Radians::new(TAU)).value(), 0.0);
        // tiny negatives round up onto 2π and must wrap to zero
        assert_eq!(mod_two_pi(Radians::new(-1e-20)).value(), 0.0);
    }

    #[test]
    fn mod_pi_known_values() {
        assert_eq!(mod_pi(Radians::new(TAU)).value(), 0.0);
        assert_eq!(mod_pi(Radians::new(-TAU)).value(), 0.0);
        assert_eq!(mod_pi(Radians::new(PI)).value(), PI);
        assert_eq!(mod_pi(Radians::new(-PI)).value(), -PI);
    }

    #[test]
    fn whole_turn_offsets_reduce_to_the_same_bits() {
        for x in [0.5, 1.0, PI / 2.0, 3.0] {
            let base = mod_two_pi(Radians::new(x)).value();
            assert_eq!(mod_two_pi(Radians::new(x + TAU)).value(), base);
            assert_eq!(mod_two_pi(Radians::new(x - TAU)).value(), base);
            assert_eq!(mod_two_pi(Radians::new(x + 2.0 * TAU)).value(), base);
        }
    }

    #[test]
    fn huge_and_non_finite_inputs_terminate() {
        let r = mod_two_pi(Radians::new(1.0e300)).value();
        assert!((0.0..TAU).contains(&r));
        let r = mod_pi(Radians::new(-1.0e18)).value();
        assert!((-PI..=PI).contains(&r));
        assert!(mod_two_pi(Radians::new(f64::INFINITY)).value().is_nan());
        assert!(mod_pi(Radians::new(f64::NAN)).value().is_nan());
    }

    #[test]
    fn remainder_path_stays_close_to_stepping() {
        let x = MAX_STEPPED_TURNS * TAU + 1.0;
        let mut stepped = x;
        while stepped >= TAU {
            stepped -= TAU;
        }
        // a million subtractions drift by ~1e-5 rad; `%` is exact
        let reduced = mod_two_pi(Radians::new(x)).value();
        assert!((reduced - stepped).abs() < 1e-4, "{reduced} vs {stepped}");
        assert!((reduced - x % TAU).abs() < 1e-12);

        // Below the threshold the loop alone runs.
        let y = 1_000.0 * TAU + 1.0;
        let mut stepped = y;
        while stepped >= TAU {
            stepped -= TAU;
        }
        assert_eq!(mod_two_pi(Radians::new(y)).value(), stepped);
    }

    proptest! {
        #[test]
        fn mod_two_pi_is_idempotent(x in -1.0e4f64..1.0e4) {
            let once = mod_two_pi(Radians::new(x));
            prop_assert!((0.0..TAU).contains(&once.value()));
            prop_assert_eq!(mod_two_pi(once).value(), once.value());
        }

        #[test]
        fn mod_pi_is_idempotent(x in -1.0e4f64..1.0e4) {
            let once = mod_pi(Radians::new(x));
            prop_assert!((-PI..=PI).contains(&once.value()));
            prop_assert_eq!(mod_pi(once).value(), once.value());
        }
    }
}
