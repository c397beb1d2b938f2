// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent geocentric longitude of the Sun
//!
//! Every function takes a [`JulianDate`] on the **TT** axis and an
//! [`EarthSeries`] provider. The pipeline runs in a fixed order:
//!
//! 1. heliocentric longitude `L` of the Earth, reduced into `[0, 2π)`;
//! 2. heliocentric latitude `B` (not reduced);
//! 3. radius vector `R` in AU;
//! 4. VSOP87 → FK5 longitude correction `ΔL` (Meeus 32.3);
//! 5. `L + ΔL`;
//! 6. `+ π` to look back at the Sun from the Earth, reduced again;
//! 7. annual aberration `−20.4898″ / R`.
//!
//! Nutation is not applied. [`fk5_latitude_correction`] is computed on its
//! own and never folded into the longitude.
//!
//! ```rust
//! use jieqi::{sun, JulianDate, Vsop87Earth};
//!
//! // 2020 December solstice, ~10:03 TT
//! let lambda = sun::apparent_geocentric_longitude(&Vsop87Earth, JulianDate::new(2_459_204.919));
//! assert!((lambda.value().to_degrees() - 270.0).abs() < 0.1);
//! ```

use std::f64::consts::PI;

use log::trace;
use qtty::{Arcseconds, AstronomicalUnits, Degrees, Radians};

use crate::angle::{arcseconds_to_radians, degrees_to_radians, mod_two_pi};
use crate::julian_date::JulianDate;
use crate::vsop87::{EarthQuantity, EarthSeries};

/// Constant of annual aberration at 1 AU.
pub const ABERRATION: Arcseconds = Arcseconds::new(20.4898);

/// Earth's heliocentric ecliptic longitude, in `[0, 2π)`.
pub fn heliocentric_longitude<S: EarthSeries + ?Sized>(series: &S, jd: JulianDate) -> Radians {
    let l = series.evaluate(EarthQuantity::Longitude, jd.julian_millennia());
    mod_two_pi(Radians::new(l))
}

/// Earth's heliocentric ecliptic latitude.
pub fn heliocentric_latitude<S: EarthSeries + ?Sized>(series: &S, jd: JulianDate) -> Radians {
    Radians::new(series.evaluate(EarthQuantity::Latitude, jd.julian_millennia()))
}

/// Sun–Earth distance.
pub fn radius_vector<S: EarthSeries + ?Sized>(series: &S, jd: JulianDate) -> AstronomicalUnits {
    AstronomicalUnits::new(series.evaluate(EarthQuantity::Radius, jd.julian_millennia()))
}

/// `l′ = L − 1.397°·T − 0.00031°·T²`
fn fk5_reference_longitude(l: Radians, jd: JulianDate) -> f64 {
    let t = jd.julian_centuries().value();
    l.value() - degrees_to_radians(Degrees::new(1.397)).value() * t
        - degrees_to_radians(Degrees::new(0.000_31)).value() * t * t
}

/// Longitude correction from the VSOP87 dynamical frame to FK5.
///
/// `ΔL = −0.09033″ + 0.03916″ · (cos l′ + sin l′) · tan B`
pub fn fk5_longitude_correction(l: Radians, b: Radians, jd: JulianDate) -> Radians {
    let lp = fk5_reference_longitude(l, jd);
    arcseconds_to_radians(Arcseconds::new(
        -0.090_33 + 0.039_16 * (lp.cos() + lp.sin()) * b.value().tan(),
    ))
}

/// Latitude correction from the VSOP87 dynamical frame to FK5.
///
/// `ΔB = 0.03916″ · (cos l′ − sin l′)`. Not applied by
/// [`apparent_geocentric_longitude`].
pub fn fk5_latitude_correction(l: Radians, _b: Radians, jd: JulianDate) -> Radians {
    let lp = fk5_reference_longitude(l, jd);
    Radians::new(arcseconds_to_radians(Arcseconds::new(0.039_16)).value() * (lp.cos() - lp.sin()))
}

/// Geometric geocentric longitude of the Sun in the FK5 frame (steps 1–6),
/// in `[0, 2π)`.
pub fn geocentric_longitude<S: EarthSeries + ?Sized>(series: &S, jd: JulianDate) -> Radians {
    let l = heliocentric_longitude(series, jd);
    let b = heliocentric_latitude(series, jd);
    let dl = fk5_longitude_correction(l, b, jd);
    trace!(
        "jd={} L={} B={} ΔL={}",
        jd.value(),
        l.value(),
        b.value(),
        dl.value()
    );
    mod_two_pi(Radians::new(l.value() + dl.value() + PI))
}

/// Apparent geocentric ecliptic longitude of the Sun, in `[0, 2π)`.
///
/// `R` must be positive; it is not checked.
pub fn apparent_geocentric_longitude<S: EarthSeries + ?Sized>(
    series: &S,
    jd: JulianDate,
) -> Radians {
    let theta = geocentric_longitude(series, jd);
    let r = radius_vector(series, jd);
    let aberration = arcseconds_to_radians(ABERRATION).value() / r.value();
    trace!("jd={} θ={} R={}", jd.value(), theta.value(), r.value());
    mod_two_pi(Radians::new(theta.value() - aberration))
}
